//! End-to-end page tests: router + handlers + templates against a mock
//! backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use infocheck_client::{AnswerOutcome, Backend, InferenceOutcome};
use infocheck_common::{
    AnswerResult, ClientError, Context, Document, InferenceResult, Result, SearchHit, Verdict,
};
use infocheck_web::config::Config;
use infocheck_web::router::build_router;
use infocheck_web::state::AppState;

#[derive(Default)]
struct MockBackend {
    answer: Option<AnswerResult>,
    inference: Vec<InferenceResult>,
    hit: Option<SearchHit>,
    fail_transport: bool,
    calls: AtomicUsize,
}

#[async_trait]
impl Backend for MockBackend {
    async fn search(&self, _text: &str, _result_count: u32) -> Result<Option<SearchHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.hit.clone())
    }

    async fn answer(&self, _text: &str) -> Result<AnswerOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_transport {
            return Err(ClientError::Frame("connection reset".to_string()));
        }
        Ok(match &self.answer {
            Some(result) => AnswerOutcome::Answered(result.clone()),
            None => AnswerOutcome::Empty,
        })
    }

    async fn infer(&self, _text: &str) -> Result<InferenceOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_transport {
            return Err(ClientError::Frame("connection reset".to_string()));
        }
        Ok(if self.inference.is_empty() {
            InferenceOutcome::Empty
        } else {
            InferenceOutcome::Results(self.inference.clone())
        })
    }
}

fn app(backend: Arc<MockBackend>) -> Router {
    let state = AppState::with_backend(Config::default(), backend).unwrap();
    build_router(Arc::new(state))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(uri: &str, data: &str) -> Request<Body> {
    let encoded: String = data
        .bytes()
        .map(|b| match b {
            b' ' => "+".to_string(),
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                (b as char).to_string()
            }
            other => format!("%{other:02X}"),
        })
        .collect();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("data={encoded}")))
        .unwrap()
}

#[tokio::test]
async fn root_redirects_to_home() {
    let app = app(Arc::new(MockBackend::default()));
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/home");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = app(Arc::new(MockBackend::default()));
    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pages_render_with_navigation() {
    let backend = Arc::new(MockBackend::default());
    for path in ["/home", "/search", "/inference"] {
        let response = app(backend.clone())
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        let body = body_text(response).await;
        assert!(body.contains("InfoCheck"), "{path} misses the brand");
        assert!(body.contains("Q and A"), "{path} misses the nav");
    }
}

#[tokio::test]
async fn inference_success_renders_summary_and_score() {
    let backend = Arc::new(MockBackend {
        inference: vec![InferenceResult {
            sent_id: 1,
            label: Verdict::Support,
            inference_score: 0.92,
            evidence: "Hanoi".to_string(),
            context: Context {
                content: "Hanoi is a city.".to_string(),
            },
        }],
        ..Default::default()
    });

    let response = app(backend)
        .oneshot(form_post("/inference", "Hanoi is the capital"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    assert!(body.contains("Số lượng đánh giá: 1"));
    assert!(body.contains("Ủng hộ: 1"));
    assert!(body.contains("Bác bỏ: 0"));
    assert!(body.contains("Trung lập: 0"));
    assert!(body.contains("92.000%"));
    // First occurrence of the evidence is bolded inside the context.
    assert!(body.contains("<b>Hanoi</b> is a city."));
    assert!(!body.contains("Request server error"));
}

#[tokio::test]
async fn empty_answer_renders_error_not_result() {
    // Backend answers, but with an empty payload (answer: "").
    let backend = Arc::new(MockBackend::default());
    let response = app(backend)
        .oneshot(form_post("/search", "Bao nhiêu ngày mùa đông dưới 0 độ?"))
        .await
        .unwrap();
    let body = body_text(response).await;

    assert!(body.contains("Request server error. Please try again!"));
    assert!(!body.contains("Kết quả</h5>"));
}

#[tokio::test]
async fn answer_success_shows_query_answer_and_highlighted_document() {
    let backend = Arc::new(MockBackend {
        answer: Some(AnswerResult {
            query: "Thủ đô của Việt Nam?".to_string(),
            answer: "Hà Nội".to_string(),
            document: Document {
                content: "Hà Nội là thủ đô. Hà Nội rất cổ kính.".to_string(),
            },
        }),
        ..Default::default()
    });

    let response = app(backend)
        .oneshot(form_post("/search", "Thủ đô của Việt Nam?"))
        .await
        .unwrap();
    let body = body_text(response).await;

    assert!(body.contains("Thủ đô của Việt Nam?"));
    assert!(body.contains("<b>Hà Nội</b> là thủ đô."));
    // The second occurrence stays plain.
    assert!(body.contains("Hà Nội rất cổ kính."));
}

#[tokio::test]
async fn empty_input_never_reaches_the_backend() {
    let backend = Arc::new(MockBackend::default());
    let response = app(backend.clone()).oneshot(form_post("/inference", "")).await.unwrap();
    let body = body_text(response).await;

    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    assert!(body.contains("Vui lòng nhập nội dung trước khi gửi."));
}

#[tokio::test]
async fn transport_failure_renders_the_fixed_error_message() {
    let backend = Arc::new(MockBackend {
        fail_transport: true,
        ..Default::default()
    });
    let response = app(backend)
        .oneshot(form_post("/search", "some question"))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Request server error. Please try again!"));
}

#[tokio::test]
async fn api_search_returns_hit_as_json() {
    let backend = Arc::new(MockBackend {
        hit: Some(SearchHit {
            percent: 0.87,
            decision: true,
            context: "retrieved passage".to_string(),
            sentence: "claim".to_string(),
        }),
        ..Default::default()
    });

    let response = app(backend)
        .oneshot(
            Request::get("/api/search?q=claim&limit=4")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["query"], "claim");
    assert_eq!(value["hit"]["context"], "retrieved passage");
    assert_eq!(value["hit"]["decision"], true);
}

#[tokio::test]
async fn api_search_with_no_hit_is_null() {
    let backend = Arc::new(MockBackend::default());
    let response = app(backend)
        .oneshot(Request::get("/api/search?q=claim").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(value["hit"].is_null());
}
