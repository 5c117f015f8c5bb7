//! Production [`Backend`] implementation over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use prost::Message;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use infocheck_common::{AnswerResult, ClientError, InferenceResult, Result, SearchHit};

use crate::grpcweb;
use crate::proto::{SearchReply, SearchRequest};
use crate::{AnswerOutcome, Backend, InferenceOutcome};

/// gRPC-web method path of the search service.
const SEARCH_METHOD: &str = "/serve.Search/Search";

/// Metadata header the search service expects on every call.
const SEARCH_HEADER: (&str, &str) = ("custom-header-1", "SearchResult");

/// Base URLs of the two external backends.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Host of the gRPC-web search service, e.g. `http://backend.ttst.asia`.
    pub search_url: String,
    /// Host of the REST answering/inference service.
    pub rest_base_url: String,
}

pub struct HttpBackend {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    /// Build the backend client with a single shared timeout. There are no
    /// retries; a slow backend fails the request instead of hanging the page.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoints })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    #[instrument(skip(self))]
    async fn search(&self, text: &str, result_count: u32) -> Result<Option<SearchHit>> {
        let request = SearchRequest {
            message: text.to_string(),
            result_number: result_count as i32,
        };
        let url = format!("{}{}", self.endpoints.search_url, SEARCH_METHOD);

        let response = self
            .http
            .post(&url)
            .header("content-type", grpcweb::CONTENT_TYPE)
            .header("accept", grpcweb::CONTENT_TYPE)
            .header("x-grpc-web", "1")
            .header(SEARCH_HEADER.0, SEARCH_HEADER.1)
            .body(grpcweb::encode_frame(&request.encode_to_vec()))
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let (message, trailer) = grpcweb::decode_frames(&body)?;

        if let Some(trailer) = trailer {
            let (code, status_message) = grpcweb::trailer_status(&trailer);
            if code != 0 {
                warn!(code, %status_message, "search service returned an error status");
                return Err(ClientError::Grpc {
                    code,
                    message: status_message,
                });
            }
        }

        let Some(payload) = message else {
            debug!("search reply carried no message frame");
            return Ok(None);
        };
        let reply = SearchReply::decode(payload)?;
        debug!(entries = reply.entries.len(), "search reply decoded");

        Ok(reply.entries.into_iter().next().map(|entry| SearchHit {
            percent: entry.percent,
            decision: entry.decision.unwrap_or(false),
            context: entry.context,
            sentence: text.to_string(),
        }))
    }

    #[instrument(skip(self))]
    async fn answer(&self, text: &str) -> Result<AnswerOutcome> {
        let url = format!("{}/api/search/answering/", self.endpoints.rest_base_url);
        let form = reqwest::multipart::Form::new().text("data", text.to_string());

        let envelope: Value = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        classify_answer(envelope)
    }

    #[instrument(skip(self))]
    async fn infer(&self, text: &str) -> Result<InferenceOutcome> {
        let url = format!("{}/api/search/inference/", self.endpoints.rest_base_url);
        let form = reqwest::multipart::Form::new().text("data", text.to_string());

        let envelope: Value = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        classify_inference(envelope)
    }
}

/// Classify the answering envelope. The backend answers `{}` for a blank
/// query and an empty `answer` string when extraction found nothing; both
/// count as [`AnswerOutcome::Empty`].
pub fn classify_answer(envelope: Value) -> Result<AnswerOutcome> {
    match envelope.get("answer").and_then(Value::as_str) {
        None | Some("") => Ok(AnswerOutcome::Empty),
        Some(_) => {
            let result: AnswerResult = serde_json::from_value(envelope)?;
            Ok(AnswerOutcome::Answered(result))
        }
    }
}

/// Classify the inference envelope `{ "data": [...] }`. A missing or empty
/// list counts as [`InferenceOutcome::Empty`].
pub fn classify_inference(mut envelope: Value) -> Result<InferenceOutcome> {
    match envelope.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) if !items.is_empty() => {
            let results: Vec<InferenceResult> = serde_json::from_value(Value::Array(items))?;
            Ok(InferenceOutcome::Results(results))
        }
        _ => Ok(InferenceOutcome::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infocheck_common::Verdict;
    use serde_json::json;

    #[test]
    fn answer_with_content_is_answered() {
        let envelope = json!({
            "query": "Bao nhiêu ngày mùa đông dưới 0 độ?",
            "answer": "khoảng 30 ngày",
            "document": { "content": "Mùa đông có khoảng 30 ngày dưới 0 độ." }
        });
        match classify_answer(envelope).unwrap() {
            AnswerOutcome::Answered(result) => {
                assert_eq!(result.answer, "khoảng 30 ngày");
                assert!(result.document.content.contains("30 ngày"));
            }
            AnswerOutcome::Empty => panic!("expected an answer"),
        }
    }

    #[test]
    fn empty_answer_string_is_empty_outcome() {
        let envelope = json!({
            "query": "q",
            "answer": "",
            "document": { "content": "irrelevant" }
        });
        assert!(matches!(
            classify_answer(envelope).unwrap(),
            AnswerOutcome::Empty
        ));
    }

    #[test]
    fn blank_query_envelope_is_empty_outcome() {
        assert!(matches!(
            classify_answer(json!({})).unwrap(),
            AnswerOutcome::Empty
        ));
    }

    #[test]
    fn inference_list_is_parsed() {
        let envelope = json!({
            "data": [{
                "sent_id": 1,
                "label": "support",
                "inference_score": 0.92,
                "evidence": "Hanoi",
                "context": { "content": "Hanoi is a city." }
            }]
        });
        match classify_inference(envelope).unwrap() {
            InferenceOutcome::Results(results) => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].label, Verdict::Support);
            }
            InferenceOutcome::Empty => panic!("expected results"),
        }
    }

    #[test]
    fn empty_inference_list_is_empty_outcome() {
        assert!(matches!(
            classify_inference(json!({ "data": [] })).unwrap(),
            InferenceOutcome::Empty
        ));
        assert!(matches!(
            classify_inference(json!({})).unwrap(),
            InferenceOutcome::Empty
        ));
    }

    #[test]
    fn malformed_inference_item_is_a_json_error() {
        let envelope = json!({
            "data": [{ "sent_id": "not-a-number" }]
        });
        assert!(classify_inference(envelope).is_err());
    }
}
