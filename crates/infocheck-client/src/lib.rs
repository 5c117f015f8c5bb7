//! API client for the InfoCheck external backends: the gRPC-web search
//! service and the two multipart REST endpoints (answering, inference).
//!
//! The client performs no retries and applies a single request timeout to the
//! shared HTTP client. Failures are typed [`ClientError`]s; "no result" is an
//! outcome variant, never a sentinel value.

pub mod grpcweb;
pub mod http;
pub mod proto;

use async_trait::async_trait;

use infocheck_common::{AnswerResult, InferenceResult, Result, SearchHit};

pub use http::{Endpoints, HttpBackend};

/// Outcome of the answering endpoint. An empty answer string from the backend
/// counts as no result.
#[derive(Debug, Clone)]
pub enum AnswerOutcome {
    Answered(AnswerResult),
    Empty,
}

/// Outcome of the inference endpoint. An absent or empty result list counts
/// as no result.
#[derive(Debug, Clone)]
pub enum InferenceOutcome {
    Results(Vec<InferenceResult>),
    Empty,
}

/// Seam between the page handlers and the backend services. Production uses
/// [`HttpBackend`]; tests substitute a mock.
#[async_trait]
pub trait Backend: Send + Sync {
    /// gRPC-web search call. `None` means the service replied with no hit.
    async fn search(&self, text: &str, result_count: u32) -> Result<Option<SearchHit>>;

    /// Multipart POST to the answering endpoint.
    async fn answer(&self, text: &str) -> Result<AnswerOutcome>;

    /// Multipart POST to the inference endpoint.
    async fn infer(&self, text: &str) -> Result<InferenceOutcome>;
}
