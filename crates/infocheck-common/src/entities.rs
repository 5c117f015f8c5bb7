//! Entities produced by the external search, answering and inference
//! backends. All of these are immutable once received; pages hold them only
//! until the next query.

use serde::{Deserialize, Serialize};

/// Verdict assigned by the inference backend to a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Support,
    Refute,
    Neutral,
}

impl Verdict {
    /// Wire label as sent by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Support => "support",
            Verdict::Refute => "refute",
            Verdict::Neutral => "neutral",
        }
    }

    /// User-facing Vietnamese label.
    pub fn display_vi(&self) -> &'static str {
        match self {
            Verdict::Support => "Ủng hộ",
            Verdict::Refute => "Bác bỏ",
            Verdict::Neutral => "Trung lập",
        }
    }
}

/// Document context attached to an inference result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    pub content: String,
}

/// Source document attached to an answering result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
}

/// One labeled judgment on a claim, with confidence and supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResult {
    pub sent_id: i64,
    pub label: Verdict,
    /// Confidence in [0, 1].
    pub inference_score: f64,
    pub evidence: String,
    pub context: Context,
}

/// A question/answer pair with the document the answer was extracted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    pub query: String,
    pub answer: String,
    pub document: Document,
}

/// First hit extracted from the gRPC-web search service reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Relevance score reported by the service.
    pub percent: f64,
    /// Optional decision flag; absent on the wire means `false`.
    pub decision: bool,
    pub context: String,
    /// The sentence the caller submitted.
    pub sentence: String,
}
