//! Page view state and result presentation logic.
//!
//! Each page drives a [`ViewState`]: Idle → Submitting → Success or Error,
//! with edits returning to Idle. Submissions carry a generation token so a
//! stale completion can never overwrite state produced by a newer one, and
//! the busy phase rejects re-submission while a request is outstanding.

use serde::Serialize;

use infocheck_common::InferenceResult;

/// What went wrong, split into the three distinct failure kinds the pages
/// can render. The original front-end collapsed all of these into one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Submitted with empty input; no network call was made.
    Validation,
    /// The backend call failed in transport or decoding.
    Transport,
    /// The backend replied, but with no usable result.
    EmptyResult,
}

impl ErrorKind {
    /// User-facing message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Vui lòng nhập nội dung trước khi gửi.",
            ErrorKind::Transport | ErrorKind::EmptyResult => {
                "Request server error. Please try again!"
            }
        }
    }
}

/// Token identifying one submission. Only the most recently issued token may
/// complete the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Idle,
    Submitting,
    Success(T),
    Error(ErrorKind),
}

#[derive(Debug, Clone)]
pub struct ViewState<T> {
    input: String,
    generation: u64,
    phase: Phase<T>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            generation: 0,
            phase: Phase::Idle,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// User edited the input text. Leaves a terminal phase back to Idle.
    pub fn edit(&mut self, text: &str) {
        self.input = text.to_string();
        if matches!(self.phase, Phase::Success(_) | Phase::Error(_)) {
            self.phase = Phase::Idle;
        }
    }

    /// Attempt to submit the current input. Empty input fails validation
    /// without issuing a token; a request already in flight is not re-entered.
    pub fn submit(&mut self) -> Option<RequestToken> {
        if self.is_busy() {
            return None;
        }
        if self.input.is_empty() {
            self.phase = Phase::Error(ErrorKind::Validation);
            return None;
        }
        self.generation += 1;
        self.phase = Phase::Submitting;
        Some(RequestToken(self.generation))
    }

    /// Apply the outcome of a submission. Outcomes carrying a token other
    /// than the current generation are stale and ignored. Success clears the
    /// input; failure leaves it intact for correction.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<T, ErrorKind>) {
        if token.0 != self.generation || !self.is_busy() {
            return;
        }
        match outcome {
            Ok(payload) => {
                self.phase = Phase::Success(payload);
                self.input.clear();
            }
            Err(kind) => self.phase = Phase::Error(kind),
        }
    }
}

/// Presentation order of inference results: descending by the first character
/// of the wire label, stable. With the fixed label set this yields
/// support, refute, neutral.
pub fn sort_by_verdict(results: &mut [InferenceResult]) {
    results.sort_by(|a, b| {
        let a0 = a.label.as_str().chars().next();
        let b0 = b.label.as_str().chars().next();
        b0.cmp(&a0)
    });
}

/// Per-label tallies, derived by one linear scan of the result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub support: usize,
    pub refute: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn total(&self) -> usize {
        self.support + self.refute + self.neutral
    }
}

pub fn count_labels(results: &[InferenceResult]) -> LabelCounts {
    let mut counts = LabelCounts::default();
    for result in results {
        match result.label {
            infocheck_common::Verdict::Support => counts.support += 1,
            infocheck_common::Verdict::Refute => counts.refute += 1,
            infocheck_common::Verdict::Neutral => counts.neutral += 1,
        }
    }
    counts
}

/// Confidence display: three decimals of the percentage, e.g. `92.000%`.
pub fn format_score(score: f64) -> String {
    format!("{:.3}%", score * 100.0)
}

/// One run of context text; `em` marks the highlighted evidence span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub em: bool,
}

/// Split `content` around the first literal occurrence of `needle`. Later
/// occurrences stay plain. Segments are escaped by the template layer, so
/// backend markup never reaches the page as HTML.
pub fn highlight_first(content: &str, needle: &str) -> Vec<Segment> {
    let plain = |text: &str| Segment { text: text.to_string(), em: false };

    if needle.is_empty() {
        return vec![plain(content)];
    }
    match content.find(needle) {
        None => vec![plain(content)],
        Some(at) => {
            let mut segments = Vec::with_capacity(3);
            if at > 0 {
                segments.push(plain(&content[..at]));
            }
            segments.push(Segment { text: needle.to_string(), em: true });
            let rest = &content[at + needle.len()..];
            if !rest.is_empty() {
                segments.push(plain(rest));
            }
            segments
        }
    }
}
