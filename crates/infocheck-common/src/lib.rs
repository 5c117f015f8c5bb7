//! Shared types for the InfoCheck front-end: backend result entities and the
//! client error taxonomy.

pub mod entities;
pub mod error;

pub use entities::{AnswerResult, Context, Document, InferenceResult, SearchHit, Verdict};
pub use error::{ClientError, Result};
