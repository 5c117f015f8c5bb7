use thiserror::Error;

/// Failures surfaced by the backend API client. The original front-end mixed
/// falsy sentinels with thrown exceptions; here every failure is one variant
/// of this enum and "no result" is expressed by the outcome types instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed gRPC-web frame: {0}")]
    Frame(String),

    #[error("Search service returned status {code}: {message}")]
    Grpc { code: u32, message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
