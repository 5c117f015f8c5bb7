//! Protobuf messages for the search service, mirroring its `serve.proto`.
//! Written out as prost message structs so no protoc step is needed at build
//! time.

/// Request message: the sentence to check and how many results to return.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchRequest {
    #[prost(string, tag = "1")]
    pub message: String,
    #[prost(int32, tag = "2")]
    pub result_number: i32,
}

/// Reply: an ordered list of scored context entries. The front-end only
/// consumes the first one.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchReply {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<SearchEntry>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchEntry {
    /// Context payload (the retrieved passage).
    #[prost(string, tag = "1")]
    pub context: String,
    /// Relevance score.
    #[prost(double, tag = "2")]
    pub percent: f64,
    /// Decision flag; the service omits it when undecided.
    #[prost(bool, optional, tag = "3")]
    pub decision: Option<bool>,
}
