//! HTTP handlers for all web routes.

pub mod api;
pub mod home;
pub mod inference;
pub mod search;

use serde::Deserialize;

/// Form body shared by the two submit routes; the field name matches the
/// multipart field the backends expect.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub data: String,
}
