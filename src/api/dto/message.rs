//! Plain `{"message": ...}` response body.

use serde::Serialize;

/// Body used for every error and for mutation acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement for `DELETE /api/tutorials`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllResponse {
    pub message: String,
    pub deleted_count: u64,
}
