use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body for simple success responses that carry a message instead of a
/// resource.
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}
