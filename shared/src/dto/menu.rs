use serde::{Deserialize, Serialize};

/// Acknowledgment returned once the backend has rendered a new pair of
/// menu images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateImagesResponse {
    /// Human-readable status message.
    pub message: String,
    /// Epoch id of the vertical (story format) image.
    pub vertical: String,
    /// Epoch id of the horizontal (screen format) image.
    pub horizontal: String,
}

/// Newsletter text composed by the backend for the rendered week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailingTextResponse {
    pub text: String,
}
