use serde::{Deserialize, Serialize};

/// Error body returned by every backend route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
