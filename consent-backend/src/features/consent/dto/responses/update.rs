use serde::{Deserialize, Serialize};

/// POST /cookies response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConsentResponse {
    pub message: String,
}
