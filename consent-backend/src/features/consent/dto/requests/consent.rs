use serde::{Deserialize, Serialize};
use validator::Validate;

/// One consent category choice from the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentChoice {
    pub id: String,
    pub accepted: bool,
}

/// Consent update request
///
/// The client posts the choices under a top-level `_json` array, matching the
/// widget's wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateConsentRequest {
    #[serde(rename = "_json")]
    #[validate(length(min = 1, message = "At least one consent choice is required"))]
    pub choices: Vec<ConsentChoice>,
}
