use serde::{Deserialize, Serialize};

/// One consent category descriptor shown in the settings dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentCategory {
    pub id: String,
    pub label: String,
    pub description: String,
    pub required: bool,
}

/// Localized texts for the settings dialog chrome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentTranslations {
    pub title: String,
    pub description: String,
    pub button: String,
}

/// Composed settings view returned to the consent widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentSettingsView {
    pub data: Vec<ConsentCategory>,
    pub translations: Vec<ConsentTranslations>,
}

/// GET /cookies response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentSettingsResponse {
    pub settings: ConsentSettingsView,
    pub message: String,
}
