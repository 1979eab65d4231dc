pub mod settings;
pub mod update;

pub use settings::{ConsentCategory, ConsentSettingsResponse, ConsentSettingsView, ConsentTranslations};
pub use update::UpdateConsentResponse;
