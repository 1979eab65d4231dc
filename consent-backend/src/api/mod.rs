// consent-backend/src/api/mod.rs
use crate::config::AppConfig;
use crate::features::consent::service::ConsentService;
use crate::i18n::Translator;
use std::sync::Arc;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub consent_service: Arc<ConsentService>,
    pub translator: Arc<Translator>,
    pub cookie_config: CookieConfig,
    pub config: Arc<AppConfig>,
}

/// Cookie設定
#[derive(Clone, Debug)]
pub struct CookieConfig {
    /// マーケティング同意フラグのクッキー名
    pub marketing_flag_name: String,
    /// ポリシー確認済みフラグのクッキー名
    pub policy_accepted_name: String,
    pub secure: bool,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            marketing_flag_name: "unnec_ac".to_string(),
            policy_accepted_name: "cl_accepted".to_string(),
            secure: std::env::var("ENVIRONMENT").unwrap_or_default() == "production",
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    pub fn from_app_config(app_config: &AppConfig) -> Self {
        Self {
            marketing_flag_name: "unnec_ac".to_string(),
            policy_accepted_name: "cl_accepted".to_string(),
            secure: app_config.security.cookie_secure,
            path: "/".to_string(),
        }
    }
}

impl AppState {
    pub fn with_config(app_config: &AppConfig) -> Self {
        let cookie_config = CookieConfig::from_app_config(app_config);
        Self {
            consent_service: Arc::new(ConsentService::new(app_config, cookie_config.clone())),
            translator: Arc::new(Translator::new()),
            cookie_config,
            config: Arc::new(app_config.clone()),
        }
    }
}
