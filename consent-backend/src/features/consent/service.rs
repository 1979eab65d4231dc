// consent-backend/src/features/consent/service.rs

use crate::api::CookieConfig;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::features::consent::dto::requests::ConsentChoice;
use crate::features::consent::dto::responses::{
    ConsentCategory, ConsentSettingsView, ConsentTranslations,
};
use crate::i18n::Translator;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::collections::HashSet;

/// カテゴリID
pub const FUNCTIONAL_CATEGORY_ID: &str = "functional";
pub const MARKETING_CATEGORY_ID: &str = "marketing";

/// 同意撤回時も削除しない必須クッキー（セッションクッキー名は設定から追加）
const FUNCTIONAL_COOKIES: [&str; 4] = ["lang", "cl_accepted", "__cfduid", "unnec_ac"];

/// Cookieポリシー文書（外部固定リンク）
const COOKIE_DOC_LINK: &str =
    "https://s3.amazonaws.com/tc-global-prod/download_resources/gb/downloads/12376/Cookies_Policy_English.pdf";

const PRIVACY_POLICY_PATH: &str = "privacy-policy";

/// 同意フラグクッキーの有効期間（6ヶ月）
const CONSENT_COOKIE_MAX_AGE: time::Duration = time::Duration::days(180);

/// Consent settings and cookie switching logic.
///
/// The functional allowlist is resolved once at startup and immutable after
/// that; every request works against the same set.
#[derive(Debug)]
pub struct ConsentService {
    functional_cookies: HashSet<String>,
    cookie_config: CookieConfig,
}

impl ConsentService {
    pub fn new(app_config: &AppConfig, cookie_config: CookieConfig) -> Self {
        let mut functional_cookies: HashSet<String> = FUNCTIONAL_COOKIES
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        functional_cookies.insert(app_config.session_cookie_name.clone());

        Self {
            functional_cookies,
            cookie_config,
        }
    }

    /// マーケティング同意の有無を明示的に取り出す
    ///
    /// Returns an error when the request carries no "marketing" entry instead
    /// of dereferencing a missing element.
    pub fn marketing_accepted(&self, choices: &[ConsentChoice]) -> AppResult<bool> {
        choices
            .iter()
            .find(|choice| choice.id == MARKETING_CATEGORY_ID)
            .map(|choice| choice.accepted)
            .ok_or_else(|| AppError::MissingConsentCategory(MARKETING_CATEGORY_ID.to_string()))
    }

    pub fn is_functional(&self, cookie_name: &str) -> bool {
        self.functional_cookies.contains(cookie_name)
    }

    /// リクエストに適用するクッキー変更一式を作成
    ///
    /// Rejecting marketing clears every non-functional request cookie; the two
    /// flag cookies are always (re)written, so applying the same choices twice
    /// yields the same final cookie state.
    pub fn cookie_mutations(
        &self,
        request_cookies: &CookieJar,
        marketing_accepted: bool,
    ) -> CookieJar {
        let mut jar = CookieJar::new();

        if !marketing_accepted {
            for cookie in request_cookies.iter() {
                if !self.is_functional(cookie.name()) {
                    jar = jar.add(self.removal_cookie(cookie.name().to_string()));
                }
            }
        }

        let flag_value = if marketing_accepted { "on" } else { "off" };
        jar = jar.add(self.flag_cookie(
            self.cookie_config.marketing_flag_name.clone(),
            flag_value.to_string(),
        ));
        jar = jar.add(self.flag_cookie(
            self.cookie_config.policy_accepted_name.clone(),
            "true".to_string(),
        ));

        jar
    }

    /// 設定ダイアログ用のビューを作成
    pub fn consent_settings(&self, translator: &Translator) -> AppResult<ConsentSettingsView> {
        let data = vec![
            ConsentCategory {
                id: FUNCTIONAL_CATEGORY_ID.to_string(),
                label: translator.translate("cookies.consent.functional.label")?,
                description: translator.translate("cookies.consent.functional.description")?,
                required: true,
            },
            ConsentCategory {
                id: MARKETING_CATEGORY_ID.to_string(),
                label: translator.translate("cookies.consent.marketing.label")?,
                description: translator.translate("cookies.consent.marketing.description")?,
                required: false,
            },
        ];

        let privacy_policy_link = self.privacy_policy_link(translator)?;
        let cookies_doc_link = self.cookies_doc_link(translator)?;

        let translations = vec![ConsentTranslations {
            title: translator.translate("cookies.consent.title")?,
            description: translator.translate_with(
                "cookies.consent.description_html",
                &[
                    ("privacy_policy_link", privacy_policy_link.as_str()),
                    ("cookies_doc_link", cookies_doc_link.as_str()),
                ],
            )?,
            button: translator.translate("cookies.consent.button")?,
        }];

        Ok(ConsentSettingsView { data, translations })
    }

    // --- ヘルパー関数 ---

    fn privacy_policy_link(&self, translator: &Translator) -> AppResult<String> {
        let text = translator.translate("cookies.consent.privacy_policy_link")?;
        Ok(format!("<a href=\"{}\">{}</a>", PRIVACY_POLICY_PATH, text))
    }

    fn cookies_doc_link(&self, translator: &Translator) -> AppResult<String> {
        let text = translator.translate("cookies.consent.cookies_doc_link")?;
        Ok(format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            COOKIE_DOC_LINK, text
        ))
    }

    fn flag_cookie(&self, name: String, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path(self.cookie_config.path.clone())
            .secure(self.cookie_config.secure)
            .max_age(CONSENT_COOKIE_MAX_AGE)
            .build()
    }

    /// 削除用の期限切れクッキーを作成
    fn removal_cookie(&self, name: String) -> Cookie<'static> {
        Cookie::build((name, ""))
            .path(self.cookie_config.path.clone())
            .secure(self.cookie_config.secure)
            .max_age(time::Duration::seconds(0))
            .build()
    }
}
