// src/i18n/mod.rs

use crate::error::{AppError, AppResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 英語のメッセージカタログ
static EN_CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("cookies.consent.title", "Cookie settings"),
        (
            "cookies.consent.description_html",
            "We use cookies to personalise content and to analyse our traffic. \
             For details, read our %{privacy_policy_link} and our %{cookies_doc_link}.",
        ),
        ("cookies.consent.button", "Save settings"),
        ("cookies.consent.privacy_policy_link", "Privacy Policy"),
        ("cookies.consent.cookies_doc_link", "Cookies Policy"),
        ("cookies.consent.functional.label", "Functional"),
        (
            "cookies.consent.functional.description",
            "These cookies are necessary for the website to function and cannot be switched off.",
        ),
        ("cookies.consent.marketing.label", "Marketing"),
        (
            "cookies.consent.marketing.description",
            "These cookies help us show you relevant content and measure the reach of campaigns.",
        ),
    ])
});

/// Resolves message keys to localized strings.
///
/// Unknown keys are an internal error (500), not a recoverable condition:
/// a missing key means the catalog shipped incomplete.
#[derive(Clone, Debug, Default)]
pub struct Translator;

impl Translator {
    pub fn new() -> Self {
        Self
    }

    /// メッセージキーを解決
    pub fn translate(&self, key: &str) -> AppResult<String> {
        EN_CATALOG
            .get(key)
            .map(|s| (*s).to_string())
            .ok_or_else(|| AppError::TranslationMissing(key.to_string()))
    }

    /// `%{name}` 形式のプレースホルダーを展開してメッセージキーを解決
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> AppResult<String> {
        let mut message = self.translate(key)?;
        for (name, value) in args {
            message = message.replace(&format!("%{{{}}}", name), value);
        }
        Ok(message)
    }
}
