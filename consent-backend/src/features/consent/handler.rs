// consent-backend/src/features/consent/handler.rs

use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::features::consent::dto::requests::UpdateConsentRequest;
use crate::features::consent::dto::responses::{ConsentSettingsResponse, UpdateConsentResponse};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, warn};
use validator::Validate;

/// Get the consent settings view (categories + localized texts)
pub async fn get_consent_settings_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ConsentSettingsResponse>> {
    let settings = app_state
        .consent_service
        .consent_settings(&app_state.translator)?;

    Ok(Json(ConsentSettingsResponse {
        settings,
        message: "Cookies".to_string(),
    }))
}

/// Apply the posted consent choices to the cookie store
///
/// No authenticity token is required on this endpoint; the widget posts from
/// the public site before any session exists.
pub async fn update_consent_handler(
    State(app_state): State<AppState>,
    cookie_jar: CookieJar,
    Json(payload): Json<UpdateConsentRequest>,
) -> AppResult<impl IntoResponse> {
    // バリデーション
    payload.validate().map_err(|validation_errors| {
        warn!("Consent update validation failed: {}", validation_errors);
        let errors: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();
        AppError::ValidationErrors(errors)
    })?;

    let marketing_accepted = app_state
        .consent_service
        .marketing_accepted(&payload.choices)?;

    // 同意内容に応じたクッキー変更を作成
    let mutations = app_state
        .consent_service
        .cookie_mutations(&cookie_jar, marketing_accepted);

    let mut response = Json(UpdateConsentResponse {
        message: "Cookie Policy Set".to_string(),
    })
    .into_response();

    // Cookieを追加
    add_cookies_to_response(&mut response, mutations);

    info!(
        marketing_accepted = marketing_accepted,
        "Cookie consent updated"
    );

    Ok(response)
}

// --- ヘルパー関数 ---

/// レスポンスにCookieを追加
fn add_cookies_to_response(response: &mut Response, cookie_jar: CookieJar) {
    let headers = response.headers_mut();
    for cookie in cookie_jar.iter() {
        if let Ok(header_value) = cookie.to_string().parse() {
            headers.append(header::SET_COOKIE, header_value);
        }
    }
}

/// Consent router
pub fn consent_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/cookies",
            get(get_consent_settings_handler).post(update_consent_handler),
        )
        .with_state(app_state)
}

/// Consent router with state
pub fn consent_router_with_state(app_state: AppState) -> Router {
    consent_router(app_state)
}
