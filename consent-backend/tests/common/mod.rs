// tests/common/mod.rs
use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use consent_backend::api::AppState;
use consent_backend::config::AppConfig;
use consent_backend::features::consent::handler::consent_router;

/// テスト用のアプリを作成
pub fn setup_consent_app() -> Router {
    let app_config = AppConfig::for_testing();
    consent_router(AppState::with_config(&app_config))
}

/// JSONボディ付きのHTTPリクエストを作成
pub fn create_request(
    method: &str,
    uri: &str,
    cookies: Option<&str>,
    body: Option<String>,
) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();

    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }

    builder
        .body(body.map_or_else(Body::empty, Body::from))
        .unwrap()
}

/// レスポンスの Set-Cookie ヘッダーをすべて取得
pub fn set_cookie_headers(response: &axum::response::Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}
