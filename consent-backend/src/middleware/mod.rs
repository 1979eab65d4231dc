// src/middleware/mod.rs

use axum::{extract::Request, middleware::Next, response::Response};

/// CORS ミドルウェア設定
pub fn cors_layer() -> tower_http::cors::CorsLayer {
    use std::env;

    // CORS_ALLOWED_ORIGINS環境変数から許可するオリジンを取得
    // 設定されていない場合はFRONTEND_URLを使用、それもなければデフォルト値
    let allowed_origin = env::var("CORS_ALLOWED_ORIGINS")
        .or_else(|_| env::var("FRONTEND_URL"))
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    let origin_header = allowed_origin
        .parse::<axum::http::HeaderValue>()
        .expect("Invalid CORS origin");

    tower_http::cors::CorsLayer::new()
        .allow_origin(origin_header)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true) // Cookie送信を許可
        .max_age(std::time::Duration::from_secs(3600)) // プリフライトリクエストのキャッシュ時間
}

/// セキュリティヘッダーミドルウェア
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    // セキュリティヘッダーを追加
    headers.insert("X-Content-Type-Options", "nosniff".parse().unwrap());
    headers.insert("X-Frame-Options", "DENY".parse().unwrap());
    headers.insert(
        "Referrer-Policy",
        "strict-origin-when-cross-origin".parse().unwrap(),
    );

    response
}
