// src/main.rs
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use consent_backend::api::AppState;
use consent_backend::config::AppConfig;
use consent_backend::features::consent::handler::consent_router_with_state;
use consent_backend::logging::{inject_request_context, logging_middleware};
use consent_backend::middleware::{cors_layer, security_headers_middleware};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consent_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting consent backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env().expect("Failed to load configuration");
    tracing::info!("Configuration loaded: {:?}", app_config);

    // アプリケーション状態を作成（必須クッキーの許可リストはここで確定する）
    let app_state = AppState::with_config(&app_config);

    // ルーターの設定
    let app_router = consent_router_with_state(app_state)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(axum::middleware::from_fn(inject_request_context))
        .layer(cors_layer());

    // サーバーの起動
    let server_addr = format!("{}:{}", app_config.host, app_config.port);
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
