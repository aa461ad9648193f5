use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use simplifier_core::MistralClient;
use simplifier_core::config_file;
use simplifier_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config_file::load_config();

    let api_key = config.mistral_api_key();
    if api_key.is_none() {
        tracing::warn!(
            "MISTRAL_API_KEY not set; generation is disabled and placeholder text will be served"
        );
    }

    let gateway = MistralClient::with_model(
        api_key,
        config.model(),
        Duration::from_secs(config.timeout_secs()),
    )?;
    let state = Arc::new(AppState::new(Arc::new(gateway)));

    let app = simplifier_web::router(state, config.max_upload_mb());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port()));
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
