pub mod handlers;
pub mod state;
pub mod template;
pub mod upload;

use std::sync::Arc;

use state::AppState;

/// Build the application router with the shared state attached.
pub fn router(state: Arc<AppState>, max_upload_mb: u32) -> axum::Router {
    let body_limit =
        axum::extract::DefaultBodyLimit::max(max_upload_mb as usize * 1024 * 1024);

    axum::Router::new()
        .route("/", axum::routing::get(handlers::index::index))
        .route("/upload", axum::routing::post(handlers::upload::upload))
        .route("/quiz", axum::routing::get(handlers::quiz::quiz))
        .route(
            "/flashcards",
            axum::routing::get(handlers::flashcards::flashcards),
        )
        .layer(body_limit)
        .with_state(state)
}
