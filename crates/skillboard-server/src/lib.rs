pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware, backed by the
/// file store under `root`.
pub fn build_router(root: PathBuf) -> Router {
    router_with_state(state::AppState::new(root))
}

/// Build the Router around caller-supplied state (injected store and
/// identity provider).
pub fn router_with_state(app_state: state::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Events (SSE)
        .route("/api/events", get(routes::events::sse_events))
        // Consultants
        .route(
            "/api/consultants",
            get(routes::consultants::list_consultants).post(routes::consultants::create_consultant),
        )
        .route(
            "/api/consultants/{id}",
            get(routes::consultants::get_consultant)
                .put(routes::consultants::update_consultant)
                .delete(routes::consultants::delete_consultant),
        )
        .route(
            "/api/consultants/{id}/plays/{play}",
            put(routes::consultants::set_play),
        )
        // Views
        .route("/api/overview", get(routes::views::get_overview))
        .route("/api/matrix", get(routes::views::get_matrix))
        .route("/api/analytics", get(routes::views::get_analytics))
        .route("/api/capabilities", get(routes::views::get_capabilities))
        .route(
            "/api/capabilities/{play}",
            get(routes::views::get_capability),
        )
        .route("/api/catalog", get(routes::views::get_catalog))
        // Identity
        .route("/api/me", get(routes::me::get_me))
        // Submissions
        .route(
            "/api/submissions",
            get(routes::submissions::list_submissions)
                .post(routes::submissions::create_submission),
        )
        .route(
            "/api/submissions/{id}",
            axum::routing::delete(routes::submissions::delete_submission),
        )
        // Config
        .route("/api/config", get(routes::config::get_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the API server on `port`.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(root, listener, open_browser).await
}

/// Start the API server on a pre-bound listener.
///
/// The caller can read the actual port before starting, which matters when
/// `port = 0` and the OS picks a free one.
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    tracing::info!(root = %root.display(), "serving skills board");
    let app = build_router(root);

    tracing::info!("skillboard API listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/overview");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
