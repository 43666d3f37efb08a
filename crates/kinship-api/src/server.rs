//! HTTP server setup and routing.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{health, paths, people, relationships};
use crate::state::AppState;

/// Create the Axum application router with all routes and middleware.
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    let router = Router::new()
        .route(
            "/people",
            get(people::list_people).post(people::create_person),
        )
        .route(
            "/people/:name",
            get(people::get_person)
                .patch(people::update_person)
                .delete(people::delete_person),
        )
        .route("/people/:name/friends", get(people::list_friends))
        .route("/people/:name/location", get(people::get_location))
        .route("/location/:name/people", get(people::list_residents))
        .route("/path/:from/:to", get(paths::raw_path))
        .route("/relationship/explain", get(paths::explain))
        .route(
            "/relationships/friend",
            post(relationships::create_friendship),
        )
        .route(
            "/relationships/father",
            post(relationships::create_fatherhood),
        )
        .route(
            "/relationships/lives-in",
            post(relationships::create_residency),
        )
        .route("/health", get(health::health_check));

    let router = match cors_layer(cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// CORS for the configured origins; `None` when no origin is usable.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// Serve `app` on `addr` until Ctrl-C.
pub async fn run_server(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
