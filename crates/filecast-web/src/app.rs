use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::state::AppState;
use crate::static_files;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "filecast_web=info,tower_http=info";

/// Builds the full application router.
///
/// The API is reachable both at the root (`/entry`, `/dir`, `/data/...`) and
/// under `/api`, which is where the bundled front-end looks for it.
pub fn build(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api_routes = api::router(&state);

    Router::new()
        .merge(api_routes.clone())
        .nest("/api", api_routes)
        .fallback_service(static_files::frontend(&state.config.public_dir))
        .layer(cors)
        .layer(trace)
        .with_state(state)
}
