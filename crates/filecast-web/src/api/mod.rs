pub mod entries;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// JSON endpoints plus the range-capable `/data` mount over the base directory.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/entry", get(entries::get_entry))
        .route("/dir", get(entries::get_dir))
        .nest_service("/data", ServeDir::new(state.root()))
}
