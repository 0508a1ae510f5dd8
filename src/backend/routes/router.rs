//! Router Configuration
//!
//! This module provides the main router creation function that combines all
//! route configurations into a single Axum router.

use axum::http::StatusCode;
use axum::Router;

use crate::backend::books::handlers::index;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /` - Plain-text banner naming the application
/// - `/api/books` routes - see [`configure_api_routes`]
/// - Fallback - 404 for unknown paths
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", axum::routing::get(index));

    let router = configure_api_routes(router);

    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
