//! oftalmo-server
//!
//! HTTP front end for the protocol engine: patient intake, evaluation,
//! attendance history and the printable report.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/evaluate", post(routes::evaluate::evaluate_findings))
        .route(
            "/patients",
            get(routes::patients::search_patients).post(routes::patients::create_patient),
        )
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route(
            "/patients/{id}/attendances",
            get(routes::patients::list_attendances).post(routes::patients::create_attendance),
        )
        .route(
            "/attendances/{id}",
            get(routes::attendances::get_attendance),
        )
        .route(
            "/attendances/{id}/print",
            get(routes::attendances::print_attendance),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Public: health and catalog data
        .route("/health", get(routes::health::health_check))
        .route("/findings", get(routes::findings::list_findings))
        .route("/findings/{name}", get(routes::findings::get_finding))
        .route("/intake-lists", get(routes::findings::intake_lists))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
