//! medlytics-lambda
//!
//! HTTP API for the Medlytics questionnaires, served through `lambda_http`.

pub mod audit;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Analysis routes resolve the caller; health and instruments are public.
    let analyses = Router::new()
        .route("/{kind}/predict", post(routes::analyses::predict))
        .route("/{kind}/results/{id}", get(routes::analyses::get_result))
        .route("/{kind}/history", get(routes::analyses::history))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::identify_caller,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .merge(analyses)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
