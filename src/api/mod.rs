mod handlers;
mod middleware;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::agents::Agents;

pub use middleware::{RateLimiter, SecurityConfig};

/// Router with security disabled: local use and tests.
pub fn create_router(agents: Agents) -> Router {
    create_router_with_config(agents, SecurityConfig::disabled())
}

pub fn create_router_with_config(agents: Agents, security: SecurityConfig) -> Router {
    // One route per UI button.
    let mut stages = Router::new()
        .route("/stages/questioner", post(handlers::questioner))
        .route("/stages/researcher", post(handlers::researcher))
        .route("/stages/verifier", post(handlers::verifier))
        .route("/stages/planner", post(handlers::planner))
        .route("/stages/assistant", post(handlers::assistant))
        .route("/stages/explainer", post(handlers::explainer))
        .route("/risk", post(handlers::screen_risk));

    if let Some(limiter) = security.rate_limiter.clone() {
        stages = stages.layer(from_fn_with_state(limiter, middleware::rate_limit_middleware));
    }
    stages = stages.layer(from_fn_with_state(
        security.clone(),
        middleware::auth_middleware,
    ));

    let api = Router::new()
        .route("/health", get(handlers::health))
        .merge(stages);

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security.cors_layer()),
        )
        .with_state(agents)
}
