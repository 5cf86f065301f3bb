pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::policy::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(health::hello_handler))
        .route("/health", get(health::health_handler))
        // Policy API: one POST route per policy shape/category
        .route("/general", post(handlers::handle_general))
        .route("/tv", post(handlers::handle_electronics))
        .route("/fashion", post(handlers::handle_fashion))
        .route("/medicine", post(handlers::handle_medicine))
        .route("/beauty", post(handlers::handle_beauty))
        .route("/toy", post(handlers::handle_toys))
        .route("/sports", post(handlers::handle_sports))
        .with_state(state)
}
