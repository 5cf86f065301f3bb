use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /hello
/// Plain-text greeting used as the public liveness probe.
pub async fn hello_handler() -> &'static str {
    "welcome"
}

/// GET /health
/// Returns a simple status object with service version and active model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "policy-api",
        "model": state.config.model_id,
    }))
}
