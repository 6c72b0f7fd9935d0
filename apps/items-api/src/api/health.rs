//! Health check endpoints

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, health_router, run_health_checks};
use database::postgres::check_health;

use crate::state::AppState;

/// `/health` (liveness) and `/ready` (store reachability)
pub fn router(state: AppState) -> Router {
    let app_info = state.config.app;

    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
        .merge(health_router(app_info))
}

/// Readiness check - verifies the PostgreSQL pool when one is configured
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks: Vec<(&str, HealthCheckFuture)> = Vec::new();

    if let Some(db) = &state.db {
        checks.push((
            "database",
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) }),
        ));
    }

    run_health_checks(checks).await
}
