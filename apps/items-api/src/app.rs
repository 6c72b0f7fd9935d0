use axum::Router;
use axum_helpers::{create_cors_layer, create_permissive_cors_layer, create_router};

use crate::{api, openapi::ApiDoc, state::AppState};

/// Full application router: API routes, health probes, docs and middleware.
pub fn build(state: &AppState) -> Router {
    let cors = match &state.config.cors_origins {
        Some(origins) => create_cors_layer(origins.clone()),
        None => create_permissive_cors_layer(),
    };

    create_router::<ApiDoc>(api::routes(state), cors)
}
