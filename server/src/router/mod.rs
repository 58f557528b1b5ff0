use aide::{axum::ApiRouter, openapi::OpenApi};
use auth::auth_routes;
use axum::{Extension, Router};
use health::health_routes;
use openapi::{api_docs, docs_routes};
use products::product_routes;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{session::session_layer, state::AppState};

pub mod auth;
pub mod health;
pub mod openapi;
pub mod products;

pub fn setup_router(app_state: AppState, secure_cookies: bool) -> Router {
    aide::gen::on_error(|error| {
        tracing::warn!("OpenAPI generation: {error}");
    });

    aide::gen::extract_schemas(true);
    let mut api = OpenApi::default();

    // Protected routes carry their own `require_user` route layer;
    // the session layer below must wrap all of them.
    ApiRouter::new()
        .merge(health_routes(app_state.clone()))
        .merge(auth_routes(app_state.clone()))
        .merge(product_routes(app_state.clone()))
        .merge(docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer(secure_cookies)),
        )
        .with_state(app_state)
}
