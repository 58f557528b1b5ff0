use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::{http::StatusCode, middleware};

use crate::{session::require_user, state::AppState};

fn health_routes_public() -> ApiRouter<AppState> {
    ApiRouter::new().api_route("/health/ping", get_with(ping, ping_docs))
}

fn health_routes_private(_app_state: AppState) -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/health/auth", get_with(auth_ping, auth_ping_docs))
        .route_layer(middleware::from_fn(require_user))
}

pub fn health_routes(app_state: AppState) -> ApiRouter<AppState> {
    health_routes_public().merge(health_routes_private(app_state))
}

pub async fn ping() -> impl IntoApiResponse {
    StatusCode::OK
}

pub fn ping_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Health check endpoint")
        .tag("Health")
        .response::<200, ()>()
}

pub async fn auth_ping() -> impl IntoApiResponse {
    StatusCode::OK
}

pub fn auth_ping_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Auth health check")
        .description("Health check endpoint requiring a session")
        .tag("Health")
        .response::<200, ()>()
        .response_with::<401, (), _>(|res| res.description("Not authenticated"))
}
