use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse},
    openapi::OpenApi,
    redoc::Redoc,
    transform::TransformOpenApi,
};
use axum::{response::IntoResponse, routing::get, Extension, Json};

use crate::state::AppState;

pub fn docs_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .route(
            "/docs",
            get(Redoc::new("/docs/private/api.json")
                .with_title("Storefront API")
                .axum_handler()),
        )
        .route("/docs/private/api.json", get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api.as_ref()).into_response()
}

pub fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Storefront API")
        .summary("Mock storefront backend")
        .description("Session-cookie login and a filterable, cursor-paginated product catalog.")
}
