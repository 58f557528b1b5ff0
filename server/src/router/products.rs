use aide::{
    axum::{
        routing::{get_with, post_with},
        ApiRouter, IntoApiResponse,
    },
    transform::TransformOperation,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    middleware, Extension, Json,
};
use storefront_core::{FilterRequest, PageResult};
use tracing::{debug, warn};

use crate::{
    errors::ErrorResponse,
    model::{
        product::{PaginatedProductsDto, ProductFiltersDto},
        user::User,
    },
    session::require_user,
    state::AppState,
};

/// Whole catalog, no pagination
async fn list_products(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoApiResponse {
    debug!(user = %user.username, "Listing {} products", state.catalog.len());

    let page = PageResult::unpaginated(state.catalog.products().to_vec());
    Json(PaginatedProductsDto::from(page))
}

fn list_products_docs(op: TransformOperation) -> TransformOperation {
    op.summary("All products")
        .description("Returns the full catalog as a single page")
        .tag("Products")
        .response::<200, Json<PaginatedProductsDto>>()
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Not authenticated"))
}

async fn filter_products(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    filters: Result<Json<ProductFiltersDto>, JsonRejection>,
) -> impl IntoApiResponse {
    let filters = match filters {
        Ok(Json(filters)) => filters,
        Err(rejection) => {
            warn!("Unreadable filter body, using defaults: {}", rejection.body_text());
            ProductFiltersDto::default()
        }
    };

    let request = FilterRequest::from(filters);
    let page = state.catalog.query(&request);

    debug!(
        user = %user.username,
        sort_by = request.sort_by.as_wire(),
        availability = request.availability.as_wire(),
        page = page.current_page,
        total_pages = page.total_pages,
        "Filtered products"
    );

    Json(PaginatedProductsDto::from(page))
}

fn filter_products_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Filter products")
        .description(
            "Filters by name, availability and maximum price, sorts, and returns one page. \
             Follow `nextCursor` / `prevCursor` to move between pages. \
             Fields of the wrong type, or a body that is not JSON, fall back to defaults.",
        )
        .tag("Products")
        .response_with::<200, Json<PaginatedProductsDto>, _>(|res| {
            res.example(PaginatedProductsDto {
                products: vec![],
                next_cursor: None,
                prev_cursor: None,
                total_pages: 0,
                current_page: 1,
            })
        })
        .response_with::<401, Json<ErrorResponse>, _>(|res| {
            res.description("Not authenticated").example(ErrorResponse {
                error: "Not authenticated".to_string(),
            })
        })
}

pub fn product_routes(_app_state: AppState) -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/api/products", get_with(list_products, list_products_docs))
        .api_route(
            "/api/products/filter",
            post_with(filter_products, filter_products_docs),
        )
        .route_layer(middleware::from_fn(require_user))
}
