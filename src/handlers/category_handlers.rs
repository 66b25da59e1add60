use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::{ErrorResponse, collection_route};
use crate::models::category::Category;
use crate::services::{CategoryService, ServiceError};

/// Handler for listing categories
///
/// Returns every category in the order it was created.
#[utoipa::path(
    get,
    path = "/categorias",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>)
    ),
    tag = "categorias"
)]
pub async fn list_categories_handler(
    State(category_service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<Category>>, ServiceError> {
    info!("GET /categorias");
    Ok(Json(category_service.list().await?))
}

/// Handler for fetching a single category
#[utoipa::path(
    get,
    path = "/categorias/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categorias"
)]
pub async fn get_category_handler(
    State(category_service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ServiceError> {
    info!("GET /categorias/{}", id);
    Ok(Json(category_service.get(id).await?))
}

/// Handler for creating a category
///
/// The id is assigned by the server; any id in the body is ignored.
#[utoipa::path(
    post,
    path = "/categorias",
    request_body = Category,
    responses(
        (status = 201, description = "Category successfully created", body = Category)
    ),
    tag = "categorias"
)]
pub async fn create_category_handler(
    State(category_service): State<Arc<CategoryService>>,
    Json(category): Json<Category>,
) -> Result<(StatusCode, Json<Category>), ServiceError> {
    info!("POST /categorias - name: {}", category.name);
    let created = category_service.create(category).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn routes(category_service: Arc<CategoryService>) -> Router {
    collection_route(
        Router::new(),
        "/categorias",
        get(list_categories_handler).post(create_category_handler),
    )
    .route("/categorias/{id}", get(get_category_handler))
    .with_state(category_service)
}
