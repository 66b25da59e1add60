use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::{ErrorResponse, MessageResponse, collection_route};
use crate::models::budget::Budget;
use crate::services::{BudgetService, ServiceError};

#[utoipa::path(
    get,
    path = "/orcamentos",
    responses(
        (status = 200, description = "List of budgets", body = Vec<Budget>)
    ),
    tag = "orcamentos"
)]
pub async fn list_budgets_handler(
    State(budget_service): State<Arc<BudgetService>>,
) -> Result<Json<Vec<Budget>>, ServiceError> {
    info!("GET /orcamentos");
    Ok(Json(budget_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/orcamentos/{id}",
    params(
        ("id" = i64, Path, description = "Budget ID")
    ),
    responses(
        (status = 200, description = "Budget found", body = Budget),
        (status = 404, description = "Budget not found", body = ErrorResponse)
    ),
    tag = "orcamentos"
)]
pub async fn get_budget_handler(
    State(budget_service): State<Arc<BudgetService>>,
    Path(id): Path<i64>,
) -> Result<Json<Budget>, ServiceError> {
    info!("GET /orcamentos/{}", id);
    Ok(Json(budget_service.get(id).await?))
}

/// Handler for creating a budget
///
/// The caller chooses the id; an id already in use is rejected.
#[utoipa::path(
    post,
    path = "/orcamentos",
    request_body = Budget,
    responses(
        (status = 201, description = "Budget successfully created", body = Budget),
        (status = 400, description = "A budget with this id already exists", body = ErrorResponse)
    ),
    tag = "orcamentos"
)]
pub async fn create_budget_handler(
    State(budget_service): State<Arc<BudgetService>>,
    Json(budget): Json<Budget>,
) -> Result<(StatusCode, Json<Budget>), ServiceError> {
    info!("POST /orcamentos - id: {}", budget.id);
    let created = budget_service.create(budget).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/orcamentos/{id}",
    params(
        ("id" = i64, Path, description = "Budget ID")
    ),
    request_body = Budget,
    responses(
        (status = 200, description = "Budget successfully updated", body = Budget),
        (status = 404, description = "Budget not found", body = ErrorResponse)
    ),
    tag = "orcamentos"
)]
pub async fn update_budget_handler(
    State(budget_service): State<Arc<BudgetService>>,
    Path(id): Path<i64>,
    Json(budget): Json<Budget>,
) -> Result<Json<Budget>, ServiceError> {
    info!("PUT /orcamentos/{}", id);
    Ok(Json(budget_service.update(id, budget).await?))
}

#[utoipa::path(
    delete,
    path = "/orcamentos/{id}",
    params(
        ("id" = i64, Path, description = "Budget ID")
    ),
    responses(
        (status = 200, description = "Budget successfully deleted", body = MessageResponse),
        (status = 404, description = "Budget not found", body = ErrorResponse)
    ),
    tag = "orcamentos"
)]
pub async fn delete_budget_handler(
    State(budget_service): State<Arc<BudgetService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ServiceError> {
    info!("DELETE /orcamentos/{}", id);
    budget_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("Budget {} deleted", id),
    }))
}

pub fn routes(budget_service: Arc<BudgetService>) -> Router {
    collection_route(
        Router::new(),
        "/orcamentos",
        get(list_budgets_handler).post(create_budget_handler),
    )
    .route(
        "/orcamentos/{id}",
        get(get_budget_handler)
            .put(update_budget_handler)
            .delete(delete_budget_handler),
    )
    .with_state(budget_service)
}
