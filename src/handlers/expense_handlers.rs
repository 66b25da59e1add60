use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::{ErrorResponse, collection_route};
use crate::models::expense::Expense;
use crate::services::{ExpenseService, ServiceError};

#[utoipa::path(
    get,
    path = "/despesas",
    responses(
        (status = 200, description = "List of expenses", body = Vec<Expense>)
    ),
    tag = "despesas"
)]
pub async fn list_expenses_handler(
    State(expense_service): State<Arc<ExpenseService>>,
) -> Result<Json<Vec<Expense>>, ServiceError> {
    info!("GET /despesas");
    Ok(Json(expense_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/despesas/{id}",
    params(
        ("id" = i64, Path, description = "Expense ID")
    ),
    responses(
        (status = 200, description = "Expense found", body = Expense),
        (status = 404, description = "Expense not found", body = ErrorResponse)
    ),
    tag = "despesas"
)]
pub async fn get_expense_handler(
    State(expense_service): State<Arc<ExpenseService>>,
    Path(id): Path<i64>,
) -> Result<Json<Expense>, ServiceError> {
    info!("GET /despesas/{}", id);
    Ok(Json(expense_service.get(id).await?))
}

/// Handler for creating an expense
///
/// The caller chooses the id; an id already in use is rejected.
#[utoipa::path(
    post,
    path = "/despesas",
    request_body = Expense,
    responses(
        (status = 201, description = "Expense successfully created", body = Expense),
        (status = 400, description = "An expense with this id already exists", body = ErrorResponse)
    ),
    tag = "despesas"
)]
pub async fn create_expense_handler(
    State(expense_service): State<Arc<ExpenseService>>,
    Json(expense): Json<Expense>,
) -> Result<(StatusCode, Json<Expense>), ServiceError> {
    info!("POST /despesas - id: {}", expense.id);
    let created = expense_service.create(expense).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn routes(expense_service: Arc<ExpenseService>) -> Router {
    collection_route(
        Router::new(),
        "/despesas",
        get(list_expenses_handler).post(create_expense_handler),
    )
    .route("/despesas/{id}", get(get_expense_handler))
    .with_state(expense_service)
}
