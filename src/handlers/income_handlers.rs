use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::{ErrorResponse, MessageResponse, collection_route};
use crate::models::income::Income;
use crate::services::{IncomeService, ServiceError};

#[utoipa::path(
    get,
    path = "/rendas",
    responses(
        (status = 200, description = "List of incomes", body = Vec<Income>)
    ),
    tag = "rendas"
)]
pub async fn list_incomes_handler(
    State(income_service): State<Arc<IncomeService>>,
) -> Result<Json<Vec<Income>>, ServiceError> {
    info!("GET /rendas");
    Ok(Json(income_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/rendas/{id}",
    params(
        ("id" = i64, Path, description = "Income ID")
    ),
    responses(
        (status = 200, description = "Income found", body = Income),
        (status = 404, description = "Income not found", body = ErrorResponse)
    ),
    tag = "rendas"
)]
pub async fn get_income_handler(
    State(income_service): State<Arc<IncomeService>>,
    Path(id): Path<i64>,
) -> Result<Json<Income>, ServiceError> {
    info!("GET /rendas/{}", id);
    Ok(Json(income_service.get(id).await?))
}

/// Handler for creating an income
///
/// The id is assigned by the server as one past the highest stored id.
#[utoipa::path(
    post,
    path = "/rendas",
    request_body = Income,
    responses(
        (status = 201, description = "Income successfully created", body = Income)
    ),
    tag = "rendas"
)]
pub async fn create_income_handler(
    State(income_service): State<Arc<IncomeService>>,
    Json(income): Json<Income>,
) -> Result<(StatusCode, Json<Income>), ServiceError> {
    info!("POST /rendas - amount: {}", income.amount);
    let created = income_service.create(income).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for replacing an income
///
/// The path id always wins over the id in the body.
#[utoipa::path(
    put,
    path = "/rendas/{id}",
    params(
        ("id" = i64, Path, description = "Income ID")
    ),
    request_body = Income,
    responses(
        (status = 200, description = "Income successfully updated", body = Income),
        (status = 404, description = "Income not found", body = ErrorResponse)
    ),
    tag = "rendas"
)]
pub async fn update_income_handler(
    State(income_service): State<Arc<IncomeService>>,
    Path(id): Path<i64>,
    Json(income): Json<Income>,
) -> Result<Json<Income>, ServiceError> {
    info!("PUT /rendas/{}", id);
    Ok(Json(income_service.update(id, income).await?))
}

#[utoipa::path(
    delete,
    path = "/rendas/{id}",
    params(
        ("id" = i64, Path, description = "Income ID")
    ),
    responses(
        (status = 200, description = "Income successfully deleted", body = MessageResponse),
        (status = 404, description = "Income not found", body = ErrorResponse)
    ),
    tag = "rendas"
)]
pub async fn delete_income_handler(
    State(income_service): State<Arc<IncomeService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ServiceError> {
    info!("DELETE /rendas/{}", id);
    income_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("Income {} deleted", id),
    }))
}

pub fn routes(income_service: Arc<IncomeService>) -> Router {
    collection_route(
        Router::new(),
        "/rendas",
        get(list_incomes_handler).post(create_income_handler),
    )
    .route(
        "/rendas/{id}",
        get(get_income_handler)
            .put(update_income_handler)
            .delete(delete_income_handler),
    )
    .with_state(income_service)
}
