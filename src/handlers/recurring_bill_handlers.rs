use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::{ErrorResponse, collection_route};
use crate::models::recurring_bill::RecurringBill;
use crate::services::{RecurringBillService, ServiceError};

#[utoipa::path(
    get,
    path = "/contas-recorrentes",
    responses(
        (status = 200, description = "List of recurring bills", body = Vec<RecurringBill>)
    ),
    tag = "contas-recorrentes"
)]
pub async fn list_recurring_bills_handler(
    State(recurring_bill_service): State<Arc<RecurringBillService>>,
) -> Result<Json<Vec<RecurringBill>>, ServiceError> {
    info!("GET /contas-recorrentes");
    Ok(Json(recurring_bill_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/contas-recorrentes/{id}",
    params(
        ("id" = i64, Path, description = "Recurring bill ID")
    ),
    responses(
        (status = 200, description = "Recurring bill found", body = RecurringBill),
        (status = 404, description = "Recurring bill not found", body = ErrorResponse)
    ),
    tag = "contas-recorrentes"
)]
pub async fn get_recurring_bill_handler(
    State(recurring_bill_service): State<Arc<RecurringBillService>>,
    Path(id): Path<i64>,
) -> Result<Json<RecurringBill>, ServiceError> {
    info!("GET /contas-recorrentes/{}", id);
    Ok(Json(recurring_bill_service.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/contas-recorrentes",
    request_body = RecurringBill,
    responses(
        (status = 201, description = "Recurring bill successfully created", body = RecurringBill),
        (status = 400, description = "A recurring bill with this id already exists", body = ErrorResponse)
    ),
    tag = "contas-recorrentes"
)]
pub async fn create_recurring_bill_handler(
    State(recurring_bill_service): State<Arc<RecurringBillService>>,
    Json(bill): Json<RecurringBill>,
) -> Result<(StatusCode, Json<RecurringBill>), ServiceError> {
    info!("POST /contas-recorrentes - id: {}", bill.id);
    let created = recurring_bill_service.create(bill).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn routes(recurring_bill_service: Arc<RecurringBillService>) -> Router {
    collection_route(
        Router::new(),
        "/contas-recorrentes",
        get(list_recurring_bills_handler).post(create_recurring_bill_handler),
    )
    .route("/contas-recorrentes/{id}", get(get_recurring_bill_handler))
    .with_state(recurring_bill_service)
}
