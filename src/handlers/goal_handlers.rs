use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::handlers::{ErrorResponse, MessageResponse, collection_route};
use crate::models::goal::{AddValueQuery, Goal};
use crate::services::{GoalService, ServiceError};
use crate::validation::describe_errors;

#[utoipa::path(
    get,
    path = "/metas",
    responses(
        (status = 200, description = "List of goals", body = Vec<Goal>)
    ),
    tag = "metas"
)]
pub async fn list_goals_handler(
    State(goal_service): State<Arc<dyn GoalService>>,
) -> Result<Json<Vec<Goal>>, ServiceError> {
    info!("GET /metas");
    Ok(Json(goal_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/metas/{id}",
    params(
        ("id" = i64, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal found", body = Goal),
        (status = 404, description = "Goal not found", body = ErrorResponse)
    ),
    tag = "metas"
)]
pub async fn get_goal_handler(
    State(goal_service): State<Arc<dyn GoalService>>,
    Path(id): Path<i64>,
) -> Result<Json<Goal>, ServiceError> {
    info!("GET /metas/{}", id);
    Ok(Json(goal_service.get(id).await?))
}

/// Handler for creating a goal
///
/// The id is assigned by the server; any id in the body is ignored.
#[utoipa::path(
    post,
    path = "/metas",
    request_body = Goal,
    responses(
        (status = 201, description = "Goal successfully created", body = Goal)
    ),
    tag = "metas"
)]
pub async fn create_goal_handler(
    State(goal_service): State<Arc<dyn GoalService>>,
    Json(goal): Json<Goal>,
) -> Result<(StatusCode, Json<Goal>), ServiceError> {
    info!("POST /metas - title: {}", goal.title);
    let created = goal_service.create(goal).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for replacing a goal
///
/// The path id always wins over the id in the body.
#[utoipa::path(
    put,
    path = "/metas/{id}",
    params(
        ("id" = i64, Path, description = "Goal ID")
    ),
    request_body = Goal,
    responses(
        (status = 200, description = "Goal successfully updated", body = Goal),
        (status = 404, description = "Goal not found", body = ErrorResponse)
    ),
    tag = "metas"
)]
pub async fn update_goal_handler(
    State(goal_service): State<Arc<dyn GoalService>>,
    Path(id): Path<i64>,
    Json(goal): Json<Goal>,
) -> Result<Json<Goal>, ServiceError> {
    info!("PUT /metas/{}", id);
    Ok(Json(goal_service.update(id, goal).await?))
}

/// Handler for adding money to a goal
///
/// Increments the goal's current value by `valor`, which must be positive.
#[utoipa::path(
    patch,
    path = "/metas/{id}/adicionar-valor",
    params(
        ("id" = i64, Path, description = "Goal ID"),
        AddValueQuery
    ),
    responses(
        (status = 200, description = "Value added to the goal", body = Goal),
        (status = 400, description = "Amount is not positive", body = ErrorResponse),
        (status = 404, description = "Goal not found", body = ErrorResponse)
    ),
    tag = "metas"
)]
pub async fn add_goal_value_handler(
    State(goal_service): State<Arc<dyn GoalService>>,
    Path(id): Path<i64>,
    Query(query): Query<AddValueQuery>,
) -> Result<Json<Goal>, Response> {
    info!("PATCH /metas/{}/adicionar-valor - valor: {}", id, query.valor);

    if let Err(validation_errors) = query.validate() {
        let error_response =
            ErrorResponse::new("validation_error", &describe_errors(&validation_errors));
        return Err((StatusCode::BAD_REQUEST, Json(error_response)).into_response());
    }

    match goal_service.add_value(id, query.valor).await {
        Ok(goal) => Ok(Json(goal)),
        Err(e) => Err(e.into_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/metas/{id}",
    params(
        ("id" = i64, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal successfully deleted", body = MessageResponse),
        (status = 404, description = "Goal not found", body = ErrorResponse)
    ),
    tag = "metas"
)]
pub async fn delete_goal_handler(
    State(goal_service): State<Arc<dyn GoalService>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ServiceError> {
    info!("DELETE /metas/{}", id);
    goal_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("Goal {} deleted", id),
    }))
}

pub fn routes(goal_service: Arc<dyn GoalService>) -> Router {
    collection_route(
        Router::new(),
        "/metas",
        get(list_goals_handler).post(create_goal_handler),
    )
    .route(
        "/metas/{id}",
        get(get_goal_handler)
            .put(update_goal_handler)
            .delete(delete_goal_handler),
    )
    .route("/metas/{id}/adicionar-valor", patch(add_goal_value_handler))
    .with_state(goal_service)
}
