use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::models::goal::Goal;
use crate::models::record::Record;
use crate::repositories::record_repository::Repository;
use crate::services::record_service::{RecordService, RecordServiceImpl, ServiceError};
use crate::validation::validate_positive_amount;

/// Goal operations: the common record operations plus progress tracking
#[async_trait]
pub trait GoalService: RecordService<Goal> {
    /// Add `amount` to the goal's current value
    ///
    /// `amount` must be finite and strictly positive, and so must stay the
    /// resulting total; nothing else on the goal changes.
    async fn add_value(&self, id: i64, amount: f64) -> Result<Goal, ServiceError>;
}

/// Implementation of GoalService
pub struct GoalServiceImpl {
    repository: Arc<dyn Repository<Goal>>,
    records: RecordServiceImpl<Goal>,
}

impl GoalServiceImpl {
    pub fn new(repository: Arc<dyn Repository<Goal>>) -> Self {
        Self {
            records: RecordServiceImpl::new(repository.clone()),
            repository,
        }
    }
}

#[async_trait]
impl RecordService<Goal> for GoalServiceImpl {
    async fn list(&self) -> Result<Vec<Goal>, ServiceError> {
        self.records.list().await
    }

    async fn get(&self, id: i64) -> Result<Goal, ServiceError> {
        self.records.get(id).await
    }

    async fn create(&self, goal: Goal) -> Result<Goal, ServiceError> {
        self.records.create(goal).await
    }

    async fn update(&self, id: i64, goal: Goal) -> Result<Goal, ServiceError> {
        self.records.update(id, goal).await
    }

    async fn delete(&self, id: i64) -> Result<Goal, ServiceError> {
        self.records.delete(id).await
    }
}

#[async_trait]
impl GoalService for GoalServiceImpl {
    async fn add_value(&self, id: i64, amount: f64) -> Result<Goal, ServiceError> {
        if let Err(error) = validate_positive_amount(amount) {
            let message = error
                .message
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            return Err(ServiceError::InvalidArgument(message));
        }

        let change = move |goal: &Goal| {
            let current_amount = goal.current_amount + amount;
            if !current_amount.is_finite() {
                return Err(format!(
                    "Adding {} to goal {} overflows its current value",
                    amount, goal.id
                ));
            }
            Ok(Goal {
                current_amount,
                ..goal.clone()
            })
        };

        let goal = self
            .repository
            .update_with(id, Box::new(change))
            .await
            .map_err(ServiceError::from_repository::<Goal>)?;
        debug!(resource = Goal::RESOURCE, id, amount, current = goal.current_amount, "goal value added");
        Ok(goal)
    }
}
