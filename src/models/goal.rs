use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::record::{IdPolicy, impl_record};
use crate::validation::validate_positive_amount;

/// Savings goal with current progress and a deadline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(example = json!({
    "titulo": "Carro novo",
    "valor_atual": 0.0,
    "valor_meta": 40000.0,
    "prazo": "2027-01-01",
    "descricao": "Entrada do financiamento",
    "usuario_id": 1
}))]
pub struct Goal {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "valor_atual")]
    pub current_amount: f64,
    #[serde(rename = "valor_meta")]
    pub target_amount: f64,
    #[serde(rename = "prazo")]
    #[schema(format = "date", example = "2027-01-01")]
    pub deadline: NaiveDate,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
}

impl_record!(Goal, "Goal", IdPolicy::AutoIncrement);

/// Query parameters for adding money to a goal
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddValueQuery {
    /// Amount to add to the goal's current value; must be greater than 0
    #[validate(custom(function = "validate_positive_amount"))]
    #[param(example = 250.0)]
    pub valor: f64,
}
