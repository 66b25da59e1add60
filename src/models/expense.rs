use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{IdPolicy, impl_record};

/// A single dated expense transaction
///
/// Unlike incomes, the id is chosen by the client and must be unique.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(example = json!({
    "id": 3,
    "valor": 42.5,
    "data": "2025-09-12",
    "descricao": "Farmácia",
    "categoria_id": 2,
    "usuario_id": 1,
    "recorrente": false
}))]
pub struct Expense {
    pub id: i64,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "data")]
    #[schema(format = "date", example = "2025-09-12")]
    pub date: NaiveDate,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "recorrente", default)]
    #[schema(default = false)]
    pub is_recurring: bool,
}

impl_record!(Expense, "Expense", IdPolicy::CallerSupplied);
