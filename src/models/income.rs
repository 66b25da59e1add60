use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{IdPolicy, impl_record};

/// A single dated income transaction
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(example = json!({
    "valor": 3000.0,
    "data": "2025-09-01",
    "descricao": "Salário",
    "categoria_id": 1,
    "usuario_id": 1
}))]
pub struct Income {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "data")]
    #[schema(format = "date", example = "2025-09-01")]
    pub date: NaiveDate,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
}

impl_record!(Income, "Income", IdPolicy::AutoIncrement);
