use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{IdPolicy, impl_record};

/// Spending limit for a category over a period ("mensal" or "anual")
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(example = json!({
    "id": 3,
    "categoria_id": 2,
    "usuario_id": 1,
    "valor_limite": 800.0,
    "periodo": "mensal"
}))]
pub struct Budget {
    pub id: i64,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "valor_limite")]
    pub limit_amount: f64,
    #[serde(rename = "periodo")]
    pub period: String,
}

impl_record!(Budget, "Budget", IdPolicy::CallerSupplied);
