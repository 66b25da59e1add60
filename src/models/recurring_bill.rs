use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::category::TransactionKind;
use crate::models::record::{IdPolicy, impl_record};

/// Template for a periodic income or expense
///
/// `frequency` is descriptive text ("mensal", "semanal", "anual", ...);
/// no concrete transactions are ever generated from it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(example = json!({
    "id": 3,
    "valor": 89.9,
    "descricao": "Internet",
    "categoria_id": 2,
    "usuario_id": 1,
    "tipo": "despesa",
    "data_inicio": "2025-10-01",
    "frequencia": "mensal"
}))]
pub struct RecurringBill {
    pub id: i64,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "data_inicio")]
    #[schema(format = "date", example = "2025-10-01")]
    pub start_date: NaiveDate,
    #[serde(rename = "frequencia")]
    pub frequency: String,
}

impl_record!(RecurringBill, "Recurring bill", IdPolicy::CallerSupplied);
