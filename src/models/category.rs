use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::record::{IdPolicy, impl_record};

/// Direction of money flow a category or recurring bill describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum TransactionKind {
    #[serde(rename = "renda")]
    Income,
    #[serde(rename = "despesa")]
    Expense,
}

/// Category entity classifying a transaction as income or expense
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(example = json!({
    "nome": "Transporte",
    "tipo": "despesa"
}))]
pub struct Category {
    /// Assigned by the server on create
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
}

impl_record!(Category, "Category", IdPolicy::AutoIncrement);
