use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: Uuid,
    pub cpf: String,
    pub name: String,
    pub statement: Vec<StatementEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Credit,
    Debit,
}

/// One recorded transaction. Entries are never edited or removed once
/// appended to a customer's statement.
#[derive(Debug, Clone, Serialize)]
pub struct StatementEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct WithdrawRequest {
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct RenameAccountRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct StatementQuery {
    pub date: Option<String>,
}
