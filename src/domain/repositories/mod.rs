pub mod coffee_repository;
pub mod user_repository;

pub use coffee_repository::CoffeeRepository;
pub use user_repository::UserRepository;

use serde::Serialize;

/// Acknowledgment returned from an insert
///
/// Field names mirror the driver's result object so clients see the same
/// shape they would get from the database directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Acknowledgment returned from an update or replace
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Acknowledgment returned from a delete
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}
