pub mod coffees;
pub mod users;

use mongodb::bson::oid::ObjectId;

use crate::api::errors::ApiError;

/// Welcome banner
///
/// GET /
pub async fn welcome() -> &'static str {
    "Welcome to CafeHub Server"
}

/// Parses a path segment into an ObjectId, mapping malformed input to a
/// client error
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::bad_request(format!("Invalid id: {}", id)))
}
