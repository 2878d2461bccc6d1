use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A user document as stored in the `users` collection
///
/// Clients submit users as free-form JSON, so every field beyond the id is
/// optional; fields the model does not name are kept in `extra` and
/// round-trip untouched. The identity-provider link is `firebase_uid`, with
/// `email` as the fallback key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "firebaseUid", skip_serializing_if = "Option::is_none")]
    pub firebase_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "lastSignInTime", skip_serializing_if = "Option::is_none")]
    pub last_sign_in_time: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}
