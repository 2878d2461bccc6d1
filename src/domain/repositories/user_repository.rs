use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use super::{DeleteAck, InsertAck, UpdateAck};
use crate::domain::user::User;

/// Repository trait for the users collection
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a document as-is
    async fn insert(&self, document: Document) -> Result<InsertAck, String>;

    /// All user documents
    async fn find_all(&self) -> Result<Vec<User>, String>;

    /// Users where any of name, email, phoneNumber or address contains the
    /// query substring, case-insensitively
    async fn search(&self, query: &str) -> Result<Vec<User>, String>;

    /// Find a single user by id
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, String>;

    /// Set `lastSignInTime` on the user with the given email; a zero matched
    /// count is a no-op, not an error
    async fn set_last_sign_in(
        &self,
        email: &str,
        last_sign_in_time: &str,
    ) -> Result<UpdateAck, String>;

    /// Delete by id; a zero deleted count is not an error
    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, String>;
}
