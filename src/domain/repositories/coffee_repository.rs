use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use super::{DeleteAck, InsertAck, UpdateAck};

/// Repository trait for the coffees collection
///
/// Coffees are arbitrary client-supplied documents; there is no typed model,
/// so every operation works on raw `Document`s.
#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    /// Insert a document as-is
    async fn insert(&self, document: Document) -> Result<InsertAck, String>;

    /// All documents, in database-native order
    async fn find_all(&self) -> Result<Vec<Document>, String>;

    /// Find a single document by id
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Document>, String>;

    /// Full-document replace; creates the document when the id is absent
    async fn replace_by_id(&self, id: ObjectId, document: Document) -> Result<UpdateAck, String>;

    /// Delete by id; a zero deleted count is not an error
    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, String>;
}
