use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReplaceOptions;
use mongodb::{Collection, Database};

use super::id_to_string;
use crate::domain::repositories::coffee_repository::CoffeeRepository;
use crate::domain::repositories::{DeleteAck, InsertAck, UpdateAck};

/// MongoDB implementation of CoffeeRepository
pub struct MongoCoffeeRepository {
    collection: Collection<Document>,
}

impl MongoCoffeeRepository {
    /// Creates a new MongoCoffeeRepository over the `coffees` collection
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("coffees"),
        }
    }
}

#[async_trait]
impl CoffeeRepository for MongoCoffeeRepository {
    async fn insert(&self, document: Document) -> Result<InsertAck, String> {
        let result = self
            .collection
            .insert_one(document, None)
            .await
            .map_err(|e| format!("Failed to insert coffee: {}", e))?;

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id_to_string(&result.inserted_id),
        })
    }

    async fn find_all(&self) -> Result<Vec<Document>, String> {
        let cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| format!("Failed to list coffees: {}", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| format!("Failed to read coffee cursor: {}", e))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Document>, String> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| format!("Failed to find coffee by id: {}", e))
    }

    async fn replace_by_id(&self, id: ObjectId, document: Document) -> Result<UpdateAck, String> {
        let options = ReplaceOptions::builder().upsert(true).build();
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, document, options)
            .await
            .map_err(|e| format!("Failed to replace coffee: {}", e))?;

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(id_to_string),
        })
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, String> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| format!("Failed to delete coffee: {}", e))?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}
