use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use super::id_to_string;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::{DeleteAck, InsertAck, UpdateAck};
use crate::domain::user::User;

/// MongoDB implementation of UserRepository
///
/// Inserts go through the raw document collection so arbitrary client
/// payloads are stored verbatim; reads deserialize into the typed model.
pub struct MongoUserRepository {
    collection: Collection<User>,
    raw: Collection<Document>,
}

impl MongoUserRepository {
    /// Creates a new MongoUserRepository over the `users` collection
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("users"),
            raw: database.collection("users"),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, document: Document) -> Result<InsertAck, String> {
        let result = self
            .raw
            .insert_one(document, None)
            .await
            .map_err(|e| format!("Failed to insert user: {}", e))?;

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id_to_string(&result.inserted_id),
        })
    }

    async fn find_all(&self) -> Result<Vec<User>, String> {
        let cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| format!("Failed to list users: {}", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| format!("Failed to read user cursor: {}", e))
    }

    async fn search(&self, query: &str) -> Result<Vec<User>, String> {
        // Case-insensitive substring match, ORed across the four
        // searchable fields. The pattern is passed through unescaped.
        let pattern = doc! { "$regex": query, "$options": "i" };
        let filter = doc! {
            "$or": [
                { "name": pattern.clone() },
                { "email": pattern.clone() },
                { "phoneNumber": pattern.clone() },
                { "address": pattern },
            ]
        };

        let cursor = self
            .collection
            .find(filter, None)
            .await
            .map_err(|e| format!("Failed to search users: {}", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| format!("Failed to read user cursor: {}", e))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, String> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| format!("Failed to find user by id: {}", e))
    }

    async fn set_last_sign_in(
        &self,
        email: &str,
        last_sign_in_time: &str,
    ) -> Result<UpdateAck, String> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "lastSignInTime": last_sign_in_time } },
                None,
            )
            .await
            .map_err(|e| format!("Failed to update last sign-in: {}", e))?;

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
            .map_err(|e| format!("Failed to delete user: {}", e))?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}
