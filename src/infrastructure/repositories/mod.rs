pub mod mongo_coffee_repository;
pub mod mongo_user_repository;

pub use mongo_coffee_repository::MongoCoffeeRepository;
pub use mongo_user_repository::MongoUserRepository;

use mongodb::bson::Bson;

/// Renders a driver id value (usually an ObjectId) as a plain string
pub(crate) fn id_to_string(id: &Bson) -> String {
    match id.as_object_id() {
        Some(oid) => oid.to_hex(),
        None => id.to_string(),
    }
}
