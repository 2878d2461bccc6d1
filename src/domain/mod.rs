// Domain layer: the user model and the repository traits the
// handlers depend on. Infrastructure provides the MongoDB-backed
// implementations.

pub mod repositories;
pub mod user;
