// API layer module (adapters for controllers)
// Routes, shared state and the handler-boundary error type.

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::domain::repositories::{CoffeeRepository, UserRepository};
use crate::identity::IdentityProvider;

/// Shared handles passed into every handler
///
/// Constructed once at startup; all fields are process-lifetime singletons.
#[derive(Clone)]
pub struct AppState {
    pub coffees: Arc<dyn CoffeeRepository>,
    pub users: Arc<dyn UserRepository>,
    pub identity: Arc<dyn IdentityProvider>,
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        // Coffee routes
        .route("/coffees", post(handlers::coffees::create_coffee))
        .route("/coffees", get(handlers::coffees::list_coffees))
        .route("/coffees/:id", get(handlers::coffees::get_coffee))
        .route("/coffees/:id", put(handlers::coffees::replace_coffee))
        .route("/coffees/:id", delete(handlers::coffees::delete_coffee))
        // User routes
        .route("/users", post(handlers::users::create_user))
        .route("/users", get(handlers::users::list_users))
        .route("/users", patch(handlers::users::update_last_sign_in))
        .route("/users/:id", delete(handlers::users::delete_user))
        .with_state(state)
}
