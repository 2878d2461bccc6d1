use std::net::SocketAddr;
use std::sync::Arc;

use mongodb::Client;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cafehub_api::api::{self, AppState};
use cafehub_api::config::Config;
use cafehub_api::identity::FirebaseIdentityProvider;
use cafehub_api::infrastructure::repositories::{MongoCoffeeRepository, MongoUserRepository};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env();

    // Connect to database
    tracing::info!("Connecting to database...");
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .expect("Failed to connect to database");
    let database = client.database(&config.database_name);

    tracing::info!("Database connected successfully");

    // Identity provider client
    let identity = FirebaseIdentityProvider::from_credentials_file(&config.firebase_credentials)
        .expect("Failed to load identity-provider credentials");

    let state = AppState {
        coffees: Arc::new(MongoCoffeeRepository::new(&database)),
        users: Arc::new(MongoUserRepository::new(&database)),
        identity: Arc::new(identity),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("CafeHub Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
