use std::path::PathBuf;

/// Process configuration loaded from the environment
///
/// Every field has a development default so the server starts without a
/// `.env` file; missing variables are logged as warnings.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the `coffees` and `users` collections
    pub database_name: String,
    /// Path to the Firebase service-account credential file
    pub firebase_credentials: PathBuf,
    /// TCP port the HTTP server binds to
    pub port: u16,
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        let mongodb_uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| {
            tracing::warn!("MONGODB_URI not set, using default");
            "mongodb://localhost:27017".to_string()
        });

        let database_name =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "cafehubDB".to_string());

        let firebase_credentials = std::env::var("FIREBASE_SERVICE_ACCOUNT")
            .unwrap_or_else(|_| {
                tracing::warn!("FIREBASE_SERVICE_ACCOUNT not set, using default");
                "./serviceAccountKey.json".to_string()
            })
            .into();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            mongodb_uri,
            database_name,
            firebase_credentials,
            port,
        }
    }
}
