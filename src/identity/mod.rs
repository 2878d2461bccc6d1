// Identity-provider seam. Handlers depend on the trait; the Firebase
// implementation lives in the firebase module.

pub mod firebase;

pub use firebase::FirebaseIdentityProvider;

use async_trait::async_trait;

/// Errors from the identity provider
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The credential file could not be read or parsed
    #[error("invalid service account credentials: {0}")]
    Credentials(String),

    /// Minting or refreshing the access token failed
    #[error("failed to obtain access token: {0}")]
    Token(String),

    /// Transport-level failure talking to the provider
    #[error("identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider rejected the call (e.g. USER_NOT_FOUND)
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Client for the external identity provider
///
/// Two operations are needed by the user-delete cascade: delete an account
/// by its uid, and resolve a uid from an email address.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Delete the account with the given uid
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError>;

    /// Resolve the uid of the account registered under the given email,
    /// or `None` when no such account exists
    async fn find_uid_by_email(&self, email: &str) -> Result<Option<String>, IdentityError>;
}
