// Firebase Auth client over the Identity Toolkit REST API.
// Authenticates with a Google service account: a short-lived RS256 JWT
// assertion is exchanged at the token endpoint for a bearer token, which
// is cached until shortly before expiry.

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use super::{IdentityError, IdentityProvider};
use async_trait::async_trait;

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const TOKEN_SCOPE: &str = "https://www.googleapis.com/auth/identitytoolkit";
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Google service-account key, parsed from the credential JSON file
#[derive(Debug, Clone, Deserialize)]
struct ServiceAccountKey {
    project_id: String,
    client_email: String,
    private_key: String,
    token_uri: String,
}

/// Claims of the OAuth2 JWT-bearer assertion
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Firebase Auth implementation of IdentityProvider
pub struct FirebaseIdentityProvider {
    http: reqwest::Client,
    key: ServiceAccountKey,
    signing_key: EncodingKey,
    token: Mutex<Option<CachedToken>>,
}

impl FirebaseIdentityProvider {
    /// Creates a provider from a service-account credential file
    pub fn from_credentials_file(path: &Path) -> Result<Self, IdentityError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| IdentityError::Credentials(format!("{}: {}", path.display(), e)))?;
        let key: ServiceAccountKey = serde_json::from_str(&raw)
            .map_err(|e| IdentityError::Credentials(e.to_string()))?;

        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| IdentityError::Credentials(format!("bad private key: {}", e)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            key,
            signing_key,
            token: Mutex::new(None),
        })
    }

    /// Returns a valid bearer token, minting a new one when the cached
    /// token is absent or within a minute of expiry
    async fn access_token(&self) -> Result<String, IdentityError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() + Duration::from_secs(60) {
                return Ok(token.access_token.clone());
            }
        }

        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: TOKEN_SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map_err(|e| IdentityError::Token(e.to_string()))?;

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            expires_in: u64,
        }

        let response: TokenResponse = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| IdentityError::Token(e.to_string()))?
            .json()
            .await?;

        let token = response.access_token.clone();
        *cached = Some(CachedToken {
            access_token: response.access_token,
            expires_at: Instant::now() + Duration::from_secs(response.expires_in),
        });

        Ok(token)
    }

    /// POSTs a JSON body to an accounts endpoint and surfaces provider
    /// errors as `IdentityError::Provider`
    async fn accounts_call(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, IdentityError> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/projects/{}/accounts:{}",
            IDENTITY_TOOLKIT_URL, self.key.project_id, action
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = payload
                .pointer("/error/message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error")
                .to_string();
            return Err(IdentityError::Provider(message));
        }

        Ok(payload)
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError> {
        self.accounts_call("delete", json!({ "localId": uid }))
            .await?;
        tracing::info!(uid, "deleted identity-provider account");
        Ok(())
    }

    async fn find_uid_by_email(&self, email: &str) -> Result<Option<String>, IdentityError> {
        let payload = self
            .accounts_call("lookup", json!({ "email": [email] }))
            .await?;

        Ok(payload
            .pointer("/users/0/localId")
            .and_then(|uid| uid.as_str())
            .map(str::to_string))
    }
}
