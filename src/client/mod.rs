pub mod errors;
pub mod models;

use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::config::Config;

use self::errors::ApiError;
use self::models::{
    AuthRequest, CreatedReadingResponse, ErrorBody, NewReadingRequest, Reading, TokenResponse,
};

/// Header carrying the session token on protected endpoints.
pub const TOKEN_HEADER: &str = "x-access-token";

/// Thin wrapper over the remote readings resource.
///
/// Performs no session bookkeeping itself: protected methods take the token
/// explicitly so the caller decides, per request, which credential to attach.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/login", self.base_url);
        debug!(url = %url, email = %email, "Logging in");

        let resp = self
            .http
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await?;

        let bytes = read_success(resp, false).await?;
        let body: TokenResponse = serde_json::from_slice(&bytes)?;
        Ok(body.token)
    }

    /// Create a new account. The server answers 201 with no useful body.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let url = format!("{}/register", self.base_url);
        debug!(url = %url, email = %email, "Registering account");

        let resp = self
            .http
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await?;

        read_success(resp, false).await?;
        Ok(())
    }

    /// Fetch the full reading history for the token's user.
    pub async fn fetch_readings(&self, token: &str) -> Result<Vec<Reading>, ApiError> {
        let url = format!("{}/readings", self.base_url);
        debug!(url = %url, "Fetching readings");

        let resp = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, token)
            .send()
            .await?;

        let bytes = read_success(resp, true).await?;
        let readings: Vec<Reading> = serde_json::from_slice(&bytes)?;
        Ok(readings)
    }

    /// Create a reading; returns the server's record with its assigned id.
    pub async fn create_reading(
        &self,
        token: &str,
        systolic: i32,
        diastolic: i32,
        date: NaiveDate,
    ) -> Result<Reading, ApiError> {
        let url = format!("{}/readings", self.base_url);
        debug!(url = %url, systolic, diastolic, "Creating reading");

        let resp = self
            .http
            .post(&url)
            .header(TOKEN_HEADER, token)
            .json(&NewReadingRequest {
                systolic,
                diastolic,
                date,
            })
            .send()
            .await?;

        let bytes = read_success(resp, true).await?;
        let body: CreatedReadingResponse = serde_json::from_slice(&bytes)?;
        Ok(body.reading)
    }

    /// Delete the reading with `id`. Response bodies are ignored.
    pub async fn delete_reading(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/readings/{}", self.base_url, id);
        debug!(url = %url, "Deleting reading");

        let resp = self
            .http
            .delete(&url)
            .header(TOKEN_HEADER, token)
            .send()
            .await?;

        read_success(resp, true).await?;
        Ok(())
    }
}

/// Classify a response: success bodies come back as raw bytes, everything
/// else becomes an `ApiError`.
///
/// `authenticated` controls what a 401 means: token expiry on protected
/// endpoints, a plain rejection (bad credentials) on auth endpoints.
async fn read_success(resp: Response, authenticated: bool) -> Result<Vec<u8>, ApiError> {
    let status = resp.status();

    if status.is_success() {
        let bytes = resp.bytes().await?;
        return Ok(bytes.to_vec());
    }

    if authenticated && status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthenticated);
    }

    let message = resp
        .bytes()
        .await
        .ok()
        .and_then(|b| serde_json::from_slice::<ErrorBody>(&b).ok())
        .and_then(|b| b.message);

    Err(ApiError::Rejected { status, message })
}
