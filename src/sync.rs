use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    client::{errors::ApiError, models::Reading, BackendClient},
    confirm::DeleteConfirmation,
    reading_cache::ReadingCache,
    session::Session,
};

/// Orchestrates backend calls and keeps the local reading view consistent.
///
/// Every operation performs a single outbound request and, on success,
/// applies exactly one cache mutation. The cache is never touched before
/// the server confirms, so a failed add or delete leaves the view as-is.
///
/// Operations are independent and never serialized against each other: if a
/// fetch races a delete, the cache reflects whichever response lands last,
/// which can transiently resurrect a deleted row until the next refresh.
#[derive(Clone)]
pub struct SyncController {
    client: BackendClient,
    session: Session,
    cache: ReadingCache,
}

impl SyncController {
    pub fn new(client: BackendClient, session: Session, cache: ReadingCache) -> Self {
        Self {
            client,
            session,
            cache,
        }
    }

    /// Exchange credentials for a token and store it in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let token = self.client.login(email, password).await?;
        self.session.set_token(token).await;
        info!(email = %email, "Logged in");
        Ok(())
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.client.register(email, password).await
    }

    /// Drop the credential; the next protected call will fail fast.
    pub async fn logout(&self) {
        self.session.invalidate().await;
        info!("Logged out");
    }

    /// Fetch the full history and replace the local view with it.
    pub async fn fetch_all(&self) -> Result<Vec<Reading>, ApiError> {
        let token = self.require_token().await?;
        let result = self.client.fetch_readings(&token).await;
        let readings = self.check_auth(result).await?;

        info!(count = readings.len(), "Fetched readings");
        self.cache.replace_all(readings).await;
        Ok(self.cache.to_ordered_list().await)
    }

    /// Create a reading on the server, then insert the confirmed record.
    ///
    /// The cache receives the server's copy, not the local draft, so the
    /// assigned id and any normalized fields are authoritative.
    pub async fn add_reading(
        &self,
        systolic: i32,
        diastolic: i32,
        date: NaiveDate,
    ) -> Result<Reading, ApiError> {
        let token = self.require_token().await?;
        let result = self
            .client
            .create_reading(&token, systolic, diastolic, date)
            .await;
        let created = self.check_auth(result).await?;

        info!(id = created.id, "Reading added");
        self.cache.insert(created.clone()).await;
        Ok(created)
    }

    /// Delete a reading on the server, then drop it from the local view.
    pub async fn delete_reading(&self, id: i64) -> Result<(), ApiError> {
        let token = self.require_token().await?;
        let result = self.client.delete_reading(&token, id).await;
        self.check_auth(result).await?;

        info!(id, "Reading deleted");
        self.cache.remove_by_id(id).await;
        Ok(())
    }

    /// Complete a pending delete confirmation.
    ///
    /// Returns the deleted id, or `None` when no prompt was pending (the
    /// user cancelled, or confirmed twice).
    pub async fn confirm_delete(
        &self,
        gate: &mut DeleteConfirmation,
    ) -> Result<Option<i64>, ApiError> {
        match gate.confirm() {
            Some(id) => {
                self.delete_reading(id).await?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Current ordered view of the cache; no I/O.
    pub async fn current_view(&self) -> Vec<Reading> {
        self.cache.to_ordered_list().await
    }

    /// Token is read fresh for every request so that an invalidation that
    /// happened mid-session is honoured by later operations.
    async fn require_token(&self) -> Result<String, ApiError> {
        self.session.token().await.ok_or(ApiError::Unauthenticated)
    }

    /// Invalidate the session whenever the server rejects the token. The
    /// host observes this and routes back to authentication. Applied to
    /// every protected operation, not just fetch.
    async fn check_auth<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthenticated) = &result {
            warn!("Server rejected the session token; invalidating session");
            self.session.invalidate().await;
        }
        result
    }
}
