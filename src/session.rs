use std::sync::Arc;

use tokio::sync::RwLock;

/// Holds the signed-in user's token and its validity.
///
/// Wrapped in `Arc` so the controller and the hosting application share one
/// instance. Every request reads the token fresh through `token()`, so an
/// invalidation that happens mid-session is seen by whatever starts next.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly issued credential, marking the session valid.
    pub async fn set_token(&self, token: String) {
        debug_assert!(!token.is_empty(), "token must be non-empty");
        *self.inner.write().await = Some(token);
    }

    /// Mark the session invalid and clear the stored token.
    ///
    /// Idempotent. Called on logout and whenever the server answers 401;
    /// the host observes it via `is_valid` to force re-authentication.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }

    pub async fn is_valid(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Current token, if the session is still valid.
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.clone()
    }
}
