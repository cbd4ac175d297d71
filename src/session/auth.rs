// Authentication manager for the payment gateway API

use crate::config::Config;
use crate::constants::{
    AUTHENTICATE_PATH, REFRESH_FAILURE_COOLDOWN_SECS, SESSION_EXPIRY_MARGIN_SECS, USER_AGENT,
};
use crate::error::{AppError, AuthError, truncate_body};
use crate::session::response::AuthenticateResponse;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// Session information for authenticated requests
///
/// Exactly one session exists per client instance. It is owned exclusively by
/// [`Auth`] and replaced wholesale on each successful refresh; no other
/// component writes it.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current bearer token
    pub access_token: String,
    /// Unix timestamp (seconds) when the token expires
    pub expires_at: u64,
}

impl Session {
    /// Creates a session from a token and its lifetime in seconds
    pub fn new(access_token: String, expires_in: u64) -> Self {
        let expires_at = Utc::now().timestamp() as u64 + expires_in;
        Self {
            access_token,
            expires_at,
        }
    }

    /// Checks if the session is expired or will expire soon
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60)
    ///
    /// # Returns
    /// * `true` if the session is expired or will expire within the margin
    /// * `false` if the session is still valid
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<u64>) -> bool {
        let margin = margin_seconds.unwrap_or(SESSION_EXPIRY_MARGIN_SECS);
        let now = Utc::now().timestamp() as u64;
        now + margin >= self.expires_at
    }

    /// Gets the number of seconds until the session expires
    ///
    /// # Returns
    /// * Remaining lifetime, or 0 if already expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> u64 {
        let now = Utc::now().timestamp() as u64;
        self.expires_at.saturating_sub(now)
    }
}

/// Authentication manager for the payment gateway API
///
/// Owns the current [`Session`] and performs the authenticate call with the
/// public/private key pair sent as distinct headers. Token refresh is
/// single-flight: concurrent refreshes collapse into one network call whose
/// result every waiting caller shares.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
    refresh_gate: Mutex<()>,
    last_refresh_failure: RwLock<Option<Instant>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("reqwest client");

        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
            refresh_gate: Mutex::new(()),
            last_refresh_failure: RwLock::new(None),
        }
    }

    /// Returns the last known token without a network call (may be stale)
    pub async fn current_token(&self) -> Option<String> {
        let session = self.session.read().await;
        session.as_ref().map(|s| s.access_token.clone())
    }

    /// Returns a bearer token, authenticating lazily when needed
    ///
    /// Reuses the cached token while it is valid. When the session is absent
    /// or expiring within the safety margin, delegates to [`Auth::refresh`].
    ///
    /// # Returns
    /// * `Ok(String)` - A token usable for the next request
    /// * `Err(AppError)` - If authentication fails
    pub async fn bearer_token(&self) -> Result<String, AppError> {
        let seen = {
            let session = self.session.read().await;
            match session.as_ref() {
                Some(sess) if !sess.is_expired(None) => return Ok(sess.access_token.clone()),
                Some(sess) => {
                    debug!("Session expires in {}s, refreshing", sess.seconds_until_expiry());
                    Some(sess.access_token.clone())
                }
                None => {
                    info!("No active session, authenticating");
                    None
                }
            }
        };

        self.refresh(seen.as_deref()).await
    }

    /// Refreshes the session, collapsing concurrent refreshes into one call
    ///
    /// `seen` is the token the caller last observed (None for a cold start).
    /// After acquiring the refresh gate the session is re-read: if it no
    /// longer matches `seen`, another caller already refreshed and its token
    /// is returned without a second authenticate call.
    ///
    /// # Arguments
    /// * `seen` - Token that triggered the refresh, if any
    ///
    /// # Returns
    /// * `Ok(String)` - The current (fresh) token
    /// * `Err(AppError)` - If the authenticate call fails
    pub async fn refresh(&self, seen: Option<&str>) -> Result<String, AppError> {
        let _gate = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited on the gate.
        {
            let session = self.session.read().await;
            if let Some(sess) = session.as_ref() {
                let already_fresh = match seen {
                    Some(stale) => sess.access_token != stale,
                    None => true,
                };
                if already_fresh {
                    debug!("Session already refreshed by a concurrent caller");
                    return Ok(sess.access_token.clone());
                }
            }
        }

        // A refresh that just failed is not retried until the cooldown ends,
        // so a wave of 401s cannot hammer the authenticate endpoint.
        {
            let failure = self.last_refresh_failure.read().await;
            if let Some(at) = *failure {
                if at.elapsed() < Duration::from_secs(REFRESH_FAILURE_COOLDOWN_SECS) {
                    warn!("Token refresh requested during failure cooldown");
                    return Err(AppError::Auth(AuthError::RefreshCoolingDown));
                }
            }
        }

        match self.authenticate().await {
            Ok(new_session) => {
                let token = new_session.access_token.clone();
                {
                    let mut session = self.session.write().await;
                    *session = Some(new_session);
                }
                {
                    let mut failure = self.last_refresh_failure.write().await;
                    *failure = None;
                }
                info!("✓ Session refreshed");
                Ok(token)
            }
            Err(e) => {
                let mut failure = self.last_refresh_failure.write().await;
                *failure = Some(Instant::now());
                error!("Authentication failed: {}", e);
                Err(AppError::Auth(e))
            }
        }
    }

    /// Performs the authenticate call against the gateway
    async fn authenticate(&self) -> Result<Session, AuthError> {
        let url = format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            AUTHENTICATE_PATH
        );
        let public_key = self.config.credentials.public_key.trim();
        let private_key = self.config.credentials.private_key.trim();

        debug!("Authenticate request to URL: {}", url);
        debug!("Using public key (length): {}", public_key.len());

        let resp = self
            .client
            .post(&url)
            .header("public", public_key)
            .header("private", private_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send authenticate request: {}", e);
                AuthError::Transport(e.to_string())
            })?;

        let status = resp.status();
        debug!("Authenticate response status: {}", status);

        let body = resp.text().await.map_err(|e| {
            error!("Failed to read authenticate response body: {}", e);
            AuthError::Transport(e.to_string())
        })?;

        match status {
            s if s.is_success() => {
                let parsed: AuthenticateResponse = serde_json::from_str(&body).map_err(|e| {
                    error!("Could not parse authenticate response: {}", e);
                    AuthError::MalformedResponse(e.to_string())
                })?;

                if parsed.token.access_token.is_empty() {
                    error!("Authenticate response carried an empty access token");
                    return Err(AuthError::MalformedResponse(
                        "empty access_token".to_string(),
                    ));
                }

                debug!(
                    "Successfully authenticated, token length: {}, expires in: {}s",
                    parsed.token.access_token.len(),
                    parsed.token.expires_in
                );

                Ok(Session::new(
                    parsed.token.access_token,
                    parsed.token.expires_in,
                ))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                error!("Authentication rejected with status {}", status);
                Err(AuthError::BadCredentials {
                    status,
                    body: truncate_body(&body),
                })
            }
            other => {
                error!("Authentication failed with unexpected status: {}", other);
                Err(AuthError::Unexpected {
                    status: other,
                    body: truncate_body(&body),
                })
            }
        }
    }

    /// Replaces the current session wholesale
    ///
    /// Intended for bootstrap and tests; regular refresh goes through
    /// [`Auth::refresh`].
    pub async fn set_session(&self, session: Session) {
        let mut current = self.session.write().await;
        *current = Some(session);
    }

    /// Discards the current session
    pub async fn clear_session(&self) {
        info!("Clearing session");
        let mut session = self.session.write().await;
        *session = None;
    }
}
