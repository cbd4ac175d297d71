/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! HTTP transport for the payment gateway API.
//!
//! Every business call moves through an explicit, bounded state machine:
//!
//! ```text
//! ISSUED -> DONE                                      2xx
//! ISSUED -> REAUTHENTICATING -> REISSUED -> DONE      401, refresh ok, retry 2xx
//! ISSUED -> REAUTHENTICATING -> REISSUED -> FAILED    retry also 401
//! ISSUED -> FAILED                                    other error, or refresh fails
//! ```
//!
//! The retry after a refresh happens exactly once; a second 401 surfaces as
//! an authentication error. Non-401 failures are never retried here.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{AppError, AuthError, truncate_body};
use crate::session::auth::Auth;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Abstraction over the gateway transport, allowing services to be tested
/// against an in-memory implementation
#[async_trait]
pub trait GatewayHttpClient: Send + Sync {
    /// Sends an authenticated POST and decodes the JSON response
    ///
    /// # Arguments
    /// * `operation` - Name of the business operation, carried into errors and logs
    /// * `path` - Endpoint path relative to the configured base URL
    /// * `body` - Request body, serialized to JSON
    async fn post<B, T>(&self, operation: &'static str, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

/// HTTP client for the payment gateway with automatic re-authentication
///
/// Attaches the current bearer token to every request. When the gateway
/// answers 401 the token is refreshed through [`Auth`] (single-flight across
/// concurrent callers) and the original request is rebuilt and resent exactly
/// once with the new `Authorization` value.
pub struct HttpClient {
    auth: Arc<Auth>,
    http: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client; authentication happens lazily on first use
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        let auth = Arc::new(Auth::new(config.clone()));

        Ok(Self { auth, http, config })
    }

    /// Gets the authentication manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends one attempt and returns its status and body
    ///
    /// Emits one structured log record per attempt. The Authorization value
    /// is never logged.
    async fn attempt<B: Serialize + Sync>(
        &self,
        operation: &'static str,
        phase: &'static str,
        path: &str,
        url: &str,
        body: &B,
        token: &str,
    ) -> Result<(StatusCode, String), AppError> {
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(operation, phase, path, "request failed to send: {}", e);
                AppError::Transport {
                    operation,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(operation, phase, path, "failed to read response body: {}", e);
            AppError::Transport {
                operation,
                message: e.to_string(),
            }
        })?;

        debug!(
            operation,
            phase,
            method = "POST",
            path,
            status = status.as_u16(),
            body = %truncate_body(&text),
            "gateway attempt"
        );

        Ok((status, text))
    }

    /// Decodes a terminal response into the expected type or a gateway error
    fn decode<T: DeserializeOwned>(
        operation: &'static str,
        status: StatusCode,
        body: &str,
    ) -> Result<T, AppError> {
        if !status.is_success() {
            return Err(AppError::Gateway {
                operation,
                status,
                body: truncate_body(body),
            });
        }
        serde_json::from_str(body).map_err(|e| AppError::Deserialization {
            operation,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl GatewayHttpClient for HttpClient {
    async fn post<B, T>(&self, operation: &'static str, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.url(path);
        let token = self.auth.bearer_token().await?;

        // ISSUED
        let (status, text) = self
            .attempt(operation, "issued", path, &url, body, &token)
            .await?;

        if status != StatusCode::UNAUTHORIZED {
            return Self::decode(operation, status, &text);
        }

        // REAUTHENTICATING: collapse concurrent refreshes into one call
        warn!(operation, path, "received 401, refreshing token and retrying once");
        let fresh = self.auth.refresh(Some(&token)).await?;

        // REISSUED
        let (retry_status, retry_text) = self
            .attempt(operation, "reissued", path, &url, body, &fresh)
            .await?;

        if retry_status == StatusCode::UNAUTHORIZED {
            error!(operation, path, "still unauthorized after token refresh");
            return Err(AppError::Auth(AuthError::StillUnauthorized {
                operation,
                body: truncate_body(&retry_text),
            }));
        }

        Self::decode(operation, retry_status, &retry_text)
    }
}
