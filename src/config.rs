/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the payment gateway API
///
/// The key pair is sent as the `public` and `private` headers of the
/// authenticate call, never in a request body.
pub struct Credentials {
    /// Public API key issued by the gateway
    pub public_key: String,
    /// Private API key issued by the gateway
    pub private_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Tenant context merged into requests that require it
pub struct CompanyConfig {
    /// UUID of the company on whose behalf transactions are created
    pub company_uuid: String,
    /// UUID of the gateway user associated with the company
    pub user_uuid: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the gateway REST API
pub struct RestApiConfig {
    /// Base URL for the gateway REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the payment gateway client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Tenant context
    pub company: CompanyConfig,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Loads the configuration from environment variables (and `.env` if present)
    ///
    /// Required variables: `GATEWAY_BASE_URL`, `GATEWAY_PUBLIC_KEY`,
    /// `GATEWAY_PRIVATE_KEY`, `GATEWAY_COMPANY_UUID`, `GATEWAY_USER_UUID`.
    /// Optional: `GATEWAY_TIMEOUT_SECS` (default 10). There are no embedded
    /// fallback values for credentials or URLs.
    ///
    /// # Returns
    /// * `Ok(Config)` - Fully populated configuration
    /// * `Err(AppError)` - If any required variable is missing
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_required("GATEWAY_BASE_URL")?;
        let public_key = get_env_required("GATEWAY_PUBLIC_KEY")?;
        let private_key = get_env_required("GATEWAY_PRIVATE_KEY")?;
        let company_uuid = get_env_required("GATEWAY_COMPANY_UUID")?;
        let user_uuid = get_env_required("GATEWAY_USER_UUID")?;
        let timeout = get_env_or_default("GATEWAY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            credentials: Credentials {
                public_key,
                private_key,
            },
            company: CompanyConfig {
                company_uuid,
                user_uuid,
            },
            rest_api: RestApiConfig { base_url, timeout },
        })
    }

    /// Builds a configuration from explicit values, mainly for tests
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the gateway
    /// * `public_key` - Public API key
    /// * `private_key` - Private API key
    /// * `company_uuid` - Company UUID
    /// * `user_uuid` - User UUID
    pub fn with_values(
        base_url: &str,
        public_key: &str,
        private_key: &str,
        company_uuid: &str,
        user_uuid: &str,
    ) -> Self {
        Self {
            credentials: Credentials {
                public_key: public_key.to_string(),
                private_key: private_key.to_string(),
            },
            company: CompanyConfig {
                company_uuid: company_uuid.to_string(),
                user_uuid: user_uuid.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}
