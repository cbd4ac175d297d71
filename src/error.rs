/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Error types for the payment gateway client.
//!
//! The taxonomy mirrors the failure surface of the gateway integration:
//! - [`AppError::Validation`]: malformed domain input, caught before any
//!   network call
//! - [`AppError::Auth`]: the authenticate call failed, or a request still
//!   returned 401 after one refresh-and-retry cycle
//! - [`AppError::Gateway`]: any other 4xx/5xx from the gateway
//! - [`AppError::Transport`]: network, DNS or timeout failures
//!
//! Credentials and bearer tokens never appear in error values or in the
//! messages they render.

use crate::constants::MAX_LOGGED_BODY_BYTES;
use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Domain input failed required-field validation; no network call was made
    Validation {
        /// Operation that rejected the input
        operation: &'static str,
        /// Human-readable description of the missing or invalid field
        message: String,
    },
    /// Authentication failure, see [`AuthError`]
    Auth(AuthError),
    /// The gateway answered with a non-success status other than 401
    Gateway {
        /// Operation that was being performed
        operation: &'static str,
        /// HTTP status returned by the gateway
        status: StatusCode,
        /// Truncated response body for diagnostics
        body: String,
    },
    /// The request never produced an HTTP response (network, DNS, timeout)
    Transport {
        /// Operation that was being performed
        operation: &'static str,
        /// Underlying transport failure description
        message: String,
    },
    /// A successful response body could not be decoded into the expected shape
    Deserialization {
        /// Operation that was being performed
        operation: &'static str,
        /// Decoder failure description
        message: String,
    },
    /// JSON error outside of a gateway call
    Json(serde_json::Error),
    /// Configuration could not be assembled (missing or invalid values)
    Config(String),
}

/// Errors produced while obtaining or refreshing the bearer token
#[derive(Debug)]
pub enum AuthError {
    /// The gateway rejected the public/private key pair
    BadCredentials {
        /// HTTP status returned by the authenticate endpoint
        status: StatusCode,
        /// Truncated response body for diagnostics
        body: String,
    },
    /// The authenticate endpoint answered with an unexpected status
    Unexpected {
        /// HTTP status returned by the authenticate endpoint
        status: StatusCode,
        /// Truncated response body for diagnostics
        body: String,
    },
    /// The authenticate response could not be parsed into a token payload
    MalformedResponse(String),
    /// The authenticate call never produced an HTTP response
    Transport(String),
    /// A refresh failed recently; callers must wait out the cooldown
    RefreshCoolingDown,
    /// A request returned 401 again after one refresh-and-retry cycle
    StillUnauthorized {
        /// Operation that was being retried
        operation: &'static str,
        /// Truncated response body for diagnostics
        body: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation { operation, message } => {
                write!(f, "invalid input for {operation}: {message}")
            }
            AppError::Auth(e) => write!(f, "authentication error: {e}"),
            AppError::Gateway {
                operation,
                status,
                body,
            } => {
                write!(f, "gateway error in {operation} (status {status}): {body}")
            }
            AppError::Transport { operation, message } => {
                write!(f, "transport error in {operation}: {message}")
            }
            AppError::Deserialization { operation, message } => {
                write!(f, "deserialization error in {operation}: {message}")
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Config(message) => write!(f, "configuration error: {message}"),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::BadCredentials { status, body } => {
                write!(f, "bad credentials (status {status}): {body}")
            }
            AuthError::Unexpected { status, body } => {
                write!(f, "unexpected authenticate status {status}: {body}")
            }
            AuthError::MalformedResponse(message) => {
                write!(f, "malformed authenticate response: {message}")
            }
            AuthError::Transport(message) => {
                write!(f, "transport failure during authentication: {message}")
            }
            AuthError::RefreshCoolingDown => {
                write!(f, "token refresh is cooling down after a recent failure")
            }
            AuthError::StillUnauthorized { operation, body } => {
                write!(f, "still unauthorized after token refresh in {operation}: {body}")
            }
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Auth(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl Error for AuthError {}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

/// Truncates a response body for inclusion in logs and errors
///
/// # Arguments
/// * `body` - The raw response body
///
/// # Returns
/// The body unchanged when short enough, otherwise the leading bytes followed
/// by an ellipsis marker
pub fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_LOGGED_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes)", &body[..end], body.len())
}
