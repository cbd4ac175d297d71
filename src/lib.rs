/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Payment Gateway Client
//!
//! This crate provides an async client for the payment gateway REST API.
//! It handles all authentication complexity internally, including:
//! - Bearer-token session management with lazy login
//! - Automatic re-authentication when the gateway returns 401
//! - Single-flight token refresh across concurrent callers
//!
//! Five payment operations are exposed through the [`PaymentService`]
//! trait: PIX dynamic QR-code generation, transaction start, transaction
//! customer attachment, card tokenization and transaction payment.
//!
//! ## Usage
//!
//! ```no_run
//! use paygate_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::from_env()?;
//!     let client = Client::new(config)?;
//!
//!     let request = GeneratePixQrCodeRequest {
//!         amount: 100.50,
//!         description: "Seguro Viagem".to_string(),
//!         reference: "ORD-1".to_string(),
//!         company_uuid: String::new(),
//!         user_uuid: String::new(),
//!         expiration_date: "2025-01-01".to_string(),
//!         webhook_url: None,
//!     };
//!     let response = client.generate_pix_qr_code(&request).await?;
//!     println!("transaction: {}", response.transaction_uuid);
//!     Ok(())
//! }
//! ```
//!
//! [`PaymentService`]: crate::application::interfaces::payment::PaymentService

/// Service layer: domain models, service traits and implementations
pub mod application;
/// Configuration for the gateway client
pub mod config;
/// Library constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Commonly used types, re-exported
pub mod prelude;
/// Wire-format models and schema mappers
pub mod presentation;
/// Authentication and session management
pub mod session;
/// HTTP transport with automatic re-authentication
pub mod transport;
/// Utility functions (environment, logging)
pub mod utils;

/// Library version, taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version as a string
pub fn version() -> &'static str {
    VERSION
}
