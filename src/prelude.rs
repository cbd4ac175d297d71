/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Payment Gateway Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude, you get
//! access to all the essential components needed for most gateway
//! interactions.
//!
//! ## Usage
//!
//! ```rust
//! use paygate_client::prelude::*;
//!
//! // Now you have access to all the commonly used types and traits
//! let config = Config::with_values("https://gateway.example.com", "pk", "sk", "c1", "u1");
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the payment gateway client
pub use crate::config::{CompanyConfig, Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error types for the library
pub use crate::error::{AppError, AuthError};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication manager and session state
pub use crate::session::auth::{Auth, Session};

// ============================================================================
// CORE SERVICES
// ============================================================================

/// Payment service trait
pub use crate::application::interfaces::payment::PaymentService;

/// Payment service implementation
pub use crate::application::services::payment_service::PaymentServiceImpl;

/// High level client
pub use crate::application::client::Client;

/// HTTP transport
pub use crate::transport::http_client::{GatewayHttpClient, HttpClient};

// ============================================================================
// DOMAIN MODELS
// ============================================================================

pub use crate::application::models::card::{TokenizeCardRequest, TokenizeCardResponse};
pub use crate::application::models::pix::{GeneratePixQrCodeRequest, GeneratePixQrCodeResponse};
pub use crate::application::models::transaction::{
    AttachTransactionCustomerRequest, AttachTransactionCustomerResponse, StartTransactionRequest,
    StartTransactionResponse, SubmitTransactionPaymentRequest, SubmitTransactionPaymentResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// COMMON EXTERNAL RE-EXPORTS
// ============================================================================

pub use serde::{Deserialize, Serialize};
