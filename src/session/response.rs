/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Response from the authenticate endpoint
///
/// The gateway nests the token payload under a `token` key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthenticateResponse {
    /// Nested token payload
    pub token: TokenPayload,
}

/// Bearer token payload of an authenticate response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenPayload {
    /// Opaque bearer token authorizing gateway calls
    pub access_token: String,
    /// Lifetime of the token in seconds
    pub expires_in: u64,
}
