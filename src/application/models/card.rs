/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Request to tokenize a card for a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeCardRequest {
    /// Card number (PAN)
    pub card_number: String,
    /// Cardholder name as printed on the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    /// Expiration month (two digits)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    /// Expiration year (four digits)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    /// Card security code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    /// UUID of the transaction the token is bound to
    pub transaction_uuid: String,
}

/// Tokenized card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeCardResponse {
    /// Opaque token replacing the card data
    pub token: String,
    /// Detected card brand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<String>,
    /// UUID of the transaction the token is bound to
    pub transaction_uuid: String,
}
