/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::application::models::card::{TokenizeCardRequest, TokenizeCardResponse};
use serde::{Deserialize, Serialize};

/// Wire body of `POST /v1/api/cards/tokenize`
///
/// The gateway requires camelCase card fields next to the snake_case
/// `transaction_uuid` in the same object. The mixed casing is the external
/// contract and must not be normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTokenizeCardRequest {
    /// Card number (PAN)
    #[serde(rename = "cardNumber")]
    pub card_number: String,
    /// Cardholder name
    #[serde(rename = "holderName", skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    /// Expiration month
    #[serde(rename = "expirationMonth", skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    /// Expiration year
    #[serde(rename = "expirationYear", skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    /// Card security code
    #[serde(rename = "securityCode", skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    /// UUID of the transaction the token is bound to
    pub transaction_uuid: String,
}

impl RawTokenizeCardRequest {
    /// Builds the wire request from the domain request
    pub fn from_domain(domain: &TokenizeCardRequest) -> Self {
        Self {
            card_number: domain.card_number.clone(),
            holder_name: domain.holder_name.clone(),
            expiration_month: domain.expiration_month.clone(),
            expiration_year: domain.expiration_year.clone(),
            security_code: domain.security_code.clone(),
            transaction_uuid: domain.transaction_uuid.clone(),
        }
    }

    /// Converts the wire request back into the domain request
    pub fn into_domain(self) -> TokenizeCardRequest {
        TokenizeCardRequest {
            card_number: self.card_number,
            holder_name: self.holder_name,
            expiration_month: self.expiration_month,
            expiration_year: self.expiration_year,
            security_code: self.security_code,
            transaction_uuid: self.transaction_uuid,
        }
    }
}

/// Wire response of `POST /v1/api/cards/tokenize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTokenizeCardResponse {
    /// Opaque token replacing the card data
    pub token: String,
    /// Detected card brand
    #[serde(rename = "cardBrand", skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<String>,
    /// UUID of the transaction the token is bound to
    pub transaction_uuid: String,
}

impl RawTokenizeCardResponse {
    /// Builds the wire response from the domain response
    pub fn from_domain(domain: &TokenizeCardResponse) -> Self {
        Self {
            token: domain.token.clone(),
            card_brand: domain.card_brand.clone(),
            transaction_uuid: domain.transaction_uuid.clone(),
        }
    }

    /// Converts the wire response into the domain response
    pub fn into_domain(self) -> TokenizeCardResponse {
        TokenizeCardResponse {
            token: self.token,
            card_brand: self.card_brand,
            transaction_uuid: self.transaction_uuid,
        }
    }
}
