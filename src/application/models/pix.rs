/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Request to generate a PIX dynamic QR code
///
/// `company_uuid` and `user_uuid` may be left empty; the configured tenant
/// context is merged in when the wire request is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePixQrCodeRequest {
    /// Charge amount
    pub amount: f64,
    /// Free-form description shown to the payer
    pub description: String,
    /// Merchant reference for reconciliation
    pub reference: String,
    /// UUID of the company creating the charge
    pub company_uuid: String,
    /// UUID of the gateway user creating the charge
    pub user_uuid: String,
    /// Date the QR code stops accepting payment (YYYY-MM-DD)
    pub expiration_date: String,
    /// Optional webhook notified when the charge is paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Generated PIX dynamic QR code with the computed tax breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePixQrCodeResponse {
    /// UUID of the transaction backing the charge
    pub transaction_uuid: String,
    /// EMV payload of the QR code (copy-and-paste string)
    pub qr_code: String,
    /// QR code image encoded as base64, when the gateway returns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_base64: Option<String>,
    /// Charge amount
    pub amount: f64,
    /// Tax withheld by the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    /// Amount credited after taxes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<f64>,
    /// Date the QR code stops accepting payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}
