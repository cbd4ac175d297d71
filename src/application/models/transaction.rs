/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Request to start a card transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTransactionRequest {
    /// Transaction amount
    pub amount: f64,
    /// Number of installments
    pub installments: u32,
    /// Payment method accepted for this transaction (e.g. `credit_card`)
    pub payment_method: String,
    /// Merchant reference for reconciliation
    pub reference: String,
    /// UUID of the company creating the transaction; filled from
    /// configuration when empty
    pub company_uuid: String,
}

/// Started transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTransactionResponse {
    /// UUID assigned to the transaction
    pub transaction_uuid: String,
    /// Current transaction status
    pub status: String,
}

/// Request to attach customer data to a started transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachTransactionCustomerRequest {
    /// UUID of the transaction the customer belongs to
    pub transaction_uuid: String,
    /// Customer first name
    pub first_name: String,
    /// Customer last name
    pub last_name: String,
    /// Customer document number (CPF/CNPJ)
    pub document: String,
    /// Customer e-mail address
    pub email: String,
    /// Customer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Result of attaching a customer to a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachTransactionCustomerResponse {
    /// UUID of the transaction
    pub transaction_uuid: String,
    /// Current transaction status
    pub status: String,
}

/// Request to pay a transaction with a previously tokenized card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTransactionPaymentRequest {
    /// UUID of the transaction being paid
    pub transaction_uuid: String,
    /// Token obtained from card tokenization
    pub card_token: String,
    /// Number of installments
    pub installments: u32,
}

/// Result of submitting a transaction payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTransactionPaymentResponse {
    /// UUID of the transaction
    pub transaction_uuid: String,
    /// Current transaction status
    pub status: String,
    /// Authorization code returned by the acquirer, when approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    /// Amount effectively charged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
}
