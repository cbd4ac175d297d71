/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::application::models::transaction::{
    AttachTransactionCustomerRequest, AttachTransactionCustomerResponse, StartTransactionRequest,
    StartTransactionResponse, SubmitTransactionPaymentRequest, SubmitTransactionPaymentResponse,
};
use crate::config::CompanyConfig;
use serde::{Deserialize, Serialize};

/// Wire body of `POST /v1/api/transactions/start`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStartTransactionRequest {
    /// Transaction amount
    pub amount: f64,
    /// Number of installments
    pub installments: u32,
    /// Payment method
    pub payment_method: String,
    /// Merchant reference
    pub reference: String,
    /// Company UUID (tenant context)
    pub company_uuid: String,
}

impl RawStartTransactionRequest {
    /// Builds the wire request from the domain request, merging the
    /// configured company UUID into an empty field
    ///
    /// # Arguments
    /// * `domain` - Domain request
    /// * `company` - Tenant context from the client configuration
    pub fn from_domain(domain: &StartTransactionRequest, company: &CompanyConfig) -> Self {
        let company_uuid = if domain.company_uuid.is_empty() {
            company.company_uuid.clone()
        } else {
            domain.company_uuid.clone()
        };

        Self {
            amount: domain.amount,
            installments: domain.installments,
            payment_method: domain.payment_method.clone(),
            reference: domain.reference.clone(),
            company_uuid,
        }
    }

    /// Converts the wire request back into the domain request
    pub fn into_domain(self) -> StartTransactionRequest {
        StartTransactionRequest {
            amount: self.amount,
            installments: self.installments,
            payment_method: self.payment_method,
            reference: self.reference,
            company_uuid: self.company_uuid,
        }
    }
}

/// Wire response of `POST /v1/api/transactions/start`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStartTransactionResponse {
    /// UUID assigned to the transaction
    pub transaction_uuid: String,
    /// Current transaction status
    pub status: String,
}

impl RawStartTransactionResponse {
    /// Builds the wire response from the domain response
    pub fn from_domain(domain: &StartTransactionResponse) -> Self {
        Self {
            transaction_uuid: domain.transaction_uuid.clone(),
            status: domain.status.clone(),
        }
    }

    /// Converts the wire response into the domain response
    pub fn into_domain(self) -> StartTransactionResponse {
        StartTransactionResponse {
            transaction_uuid: self.transaction_uuid,
            status: self.status,
        }
    }
}

/// Wire body of `POST /v1/api/transactions/customer`
///
/// The gateway requires camelCase customer fields next to the snake_case
/// `transaction_uuid` in the same object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAttachTransactionCustomerRequest {
    /// UUID of the transaction the customer belongs to
    pub transaction_uuid: String,
    /// Customer first name
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Customer last name
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Customer document number
    pub document: String,
    /// Customer e-mail address
    pub email: String,
    /// Customer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RawAttachTransactionCustomerRequest {
    /// Builds the wire request from the domain request
    pub fn from_domain(domain: &AttachTransactionCustomerRequest) -> Self {
        Self {
            transaction_uuid: domain.transaction_uuid.clone(),
            first_name: domain.first_name.clone(),
            last_name: domain.last_name.clone(),
            document: domain.document.clone(),
            email: domain.email.clone(),
            phone: domain.phone.clone(),
        }
    }

    /// Converts the wire request back into the domain request
    pub fn into_domain(self) -> AttachTransactionCustomerRequest {
        AttachTransactionCustomerRequest {
            transaction_uuid: self.transaction_uuid,
            first_name: self.first_name,
            last_name: self.last_name,
            document: self.document,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Wire response of `POST /v1/api/transactions/customer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAttachTransactionCustomerResponse {
    /// UUID of the transaction
    pub transaction_uuid: String,
    /// Current transaction status
    pub status: String,
}

impl RawAttachTransactionCustomerResponse {
    /// Builds the wire response from the domain response
    pub fn from_domain(domain: &AttachTransactionCustomerResponse) -> Self {
        Self {
            transaction_uuid: domain.transaction_uuid.clone(),
            status: domain.status.clone(),
        }
    }

    /// Converts the wire response into the domain response
    pub fn into_domain(self) -> AttachTransactionCustomerResponse {
        AttachTransactionCustomerResponse {
            transaction_uuid: self.transaction_uuid,
            status: self.status,
        }
    }
}

/// Wire body of `POST /v1/api/transactions/payment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSubmitTransactionPaymentRequest {
    /// UUID of the transaction being paid
    pub transaction_uuid: String,
    /// Token obtained from card tokenization
    pub card_token: String,
    /// Number of installments
    pub installments: u32,
}

impl RawSubmitTransactionPaymentRequest {
    /// Builds the wire request from the domain request
    pub fn from_domain(domain: &SubmitTransactionPaymentRequest) -> Self {
        Self {
            transaction_uuid: domain.transaction_uuid.clone(),
            card_token: domain.card_token.clone(),
            installments: domain.installments,
        }
    }

    /// Converts the wire request back into the domain request
    pub fn into_domain(self) -> SubmitTransactionPaymentRequest {
        SubmitTransactionPaymentRequest {
            transaction_uuid: self.transaction_uuid,
            card_token: self.card_token,
            installments: self.installments,
        }
    }
}

/// Wire response of `POST /v1/api/transactions/payment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSubmitTransactionPaymentResponse {
    /// UUID of the transaction
    pub transaction_uuid: String,
    /// Current transaction status
    pub status: String,
    /// Authorization code returned by the acquirer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    /// Amount effectively charged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
}

impl RawSubmitTransactionPaymentResponse {
    /// Builds the wire response from the domain response
    pub fn from_domain(domain: &SubmitTransactionPaymentResponse) -> Self {
        Self {
            transaction_uuid: domain.transaction_uuid.clone(),
            status: domain.status.clone(),
            authorization_code: domain.authorization_code.clone(),
            paid_amount: domain.paid_amount,
        }
    }

    /// Converts the wire response into the domain response
    pub fn into_domain(self) -> SubmitTransactionPaymentResponse {
        SubmitTransactionPaymentResponse {
            transaction_uuid: self.transaction_uuid,
            status: self.status,
            authorization_code: self.authorization_code,
            paid_amount: self.paid_amount,
        }
    }
}
