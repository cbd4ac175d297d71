/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::application::models::pix::{GeneratePixQrCodeRequest, GeneratePixQrCodeResponse};
use crate::config::CompanyConfig;
use serde::{Deserialize, Serialize};

/// Wire body of `POST /v1/api/pix/dynamic-qrcode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGeneratePixQrCodeRequest {
    /// Charge amount
    pub amount: f64,
    /// Free-form description shown to the payer
    pub description: String,
    /// Merchant reference
    pub reference: String,
    /// Company UUID (tenant context)
    pub company_uuid: String,
    /// User UUID (tenant context)
    pub user_uuid: String,
    /// Expiration date of the QR code
    pub expiration_date: String,
    /// Optional payment webhook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl RawGeneratePixQrCodeRequest {
    /// Builds the wire request from the domain request, merging the
    /// configured tenant context into empty fields
    ///
    /// # Arguments
    /// * `domain` - Domain request
    /// * `company` - Tenant context from the client configuration
    pub fn from_domain(domain: &GeneratePixQrCodeRequest, company: &CompanyConfig) -> Self {
        let company_uuid = if domain.company_uuid.is_empty() {
            company.company_uuid.clone()
        } else {
            domain.company_uuid.clone()
        };
        let user_uuid = if domain.user_uuid.is_empty() {
            company.user_uuid.clone()
        } else {
            domain.user_uuid.clone()
        };

        Self {
            amount: domain.amount,
            description: domain.description.clone(),
            reference: domain.reference.clone(),
            company_uuid,
            user_uuid,
            expiration_date: domain.expiration_date.clone(),
            webhook_url: domain.webhook_url.clone(),
        }
    }

    /// Converts the wire request back into the domain request
    pub fn into_domain(self) -> GeneratePixQrCodeRequest {
        GeneratePixQrCodeRequest {
            amount: self.amount,
            description: self.description,
            reference: self.reference,
            company_uuid: self.company_uuid,
            user_uuid: self.user_uuid,
            expiration_date: self.expiration_date,
            webhook_url: self.webhook_url,
        }
    }
}

/// Wire response of `POST /v1/api/pix/dynamic-qrcode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGeneratePixQrCodeResponse {
    /// UUID of the transaction backing the charge
    pub transaction_uuid: String,
    /// EMV payload of the QR code
    pub qr_code: String,
    /// QR code image as base64
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
    /// Expiration date of the QR code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl RawGeneratePixQrCodeResponse {
    /// Builds the wire response from the domain response
    pub fn from_domain(domain: &GeneratePixQrCodeResponse) -> Self {
        Self {
            transaction_uuid: domain.transaction_uuid.clone(),
            qr_code: domain.qr_code.clone(),
            qr_code_base64: domain.qr_code_base64.clone(),
            amount: domain.amount,
            tax_amount: domain.tax_amount,
            net_amount: domain.net_amount,
            expiration_date: domain.expiration_date.clone(),
        }
    }

    /// Converts the wire response into the domain response
    pub fn into_domain(self) -> GeneratePixQrCodeResponse {
        GeneratePixQrCodeResponse {
            transaction_uuid: self.transaction_uuid,
            qr_code: self.qr_code,
            qr_code_base64: self.qr_code_base64,
            amount: self.amount,
            tax_amount: self.tax_amount,
            net_amount: self.net_amount,
            expiration_date: self.expiration_date,
        }
    }
}
