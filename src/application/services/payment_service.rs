/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::application::interfaces::payment::PaymentService;
use crate::application::models::card::{TokenizeCardRequest, TokenizeCardResponse};
use crate::application::models::pix::{GeneratePixQrCodeRequest, GeneratePixQrCodeResponse};
use crate::application::models::transaction::{
    AttachTransactionCustomerRequest, AttachTransactionCustomerResponse, StartTransactionRequest,
    StartTransactionResponse, SubmitTransactionPaymentRequest, SubmitTransactionPaymentResponse,
};
use crate::config::Config;
use crate::constants::{
    CARDS_TOKENIZE_PATH, PIX_DYNAMIC_QRCODE_PATH, TRANSACTIONS_CUSTOMER_PATH,
    TRANSACTIONS_PAYMENT_PATH, TRANSACTIONS_START_PATH,
};
use crate::error::AppError;
use crate::presentation::card::{RawTokenizeCardRequest, RawTokenizeCardResponse};
use crate::presentation::pix::{RawGeneratePixQrCodeRequest, RawGeneratePixQrCodeResponse};
use crate::presentation::transaction::{
    RawAttachTransactionCustomerRequest, RawAttachTransactionCustomerResponse,
    RawStartTransactionRequest, RawStartTransactionResponse, RawSubmitTransactionPaymentRequest,
    RawSubmitTransactionPaymentResponse,
};
use crate::transport::http_client::GatewayHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const OP_GENERATE_PIX_QR_CODE: &str = "generate_pix_qr_code";
const OP_START_TRANSACTION: &str = "start_transaction";
const OP_ATTACH_TRANSACTION_CUSTOMER: &str = "attach_transaction_customer";
const OP_TOKENIZE_CARD: &str = "tokenize_card";
const OP_SUBMIT_TRANSACTION_PAYMENT: &str = "submit_transaction_payment";

/// Implementation of the payment service
pub struct PaymentServiceImpl<T: GatewayHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: GatewayHttpClient> PaymentServiceImpl<T> {
    /// Creates a new instance of the payment service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

fn require(
    operation: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation {
            operation,
            message: format!("{field} is required"),
        });
    }
    Ok(())
}

fn require_positive_amount(operation: &'static str, amount: f64) -> Result<(), AppError> {
    if !(amount > 0.0) {
        return Err(AppError::Validation {
            operation,
            message: format!("amount must be positive, got {amount}"),
        });
    }
    Ok(())
}

fn require_installments(operation: &'static str, installments: u32) -> Result<(), AppError> {
    if installments == 0 {
        return Err(AppError::Validation {
            operation,
            message: "installments must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl<T: GatewayHttpClient + 'static> PaymentService for PaymentServiceImpl<T> {
    async fn generate_pix_qr_code(
        &self,
        request: &GeneratePixQrCodeRequest,
    ) -> Result<GeneratePixQrCodeResponse, AppError> {
        require_positive_amount(OP_GENERATE_PIX_QR_CODE, request.amount)?;
        require(OP_GENERATE_PIX_QR_CODE, "description", &request.description)?;
        require(OP_GENERATE_PIX_QR_CODE, "reference", &request.reference)?;
        require(
            OP_GENERATE_PIX_QR_CODE,
            "expiration_date",
            &request.expiration_date,
        )?;

        let raw = RawGeneratePixQrCodeRequest::from_domain(request, &self.config.company);

        info!("Generating PIX dynamic QR code for reference: {}", request.reference);
        let raw_response: RawGeneratePixQrCodeResponse = self
            .client
            .post(OP_GENERATE_PIX_QR_CODE, PIX_DYNAMIC_QRCODE_PATH, &raw)
            .await?;
        debug!(
            "PIX QR code generated, transaction: {}",
            raw_response.transaction_uuid
        );

        Ok(raw_response.into_domain())
    }

    async fn start_transaction(
        &self,
        request: &StartTransactionRequest,
    ) -> Result<StartTransactionResponse, AppError> {
        require_positive_amount(OP_START_TRANSACTION, request.amount)?;
        require_installments(OP_START_TRANSACTION, request.installments)?;
        require(OP_START_TRANSACTION, "payment_method", &request.payment_method)?;
        require(OP_START_TRANSACTION, "reference", &request.reference)?;

        let raw = RawStartTransactionRequest::from_domain(request, &self.config.company);

        info!("Starting transaction for reference: {}", request.reference);
        let raw_response: RawStartTransactionResponse = self
            .client
            .post(OP_START_TRANSACTION, TRANSACTIONS_START_PATH, &raw)
            .await?;
        debug!(
            "Transaction started: {} ({})",
            raw_response.transaction_uuid, raw_response.status
        );

        Ok(raw_response.into_domain())
    }

    async fn attach_transaction_customer(
        &self,
        request: &AttachTransactionCustomerRequest,
    ) -> Result<AttachTransactionCustomerResponse, AppError> {
        require(
            OP_ATTACH_TRANSACTION_CUSTOMER,
            "transaction_uuid",
            &request.transaction_uuid,
        )?;
        require(OP_ATTACH_TRANSACTION_CUSTOMER, "first_name", &request.first_name)?;
        require(OP_ATTACH_TRANSACTION_CUSTOMER, "last_name", &request.last_name)?;
        require(OP_ATTACH_TRANSACTION_CUSTOMER, "document", &request.document)?;
        require(OP_ATTACH_TRANSACTION_CUSTOMER, "email", &request.email)?;

        let raw = RawAttachTransactionCustomerRequest::from_domain(request);

        info!(
            "Attaching customer to transaction: {}",
            request.transaction_uuid
        );
        let raw_response: RawAttachTransactionCustomerResponse = self
            .client
            .post(
                OP_ATTACH_TRANSACTION_CUSTOMER,
                TRANSACTIONS_CUSTOMER_PATH,
                &raw,
            )
            .await?;

        Ok(raw_response.into_domain())
    }

    async fn tokenize_card(
        &self,
        request: &TokenizeCardRequest,
    ) -> Result<TokenizeCardResponse, AppError> {
        require(OP_TOKENIZE_CARD, "card_number", &request.card_number)?;
        require(OP_TOKENIZE_CARD, "transaction_uuid", &request.transaction_uuid)?;

        let raw = RawTokenizeCardRequest::from_domain(request);

        // Card data is sensitive; log only the transaction it belongs to.
        info!("Tokenizing card for transaction: {}", request.transaction_uuid);
        let raw_response: RawTokenizeCardResponse = self
            .client
            .post(OP_TOKENIZE_CARD, CARDS_TOKENIZE_PATH, &raw)
            .await?;

        Ok(raw_response.into_domain())
    }

    async fn submit_transaction_payment(
        &self,
        request: &SubmitTransactionPaymentRequest,
    ) -> Result<SubmitTransactionPaymentResponse, AppError> {
        require(
            OP_SUBMIT_TRANSACTION_PAYMENT,
            "transaction_uuid",
            &request.transaction_uuid,
        )?;
        require(OP_SUBMIT_TRANSACTION_PAYMENT, "card_token", &request.card_token)?;
        require_installments(OP_SUBMIT_TRANSACTION_PAYMENT, request.installments)?;

        let raw = RawSubmitTransactionPaymentRequest::from_domain(request);

        info!("Submitting payment for transaction: {}", request.transaction_uuid);
        let raw_response: RawSubmitTransactionPaymentResponse = self
            .client
            .post(
                OP_SUBMIT_TRANSACTION_PAYMENT,
                TRANSACTIONS_PAYMENT_PATH,
                &raw,
            )
            .await?;
        debug!(
            "Payment submitted: {} ({})",
            raw_response.transaction_uuid, raw_response.status
        );

        Ok(raw_response.into_domain())
    }
}
