/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::application::models::card::{TokenizeCardRequest, TokenizeCardResponse};
use crate::application::models::pix::{GeneratePixQrCodeRequest, GeneratePixQrCodeResponse};
use crate::application::models::transaction::{
    AttachTransactionCustomerRequest, AttachTransactionCustomerResponse, StartTransactionRequest,
    StartTransactionResponse, SubmitTransactionPaymentRequest, SubmitTransactionPaymentResponse,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Payment operations exposed by the gateway client
///
/// Every operation validates required domain fields before any network call,
/// maps domain to wire format, sends through the authenticated transport and
/// maps the response back. No operation retries beyond the single
/// 401-refresh-retry cycle the transport performs.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Generates a PIX dynamic QR code for a charge
    async fn generate_pix_qr_code(
        &self,
        request: &GeneratePixQrCodeRequest,
    ) -> Result<GeneratePixQrCodeResponse, AppError>;

    /// Starts a card transaction
    async fn start_transaction(
        &self,
        request: &StartTransactionRequest,
    ) -> Result<StartTransactionResponse, AppError>;

    /// Attaches customer data to a started transaction
    async fn attach_transaction_customer(
        &self,
        request: &AttachTransactionCustomerRequest,
    ) -> Result<AttachTransactionCustomerResponse, AppError>;

    /// Tokenizes a card for a transaction
    async fn tokenize_card(
        &self,
        request: &TokenizeCardRequest,
    ) -> Result<TokenizeCardResponse, AppError>;

    /// Pays a transaction with a previously tokenized card
    async fn submit_transaction_payment(
        &self,
        request: &SubmitTransactionPaymentRequest,
    ) -> Result<SubmitTransactionPaymentResponse, AppError>;
}
