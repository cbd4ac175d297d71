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
use crate::application::services::payment_service::PaymentServiceImpl;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::HttpClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Simplified client for the payment gateway API
///
/// Wires the payment service to the authenticated HTTP transport.
/// Authentication happens lazily: the first business call performs the
/// authenticate round-trip before the business request is sent.
pub struct Client {
    http_client: Arc<HttpClient>,
    service: PaymentServiceImpl<HttpClient>,
}

impl Client {
    /// Creates a new client from a configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone())?);
        let service = PaymentServiceImpl::new(config, http_client.clone());
        Ok(Self {
            http_client,
            service,
        })
    }

    /// Creates a new client from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Gets the underlying HTTP transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl PaymentService for Client {
    async fn generate_pix_qr_code(
        &self,
        request: &GeneratePixQrCodeRequest,
    ) -> Result<GeneratePixQrCodeResponse, AppError> {
        self.service.generate_pix_qr_code(request).await
    }

    async fn start_transaction(
        &self,
        request: &StartTransactionRequest,
    ) -> Result<StartTransactionResponse, AppError> {
        self.service.start_transaction(request).await
    }

    async fn attach_transaction_customer(
        &self,
        request: &AttachTransactionCustomerRequest,
    ) -> Result<AttachTransactionCustomerResponse, AppError> {
        self.service.attach_transaction_customer(request).await
    }

    async fn tokenize_card(
        &self,
        request: &TokenizeCardRequest,
    ) -> Result<TokenizeCardResponse, AppError> {
        self.service.tokenize_card(request).await
    }

    async fn submit_transaction_payment(
        &self,
        request: &SubmitTransactionPaymentRequest,
    ) -> Result<SubmitTransactionPaymentResponse, AppError> {
        self.service.submit_transaction_payment(request).await
    }
}
