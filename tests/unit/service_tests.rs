use async_trait::async_trait;
use paygate_client::config::Config;
use paygate_client::error::AppError;
use paygate_client::prelude::*;
use paygate_client::transport::http_client::GatewayHttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory transport that records every call and answers with a canned body
struct RecordingClient {
    calls: AtomicUsize,
    last_path: Mutex<Option<String>>,
    last_body: Mutex<Option<Value>>,
    response: Value,
}

impl RecordingClient {
    fn new(response: Value) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_path: Mutex::new(None),
            last_body: Mutex::new(None),
            response,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

#[async_trait]
impl GatewayHttpClient for RecordingClient {
    async fn post<B, T>(&self, _operation: &'static str, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_path.lock().unwrap() = Some(path.to_string());
        *self.last_body.lock().unwrap() = Some(serde_json::to_value(body)?);
        serde_json::from_value(self.response.clone()).map_err(AppError::Json)
    }
}

fn make_service(response: Value) -> (PaymentServiceImpl<RecordingClient>, Arc<RecordingClient>) {
    let config = Arc::new(Config::with_values(
        "https://gateway.example.com",
        "pk_test",
        "sk_test",
        "cfg-company",
        "cfg-user",
    ));
    let client = Arc::new(RecordingClient::new(response));
    (PaymentServiceImpl::new(config, client.clone()), client)
}

fn pix_request() -> GeneratePixQrCodeRequest {
    GeneratePixQrCodeRequest {
        amount: 100.50,
        description: "Seguro Viagem".to_string(),
        reference: "ORD-1".to_string(),
        company_uuid: String::new(),
        user_uuid: String::new(),
        expiration_date: "2025-01-01".to_string(),
        webhook_url: None,
    }
}

#[tokio::test]
async fn pix_validation_rejects_non_positive_amount_without_network() {
    let (service, client) = make_service(json!({}));

    let mut request = pix_request();
    request.amount = 0.0;

    let result = service.generate_pix_qr_code(&request).await;
    match result {
        Err(AppError::Validation { operation, message }) => {
            assert_eq!(operation, "generate_pix_qr_code");
            assert!(message.contains("amount"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn pix_validation_rejects_blank_reference_without_network() {
    let (service, client) = make_service(json!({}));

    let mut request = pix_request();
    request.reference = "   ".to_string();

    let result = service.generate_pix_qr_code(&request).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn pix_merges_company_config_and_maps_response() {
    let (service, client) = make_service(json!({
        "transaction_uuid": "t9",
        "qr_code": "payload",
        "amount": 100.50,
        "tax_amount": 1.20,
        "net_amount": 99.30
    }));

    let response = service.generate_pix_qr_code(&pix_request()).await.unwrap();
    assert_eq!(response.transaction_uuid, "t9");
    assert_eq!(response.net_amount, Some(99.30));
    assert_eq!(client.call_count(), 1);

    let body = client.last_body().unwrap();
    assert_eq!(body["company_uuid"], "cfg-company");
    assert_eq!(body["user_uuid"], "cfg-user");
    assert_eq!(body["amount"], 100.50);
}

#[tokio::test]
async fn start_transaction_validates_installments() {
    let (service, client) = make_service(json!({}));

    let request = StartTransactionRequest {
        amount: 250.0,
        installments: 0,
        payment_method: "credit_card".to_string(),
        reference: "ORD-2".to_string(),
        company_uuid: String::new(),
    };

    let result = service.start_transaction(&request).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn start_transaction_sends_merged_company_uuid() {
    let (service, client) = make_service(json!({
        "transaction_uuid": "t1",
        "status": "started"
    }));

    let request = StartTransactionRequest {
        amount: 250.0,
        installments: 3,
        payment_method: "credit_card".to_string(),
        reference: "ORD-2".to_string(),
        company_uuid: String::new(),
    };

    let response = service.start_transaction(&request).await.unwrap();
    assert_eq!(response.status, "started");

    let body = client.last_body().unwrap();
    assert_eq!(body["company_uuid"], "cfg-company");
}

#[tokio::test]
async fn attach_customer_requires_transaction_uuid() {
    let (service, client) = make_service(json!({}));

    let request = AttachTransactionCustomerRequest {
        transaction_uuid: String::new(),
        first_name: "Ana".to_string(),
        last_name: "Souza".to_string(),
        document: "12345678900".to_string(),
        email: "ana@example.com".to_string(),
        phone: None,
    };

    let result = service.attach_transaction_customer(&request).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn tokenize_card_sends_mixed_casing_body() {
    let (service, client) = make_service(json!({
        "token": "tok_abc",
        "transaction_uuid": "t1"
    }));

    let request = TokenizeCardRequest {
        card_number: "4111111111111111".to_string(),
        holder_name: None,
        expiration_month: None,
        expiration_year: None,
        security_code: None,
        transaction_uuid: "t1".to_string(),
    };

    let response = service.tokenize_card(&request).await.unwrap();
    assert_eq!(response.token, "tok_abc");

    let body = client.last_body().unwrap();
    assert_eq!(body, json!({"cardNumber": "4111111111111111", "transaction_uuid": "t1"}));
}

#[tokio::test]
async fn submit_payment_requires_card_token() {
    let (service, client) = make_service(json!({}));

    let request = SubmitTransactionPaymentRequest {
        transaction_uuid: "t1".to_string(),
        card_token: String::new(),
        installments: 1,
    };

    let result = service.submit_transaction_payment(&request).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn submit_payment_maps_response() {
    let (service, _client) = make_service(json!({
        "transaction_uuid": "t1",
        "status": "paid",
        "authorization_code": "AUTH123",
        "paid_amount": 250.0
    }));

    let request = SubmitTransactionPaymentRequest {
        transaction_uuid: "t1".to_string(),
        card_token: "tok_abc".to_string(),
        installments: 3,
    };

    let response = service.submit_transaction_payment(&request).await.unwrap();
    assert_eq!(response.status, "paid");
    assert_eq!(response.authorization_code.as_deref(), Some("AUTH123"));
}
