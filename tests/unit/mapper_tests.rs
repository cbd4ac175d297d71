use assert_json_diff::assert_json_eq;
use paygate_client::config::CompanyConfig;
use paygate_client::prelude::*;
use paygate_client::presentation::card::{RawTokenizeCardRequest, RawTokenizeCardResponse};
use paygate_client::presentation::pix::{
    RawGeneratePixQrCodeRequest, RawGeneratePixQrCodeResponse,
};
use paygate_client::presentation::transaction::{
    RawAttachTransactionCustomerRequest, RawAttachTransactionCustomerResponse,
    RawStartTransactionRequest, RawStartTransactionResponse, RawSubmitTransactionPaymentRequest,
    RawSubmitTransactionPaymentResponse,
};
use serde_json::json;

fn company() -> CompanyConfig {
    CompanyConfig {
        company_uuid: "cfg-company".to_string(),
        user_uuid: "cfg-user".to_string(),
    }
}

fn pix_request() -> GeneratePixQrCodeRequest {
    GeneratePixQrCodeRequest {
        amount: 100.50,
        description: "Seguro Viagem".to_string(),
        reference: "ORD-1".to_string(),
        company_uuid: "c1".to_string(),
        user_uuid: "u1".to_string(),
        expiration_date: "2025-01-01".to_string(),
        webhook_url: Some("https://merchant.example.com/webhook".to_string()),
    }
}

#[test]
fn pix_request_round_trip() {
    let domain = pix_request();
    let raw = RawGeneratePixQrCodeRequest::from_domain(&domain, &company());
    assert_eq!(raw.into_domain(), domain);
}

#[test]
fn pix_request_wire_body_is_snake_case() {
    let mut domain = pix_request();
    domain.webhook_url = None;
    let raw = RawGeneratePixQrCodeRequest::from_domain(&domain, &company());

    assert_json_eq!(
        serde_json::to_value(&raw).unwrap(),
        json!({
            "amount": 100.50,
            "description": "Seguro Viagem",
            "reference": "ORD-1",
            "company_uuid": "c1",
            "user_uuid": "u1",
            "expiration_date": "2025-01-01"
        })
    );
}

#[test]
fn pix_request_merges_configured_company_into_empty_fields() {
    let mut domain = pix_request();
    domain.company_uuid = String::new();
    domain.user_uuid = String::new();

    let raw = RawGeneratePixQrCodeRequest::from_domain(&domain, &company());
    assert_eq!(raw.company_uuid, "cfg-company");
    assert_eq!(raw.user_uuid, "cfg-user");
}

#[test]
fn pix_response_maps_back_to_camel_case_domain() {
    let raw: RawGeneratePixQrCodeResponse = serde_json::from_value(json!({
        "transaction_uuid": "t9",
        "qr_code": "00020126330014BR.GOV.BCB.PIX",
        "amount": 100.50,
        "tax_amount": 1.20,
        "net_amount": 99.30,
        "expiration_date": "2025-01-01"
    }))
    .unwrap();

    let domain = raw.into_domain();
    assert_eq!(domain.transaction_uuid, "t9");
    assert_eq!(domain.tax_amount, Some(1.20));

    // The domain value object serializes camelCase for the application edge.
    let value = serde_json::to_value(&domain).unwrap();
    assert_eq!(value["transactionUuid"], "t9");
    assert_eq!(value["taxAmount"], 1.20);
}

#[test]
fn pix_response_round_trip() {
    let domain = GeneratePixQrCodeResponse {
        transaction_uuid: "t9".to_string(),
        qr_code: "payload".to_string(),
        qr_code_base64: Some("aGVsbG8=".to_string()),
        amount: 100.50,
        tax_amount: Some(1.20),
        net_amount: Some(99.30),
        expiration_date: Some("2025-01-01".to_string()),
    };
    let raw = RawGeneratePixQrCodeResponse::from_domain(&domain);
    assert_eq!(raw.into_domain(), domain);
}

#[test]
fn start_transaction_round_trip_and_company_merge() {
    let domain = StartTransactionRequest {
        amount: 250.0,
        installments: 3,
        payment_method: "credit_card".to_string(),
        reference: "ORD-2".to_string(),
        company_uuid: String::new(),
    };

    let raw = RawStartTransactionRequest::from_domain(&domain, &company());
    assert_eq!(raw.company_uuid, "cfg-company");

    assert_json_eq!(
        serde_json::to_value(&raw).unwrap(),
        json!({
            "amount": 250.0,
            "installments": 3,
            "payment_method": "credit_card",
            "reference": "ORD-2",
            "company_uuid": "cfg-company"
        })
    );

    // Round trip with the merged value preserved
    let merged = raw.clone().into_domain();
    assert_eq!(
        RawStartTransactionRequest::from_domain(&merged, &company()),
        raw
    );
}

#[test]
fn start_transaction_response_round_trip() {
    let domain = StartTransactionResponse {
        transaction_uuid: "t1".to_string(),
        status: "started".to_string(),
    };
    assert_eq!(
        RawStartTransactionResponse::from_domain(&domain).into_domain(),
        domain
    );
}

#[test]
fn customer_request_round_trip_and_mixed_casing() {
    let domain = AttachTransactionCustomerRequest {
        transaction_uuid: "t1".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Souza".to_string(),
        document: "12345678900".to_string(),
        email: "ana@example.com".to_string(),
        phone: Some("+5511999999999".to_string()),
    };

    let raw = RawAttachTransactionCustomerRequest::from_domain(&domain);
    assert_eq!(raw.clone().into_domain(), domain);

    // camelCase customer fields next to the snake_case transaction_uuid
    assert_json_eq!(
        serde_json::to_value(&raw).unwrap(),
        json!({
            "transaction_uuid": "t1",
            "firstName": "Ana",
            "lastName": "Souza",
            "document": "12345678900",
            "email": "ana@example.com",
            "phone": "+5511999999999"
        })
    );
}

#[test]
fn customer_response_round_trip() {
    let domain = AttachTransactionCustomerResponse {
        transaction_uuid: "t1".to_string(),
        status: "customer_attached".to_string(),
    };
    assert_eq!(
        RawAttachTransactionCustomerResponse::from_domain(&domain).into_domain(),
        domain
    );
}

#[test]
fn tokenize_card_wire_body_preserves_mixed_casing_exactly() {
    let domain = TokenizeCardRequest {
        card_number: "4111111111111111".to_string(),
        holder_name: None,
        expiration_month: None,
        expiration_year: None,
        security_code: None,
        transaction_uuid: "t1".to_string(),
    };

    let raw = RawTokenizeCardRequest::from_domain(&domain);

    assert_json_eq!(
        serde_json::to_value(&raw).unwrap(),
        json!({
            "cardNumber": "4111111111111111",
            "transaction_uuid": "t1"
        })
    );
}

#[test]
fn tokenize_card_round_trip_with_all_fields() {
    let domain = TokenizeCardRequest {
        card_number: "4111111111111111".to_string(),
        holder_name: Some("ANA SOUZA".to_string()),
        expiration_month: Some("12".to_string()),
        expiration_year: Some("2030".to_string()),
        security_code: Some("123".to_string()),
        transaction_uuid: "t1".to_string(),
    };
    assert_eq!(
        RawTokenizeCardRequest::from_domain(&domain).into_domain(),
        domain
    );
}

#[test]
fn tokenize_card_response_round_trip() {
    let domain = TokenizeCardResponse {
        token: "tok_abc".to_string(),
        card_brand: Some("visa".to_string()),
        transaction_uuid: "t1".to_string(),
    };
    let raw = RawTokenizeCardResponse::from_domain(&domain);
    assert_eq!(
        serde_json::to_value(&raw).unwrap()["cardBrand"],
        "visa"
    );
    assert_eq!(raw.into_domain(), domain);
}

#[test]
fn payment_request_round_trip_and_wire_body() {
    let domain = SubmitTransactionPaymentRequest {
        transaction_uuid: "t1".to_string(),
        card_token: "tok_abc".to_string(),
        installments: 3,
    };

    let raw = RawSubmitTransactionPaymentRequest::from_domain(&domain);
    assert_json_eq!(
        serde_json::to_value(&raw).unwrap(),
        json!({
            "transaction_uuid": "t1",
            "card_token": "tok_abc",
            "installments": 3
        })
    );
    assert_eq!(raw.into_domain(), domain);
}

#[test]
fn payment_response_round_trip() {
    let domain = SubmitTransactionPaymentResponse {
        transaction_uuid: "t1".to_string(),
        status: "paid".to_string(),
        authorization_code: Some("AUTH123".to_string()),
        paid_amount: Some(250.0),
    };
    assert_eq!(
        RawSubmitTransactionPaymentResponse::from_domain(&domain).into_domain(),
        domain
    );
}
