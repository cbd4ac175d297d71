/// User agent string used in HTTP requests to identify this client to the gateway
pub const USER_AGENT: &str = "paygate-client/0.1.0";
/// Default timeout in seconds for gateway requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Maximum number of response-body bytes included in logs and errors
pub const MAX_LOGGED_BODY_BYTES: usize = 512;
/// Safety margin in seconds applied when checking session expiry
pub const SESSION_EXPIRY_MARGIN_SECS: u64 = 60;
/// Cooldown in seconds after a failed token refresh before another is attempted
pub const REFRESH_FAILURE_COOLDOWN_SECS: u64 = 2;

/// Path of the authenticate endpoint
pub const AUTHENTICATE_PATH: &str = "v1/api/authenticate";
/// Path of the PIX dynamic QR-code endpoint
pub const PIX_DYNAMIC_QRCODE_PATH: &str = "v1/api/pix/dynamic-qrcode";
/// Path of the transaction start endpoint
pub const TRANSACTIONS_START_PATH: &str = "v1/api/transactions/start";
/// Path of the transaction customer endpoint
pub const TRANSACTIONS_CUSTOMER_PATH: &str = "v1/api/transactions/customer";
/// Path of the card tokenization endpoint
pub const CARDS_TOKENIZE_PATH: &str = "v1/api/cards/tokenize";
/// Path of the transaction payment endpoint
pub const TRANSACTIONS_PAYMENT_PATH: &str = "v1/api/transactions/payment";
