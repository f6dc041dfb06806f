//! Process-wide constant tables used to validate and normalize field values.

/// Endpoint path of the Products API section.
pub const PRODUCTS_PATH: &str = "/Products/2011-10-01";
/// `Version` parameter sent with every Products API action.
pub const PRODUCTS_VERSION: &str = "2011-10-01";

/// Most requests a single `GetMyFeesEstimate` call accepts.
pub const MAX_FEES_ESTIMATE_REQUESTS: usize = 20;

/// Currency codes accepted by `MoneyType`, with their descriptions.
pub const CURRENCY_CODES: &[(&str, &str)] = &[
    ("CAD", "Canadian dollar"),
    ("EUR", "European euro"),
    ("GBP", "Great Britain pounds"),
    ("INR", "Indian rupee"),
    ("JPY", "Japanese yen"),
    ("MXN", "Mexican peso"),
    ("RMB", "Chinese yuan"),
    ("USD", "United States dollar"),
];

/// Product identifier types accepted by `FeesEstimateRequest`.
pub const ID_TYPES: &[&str] = &["ASIN", "SellerSKU"];

/// MWS marketplace ids keyed by region code.
pub const MARKETPLACE_IDS: &[(&str, &str)] = &[
    ("AE", "A2VIGQ35RCS4UG"),
    ("AU", "A39IBJ37TRP1C6"),
    ("BR", "A2Q3Y263D00KWC"),
    ("CA", "A2EUQ1WTGCTBG2"),
    ("CN", "AAHKV2X7AFYLW"),
    ("DE", "A1PA6795UKMFR9"),
    ("EG", "ARBP9OOSHTCHU"),
    ("ES", "A1RKKUPIHCS9HS"),
    ("FR", "A13V1IB3VIYZZH"),
    ("GB", "A1F83G8C2ARO7P"),
    ("IN", "A21TJRUUN4KGV"),
    ("IT", "APJ6JRA9NG5V4"),
    ("JP", "A1VC38T7YXB528"),
    ("MX", "A1AM78C64UM0Y8"),
    ("NL", "A1805IZSGTT6HS"),
    ("SA", "A17E79C6D8DWNP"),
    ("SG", "A19VAU5U5O7RUS"),
    ("TR", "A33AVAJ2PDY3EV"),
    ("UK", "A1F83G8C2ARO7P"),
    ("US", "ATVPDKIKX0DER"),
];

pub fn is_currency_code(code: &str) -> bool {
    CURRENCY_CODES.iter().any(|(c, _)| *c == code)
}

/// Comma-separated list of accepted currency codes, in declaration order.
pub fn currency_code_list() -> String {
    CURRENCY_CODES
        .iter()
        .map(|(c, _)| *c)
        .collect::<Vec<_>>()
        .join(", ")
}
