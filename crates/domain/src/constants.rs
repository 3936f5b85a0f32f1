//! Application constants
//!
//! Centralized location for domain-level defaults shared by the config
//! loader, the Concur client and the tool layer.

// Concur endpoints
pub const DEFAULT_CONCUR_BASE_URL: &str = "https://us.api.concursolutions.com";
pub const CONCUR_TOKEN_PATH: &str = "/oauth2/v0/token";

// Expense defaults
pub const DEFAULT_PER_DIEM_EXPENSE_TYPE: &str = "PDIEM";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_PAYMENT_TYPE: &str = "CASH";

// HTTP
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("travex/", env!("CARGO_PKG_VERSION"));

// Error shaping: plain-text bodies longer than this are not echoed into messages
pub const MAX_PLAIN_TEXT_ERROR_LEN: usize = 200;

// Reconciliation
pub const DEFAULT_RECONCILE_WINDOW_DAYS: i64 = 1;
pub const MAX_RECONCILE_WINDOW_DAYS: i64 = 366;

// Per diem: longest inclusive trip a single calculation covers
pub const MAX_TRIP_DAYS: u32 = 366;
