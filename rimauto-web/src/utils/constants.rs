//! Application constants.
//!
//! `RIMAUTO_API_URL` and `RIMAUTO_BOT_USERNAME` are read at compile time so
//! release bundles can point at production without a runtime config fetch.

/// Backend REST API base.
pub const API_BASE: &str = match option_env!("RIMAUTO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Bot identity for the Telegram Login Widget on the web build.
pub const BOT_USERNAME: &str = match option_env!("RIMAUTO_BOT_USERNAME") {
    Some(name) => name,
    None => "rimauto_bot",
};

// Storage keys (shared with the previous frontend generation, do not rename)
pub const KEY_AUTH_TOKEN: &str = "authToken";
pub const KEY_INIT_DATA: &str = "telegramInitData";
pub const KEY_DEBUG_MODE: &str = "telegram_debug_mode";
pub const KEY_AUTH_SNAPSHOT: &str = "auth-storage";

// HTTP profiles
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;
/// Cache refresh re-scrapes the upstream catalog and routinely runs minutes.
pub const LONG_OPERATION_TIMEOUT_MS: u32 = 300_000;

// Bounded retry for idempotent GETs
pub const GET_RETRY_LIMIT: u32 = 2;
pub const GET_RETRY_BASE_DELAY_MS: u32 = 300;

// UI constants
pub const CITY_SEARCH_MIN_CHARS: usize = 2;
pub const CATALOG_PAGE_SIZE: u32 = 10;
pub const SUCCESS_BANNER_MS: u32 = 5_000;
