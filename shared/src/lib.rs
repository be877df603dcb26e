//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Mini App frontend and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Telegram authentication and user DTOs
//!   - **[`dto::cars`]**: Vehicle catalog payloads and query parameters
//!   - **[`dto::cities`]**: Delivery cities and zone tariffs
//!   - **[`dto::applications`]**: Credit/leasing/insurance/guarantee applications
//!   - **[`dto::reviews`]**: Customer reviews and manager replies
//!   - **[`dto::contracts`]**: Contract template metadata
//!   - **[`dto::system`]**: Health, image/volume stats, cache refresh
//! - **[`utils`]**: Price parsing and formatting shared by pages and tests
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** (default serde behavior)
//! - Optional fields are omitted when `None` via
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - Timestamps travel as RFC3339 strings
//! - Backend errors arrive as `{"detail": "..."}` ([`dto::ErrorResponse`])

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
