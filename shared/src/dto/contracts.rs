use serde::{Deserialize, Serialize};

/// Metadata for an uploaded contract template (`GET /contracts`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractInfo {
    pub contract_type: String,
    pub filename: String,
    pub size_bytes: u64,
    pub uploaded_at: String,
}

/// `POST /contracts/cleanup` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractCleanupResult {
    pub removed: u64,
}
