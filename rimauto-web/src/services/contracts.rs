//! Contract templates (admin-managed DOCX files).

use web_sys::{File, FormData};

use shared::dto::contracts::{ContractCleanupResult, ContractInfo};

use crate::services::api::{self, ApiError};

pub async fn list() -> Result<Vec<ContractInfo>, ApiError> {
    api::get("/contracts").await
}

pub async fn get(contract_type: &str) -> Result<ContractInfo, ApiError> {
    api::get(&format!("/contracts/{contract_type}")).await
}

/// Multipart upload of one template file.
pub async fn upload(contract_type: &str, file: &File) -> Result<ContractInfo, ApiError> {
    let form = FormData::new()
        .map_err(|_| ApiError::Network("FormData unavailable".to_string()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("failed to attach file".to_string()))?;
    api::post_form(&format!("/contracts/{contract_type}"), &form).await
}

pub async fn remove(contract_type: &str) -> Result<serde_json::Value, ApiError> {
    api::delete(&format!("/contracts/{contract_type}")).await
}

pub async fn cleanup() -> Result<ContractCleanupResult, ApiError> {
    api::post("/contracts/cleanup", &serde_json::json!({})).await
}
