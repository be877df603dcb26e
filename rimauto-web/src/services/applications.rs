//! Application submission and admin management.

use shared::dto::applications::{
    ApplicationStats, ApplicationStatus, CreditApplication, GuaranteeApplication,
    InsuranceApplication, LeasingApplication, StatusUpdate, Stored,
};

use crate::services::api::{self, ApiError};

/// Leasing companies post to their own endpoints; everything else lands on
/// the shared one.
pub fn leasing_endpoint(company: &str) -> &'static str {
    match company {
        "direct" => "/applications/direct-leasing",
        "carcade" => "/applications/carcade-leasing",
        _ => "/applications/leasing",
    }
}

pub async fn submit_credit(
    application: &CreditApplication,
) -> Result<Stored<CreditApplication>, ApiError> {
    api::post("/applications/credit", application).await
}

pub async fn submit_leasing(
    application: &LeasingApplication,
) -> Result<Stored<LeasingApplication>, ApiError> {
    api::post(leasing_endpoint(&application.company), application).await
}

pub async fn submit_insurance(
    application: &InsuranceApplication,
) -> Result<Stored<InsuranceApplication>, ApiError> {
    api::post("/applications/insurance", application).await
}

pub async fn submit_guarantee(
    application: &GuaranteeApplication,
) -> Result<Stored<GuaranteeApplication>, ApiError> {
    api::post("/applications/guarantee", application).await
}

// Admin listings

fn status_query(status: Option<ApplicationStatus>) -> Vec<(&'static str, String)> {
    status
        .and_then(|s| serde_json::to_value(s).ok())
        .and_then(|v| v.as_str().map(str::to_string))
        .map(|s| vec![("status", s)])
        .unwrap_or_default()
}

pub async fn list_credit(
    status: Option<ApplicationStatus>,
) -> Result<Vec<Stored<CreditApplication>>, ApiError> {
    api::get_with_query("/applications/credit", &status_query(status)).await
}

pub async fn list_leasing(
    status: Option<ApplicationStatus>,
) -> Result<Vec<Stored<LeasingApplication>>, ApiError> {
    api::get_with_query("/applications/leasing", &status_query(status)).await
}

pub async fn list_insurance(
    status: Option<ApplicationStatus>,
) -> Result<Vec<Stored<InsuranceApplication>>, ApiError> {
    api::get_with_query("/applications/insurance", &status_query(status)).await
}

pub async fn list_guarantee(
    status: Option<ApplicationStatus>,
) -> Result<Vec<Stored<GuaranteeApplication>>, ApiError> {
    api::get_with_query("/applications/guarantee", &status_query(status)).await
}

pub async fn update_status(
    kind: &str,
    id: i64,
    status: ApplicationStatus,
) -> Result<serde_json::Value, ApiError> {
    api::put(&format!("/applications/{kind}/{id}/status"), &StatusUpdate { status }).await
}

pub async fn stats() -> Result<ApplicationStats, ApiError> {
    api::get("/applications/stats").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leasing_companies_route_to_their_endpoints() {
        assert_eq!(leasing_endpoint("direct"), "/applications/direct-leasing");
        assert_eq!(leasing_endpoint("carcade"), "/applications/carcade-leasing");
        assert_eq!(leasing_endpoint("europlan"), "/applications/leasing");
    }

    #[test]
    fn status_filter_serializes_snake_case() {
        assert_eq!(
            status_query(Some(ApplicationStatus::InProgress)),
            vec![("status", "in_progress".to_string())]
        );
        assert!(status_query(None).is_empty());
    }
}
