use serde::{Deserialize, Serialize};

use crate::dto::auth::TelegramUser;

/// Lifecycle of a submitted application, managed from the admin page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    InProgress,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "Новая",
            ApplicationStatus::InProgress => "В работе",
            ApplicationStatus::Approved => "Одобрена",
            ApplicationStatus::Rejected => "Отклонена",
        }
    }

    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::New,
        ApplicationStatus::InProgress,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];
}

/// Applicant contact block shared by every form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Bank-credit application (`POST /applications/credit`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditApplication {
    pub bank: String,
    #[serde(flatten)]
    pub applicant: Applicant,
    pub amount: u64,
    pub term_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<u64>,
    pub monthly_income: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_user: Option<TelegramUser>,
}

/// Leasing application; also used for the direct- and carcade-leasing
/// endpoints, which differ only in the `company` discriminator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeasingApplication {
    pub company: String,
    #[serde(flatten)]
    pub applicant: Applicant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    pub property_value: u64,
    pub term_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_user: Option<TelegramUser>,
}

/// Insurance application (`POST /applications/insurance`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsuranceApplication {
    pub company: String,
    pub insurance_type: InsuranceType,
    #[serde(flatten)]
    pub applicant: Applicant,
    pub car_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_user: Option<TelegramUser>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceType {
    Osago,
    Kasko,
}

impl InsuranceType {
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::Osago => "ОСАГО",
            InsuranceType::Kasko => "КАСКО",
        }
    }
}

/// Extended-guarantee application (`POST /applications/guarantee`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuaranteeApplication {
    pub company: String,
    #[serde(flatten)]
    pub applicant: Applicant,
    pub car_title: String,
    pub duration_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_user: Option<TelegramUser>,
}

/// An application as the admin listing endpoints return it: the submitted
/// form flattened next to backend-assigned bookkeeping fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: i64,
    pub status: ApplicationStatus,
    pub created_at: String,
    #[serde(flatten)]
    pub form: T,
}

/// `PUT /applications/{type}/{id}/status` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// `GET /applications/stats` response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplicationStats {
    pub credit: u64,
    pub leasing: u64,
    pub insurance: u64,
    pub guarantee: u64,
    pub new_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_flattens_form_fields() {
        let json = r#"{
            "id": 7,
            "status": "new",
            "created_at": "2025-11-02T10:00:00Z",
            "bank": "renesans",
            "first_name": "Иван",
            "last_name": "Петров",
            "phone": "+79990000000",
            "amount": 500000,
            "term_months": 36,
            "monthly_income": 90000
        }"#;
        let stored: Stored<CreditApplication> = serde_json::from_str(json).unwrap();
        assert_eq!(stored.id, 7);
        assert_eq!(stored.status, ApplicationStatus::New);
        assert_eq!(stored.form.bank, "renesans");
        assert_eq!(stored.form.applicant.first_name, "Иван");
    }

    #[test]
    fn status_serializes_snake_case() {
        let s = serde_json::to_string(&ApplicationStatus::InProgress).unwrap();
        assert_eq!(s, "\"in_progress\"");
    }
}
