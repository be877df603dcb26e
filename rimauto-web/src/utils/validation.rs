//! Validation utilities for user input.
//!
//! Every form validates here before anything touches the network; a failed
//! validation never issues an HTTP request.

use shared::dto::applications::{
    Applicant, CreditApplication, GuaranteeApplication, InsuranceApplication, InsuranceType,
    LeasingApplication,
};

pub const CREDIT_MIN_AMOUNT: u64 = 100_000;
pub const CREDIT_MAX_AMOUNT: u64 = 10_000_000;
pub const MIN_MONTHLY_INCOME: u64 = 30_000;
pub const LEASING_MIN_VALUE: u64 = 100_000;
pub const LEASING_MAX_VALUE: u64 = 50_000_000;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { is_valid: true, error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { is_valid: false, error: Some(message.into()) }
    }
}

/// Field-level errors for one submit attempt, in form order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|(_, m)| m.as_str())
    }
}

/// Validate a phone number: optional '+', then digits/spaces/dashes/parens.
pub fn validate_phone(phone: &str) -> ValidationResult {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return ValidationResult::err("Телефон обязателен");
    }
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let shape_ok = !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')');
    if !shape_ok || !rest.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Введите корректный номер телефона");
    }
    ValidationResult::ok()
}

/// Validate an optional email; empty input is accepted.
pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return ValidationResult::ok();
    }
    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return ValidationResult::err("Введите корректный email");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return ValidationResult::err("Введите корректный email");
    }
    ValidationResult::ok()
}

fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.is_empty() {
        None
    } else {
        cleaned.parse().ok()
    }
}

fn require(value: &str, field: &'static str, message: &str, errors: &mut FieldErrors) -> bool {
    if value.trim().is_empty() {
        errors.push(field, message);
        false
    } else {
        true
    }
}

fn applicant_fields(
    first_name: &str,
    last_name: &str,
    phone: &str,
    email: &str,
    errors: &mut FieldErrors,
) -> Option<Applicant> {
    require(first_name, "first_name", "Имя обязательно", errors);
    require(last_name, "last_name", "Фамилия обязательна", errors);
    let phone_check = validate_phone(phone);
    if let Some(message) = phone_check.error {
        errors.push("phone", message);
    }
    let email_check = validate_email(email);
    if let Some(message) = email_check.error {
        errors.push("email", message);
    }
    if errors.is_empty() {
        let email = email.trim();
        Some(Applicant {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
        })
    } else {
        None
    }
}

/// Raw credit-form input as it sits in the page signals.
#[derive(Debug, Default, Clone)]
pub struct CreditFormInput {
    pub bank: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub amount: String,
    pub term_months: String,
    pub down_payment: String,
    pub monthly_income: String,
    pub comment: String,
}

pub fn validate_credit_form(input: &CreditFormInput) -> Result<CreditApplication, FieldErrors> {
    let mut errors = FieldErrors::default();
    let applicant = applicant_fields(
        &input.first_name,
        &input.last_name,
        &input.phone,
        &input.email,
        &mut errors,
    );

    let amount = match parse_amount(&input.amount) {
        None => {
            errors.push("amount", "Сумма обязательна");
            None
        }
        Some(v) if v < CREDIT_MIN_AMOUNT => {
            errors.push("amount", "Минимальная сумма 100,000 ₽");
            None
        }
        Some(v) if v > CREDIT_MAX_AMOUNT => {
            errors.push("amount", "Максимальная сумма 10,000,000 ₽");
            None
        }
        Some(v) => Some(v),
    };

    let term_months = match input.term_months.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            errors.push("term_months", "Срок кредита обязателен");
            None
        }
    };

    let monthly_income = match parse_amount(&input.monthly_income) {
        None => {
            errors.push("monthly_income", "Ежемесячный доход обязателен");
            None
        }
        Some(v) if v < MIN_MONTHLY_INCOME => {
            errors.push("monthly_income", "Минимальный доход 30,000 ₽");
            None
        }
        Some(v) => Some(v),
    };

    let (Some(applicant), Some(amount), Some(term_months), Some(monthly_income)) =
        (applicant, amount, term_months, monthly_income)
    else {
        return Err(errors);
    };
    let comment = input.comment.trim();
    Ok(CreditApplication {
        bank: input.bank.clone(),
        applicant,
        amount,
        term_months,
        down_payment: parse_amount(&input.down_payment),
        monthly_income,
        comment: (!comment.is_empty()).then(|| comment.to_string()),
        telegram_user: None,
    })
}

#[derive(Debug, Default, Clone)]
pub struct LeasingFormInput {
    pub company: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub company_name: String,
    pub inn: String,
    pub property_value: String,
    pub term_months: String,
    pub advance_percent: String,
    pub comment: String,
}

pub fn validate_leasing_form(input: &LeasingFormInput) -> Result<LeasingApplication, FieldErrors> {
    let mut errors = FieldErrors::default();
    let applicant = applicant_fields(
        &input.first_name,
        &input.last_name,
        &input.phone,
        &input.email,
        &mut errors,
    );

    let property_value = match parse_amount(&input.property_value) {
        None => {
            errors.push("property_value", "Стоимость обязательна");
            None
        }
        Some(v) if v < LEASING_MIN_VALUE => {
            errors.push("property_value", "Минимальная стоимость 100,000 ₽");
            None
        }
        Some(v) if v > LEASING_MAX_VALUE => {
            errors.push("property_value", "Максимальная стоимость 50,000,000 ₽");
            None
        }
        Some(v) => Some(v),
    };

    let term_months = match input.term_months.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            errors.push("term_months", "Срок лизинга обязателен");
            None
        }
    };

    if !input.inn.trim().is_empty()
        && !(input.inn.trim().chars().all(|c| c.is_ascii_digit())
            && matches!(input.inn.trim().len(), 10 | 12))
    {
        errors.push("inn", "ИНН должен содержать 10 или 12 цифр");
    }

    let (Some(applicant), Some(property_value), Some(term_months)) =
        (applicant, property_value, term_months)
    else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    let company_name = input.company_name.trim();
    let inn = input.inn.trim();
    let comment = input.comment.trim();
    Ok(LeasingApplication {
        company: input.company.clone(),
        applicant,
        company_name: (!company_name.is_empty()).then(|| company_name.to_string()),
        inn: (!inn.is_empty()).then(|| inn.to_string()),
        property_value,
        term_months,
        advance_percent: input.advance_percent.trim().parse().ok(),
        comment: (!comment.is_empty()).then(|| comment.to_string()),
        telegram_user: None,
    })
}

#[derive(Debug, Default, Clone)]
pub struct InsuranceFormInput {
    pub company: String,
    pub kasko: bool,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub car_title: String,
    pub car_year: String,
    pub comment: String,
}

pub fn validate_insurance_form(
    input: &InsuranceFormInput,
) -> Result<InsuranceApplication, FieldErrors> {
    let mut errors = FieldErrors::default();
    let applicant = applicant_fields(
        &input.first_name,
        &input.last_name,
        &input.phone,
        &input.email,
        &mut errors,
    );
    require(&input.car_title, "car_title", "Укажите автомобиль", &mut errors);

    let Some(applicant) = applicant else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    let comment = input.comment.trim();
    Ok(InsuranceApplication {
        company: input.company.clone(),
        insurance_type: if input.kasko { InsuranceType::Kasko } else { InsuranceType::Osago },
        applicant,
        car_title: input.car_title.trim().to_string(),
        car_year: input.car_year.trim().parse().ok(),
        comment: (!comment.is_empty()).then(|| comment.to_string()),
        telegram_user: None,
    })
}

#[derive(Debug, Default, Clone)]
pub struct GuaranteeFormInput {
    pub company: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub car_title: String,
    pub duration_months: String,
    pub comment: String,
}

pub fn validate_guarantee_form(
    input: &GuaranteeFormInput,
) -> Result<GuaranteeApplication, FieldErrors> {
    let mut errors = FieldErrors::default();
    let applicant = applicant_fields(
        &input.first_name,
        &input.last_name,
        &input.phone,
        &input.email,
        &mut errors,
    );
    require(&input.car_title, "car_title", "Укажите автомобиль", &mut errors);
    let duration_months = match input.duration_months.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            errors.push("duration_months", "Срок гарантии обязателен");
            None
        }
    };

    let (Some(applicant), Some(duration_months)) = (applicant, duration_months) else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    let comment = input.comment.trim();
    Ok(GuaranteeApplication {
        company: input.company.clone(),
        applicant,
        car_title: input.car_title.trim().to_string(),
        duration_months,
        comment: (!comment.is_empty()).then(|| comment.to_string()),
        telegram_user: None,
    })
}

/// Review form: author, 1-5 rating, non-empty text.
pub fn validate_review(author: &str, rating: u8, text: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    require(author, "author", "Представьтесь, пожалуйста", &mut errors);
    if !(1..=5).contains(&rating) {
        errors.push("rating", "Поставьте оценку от 1 до 5");
    }
    require(text, "text", "Напишите текст отзыва", &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_credit_input() -> CreditFormInput {
        CreditFormInput {
            bank: "renesans".into(),
            first_name: "Иван".into(),
            last_name: "Петров".into(),
            phone: "+7 (999) 000-00-00".into(),
            email: "ivan@example.com".into(),
            amount: "500000".into(),
            term_months: "36".into(),
            down_payment: "100000".into(),
            monthly_income: "90000".into(),
            comment: "".into(),
        }
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+7 (999) 000-00-00").is_valid);
        assert!(validate_phone("89990000000").is_valid);
        assert!(!validate_phone("").is_valid);
        assert!(!validate_phone("abc").is_valid);
        assert!(!validate_phone("+").is_valid);
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("").is_valid); // optional
        assert!(validate_email("user@domain.ru").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("a@b").is_valid);
        assert!(!validate_email("@domain.ru").is_valid);
    }

    #[test]
    fn credit_form_happy_path() {
        let app = validate_credit_form(&valid_credit_input()).unwrap();
        assert_eq!(app.amount, 500_000);
        assert_eq!(app.term_months, 36);
        assert_eq!(app.applicant.email.as_deref(), Some("ivan@example.com"));
    }

    #[test]
    fn credit_amount_below_minimum_blocks_submission() {
        let mut input = valid_credit_input();
        input.amount = "50000".into();
        let errors = validate_credit_form(&input).unwrap_err();
        assert_eq!(errors.get("amount"), Some("Минимальная сумма 100,000 ₽"));
    }

    #[test]
    fn credit_income_below_minimum_is_rejected() {
        let mut input = valid_credit_input();
        input.monthly_income = "10000".into();
        let errors = validate_credit_form(&input).unwrap_err();
        assert_eq!(errors.get("monthly_income"), Some("Минимальный доход 30,000 ₽"));
    }

    #[test]
    fn amount_accepts_grouped_digits() {
        let mut input = valid_credit_input();
        input.amount = "1 200 000".into();
        let app = validate_credit_form(&input).unwrap();
        assert_eq!(app.amount, 1_200_000);
    }

    #[test]
    fn leasing_value_range() {
        let mut input = LeasingFormInput {
            company: "carcade".into(),
            first_name: "Анна".into(),
            last_name: "Смирнова".into(),
            phone: "+79990000000".into(),
            property_value: "60000000".into(),
            term_months: "48".into(),
            ..Default::default()
        };
        let errors = validate_leasing_form(&input).unwrap_err();
        assert_eq!(errors.get("property_value"), Some("Максимальная стоимость 50,000,000 ₽"));

        input.property_value = "3000000".into();
        assert!(validate_leasing_form(&input).is_ok());
    }

    #[test]
    fn leasing_inn_shape() {
        let input = LeasingFormInput {
            company: "direct".into(),
            first_name: "Анна".into(),
            last_name: "Смирнова".into(),
            phone: "+79990000000".into(),
            inn: "12345".into(),
            property_value: "3000000".into(),
            term_months: "48".into(),
            ..Default::default()
        };
        let errors = validate_leasing_form(&input).unwrap_err();
        assert!(errors.get("inn").is_some());
    }

    #[test]
    fn review_rating_bounds() {
        assert!(validate_review("Иван", 5, "Отлично").is_ok());
        assert!(validate_review("Иван", 0, "Отлично").is_err());
        assert!(validate_review("Иван", 6, "Отлично").is_err());
        assert!(validate_review("Иван", 4, "  ").is_err());
    }
}
