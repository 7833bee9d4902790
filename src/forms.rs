//! Form Validation
//!
//! Turns raw page input into payload records or a `FormError`.

use std::fmt;

use chrono::NaiveDate;

use crate::catalog;
use crate::models::{CustomerData, ProviderData, ServiceKind};
use crate::routes::Route;
use crate::toast::ToastMessage;

pub const OTP_LENGTH: usize = 6;

/// Rejected user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingCustomerDetails,
    IncompleteOtp,
    OtpMismatch,
    MissingBookingSlot,
    BookingDateUnavailable,
    MissingProviderDetails,
}

impl FormError {
    pub fn title(self) -> &'static str {
        match self {
            FormError::IncompleteOtp | FormError::OtpMismatch => "Invalid OTP",
            FormError::BookingDateUnavailable => "Date Unavailable",
            FormError::MissingCustomerDetails
            | FormError::MissingBookingSlot
            | FormError::MissingProviderDetails => "Missing Information",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FormError::MissingCustomerDetails => "Please fill in your name, email and phone number",
            FormError::IncompleteOtp => "Please enter the complete 6-digit code",
            FormError::OtpMismatch => "Please check your code and try again",
            FormError::MissingBookingSlot => "Please select both date and time for your booking",
            FormError::BookingDateUnavailable => "Please choose a date after today",
            FormError::MissingProviderDetails => "Please fill in all registration details",
        }
    }

    pub fn toast(self) -> ToastMessage {
        ToastMessage::error(self.title(), self.description())
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

impl std::error::Error for FormError {}

fn filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Customer login fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl LoginForm {
    pub fn submit(&self) -> Result<CustomerData, FormError> {
        match (filled(&self.name), filled(&self.email), filled(&self.phone)) {
            (Some(name), Some(email), Some(phone)) => Ok(CustomerData { name, email, phone }),
            _ => Err(FormError::MissingCustomerDetails),
        }
    }
}

/// Keep only digits, at most `OTP_LENGTH` of them
pub fn sanitize_otp(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(OTP_LENGTH).collect()
}

pub fn is_valid_otp_format(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

/// Checked before the simulated verification delay
pub fn check_otp_complete(code: &str) -> Result<(), FormError> {
    if code.chars().count() == OTP_LENGTH {
        Ok(())
    } else {
        Err(FormError::IncompleteOtp)
    }
}

/// Checked after the simulated verification delay
pub fn match_otp(code: &str, expected: &str) -> Result<(), FormError> {
    if code == expected {
        Ok(())
    } else {
        Err(FormError::OtpMismatch)
    }
}

/// Where a verification attempt leads: the customer's home with the login
/// payload unchanged, or the reason it was refused
pub fn otp_outcome(customer: CustomerData, code: &str, expected: &str) -> Result<Route, FormError> {
    check_otp_complete(code)?;
    match_otp(code, expected)?;
    Ok(Route::CustomerHome { customer })
}

/// Parse the value of an `<input type="date">`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Selected booking slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingForm {
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.as_deref().is_some_and(catalog::is_time_slot)
    }

    /// Validate against the current local date. Only days after `today` are bookable.
    pub fn submit(&self, today: NaiveDate) -> Result<(NaiveDate, String), FormError> {
        let date = self.date.ok_or(FormError::MissingBookingSlot)?;
        let time = self
            .time
            .as_deref()
            .filter(|t| catalog::is_time_slot(t))
            .ok_or(FormError::MissingBookingSlot)?;
        if date <= today {
            return Err(FormError::BookingDateUnavailable);
        }
        Ok((date, time.to_string()))
    }
}

/// Provider registration fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub service_type: Option<ServiceKind>,
}

impl RegistrationForm {
    pub fn submit(&self) -> Result<ProviderData, FormError> {
        match (
            filled(&self.name),
            filled(&self.phone),
            filled(&self.city),
            self.service_type,
        ) {
            (Some(name), Some(phone), Some(city), Some(service_type)) => Ok(ProviderData {
                name,
                phone,
                city,
                service_type,
            }),
            _ => Err(FormError::MissingProviderDetails),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_login_trims_and_requires_all_fields() {
        let form = LoginForm {
            name: "  Asha Rao ".into(),
            email: "asha@example.com".into(),
            phone: "+91 90000 00000".into(),
        };
        let customer = form.submit().unwrap();
        assert_eq!(customer.name, "Asha Rao");

        let missing = LoginForm { phone: "   ".into(), ..form };
        assert_eq!(missing.submit(), Err(FormError::MissingCustomerDetails));
    }

    #[test]
    fn test_sanitize_otp() {
        assert_eq!(sanitize_otp("12a3 45-6789"), "123456");
        assert_eq!(sanitize_otp("٣١٢"), "");
        assert!(is_valid_otp_format("123456"));
        assert!(!is_valid_otp_format("12345"));
        assert!(!is_valid_otp_format("12345x"));
    }

    #[test]
    fn test_short_otp_rejected_before_match() {
        assert_eq!(check_otp_complete("12345"), Err(FormError::IncompleteOtp));
        assert_eq!(check_otp_complete("123456"), Ok(()));
    }

    #[test]
    fn test_otp_match() {
        assert_eq!(match_otp("123456", "123456"), Ok(()));
        assert_eq!(match_otp("654321", "123456"), Err(FormError::OtpMismatch));
    }

    #[test]
    fn test_matching_otp_leads_home_with_same_customer() {
        let customer = LoginForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "+91 90000 00000".into(),
        }
        .submit()
        .unwrap();

        let home = otp_outcome(customer.clone(), "123456", "123456");
        assert_eq!(home, Ok(Route::CustomerHome { customer: customer.clone() }));
        assert_eq!(home.unwrap().path(), "/customer/home");

        assert_eq!(otp_outcome(customer.clone(), "654321", "123456"), Err(FormError::OtpMismatch));
        assert_eq!(otp_outcome(customer, "12345", "12345"), Err(FormError::IncompleteOtp));
    }

    #[test]
    fn test_booking_requires_date_and_time() {
        let today = date(2026, 10, 18);
        let empty = BookingForm::default();
        assert_eq!(empty.submit(today), Err(FormError::MissingBookingSlot));

        let no_time = BookingForm { date: Some(date(2026, 10, 20)), time: None };
        assert_eq!(no_time.submit(today), Err(FormError::MissingBookingSlot));
        assert!(!no_time.is_complete());

        let bad_slot = BookingForm { date: Some(date(2026, 10, 20)), time: Some("11:30 PM".into()) };
        assert_eq!(bad_slot.submit(today), Err(FormError::MissingBookingSlot));
    }

    #[test]
    fn test_booking_date_must_be_after_today() {
        let today = date(2026, 10, 18);
        let same_day = BookingForm { date: Some(today), time: Some("10:00 AM".into()) };
        assert_eq!(same_day.submit(today), Err(FormError::BookingDateUnavailable));

        let tomorrow = BookingForm { date: Some(date(2026, 10, 19)), time: Some("10:00 AM".into()) };
        assert!(tomorrow.is_complete());
        assert_eq!(tomorrow.submit(today), Ok((date(2026, 10, 19), "10:00 AM".to_string())));
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2026-12-01"), Some(date(2026, 12, 1)));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("01/12/2026"), None);
    }

    #[test]
    fn test_registration() {
        let form = RegistrationForm {
            name: "Ravi Cranes".into(),
            phone: "+91 91111 11111".into(),
            city: "Pune".into(),
            service_type: Some(ServiceKind::Crane),
        };
        assert_eq!(form.submit().unwrap().service_type, ServiceKind::Crane);

        let untyped = RegistrationForm { service_type: None, ..form };
        assert_eq!(untyped.submit(), Err(FormError::MissingProviderDetails));
    }

    #[test]
    fn test_error_toasts_are_destructive() {
        let toast = FormError::IncompleteOtp.toast();
        assert_eq!(toast.title, "Invalid OTP");
        assert_eq!(toast.description, "Please enter the complete 6-digit code");
        assert_eq!(toast.variant, crate::toast::ToastVariant::Destructive);
    }
}
