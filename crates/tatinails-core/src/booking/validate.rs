//! Fail-fast validation of the booking fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Format used by `<input type="date">` values and its `min` attribute.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;

/// Form fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBookingFields {
    pub name: String,
    pub phone: String,
    pub date: String,
}

impl RawBookingFields {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            date: date.into(),
        }
    }
}

/// A booking that passed validation. Built fresh for every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSubmission {
    /// Trimmed name
    pub name: String,
    /// Trimmed phone, punctuation kept as typed
    pub phone: String,
    pub date: NaiveDate,
}

/// Check the fields in order name, phone, date and stop at the first failure.
pub fn validate(fields: &RawBookingFields) -> Result<BookingSubmission, ValidationError> {
    let name = fields.name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::Name);
    }

    let phone = fields.phone.trim();
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::Phone);
    }

    if fields.date.is_empty() {
        return Err(ValidationError::Date);
    }
    let date = NaiveDate::parse_from_str(&fields.date, DATE_INPUT_FORMAT)
        .map_err(|_| ValidationError::Date)?;

    Ok(BookingSubmission {
        name: name.to_string(),
        phone: phone.to_string(),
        date,
    })
}

/// Earliest selectable date for the date input, given the local `today`.
pub fn min_booking_date(today: NaiveDate) -> String {
    today.format(DATE_INPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_error_wins_over_valid_phone() {
        let fields = RawBookingFields::new("", "5551234567", "2099-01-01");
        assert_eq!(validate(&fields), Err(ValidationError::Name));
    }

    #[test]
    fn test_name_checked_before_bad_phone_and_date() {
        let fields = RawBookingFields::new(" J ", "12", "");
        assert_eq!(validate(&fields), Err(ValidationError::Name));
    }

    #[test]
    fn test_formatted_phone_passes() {
        let fields = RawBookingFields::new("Jo", "555-123-4567", "2099-01-01");
        let submission = validate(&fields).unwrap();
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.phone, "555-123-4567");
        assert_eq!(submission.date, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
    }

    #[test]
    fn test_name_is_trimmed() {
        let fields = RawBookingFields::new("  Анна  ", " +7 (900) 123-45-67 ", "2099-03-08");
        let submission = validate(&fields).unwrap();
        assert_eq!(submission.name, "Анна");
        assert_eq!(submission.phone, "+7 (900) 123-45-67");
    }

    #[test]
    fn test_cyrillic_name_counts_characters() {
        let fields = RawBookingFields::new("Ян", "89001234567", "2099-01-01");
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn test_short_phone_rejected() {
        let fields = RawBookingFields::new("Jo", "555-123-456", "2099-01-01");
        assert_eq!(validate(&fields), Err(ValidationError::Phone));
    }

    #[test]
    fn test_missing_date_rejected() {
        let fields = RawBookingFields::new("Jo", "5551234567", "");
        assert_eq!(validate(&fields), Err(ValidationError::Date));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let fields = RawBookingFields::new("Jo", "5551234567", "01/02/2099");
        assert_eq!(validate(&fields), Err(ValidationError::Date));
    }

    #[test]
    fn test_min_booking_date_is_zero_padded() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(min_booking_date(today), "2026-03-07");
    }
}
