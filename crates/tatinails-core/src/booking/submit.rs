//! Submit lifecycle: control state, notices and the request body.

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::validate::{validate, BookingSubmission, RawBookingFields};
use crate::config::{Notices, SiteConfig, SubmitLabels};
use crate::error::{SiteError, SiteResult, ValidationError};
use crate::transport::Transport;

/// State of the submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitControlState {
    #[default]
    Idle,
    Submitting,
}

/// What the submit control should look like.
///
/// Only constructible from a state, so the label and the disabled flag can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    state: SubmitControlState,
    label: String,
}

impl SubmitControl {
    pub fn new(state: SubmitControlState, labels: &SubmitLabels) -> Self {
        let label = match state {
            SubmitControlState::Idle => labels.idle.clone(),
            SubmitControlState::Submitting => labels.busy.clone(),
        };
        Self { state, label }
    }

    pub fn state(&self) -> SubmitControlState {
        self.state
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn disabled(&self) -> bool {
        self.state == SubmitControlState::Submitting
    }
}

/// Message for the visitor after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A field failed validation; nothing was sent
    Invalid(ValidationError),
    /// Request dispatched
    Confirmed(String),
    /// Request failed at the transport level
    Failed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Invalid(e) => e.to_string(),
            Notice::Confirmed(text) | Notice::Failed(text) => text.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Confirmed(_))
    }
}

/// JSON body posted to the spreadsheet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub name: String,
    pub phone: String,
    /// Date formatted for humans (day.month.year by default)
    pub date: String,
    /// Creation time, ISO-8601 UTC
    pub timestamp: String,
}

impl SheetRow {
    /// Build the row for `submission`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if `date_format` is not a valid
    /// `chrono` format string.
    pub fn new(
        submission: &BookingSubmission,
        date_format: &str,
        created_at: DateTime<Utc>,
    ) -> SiteResult<Self> {
        let mut date = String::new();
        write!(date, "{}", submission.date.format(date_format))
            .map_err(|_| SiteError::Config(format!("invalid date format '{}'", date_format)))?;

        Ok(Self {
            name: submission.name.clone(),
            phone: submission.phone.clone(),
            date,
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// The form as the controller sees it.
pub trait FormSurface {
    /// Render the submit control
    fn set_control(&mut self, control: SubmitControl);

    /// Show a notice to the visitor
    fn notify(&mut self, notice: Notice);

    /// Reset every field to empty
    fn clear_fields(&mut self);
}

/// Booking form controller over a transport.
#[derive(Debug, Clone)]
pub struct BookingForm<T> {
    transport: T,
    labels: SubmitLabels,
    notices: Notices,
    date_format: String,
}

impl<T: Transport> BookingForm<T> {
    pub fn new(transport: T, config: &SiteConfig) -> Self {
        Self {
            transport,
            labels: config.submit_labels.clone(),
            notices: config.notices.clone(),
            date_format: config.date_display_format.clone(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Control rendering for `state`
    pub fn control(&self, state: SubmitControlState) -> SubmitControl {
        SubmitControl::new(state, &self.labels)
    }

    /// Validate and send one booking.
    ///
    /// Returns the row that was dispatched. On a validation error nothing is
    /// sent and the control is never touched. Once the control has gone to
    /// Submitting it is always returned to Idle before this resolves.
    ///
    /// # Errors
    ///
    /// - [`SiteError::Validation`](crate::SiteError::Validation) for the first
    ///   failing field
    /// - [`SiteError::Transport`](crate::SiteError::Transport) if the request
    ///   could not be sent; the form fields are left as typed
    pub async fn submit<S: FormSurface>(
        &self,
        surface: &mut S,
        fields: &RawBookingFields,
        now: DateTime<Utc>,
    ) -> SiteResult<SheetRow> {
        let submission = match validate(fields) {
            Ok(submission) => submission,
            Err(e) => {
                warn!(field = e.field(), "Booking rejected by validation");
                surface.notify(Notice::Invalid(e));
                return Err(e.into());
            }
        };

        let row = match SheetRow::new(&submission, &self.date_format, now) {
            Ok(row) => row,
            Err(e) => {
                error!("Cannot build booking row: {}", e);
                surface.notify(Notice::Failed(self.notices.failure.clone()));
                return Err(e);
            }
        };

        surface.set_control(self.control(SubmitControlState::Submitting));

        let result = self.transport.dispatch(&row).await;

        match &result {
            Ok(()) => {
                info!(date = %row.date, "Booking request dispatched");
                surface.notify(Notice::Confirmed(self.notices.success.clone()));
                surface.clear_fields();
            }
            Err(e) => {
                error!("Error sending booking: {}", e);
                surface.notify(Notice::Failed(self.notices.failure.clone()));
            }
        }

        surface.set_control(self.control(SubmitControlState::Idle));

        result.map(|()| row).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_control_label_follows_state() {
        let labels = SubmitLabels::default();

        let idle = SubmitControl::new(SubmitControlState::Idle, &labels);
        assert!(!idle.disabled());
        assert_eq!(idle.label(), "Отправить заявку");

        let busy = SubmitControl::new(SubmitControlState::Submitting, &labels);
        assert!(busy.disabled());
        assert_eq!(busy.label(), "Отправка...");
    }

    #[test]
    fn test_sheet_row_formats_date_and_timestamp() {
        let submission = BookingSubmission {
            name: "Jo".to_string(),
            phone: "555-123-4567".to_string(),
            date: NaiveDate::from_ymd_opt(2099, 1, 5).unwrap(),
        };
        let created_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();

        let row = SheetRow::new(&submission, "%d.%m.%Y", created_at).unwrap();
        assert_eq!(row.date, "05.01.2099");
        assert_eq!(row.timestamp, "2026-10-16T09:30:00.000Z");
    }

    #[test]
    fn test_sheet_row_rejects_bad_date_format() {
        let submission = BookingSubmission {
            name: "Jo".to_string(),
            phone: "5551234567".to_string(),
            date: NaiveDate::from_ymd_opt(2099, 1, 5).unwrap(),
        };
        let created_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();

        let result = SheetRow::new(&submission, "%Q", created_at);
        assert!(matches!(result, Err(SiteError::Config(_))));
    }

    #[test]
    fn test_sheet_row_json_keys() {
        let row = SheetRow {
            name: "Jo".to_string(),
            phone: "5551234567".to_string(),
            date: "01.01.2099".to_string(),
            timestamp: "2026-10-16T09:30:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&row).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["date", "name", "phone", "timestamp"]);
    }

    #[test]
    fn test_notice_messages() {
        assert!(Notice::Invalid(ValidationError::Name).is_error());
        assert!(Notice::Failed("x".to_string()).is_error());
        assert!(!Notice::Confirmed("ok".to_string()).is_error());
        assert_eq!(
            Notice::Invalid(ValidationError::Date).message(),
            "Пожалуйста, выберите дату записи"
        );
    }
}
