//! Booking form controller.
//!
//! ```text
//! submit(fields)
//!   ├── validate ──✗──▶ notice(invalid)                 (no request, no state change)
//!   └── ✓ ─▶ Idle → Submitting ─▶ dispatch ─┬─ ok  ─▶ notice(confirmed), clear fields
//!                                           └─ err ─▶ notice(failed), keep fields
//!                              ◀── Submitting → Idle (always last) ──┘
//! ```
//!
//! The endpoint's response is opaque, so "sent" means the request left without
//! a transport error. Nothing stops a second submission except the disabled
//! control.

mod submit;
mod validate;

pub use submit::{BookingForm, FormSurface, Notice, SheetRow, SubmitControl, SubmitControlState};
pub use validate::{min_booking_date, validate, BookingSubmission, RawBookingFields, DATE_INPUT_FORMAT};
