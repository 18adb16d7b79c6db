//! Trip form validation.
//!
//! Required fields are checked before anything is priced. Every failing field
//! is reported, not just the first one, so the form can highlight all of them.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::models::TripRequest;

pub const NO_ACTIVITY_MESSAGE: &str = "Please select at least one activity.";

/// A single failed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors for one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.fields.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A trip that passed validation, with its date resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTrip {
    pub date: NaiveDate,
}

/// Earliest bookable trip date: the day after `today`
pub fn earliest_trip_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// Reject a quote request with nothing selected
pub fn require_activities(activities: &[String]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if activities.is_empty() {
        errors.push("activities", NO_ACTIVITY_MESSAGE);
    }
    errors.into_result()
}

/// Validate a full trip submission against the booking rules.
///
/// `today` is passed in rather than read from the clock so the date rule is
/// deterministic.
pub fn validate_trip(request: &TripRequest, today: NaiveDate) -> Result<ValidatedTrip, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let earliest = earliest_trip_date(today);
    let date = match request.date {
        None => {
            errors.push("date", "Trip date is required.");
            None
        }
        Some(date) if date < earliest => {
            errors.push(
                "date",
                format!("Trip date must be on or after {}.", earliest.format("%Y-%m-%d")),
            );
            None
        }
        Some(date) => Some(date),
    };

    if request.designation.trim().is_empty() {
        errors.push("designation", "Designation is required.");
    }

    if request.activities.is_empty() {
        errors.push("activities", NO_ACTIVITY_MESSAGE);
    }

    match (date, errors.is_empty()) {
        (Some(date), true) => Ok(ValidatedTrip { date }),
        _ => Err(errors),
    }
}
