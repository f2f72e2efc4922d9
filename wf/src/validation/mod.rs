//! Trip form validation
//!
//! Single-pass validation over raw field values, producing a map from field
//! name to error message. Submission proceeds only when the map is empty.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Currency, TripRequest};

/// Map of field name to error message; empty means the form is valid
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Raw trip parameters as entered, before any parsing
#[derive(Debug, Clone, Default)]
pub struct TripForm {
    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub currency: String,
    pub travelers: String,
}

impl TripForm {
    /// Validate every field in one pass
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.origin.trim().is_empty() {
            errors.insert("origin", "Origin location is required".to_string());
        }
        if self.destination.trim().is_empty() {
            errors.insert("destination", "Destination location is required".to_string());
        }

        let start = parse_date(&self.start_date);
        let end = parse_date(&self.end_date);
        if self.start_date.trim().is_empty() {
            errors.insert("start-date", "Start date is required".to_string());
        } else if start.is_none() {
            errors.insert("start-date", "Start date must be a valid YYYY-MM-DD date".to_string());
        }
        if self.end_date.trim().is_empty() {
            errors.insert("end-date", "End date is required".to_string());
        } else if end.is_none() {
            errors.insert("end-date", "End date must be a valid YYYY-MM-DD date".to_string());
        }
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                errors.insert("dates", "End date cannot be before start date".to_string());
            }
        }

        if self.budget.trim().is_empty() {
            errors.insert("budget", "Budget is required".to_string());
        } else {
            match self.budget.trim().parse::<f64>() {
                Ok(b) if b > 0.0 && b.is_finite() => {}
                _ => {
                    errors.insert("budget", "Budget must be a positive number".to_string());
                }
            }
        }

        match self.travelers.trim().parse::<u32>() {
            Ok(n) if n > 0 => {}
            _ => {
                errors.insert(
                    "travelers",
                    "Number of travelers must be a positive number".to_string(),
                );
            }
        }

        if self.currency.parse::<Currency>().is_err() {
            errors.insert("currency", format!("Unknown currency: {}", self.currency));
        }

        errors
    }

    /// Build the immutable request; fails with the full error map when any
    /// field is invalid
    pub fn build(&self) -> Result<TripRequest, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TripRequest {
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            start_date: parse_date(&self.start_date).expect("validated"),
            end_date: parse_date(&self.end_date).expect("validated"),
            budget: self.budget.trim().parse().expect("validated"),
            currency: self.currency.parse().expect("validated"),
            travelers: self.travelers.trim().parse().expect("validated"),
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
