//! Flight lookup types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters for one flight search
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

/// One candidate flight returned by flight lookup
///
/// Serializes camelCase to match the upstream JSON payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOption {
    pub carrier: String,
    pub flight_code: String,
    pub departure: FlightLeg,
    pub arrival: FlightLeg,
    pub duration: String,
    pub price: Price,
}

/// Departure or arrival endpoint of a flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub time: String,
    pub airport: String,
}

/// A price tagged with its currency code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub amount: u32,
    pub currency_code: String,
}
