//! Trip request and currency types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated trip planning request
///
/// Built by the form validation layer; immutable once handed to the gateway.
/// Invariants (enforced at construction): start_date <= end_date, budget > 0,
/// travelers >= 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub currency: Currency,
    pub travelers: u32,
}

impl TripRequest {
    /// Trip length in whole days (civil-date difference)
    ///
    /// Same-day trips yield 0; the 2025-06-01..2025-06-05 span yields 4.
    pub fn trip_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Supported budget currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cny,
    Inr,
    Cad,
    Aud,
}

impl Currency {
    /// ISO-style code, e.g. "EUR"
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cny => "CNY",
            Self::Inr => "INR",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
        }
    }

    /// Display symbol used when formatting money amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd | Self::Cad | Self::Aud => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy | Self::Cny => "¥",
            Self::Inr => "₹",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "CNY" => Ok(Self::Cny),
            "INR" => Ok(Self::Inr),
            "CAD" => Ok(Self::Cad),
            "AUD" => Ok(Self::Aud),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// Symbol for a raw currency code, "$" when the code is unknown
pub fn currency_symbol(code: &str) -> &'static str {
    code.parse::<Currency>().map(|c| c.symbol()).unwrap_or("$")
}

/// The generated markdown travel plan for one request
///
/// Opaque formatted text. Replaced wholesale on each new submission, never
/// merged or patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary(String);

impl Itinerary {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn as_markdown(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Itinerary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
