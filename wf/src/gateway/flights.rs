//! Flight data sources
//!
//! The gateway talks to flights through the FlightSource trait so production
//! and test builds can swap implementations. The shipped source synthesizes
//! data locally; a real search integration would implement the same trait and
//! must preserve the sorted-by-price postcondition enforced upstream.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::GatewayError;
use crate::domain::{FlightLeg, FlightOption, FlightQuery, Price};

/// Fixed carrier pool with flight-code prefixes
const CARRIERS: [(&str, &str); 5] = [
    ("Emirates", "EK"),
    ("Qatar Airways", "QR"),
    ("Delta", "DL"),
    ("Lufthansa", "LH"),
    ("Singapore Airlines", "SQ"),
];

/// Source of flight options for a query
#[async_trait]
pub trait FlightSource: Send + Sync {
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOption>, GatewayError>;
}

/// Synthesizes one flight option per carrier with randomized times and prices
///
/// Prices are uniform in [300, 1299]; departure/arrival clock times use a
/// 12-hour format; durations run 2-11 hours. Output order is unspecified
/// here, the gateway sorts.
pub struct MockFlightSource {
    currency: String,
    rng: Mutex<StdRng>,
}

impl MockFlightSource {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic source for tests
    pub fn with_seed(currency: impl Into<String>, seed: u64) -> Self {
        Self {
            currency: currency.into(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn clock_time(rng: &mut StdRng) -> String {
        let hour: u32 = rng.random_range(1..=12);
        let minute: u32 = rng.random_range(0..60);
        let meridiem = if rng.random_bool(0.5) { "AM" } else { "PM" };
        format!("{}:{:02} {}", hour, minute, meridiem)
    }

    fn synthesize(&self, query: &FlightQuery) -> Vec<FlightOption> {
        let mut rng = self.rng.lock().expect("flight rng poisoned");

        CARRIERS
            .iter()
            .map(|(carrier, prefix)| FlightOption {
                carrier: (*carrier).to_string(),
                flight_code: format!("{}{}", prefix, rng.random_range(0..1000)),
                departure: FlightLeg {
                    time: Self::clock_time(&mut rng),
                    airport: format!("{} International Airport", query.origin),
                },
                arrival: FlightLeg {
                    time: Self::clock_time(&mut rng),
                    airport: format!("{} International Airport", query.destination),
                },
                duration: format!(
                    "{}h {}m",
                    rng.random_range(2..=11),
                    rng.random_range(0..60)
                ),
                price: Price {
                    amount: rng.random_range(300..=1299),
                    currency_code: self.currency.clone(),
                },
            })
            .collect()
    }
}

#[async_trait]
impl FlightSource for MockFlightSource {
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOption>, GatewayError> {
        debug!(origin = %query.origin, destination = %query.destination, date = %query.date, "search: synthesizing flight options");
        Ok(self.synthesize(query))
    }
}
