//! Itinerary document generation
//!
//! Produces the markdown travel plan for a trip request. The document is
//! rendered from an embedded Handlebars template with every money amount and
//! day number precomputed, so the template itself stays declarative.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::GatewayError;
use crate::domain::{Itinerary, TripRequest};

/// Embedded itinerary template, compiled into the binary
const ITINERARY_TEMPLATE: &str = include_str!("../../templates/itinerary.hbs");

const TEMPLATE_NAME: &str = "itinerary";

/// Proportional budget split across the five spending categories
///
/// Percentages: accommodation 40, transportation 20, food 25, activities 10,
/// miscellaneous 5. Each component is rounded to the nearest whole unit, so
/// the components sum to the budget within ±5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetBreakdown {
    pub accommodation: i64,
    pub transportation: i64,
    pub food: i64,
    pub activities: i64,
    pub misc: i64,
}

impl BudgetBreakdown {
    pub fn from_total(budget: f64) -> Self {
        Self {
            accommodation: (budget * 0.40).round() as i64,
            transportation: (budget * 0.20).round() as i64,
            food: (budget * 0.25).round() as i64,
            activities: (budget * 0.10).round() as i64,
            misc: (budget * 0.05).round() as i64,
        }
    }

    pub fn components(&self) -> [i64; 5] {
        [
            self.accommodation,
            self.transportation,
            self.food,
            self.activities,
            self.misc,
        ]
    }
}

/// Format a whole amount with thousands separators, e.g. 12500 -> "12,500"
pub fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "€" + thousands-separated amount, e.g. "€1,000"
fn format_money(symbol: &str, amount: i64) -> String {
    format!("{}{}", symbol, format_thousands(amount))
}

/// Template context with all values preformatted
#[derive(Debug, Serialize)]
struct ItineraryContext {
    origin: String,
    destination: String,
    trip_days: i64,
    start_date: String,
    end_date: String,
    travelers: u32,
    currency: &'static str,
    total_budget: String,
    budget_per_person: String,
    /// Day numbers for the variable middle of the trip (3..=min(days, 5))
    adventure_days: Vec<i64>,
    /// Day number of the extra wrap-up day, present only for trips > 5 days
    final_day: Option<i64>,
    accommodation: String,
    transportation: String,
    food: String,
    activities: String,
    misc: String,
}

impl ItineraryContext {
    fn from_request(request: &TripRequest) -> Self {
        let trip_days = request.trip_days();
        let symbol = request.currency.symbol();
        let breakdown = BudgetBreakdown::from_total(request.budget);

        let adventure_days = if trip_days > 2 {
            (3..=trip_days.min(5)).collect()
        } else {
            Vec::new()
        };
        let final_day = (trip_days > 5).then(|| trip_days - 1);

        let per_person = (request.budget / f64::from(request.travelers)).round() as i64;

        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            trip_days,
            start_date: request.start_date.format("%Y-%m-%d").to_string(),
            end_date: request.end_date.format("%Y-%m-%d").to_string(),
            travelers: request.travelers,
            currency: request.currency.code(),
            total_budget: format_money(symbol, request.budget.round() as i64),
            budget_per_person: format_money(symbol, per_person),
            adventure_days,
            final_day,
            accommodation: format_money(symbol, breakdown.accommodation),
            transportation: format_money(symbol, breakdown.transportation),
            food: format_money(symbol, breakdown.food),
            activities: format_money(symbol, breakdown.activities),
            misc: format_money(symbol, breakdown.misc),
        }
    }
}

/// Renders itinerary documents from the embedded template
pub struct Planner {
    hbs: Handlebars<'static>,
}

impl Planner {
    pub fn new() -> Result<Self, GatewayError> {
        let mut hbs = Handlebars::new();
        hbs.register_template_string(TEMPLATE_NAME, ITINERARY_TEMPLATE)
            .map_err(|e| GatewayError::GenerationFailed(e.to_string()))?;
        Ok(Self { hbs })
    }

    /// Render the itinerary for a request
    pub fn generate(&self, request: &TripRequest) -> Result<Itinerary, GatewayError> {
        debug!(
            origin = %request.origin,
            destination = %request.destination,
            trip_days = request.trip_days(),
            "generate: rendering itinerary"
        );
        let context = ItineraryContext::from_request(request);
        let markdown = self
            .hbs
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| GatewayError::GenerationFailed(e.to_string()))?;
        Ok(Itinerary::new(markdown))
    }
}
