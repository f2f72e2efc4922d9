//! API gateway for Wayfarer
//!
//! Three operations sit behind one facade: plan generation, flight lookup,
//! and the itinerary chat exchange. Every operation checks its credential
//! first and fails with MissingCredential before any other work. The gateway
//! is built from an explicit Credentials value; nothing in here reads the
//! process environment.

use std::sync::Arc;

use tracing::debug;

mod error;
mod flights;
mod gemini;
mod planner;

pub use error::{GatewayError, Service};
pub use flights::{FlightSource, MockFlightSource};
pub use gemini::{ChatBackend, FALLBACK_REPLY, GeminiClient};
pub use planner::{BudgetBreakdown, Planner, format_thousands};

use crate::config::{Config, Credentials};
use crate::domain::{FlightOption, FlightQuery, Itinerary, TripRequest};

/// Front door to the external travel services
pub struct Gateway {
    credentials: Credentials,
    planner: Planner,
    chat: Option<Arc<dyn ChatBackend>>,
    flights: Option<Arc<dyn FlightSource>>,
}

impl Gateway {
    /// Build a gateway from configuration and resolved credentials
    ///
    /// Backends are only constructed for services whose credential is
    /// present; the absence itself is reported per operation, not here.
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self, GatewayError> {
        debug!(
            generation_credentialed = credentials.gemini_api_key.is_some(),
            flights_credentialed = credentials.flights_api_key.is_some(),
            "new: building gateway"
        );

        let chat = match &credentials.gemini_api_key {
            Some(key) => {
                let client = GeminiClient::new(&config.gemini, key.clone())?;
                Some(Arc::new(client) as Arc<dyn ChatBackend>)
            }
            None => None,
        };

        let flights = credentials.flights_api_key.as_ref().map(|_| {
            Arc::new(MockFlightSource::new(config.flights.currency.code())) as Arc<dyn FlightSource>
        });

        Ok(Self {
            credentials,
            planner: Planner::new()?,
            chat,
            flights,
        })
    }

    /// Swap the flight source (tests inject deterministic sources here)
    pub fn with_flight_source(mut self, source: Arc<dyn FlightSource>) -> Self {
        self.flights = Some(source);
        self
    }

    /// Swap the chat backend
    pub fn with_chat_backend(mut self, backend: Arc<dyn ChatBackend>) -> Self {
        self.chat = Some(backend);
        self
    }

    fn require_generation_credential(&self) -> Result<(), GatewayError> {
        if self.credentials.gemini_api_key.is_none() {
            return Err(GatewayError::MissingCredential {
                service: Service::Generation,
            });
        }
        Ok(())
    }

    /// Generate the itinerary for a trip request
    ///
    /// The document is synthesized locally; the credential gate still applies
    /// so behavior matches a real generation integration.
    pub async fn generate_plan(&self, request: &TripRequest) -> Result<Itinerary, GatewayError> {
        self.require_generation_credential()?;
        debug!(destination = %request.destination, "generate_plan: credential ok");
        self.planner.generate(request)
    }

    /// Look up flight options, sorted non-decreasing by price
    pub async fn lookup_flights(
        &self,
        query: &FlightQuery,
    ) -> Result<Vec<FlightOption>, GatewayError> {
        if self.credentials.flights_api_key.is_none() {
            return Err(GatewayError::MissingCredential {
                service: Service::FlightSearch,
            });
        }

        let source = self
            .flights
            .as_ref()
            .ok_or_else(|| GatewayError::LookupFailed("no flight source configured".to_string()))?;

        let mut options = source.search(query).await.map_err(|e| match e {
            e @ GatewayError::MissingCredential { .. } => e,
            other => GatewayError::LookupFailed(other.to_string()),
        })?;

        // Postcondition held regardless of the source implementation
        options.sort_by_key(|o| o.price.amount);
        debug!(count = options.len(), "lookup_flights: returning sorted options");
        Ok(options)
    }

    /// Exchange one chat turn grounded in the itinerary context
    pub async fn send_chat(&self, message: &str, context: &str) -> Result<String, GatewayError> {
        self.require_generation_credential()?;

        let backend = self.chat.as_ref().ok_or_else(|| {
            GatewayError::GenerationFailed("no chat backend configured".to_string())
        })?;

        backend.send(message, context).await
    }
}
