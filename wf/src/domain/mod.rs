//! Domain types for Wayfarer
//!
//! Core domain types: TripRequest, Currency, Itinerary, FlightOption,
//! ChatTurn/ChatThread. All are plain session-scoped values; nothing here
//! persists beyond the process.

mod chat;
mod flight;
mod trip;

pub use chat::{ChatThread, ChatTurn, Speaker};
pub use flight::{FlightLeg, FlightOption, FlightQuery, Price};
pub use trip::{Currency, Itinerary, TripRequest, currency_symbol};
