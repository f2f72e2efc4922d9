//! Wayfarer - AI travel planner
//!
//! A client for trip planning: validates trip parameters, produces a markdown
//! itinerary, optionally synthesizes flight listings, renders the itinerary
//! as sanitized HTML, and carries a follow-up chat grounded in the itinerary.
//!
//! # Modules
//!
//! - [`domain`] - Trip, flight, and chat types
//! - [`gateway`] - Plan generation, flight lookup, and chat exchange
//! - [`validation`] - Single-pass trip form validation
//! - [`render`] - Markdown to sanitized HTML
//! - [`session`] - Session state with wholesale replacement semantics
//! - [`export`] - File export and clipboard copy
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod gateway;
pub mod render;
pub mod repl;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, Credentials, FlightsConfig, GeminiConfig};
pub use domain::{
    ChatThread, ChatTurn, Currency, FlightLeg, FlightOption, FlightQuery, Itinerary, Price,
    Speaker, TripRequest, currency_symbol,
};
pub use export::{EXPORT_FILENAME, copy_to_clipboard, write_plan};
pub use gateway::{
    BudgetBreakdown, ChatBackend, FALLBACK_REPLY, FlightSource, Gateway, GatewayError,
    GeminiClient, MockFlightSource, Planner, Service, format_thousands,
};
pub use render::{render_markdown, sanitize};
pub use repl::ChatRepl;
pub use session::{Session, SessionError};
pub use validation::{FieldErrors, TripForm};
