//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wayfarer - AI travel planner
#[derive(Parser)]
#[command(
    name = "wf",
    about = "Plan a trip, look up flights, and chat about the itinerary",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a travel plan for a trip
    Plan {
        /// Origin city
        #[arg(long)]
        from: String,

        /// Destination city
        #[arg(long)]
        to: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Total budget
        #[arg(long)]
        budget: String,

        /// Budget currency (USD, EUR, GBP, JPY, CNY, INR, CAD, AUD)
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Number of travelers
        #[arg(long, default_value = "1")]
        travelers: String,

        /// Also look up flight options for the start date
        #[arg(long)]
        flights: bool,

        /// Write the itinerary to travel-plan.md in the current directory
        #[arg(long)]
        export: bool,

        /// Copy the itinerary to the system clipboard
        #[arg(long)]
        copy: bool,

        /// Print sanitized HTML instead of raw markdown
        #[arg(long)]
        html: bool,

        /// Open the follow-up chat after planning
        #[arg(long)]
        chat: bool,
    },

    /// Chat about a previously exported travel plan
    Chat {
        /// Path to the exported plan (markdown)
        #[arg(long)]
        plan: PathBuf,

        /// Destination the plan covers (used for the greeting)
        #[arg(long)]
        destination: String,
    },
}
