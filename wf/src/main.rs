//! Wayfarer - AI travel planner
//!
//! CLI entry point: plan trips, list flight options, chat about itineraries.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use wayfarer::cli::{Cli, Command};
use wayfarer::config::{Config, Credentials};
use wayfarer::domain::{FlightOption, FlightQuery, Itinerary};
use wayfarer::gateway::Gateway;
use wayfarer::repl::ChatRepl;
use wayfarer::session::Session;
use wayfarer::validation::TripForm;
use wayfarer::{export, render};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wayfarer")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = cli_log_level
        .and_then(|s| s.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);

    let log_file =
        fs::File::create(log_dir.join("wayfarer.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    match cli.command {
        Command::Plan {
            from,
            to,
            start,
            end,
            budget,
            currency,
            travelers,
            flights,
            export,
            copy,
            html,
            chat,
        } => {
            let form = TripForm {
                origin: from,
                destination: to,
                start_date: start,
                end_date: end,
                budget,
                currency,
                travelers,
            };
            let options = PlanOptions {
                flights,
                export,
                copy,
                html,
                chat,
            };
            run_plan(cli.config.as_ref(), form, options).await
        }
        Command::Chat { plan, destination } => run_chat(cli.config.as_ref(), &plan, &destination).await,
    }
}

struct PlanOptions {
    flights: bool,
    export: bool,
    copy: bool,
    html: bool,
    chat: bool,
}

async fn run_plan(config_path: Option<&PathBuf>, form: TripForm, options: PlanOptions) -> Result<()> {
    // Validation runs before anything else; nothing is submitted on errors
    let request = match form.build() {
        Ok(request) => request,
        Err(errors) => {
            for (field, message) in &errors {
                eprintln!("{} {}: {}", "error".bright_red(), field, message);
            }
            eyre::bail!("Trip parameters are invalid ({} error(s))", errors.len());
        }
    };

    let config = Config::load(config_path)?;
    let credentials = Credentials::resolve(&config);
    let gateway = Gateway::new(&config, credentials)?;

    let mut session = Session::new();
    session.begin_submission()?;

    let itinerary = match gateway.generate_plan(&request).await {
        Ok(itinerary) => itinerary,
        Err(e) => {
            session.fail_submission();
            return Err(e).context("Plan generation failed");
        }
    };

    // Flight lookup only after generation succeeded, and only when opted in.
    // A lookup failure is surfaced but does not discard the itinerary.
    let flight_options = if options.flights {
        let query = FlightQuery {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            date: request.start_date,
        };
        match gateway.lookup_flights(&query).await {
            Ok(flight_options) => flight_options,
            Err(e) => {
                eprintln!("{} Flight lookup failed: {}", "warning".bright_yellow(), e);
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    session.complete_submission(&request.destination, itinerary, flight_options);

    if let Some(itinerary) = session.itinerary() {
        if options.html {
            println!("{}", render::render_markdown(itinerary.as_markdown()));
        } else {
            println!("{}", itinerary.as_markdown());
        }
        if options.export {
            let path = export::write_plan(itinerary, &std::env::current_dir()?)?;
            println!("{} {}", "Exported to".bright_green(), path.display());
        }
        if options.copy {
            export::copy_to_clipboard(itinerary)?;
            println!("{}", "Copied to clipboard".bright_green());
        }
    }

    if !session.flights().is_empty() {
        print_flights(session.flights());
    }

    if options.chat {
        ChatRepl::new(&gateway, &mut session).run().await?;
    }

    Ok(())
}

async fn run_chat(config_path: Option<&PathBuf>, plan: &PathBuf, destination: &str) -> Result<()> {
    let markdown = fs::read_to_string(plan)
        .context(format!("Failed to read plan from {}", plan.display()))?;

    let config = Config::load(config_path)?;
    let credentials = Credentials::resolve(&config);
    let gateway = Gateway::new(&config, credentials)?;

    let mut session = Session::new();
    session.begin_submission()?;
    session.complete_submission(destination, Itinerary::new(markdown), Vec::new());

    ChatRepl::new(&gateway, &mut session).run().await
}

fn print_flights(flights: &[FlightOption]) {
    println!();
    println!("{}", "Flight options (cheapest first)".bright_cyan().bold());
    println!(
        "{:<20} {:<8} {:<10} {:<10} {:<9} {:>7}",
        "Carrier".bold(),
        "Flight".bold(),
        "Departs".bold(),
        "Arrives".bold(),
        "Duration".bold(),
        "Price".bold()
    );
    for option in flights {
        println!(
            "{:<20} {:<8} {:<10} {:<10} {:<9} {:>7}",
            option.carrier,
            option.flight_code,
            option.departure.time,
            option.arrival.time,
            option.duration,
            format!(
                "{}{}",
                wayfarer::currency_symbol(&option.price.currency_code),
                option.price.amount
            )
        );
    }
}
