//! Travel CLI
//!
//! Runs the travel tools from the command line and hosts the chat agent on
//! stdin/stdout.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use travel_agent::{ChannelEvent, InProcessMessaging, TravelAgent};
use travel_core::{
    config::load_config_or_default,
    logging::{init_logging, with_startup_logging, LogConfig},
    Credentials, TravelConfig,
};
use travel_tools::{register_travel_tools, ToolRegistry};

#[derive(Parser)]
#[command(name = "travel")]
#[command(version, about = "Flight, hotel and destination search tools for chat agents")]
struct Cli {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, global = true, default_value = "travel.toml")]
    config: PathBuf,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct TripArgs {
    /// Destination city or area
    #[arg(long)]
    destination: String,
    /// Number of travelers
    #[arg(long)]
    travelers: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum HotelProvider {
    Apify,
    Serpapi,
}

impl HotelProvider {
    fn tool_name(self) -> &'static str {
        match self {
            HotelProvider::Apify => "search_hotels_apify",
            HotelProvider::Serpapi => "search_hotels_serpapi",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List registered tools with their parameter schemas
    Tools,
    /// Search hotels
    Hotels {
        #[command(flatten)]
        trip: TripArgs,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        checkin: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        checkout: String,
        /// budget, mid-range or luxury
        #[arg(long)]
        budget: Option<String>,
        /// Hotel data provider
        #[arg(long, value_enum, default_value = "serpapi")]
        provider: HotelProvider,
    },
    /// Search flights
    Flights {
        /// Origin airport code or city
        #[arg(long)]
        origin: String,
        /// Destination airport code or city
        #[arg(long)]
        destination: String,
        /// Outbound date (YYYY-MM-DD)
        #[arg(long)]
        depart: String,
        /// Return date (YYYY-MM-DD)
        #[arg(long = "return")]
        return_date: Option<String>,
        /// Number of adult passengers
        #[arg(long)]
        travelers: Option<u32>,
        /// budget, mid-range or luxury
        #[arg(long)]
        budget: Option<String>,
    },
    /// Research a destination on Wikivoyage
    Research {
        /// Destination name
        destination: String,
        /// Trip length in days
        #[arg(long)]
        duration: Option<u32>,
        /// Interests (repeatable)
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
    /// Build a day-by-day itinerary
    Itinerary {
        #[command(flatten)]
        trip: TripArgs,
        /// Trip length in days
        #[arg(long)]
        duration: u32,
        /// Budget level
        #[arg(long, default_value = "mid-range")]
        budget: String,
    },
    /// Estimate a trip budget
    Budget {
        #[command(flatten)]
        trip: TripArgs,
        /// Trip length in days
        #[arg(long)]
        duration: u32,
        /// Travel style (budget or luxury)
        #[arg(long, default_value = "budget")]
        style: String,
    },
    /// Run the chat agent on stdin/stdout
    Agent {
        /// Channel to post into
        #[arg(long)]
        channel: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = with_startup_logging(cli.json_logs, || load_config_or_default(&cli.config));
    let mut log_config = LogConfig::from(&config.logging);
    log_config.json |= cli.json_logs;
    init_logging(log_config);

    let registry = ToolRegistry::new();
    register_travel_tools(&registry, &config.providers, &Credentials::from_env())
        .context("failed to register travel tools")?;

    match cli.command {
        Commands::Tools => print_json(&Value::Array(registry.to_openai_functions())),
        Commands::Hotels {
            trip,
            checkin,
            checkout,
            budget,
            provider,
        } => {
            let mut args = trip_args(&trip);
            args.insert("checkin_date".to_string(), json!(checkin));
            args.insert("checkout_date".to_string(), json!(checkout));
            insert_some(&mut args, "budget_preference", budget);
            run_tool(&registry, provider.tool_name(), args).await
        }
        Commands::Flights {
            origin,
            destination,
            depart,
            return_date,
            travelers,
            budget,
        } => {
            let mut args = Map::new();
            args.insert("origin".to_string(), json!(origin));
            args.insert("destination".to_string(), json!(destination));
            args.insert("departure_date".to_string(), json!(depart));
            insert_some(&mut args, "return_date", return_date);
            insert_some(&mut args, "travelers", travelers);
            insert_some(&mut args, "budget_preference", budget);
            run_tool(&registry, "search_flights_serpapi", args).await
        }
        Commands::Research {
            destination,
            duration,
            interests,
        } => {
            let mut args = Map::new();
            args.insert("destination".to_string(), json!(destination));
            insert_some(&mut args, "duration", duration);
            if !interests.is_empty() {
                args.insert("interests".to_string(), json!(interests));
            }
            run_tool(&registry, "research_destination", args).await
        }
        Commands::Itinerary { trip, duration, budget } => {
            let mut args = trip_args(&trip);
            args.insert("duration".to_string(), json!(duration));
            args.insert("budget".to_string(), json!(budget));
            args.entry("travelers").or_insert(json!(1));
            run_tool(&registry, "create_itinerary", args).await
        }
        Commands::Budget { trip, duration, style } => {
            let mut args = trip_args(&trip);
            args.insert("duration".to_string(), json!(duration));
            args.insert("style".to_string(), json!(style));
            args.entry("travelers").or_insert(json!(1));
            run_tool(&registry, "calculate_budget", args).await
        }
        Commands::Agent { channel } => run_agent(&config, registry, channel).await,
    }
}

fn trip_args(trip: &TripArgs) -> Map<String, Value> {
    let mut args = Map::new();
    args.insert("destination".to_string(), json!(trip.destination));
    insert_some(&mut args, "travelers", trip.travelers);
    args
}

fn insert_some<T: Into<Value>>(args: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        args.insert(key.to_string(), value.into());
    }
}

async fn run_tool(registry: &ToolRegistry, name: &str, args: Map<String, Value>) -> Result<()> {
    let result = registry
        .execute(name, Value::Object(args))
        .await
        .with_context(|| format!("{} failed", name))?;
    print_json(&result)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_agent(config: &TravelConfig, registry: ToolRegistry, channel: Option<String>) -> Result<()> {
    let channel = channel.unwrap_or_else(|| config.agent.default_channel.clone());

    let (messaging, inbox) = InProcessMessaging::new();
    let mut replies = messaging.subscribe(&channel);
    let agent = TravelAgent::new(&config.agent, registry, Arc::new(messaging.clone()));

    let (stop, shutdown) = watch::channel(false);
    let runner = tokio::spawn(async move { agent.run(inbox, shutdown).await });

    println!("Agent is running on #{}. Type /tools for tools, Ctrl+C to stop.", channel);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                messaging.deliver(ChannelEvent::text("cli", &channel, &line))?;
                let reply = replies.recv().await.context("agent stopped replying")?;
                println!("{}", reply.content);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, shutting down");
                break;
            }
        }
    }

    stop.send(true).ok();
    runner.await.context("agent task panicked")??;
    Ok(())
}
