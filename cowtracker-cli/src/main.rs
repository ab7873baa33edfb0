//! CowTracker CLI
//!
//! Command-line interface for the CowTracker API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use cowtracker_client::CowTrackerClient;
use cowtracker_types::{CowId, CreateCowRequest, HealthStatus, UpdateCowRequest};
use exchange_rates::format_conversion;

#[derive(Parser)]
#[command(name = "cowtracker")]
#[command(author, version, about = "CowTracker API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the CowTracker API
    #[arg(
        long,
        env = "COWTRACKER_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// Livestock records
    Cow {
        #[command(subcommand)]
        action: CowCommands,
    },
    /// Convert an amount between currencies, e.g. `convert 1500000 CLP USD`
    Convert {
        amount: Decimal,
        from: String,
        to: String,
        /// Rate date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Latest dollar, UF and UTM values
    Indicators {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Dollar and UF trends with pricing advice
    Trends {
        /// Days to look back
        #[arg(long)]
        days: Option<u32>,
        /// Last day of the period (default today)
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },
    /// List well-known central bank series
    Series,
}

#[derive(Subcommand)]
enum CowCommands {
    /// List all cows
    List,
    /// Get one cow
    Get { id: CowId },
    /// Register a cow
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        #[arg(long)]
        age: u32,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// healthy, sick or under_treatment
        #[arg(long, default_value = "healthy")]
        health: HealthStatus,
    },
    /// Change some fields of a cow
    Update {
        id: CowId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        health: Option<HealthStatus>,
    },
    /// Remove a cow
    Delete { id: CowId },
    /// Cows of a breed
    Breed { breed: String },
    /// Cows in a health state
    Status { status: HealthStatus },
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CowTrackerClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            if client.health().await? {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Cow { action } => match action {
            CowCommands::List => print_json(&client.list_cows().await?)?,
            CowCommands::Get { id } => print_json(&client.get_cow(id).await?)?,
            CowCommands::Create {
                name,
                breed,
                age,
                weight,
                health,
            } => {
                let req = CreateCowRequest {
                    name,
                    breed,
                    age,
                    weight,
                    health_status: health,
                };
                print_json(&client.create_cow(&req).await?)?;
            }
            CowCommands::Update {
                id,
                name,
                breed,
                age,
                weight,
                health,
            } => {
                let req = UpdateCowRequest {
                    name,
                    breed,
                    age,
                    weight,
                    health_status: health,
                };
                print_json(&client.update_cow(id, &req).await?)?;
            }
            CowCommands::Delete { id } => {
                println!("{}", client.delete_cow(id).await?.message);
            }
            CowCommands::Breed { breed } => print_json(&client.cows_by_breed(&breed).await?)?,
            CowCommands::Status { status } => {
                print_json(&client.cows_by_health(status).await?)?
            }
        },

        Commands::Convert {
            amount,
            from,
            to,
            date,
        } => {
            let response = client.convert(amount, &from, &to, date).await?;
            println!("{}", format_conversion(&response.result));
            print_json(&response)?;
        }

        Commands::Indicators { date } => print_json(&client.economic_indicators(date).await?)?,

        Commands::Trends { days, end_date } => {
            let trends = client.price_trends(days, end_date).await?;
            print_json(&trends)?;
            for rec in &trends.recommendations {
                println!("💡 {}", rec);
            }
        }

        Commands::Series => {
            for series in client.series_catalogue().await? {
                println!("{:<20} {}", series.code, series.description);
            }
        }
    }

    Ok(())
}
