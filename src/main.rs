// FIO Shipping Planner - Main Entry Point
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use fio_shipping::config::DEFAULT_CONFIG_PATH;
use fio_shipping::{
    FioClient, FioSource, FixtureSource, MaterialRegistry, ShippingCalculator, ShippingConfig, ShippingError,
    ShippingTask, logging, report, sort_tasks,
};

#[derive(Parser, Debug)]
#[command(name = "fio-shipping", version, about = "Shipping tasks for your FIO planets")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Increase log output (-v basic, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Read planets, production and storage from a JSON fixture instead of FIO
    #[arg(long)]
    fixture: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate import/export tasks for all planets, or a single one
    Tasks {
        #[arg(long)]
        planet: Option<String>,

        /// Reference date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<String>,

        /// Print tasks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show stock, mass and volume stored on a planet
    Inventory {
        #[arg(long)]
        planet: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Offline runs never write a config file
    let (config, origin) = ShippingConfig::load(&cli.config, cli.fixture.is_none())?;
    let verbosity = if cli.verbose > 0 { cli.verbose } else { config.logging.verbosity };
    logging::init(verbosity);
    origin.announce(&cli.config);

    config.validate()?;
    config.print_summary();

    let source = build_source(&cli, &config)?;

    match cli.command {
        Command::Tasks { planet, today, json } => {
            let today = parse_today(today.as_deref())?;
            let calculator = ShippingCalculator::load(source, today)
                .await?
                .with_max_concurrent_planets(config.calculator.max_concurrent_planets);

            let tasks = match planet {
                Some(planet_id) => {
                    let mut tasks = calculator.calculate_for_planet(&planet_id).await?;
                    sort_tasks(&mut tasks);
                    tasks
                }
                None => calculator.calculate_all_tasks().await?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print_tasks(&tasks, today);
            }
        }
        Command::Inventory { planet } => {
            let registry = MaterialRegistry::load(source.as_ref()).await?;
            print_inventory(source.as_ref(), &registry, &planet).await?;
        }
    }

    Ok(())
}

fn build_source(cli: &Cli, config: &ShippingConfig) -> Result<Arc<dyn FioSource>, ShippingError> {
    if let Some(path) = &cli.fixture {
        return Ok(Arc::new(FixtureSource::from_path(path)?));
    }

    let (api_key, username) = config.fio.resolve_credentials()?;
    Ok(Arc::new(FioClient::new(&config.fio.base_url, &api_key, &username)?))
}

fn parse_today(value: Option<&str>) -> Result<NaiveDate, ShippingError> {
    match value {
        Some(raw) => report::parse_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

fn print_tasks(tasks: &[ShippingTask], today: NaiveDate) {
    if tasks.is_empty() {
        println!("✅ No shipping tasks - every planet is balanced");
        return;
    }

    println!("📦 {} shipping task(s):", tasks.len());
    for task in tasks {
        println!("  {}", report::task_line(task, today));
    }
}

async fn print_inventory(source: &dyn FioSource, registry: &MaterialRegistry, planet: &str) -> Result<(), ShippingError> {
    let storage = source.get_storage(planet).await?;
    if storage.is_empty() {
        println!("📭 No items found in storage on {}", planet);
        return Ok(());
    }

    println!("📦 Inventory - {}", planet);
    println!("  {:<6} {:<32} {:>10} {:>14} {:>14}", "Ticker", "Name", "Amount", "Volume (m³)", "Mass (t)");

    let mut total_volume = 0.0;
    let mut total_mass = 0.0;
    for item in storage.merged_items() {
        let material = registry.get(&item.ticker)?;
        let volume = item.amount * material.volume;
        let mass = item.amount * material.weight;
        total_volume += volume;
        total_mass += mass;
        println!(
            "  {:<6} {:<32} {:>10.0} {:>14.2} {:>14.2}",
            material.ticker, material.name, item.amount, volume, mass
        );
    }
    println!("  {:<6} {:<32} {:>10} {:>14.2} {:>14.2}", "Total", "", "", total_volume, total_mass);
    Ok(())
}
