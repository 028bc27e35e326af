use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clinorm::convert;
use clinorm::height::{self, HeightFormatter};
use clinorm::shell::{Config, Session};
use clinorm::units::UnitConversionTable;
use clinorm::weight;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "clinorm")]
#[command(about = "Normalize free-form patient weight and height", long_about = None)]
struct Cli {
    /// Config file (default: clinorm.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for patients one at a time (default)
    Interactive,

    /// Normalize a weight to pounds
    Weight {
        /// Weight text (e.g., "70 kg", "11st 6", "100 jin")
        text: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Normalize a height to feet and inches
    Height {
        /// Height text (e.g., "5'11", "180cm", "5.5 ft")
        text: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert metric weight and height to imperial
    Convert {
        /// Weight in kilograms
        #[arg(long)]
        kg: f64,

        /// Height in centimeters
        #[arg(long)]
        cm: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every unit spelling the normalizers accept
    Units,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive(config),
        Commands::Weight { text, json } => normalize_weight(&text, json),
        Commands::Height { text, json } => normalize_height(&text, json, &config),
        Commands::Convert { kg, cm, json } => convert_metrics(kg, cm, json),
        Commands::Units => list_units(),
    }
}

fn run_interactive(config: Config) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    let summary = session.run().context("Interactive session failed")?;
    info!(
        reports = summary.reports,
        retries = summary.retries,
        "session finished"
    );

    Ok(())
}

fn normalize_weight(text: &str, json: bool) -> Result<()> {
    let weight = weight::parse_weight(text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&weight)?);
    } else {
        println!("{}", weight);
    }

    Ok(())
}

fn normalize_height(text: &str, json: bool, config: &Config) -> Result<()> {
    let (notation, height) = height::parse_height_classified(text)?;

    if json {
        let value = serde_json::json!({
            "feet": height.feet,
            "inches": height.inches,
            "notation": notation,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let formatter = HeightFormatter::new(config.report.height_style);
        println!("{}", formatter.format(&height));
    }

    Ok(())
}

fn convert_metrics(kg: f64, cm: f64, json: bool) -> Result<()> {
    let result = convert::convert_health_metrics(kg, cm)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", "-".repeat(30));
        println!("Weight: {} lbs  {} oz", result.weight_lbs, result.weight_oz);
        println!("Height: {} ft   {} in", result.height_ft, result.height_in);
        println!("{}", "-".repeat(30));
    }

    Ok(())
}

fn list_units() -> Result<()> {
    let table = UnitConversionTable::global();

    println!("Units ({} spellings):", table.alias_count());
    for def in table.units() {
        println!(
            "  - {} ({}, x{}): {}",
            def.canonical,
            def.dimension,
            def.factor,
            def.aliases.join(", ")
        );
    }

    Ok(())
}
