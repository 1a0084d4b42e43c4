mod commands;
mod output;
mod xml_output;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use olympics_lib::config::{self, ConfigOverrides, DEFAULT_CONFIG_FILE};
use olympics_lib::{load_dataset, DataConfig, Dataset};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "olympics")]
#[command(about = "Explore 120 years of Olympic history: medal tallies, trends, countries and athletes")]
struct Cli {
    /// Output format: table, json, csv, markdown, xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Path to athlete_events.csv
    #[arg(long, env = "OLYMPICS_ATHLETES", global = true)]
    athletes: Option<PathBuf>,

    /// Path to noc_regions.csv
    #[arg(long, env = "OLYMPICS_REGIONS", global = true)]
    regions: Option<PathBuf>,

    /// Games to analyse: summer or winter
    #[arg(long, env = "OLYMPICS_SEASON", global = true)]
    season: Option<String>,

    /// Config file (default: ./olympics.toml when present)
    #[arg(long, env = "OLYMPICS_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Medal tally overall, for one year or for one country
    MedalTally(commands::medal_tally::MedalTallyArgs),
    /// Headline statistics: editions, hosts, sports, events, nations, athletes
    Overview,
    /// Nations, events or athletes per Games
    Trend(commands::overview::TrendArgs),
    /// Number of events per sport and year
    EventsHeatmap,
    /// Athletes with the most medals, optionally for one sport
    MostSuccessful(commands::SportArgs),
    /// Medals per Games for one country
    CountryTally(commands::CountryArgs),
    /// Medals per sport and year for one country
    CountryHeatmap(commands::CountryArgs),
    /// Top athletes of one country
    CountryAthletes(commands::CountryArgs),
    /// Height and weight of athletes, optionally for one sport
    HeightWeight(commands::SportArgs),
    /// Male and female athletes per Games
    GenderParticipation,
    /// Age of all athletes and of medalists
    AgeDistribution,
    /// Age of gold medalists per sport
    GoldAge,
    /// Valid values for the year, country and sport selectors
    Lists(commands::lists::ListsArgs),
}

fn resolve_config(cli: &Cli) -> Result<DataConfig> {
    let file = match &cli.config {
        Some(path) => config::load_config_file(path, true)?,
        None => config::load_config_file(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    let overrides = ConfigOverrides {
        athletes: cli.athletes.clone(),
        regions: cli.regions.clone(),
        season: cli.season.clone(),
    };
    let resolved = config::resolve(file, overrides)?;
    tracing::debug!(
        "Data sources: athletes={} regions={} season={}",
        resolved.athletes.display(),
        resolved.regions.display(),
        resolved.season
    );
    Ok(resolved)
}

fn load_with_spinner(config: &DataConfig) -> Result<Dataset> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("loading {}...", config.athletes.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = load_dataset(config);
    spinner.finish_and_clear();
    Ok(result?)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("olympics=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output)?;

    let config = resolve_config(&cli)?;
    let ds = load_with_spinner(&config)?;
    if ds.is_empty() {
        eprintln!(
            "No {} rows found in {}.",
            config.season,
            config.athletes.display()
        );
    }

    match &cli.command {
        Commands::MedalTally(args) => commands::medal_tally::run(args, &ds, &format)?,
        Commands::Overview => commands::overview::run_stats(&ds, &format)?,
        Commands::Trend(args) => commands::overview::run_trend(args, &ds, &format)?,
        Commands::EventsHeatmap => commands::overview::run_events_heatmap(&ds, &format)?,
        Commands::MostSuccessful(args) => {
            commands::overview::run_most_successful(args, &ds, &format)?
        }
        Commands::CountryTally(args) => commands::country::run_tally(args, &ds, &format)?,
        Commands::CountryHeatmap(args) => commands::country::run_heatmap(args, &ds, &format)?,
        Commands::CountryAthletes(args) => commands::country::run_athletes(args, &ds, &format)?,
        Commands::HeightWeight(args) => commands::athletes::run_height_weight(args, &ds, &format)?,
        Commands::GenderParticipation => commands::athletes::run_gender(&ds, &format)?,
        Commands::AgeDistribution => commands::athletes::run_age_distribution(&ds, &format)?,
        Commands::GoldAge => commands::athletes::run_gold_age(&ds, &format)?,
        Commands::Lists(args) => commands::lists::run(args, &ds, &format)?,
    }

    Ok(())
}
