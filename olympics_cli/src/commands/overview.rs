//! Overall analysis subcommands: headline stats, participation trends, the
//! events heatmap and the most successful athletes.

use anyhow::Result;
use clap::Args;
use olympics_lib::athletes::most_successful;
use olympics_lib::selector::sport_list;
use olympics_lib::trends::{data_over_time, events_heatmap, overall_stats, TrendColumn};
use olympics_lib::validation;
use olympics_lib::Dataset;

use crate::commands::{selector, suggestion, SportArgs};
use crate::output::{
    build_athlete_rank_rows, build_stat_rows, build_year_count_rows, print_empty_notice,
    print_heatmap, print_rows, OutputFormat,
};

/// Arguments for the `trend` subcommand.
#[derive(Args)]
pub struct TrendArgs {
    /// What to count per Games: region (nations), event (events), name (athletes)
    #[arg(long, default_value = "region")]
    pub column: String,
}

pub fn run_stats(ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let stats = overall_stats(ds);
    eprintln!("Top Statistics ({} Games)", ds.season());
    print_rows(&build_stat_rows(&stats), format, "statistics", "statistic")
}

pub fn run_trend(args: &TrendArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let column: TrendColumn = validation::validate_trend_column(&args.column)?;
    let series = data_over_time(ds, column);
    if series.is_empty() {
        eprintln!("No Games found in the dataset.");
        return Ok(());
    }
    eprintln!("Participating {} over the years", column.label());
    print_rows(&build_year_count_rows(&series), format, "trend", "edition")
}

pub fn run_events_heatmap(ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let grid = events_heatmap(ds);
    if grid.is_empty() {
        eprintln!("No events found in the dataset.");
        return Ok(());
    }
    eprintln!(
        "Number of events per sport over time ({} events in total)",
        grid.total()
    );
    print_heatmap(&grid, format)
}

pub fn run_most_successful(args: &SportArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let sport = selector(&args.sport)?;
    let ranks = most_successful(ds, &sport);
    if ranks.is_empty() {
        let known = sport_list(ds);
        let hint = if known.iter().any(|s| s.eq_ignore_ascii_case(&sport)) {
            None
        } else {
            suggestion(&sport, &known)
        };
        print_empty_notice("medal winners", &sport, hint.as_deref());
        return Ok(());
    }
    eprintln!("Most successful athletes ({})", sport);
    print_rows(&build_athlete_rank_rows(&ranks), format, "athletes", "athlete")
}
