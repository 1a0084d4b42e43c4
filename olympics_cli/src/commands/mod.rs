//! CLI subcommand implementations, grouped the way the explorer's menu is:
//! medal tally, overall analysis, country-wise and athlete-wise views.

pub mod athletes;
pub mod country;
pub mod lists;
pub mod medal_tally;
pub mod overview;

use anyhow::Result;
use clap::Args;
use olympics_lib::validation;
use olympics_lib::OVERALL;

/// Arguments for views that can be narrowed to one sport.
#[derive(Args)]
pub struct SportArgs {
    /// Sport name, or Overall for every sport
    #[arg(long, default_value = OVERALL)]
    pub sport: String,
}

/// Arguments for the country-wise views.
#[derive(Args)]
pub struct CountryArgs {
    /// Region name as listed by `olympics lists regions` (e.g., USA, Germany)
    #[arg(long)]
    pub country: String,
}

/// Sanitized selector value; `Overall` passes through unchanged.
pub(crate) fn selector(input: &str) -> Result<String> {
    Ok(validation::validate_selector(input)?)
}

/// Closest known value to `input`, for "did you mean" hints.
pub(crate) fn suggestion(input: &str, known: &[String]) -> Option<String> {
    validation::closest_match(input, known.iter().map(String::as_str)).map(str::to_string)
}
