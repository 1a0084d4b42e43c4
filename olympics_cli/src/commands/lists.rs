//! The `lists` subcommand: the values accepted by the other selectors.

use anyhow::{bail, Result};
use clap::Args;
use olympics_lib::selector::{country_list, country_year_list, sport_list};
use olympics_lib::Dataset;

use crate::output::{build_list_rows, print_rows, OutputFormat};

/// Arguments for the `lists` subcommand.
#[derive(Args)]
pub struct ListsArgs {
    /// Which list: years, countries (medal tally options), sports, regions (country-wise options)
    pub kind: String,
}

pub fn run(args: &ListsArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let values = match args.kind.trim().to_lowercase().as_str() {
        "years" | "year" => country_year_list(ds).0,
        "countries" | "country" => country_year_list(ds).1,
        "sports" | "sport" => sport_list(ds),
        "regions" | "region" => country_list(ds),
        _ => bail!(
            "Invalid list: '{}'. Valid options: years, countries, sports, regions",
            args.kind
        ),
    };
    print_rows(&build_list_rows(&values), format, "values", "value")
}
