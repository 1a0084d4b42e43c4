//! Country-wise subcommands: medals per Games, the sport heatmap and the
//! country's top athletes.

use anyhow::Result;
use olympics_lib::athletes::top_athletes_countrywise;
use olympics_lib::selector::country_list;
use olympics_lib::tally::{country_event_heatmap, yearwise_medal_tally};
use olympics_lib::Dataset;

use crate::commands::{selector, suggestion, CountryArgs};
use crate::output::{
    build_athlete_rank_rows, build_year_medals_rows, print_empty_notice, print_heatmap,
    print_rows, OutputFormat,
};

fn notice_no_medals(ds: &Dataset, country: &str) {
    let known = country_list(ds);
    let hint = if known.iter().any(|c| c == country) {
        None
    } else {
        suggestion(country, &known)
    };
    print_empty_notice("medals", country, hint.as_deref());
}

pub fn run_tally(args: &CountryArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let country = selector(&args.country)?;
    let series = yearwise_medal_tally(ds, &country);
    if series.is_empty() {
        notice_no_medals(ds, &country);
        return Ok(());
    }
    eprintln!("{} Medal Tally over the years", country);
    print_rows(&build_year_medals_rows(&series), format, "medals", "edition")
}

pub fn run_heatmap(args: &CountryArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let country = selector(&args.country)?;
    let grid = country_event_heatmap(ds, &country);
    if grid.is_empty() {
        notice_no_medals(ds, &country);
        return Ok(());
    }
    eprintln!("{} excels in the following sports", country);
    print_heatmap(&grid, format)
}

pub fn run_athletes(args: &CountryArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let country = selector(&args.country)?;
    let ranks = top_athletes_countrywise(ds, &country);
    if ranks.is_empty() {
        notice_no_medals(ds, &country);
        return Ok(());
    }
    eprintln!("Top {} athletes of {}", ranks.len(), country);
    print_rows(&build_athlete_rank_rows(&ranks), format, "athletes", "athlete")
}
