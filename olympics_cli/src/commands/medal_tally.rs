//! The `medal-tally` subcommand: medals per region, per year or per country.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use olympics_lib::selector::{country_list, country_year_list};
use olympics_lib::tally::medal_tally;
use olympics_lib::{Dataset, Selector, OVERALL};

use crate::commands::{selector, suggestion};
use crate::output::{build_medal_tally_rows, print_empty_notice, print_rows, write_csv, OutputFormat};

/// Arguments for the `medal-tally` subcommand.
///
/// With neither filter set, ranks every region over all Games. A year ranks
/// regions for that Games; a country shows its own all-time row.
#[derive(Args)]
pub struct MedalTallyArgs {
    /// Olympic year (e.g., 2016), or Overall for every Games
    #[arg(long, default_value = OVERALL)]
    pub year: String,

    /// Region name, or Overall for every country
    #[arg(long, default_value = OVERALL)]
    pub country: String,

    /// Also write the tally as CSV to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: &MedalTallyArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let year = selector(&args.year)?;
    let country = selector(&args.country)?;

    let tally = medal_tally(ds, &year, &country);
    eprintln!("{}", tally.view.title());

    if tally.is_empty() {
        let (years, _) = country_year_list(ds);
        let year_sel = Selector::parse(&year);
        let country_sel = Selector::parse(&country);
        match (year_sel.value(), country_sel.value()) {
            (Some(y), _) if !years.iter().any(|known| known == y) => {
                print_empty_notice("Games", y, suggestion(y, &years).as_deref());
                eprintln!("Hint: Run 'olympics lists years' to see the available years.");
            }
            (_, Some(c)) => {
                print_empty_notice("medals", c, suggestion(c, &country_list(ds)).as_deref());
            }
            _ => print_empty_notice("medals", tally.view.title(), None),
        }
        return Ok(());
    }

    let rows = build_medal_tally_rows(&tally.rows);
    print_rows(&rows, format, "medalTally", "row")?;

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("failed to create export file {}", path.display()))?;
        write_csv(file, &rows)?;
        tracing::info!("Exported {} rows to {}", rows.len(), path.display());
    }

    Ok(())
}
