//! Athlete-wise subcommands: age profiles, height vs weight and gender
//! participation.

use anyhow::Result;
use olympics_lib::athletes::{age_distribution, gold_age_by_sport, weight_v_height};
use olympics_lib::selector::sport_list;
use olympics_lib::trends::men_vs_women;
use olympics_lib::Dataset;

use crate::commands::{selector, suggestion, SportArgs};
use crate::output::{
    build_age_summary_rows, build_gender_rows, build_measurement_rows, build_sport_age_rows,
    print_empty_notice, print_json, print_rows, OutputFormat,
};
use crate::xml_output;

/// Summary per group in the tabular formats; JSON and XML carry the raw age
/// samples so they can be plotted.
pub fn run_age_distribution(ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let series = age_distribution(ds);
    eprintln!("Distribution of age");
    match format {
        OutputFormat::Json => print_json(&series),
        OutputFormat::Xml => {
            println!("{}", xml_output::items_to_xml("ageDistribution", "series", &series)?)
        }
        _ => print_rows(&build_age_summary_rows(&series), format, "ageDistribution", "series")?,
    }
    Ok(())
}

pub fn run_gold_age(ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let summaries = gold_age_by_sport(ds);
    if summaries.is_empty() {
        eprintln!("No gold medalists with a recorded age.");
        return Ok(());
    }
    eprintln!("Distribution of age of gold medalists by sport");
    print_rows(&build_sport_age_rows(&summaries), format, "goldAge", "sport")
}

pub fn run_height_weight(args: &SportArgs, ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let sport = selector(&args.sport)?;
    let points = weight_v_height(ds, &sport);
    if points.is_empty() {
        let known = sport_list(ds);
        let hint = if known.iter().any(|s| s.eq_ignore_ascii_case(&sport)) {
            None
        } else {
            suggestion(&sport, &known)
        };
        print_empty_notice("athletes", &sport, hint.as_deref());
        return Ok(());
    }
    let plottable = points.iter().filter(|p| p.is_plottable()).count();
    eprintln!(
        "Height vs weight ({}, {} athletes, {} with both measurements)",
        sport,
        points.len(),
        plottable
    );
    print_rows(&build_measurement_rows(&points), format, "measurements", "athlete")
}

pub fn run_gender(ds: &Dataset, format: &OutputFormat) -> Result<()> {
    let rows = men_vs_women(ds);
    if rows.is_empty() {
        eprintln!("No Games found in the dataset.");
        return Ok(());
    }
    eprintln!("Men vs women participation over the years");
    print_rows(&build_gender_rows(&rows), format, "participation", "edition")
}
