use std::fmt::Display;
use std::io::Write;

use anyhow::{bail, Result};
use olympics_lib::athletes::{AgeSeries, AthleteRank, BodyMeasurement, SportAgeSummary};
use olympics_lib::tally::{MedalTallyRow, YearMedals};
use olympics_lib::trends::{GenderParticipation, OverallStats, YearCount};
use olympics_lib::Heatmap;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "xml" => Ok(OutputFormat::Xml),
            _ => bail!(
                "Invalid --output value: '{}'. Valid options: table, json, csv, markdown, xml",
                input
            ),
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct MedalTallyOutRow {
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    pub region: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    pub year: String,
    #[tabled(rename = "Gold")]
    #[serde(rename = "Gold")]
    pub gold: u32,
    #[tabled(rename = "Silver")]
    #[serde(rename = "Silver")]
    pub silver: u32,
    #[tabled(rename = "Bronze")]
    #[serde(rename = "Bronze")]
    pub bronze: u32,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    pub total: u32,
}

#[derive(Tabled, Serialize)]
pub struct AthleteRankOutRow {
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Medals")]
    #[serde(rename = "Medals")]
    pub medals: u32,
    #[tabled(rename = "Sport")]
    #[serde(rename = "Sport")]
    pub sport: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    pub region: String,
}

#[derive(Tabled, Serialize)]
pub struct StatRow {
    #[tabled(rename = "Statistic")]
    #[serde(rename = "Statistic")]
    pub statistic: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    pub value: usize,
}

#[derive(Tabled, Serialize)]
pub struct YearCountRow {
    #[tabled(rename = "Edition")]
    #[serde(rename = "Edition")]
    pub edition: u16,
    #[tabled(rename = "Count")]
    #[serde(rename = "Count")]
    pub count: usize,
}

#[derive(Tabled, Serialize)]
pub struct YearMedalsRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    pub year: u16,
    #[tabled(rename = "Medals")]
    #[serde(rename = "Medals")]
    pub medals: u32,
}

#[derive(Tabled, Serialize)]
pub struct GenderRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    pub year: u16,
    #[tabled(rename = "Male")]
    #[serde(rename = "Male")]
    pub male: usize,
    #[tabled(rename = "Female")]
    #[serde(rename = "Female")]
    pub female: usize,
}

#[derive(Tabled, Serialize)]
pub struct MeasurementRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Sport")]
    #[serde(rename = "Sport")]
    pub sport: String,
    #[tabled(rename = "Sex")]
    #[serde(rename = "Sex")]
    pub sex: String,
    #[tabled(rename = "Weight")]
    #[serde(rename = "Weight")]
    pub weight: String,
    #[tabled(rename = "Height")]
    #[serde(rename = "Height")]
    pub height: String,
    #[tabled(rename = "Medal")]
    #[serde(rename = "Medal")]
    pub medal: String,
}

#[derive(Tabled, Serialize)]
pub struct AgeSummaryRow {
    #[tabled(rename = "Group")]
    #[serde(rename = "Group")]
    pub group: String,
    #[tabled(rename = "Count")]
    #[serde(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Mean")]
    #[serde(rename = "Mean")]
    pub mean: String,
    #[tabled(rename = "Min")]
    #[serde(rename = "Min")]
    pub min: String,
    #[tabled(rename = "Median")]
    #[serde(rename = "Median")]
    pub median: String,
    #[tabled(rename = "Max")]
    #[serde(rename = "Max")]
    pub max: String,
}

#[derive(Tabled, Serialize)]
pub struct SportAgeRow {
    #[tabled(rename = "Sport")]
    #[serde(rename = "Sport")]
    pub sport: String,
    #[tabled(rename = "Count")]
    #[serde(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Min")]
    #[serde(rename = "Min")]
    pub min: f64,
    #[tabled(rename = "Q1")]
    #[serde(rename = "Q1")]
    pub q1: f64,
    #[tabled(rename = "Median")]
    #[serde(rename = "Median")]
    pub median: f64,
    #[tabled(rename = "Q3")]
    #[serde(rename = "Q3")]
    pub q3: f64,
    #[tabled(rename = "Max")]
    #[serde(rename = "Max")]
    pub max: f64,
}

#[derive(Tabled, Serialize)]
pub struct ListRow {
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    pub value: String,
}

// -- Row builders --

pub fn build_medal_tally_rows(rows: &[MedalTallyRow]) -> Vec<MedalTallyOutRow> {
    rows.iter()
        .map(|r| MedalTallyOutRow {
            rank: r.rank,
            region: r.region.clone(),
            year: r.year.map(|y| y.to_string()).unwrap_or_default(),
            gold: r.gold,
            silver: r.silver,
            bronze: r.bronze,
            total: r.total,
        })
        .collect()
}

pub fn build_athlete_rank_rows(ranks: &[AthleteRank]) -> Vec<AthleteRankOutRow> {
    ranks
        .iter()
        .map(|a| AthleteRankOutRow {
            rank: a.rank,
            name: a.name.clone(),
            medals: a.medals,
            sport: a.sport.clone(),
            region: a.region.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn build_stat_rows(stats: &OverallStats) -> Vec<StatRow> {
    [
        ("Editions", stats.editions),
        ("Hosts", stats.hosts),
        ("Sports", stats.sports),
        ("Events", stats.events),
        ("Nations", stats.nations),
        ("Athletes", stats.athletes),
    ]
    .into_iter()
    .map(|(statistic, value)| StatRow {
        statistic: statistic.to_string(),
        value,
    })
    .collect()
}

pub fn build_year_count_rows(series: &[YearCount]) -> Vec<YearCountRow> {
    series
        .iter()
        .map(|p| YearCountRow {
            edition: p.year,
            count: p.count,
        })
        .collect()
}

pub fn build_year_medals_rows(series: &[YearMedals]) -> Vec<YearMedalsRow> {
    series
        .iter()
        .map(|y| YearMedalsRow {
            year: y.year,
            medals: y.medals,
        })
        .collect()
}

pub fn build_gender_rows(rows: &[GenderParticipation]) -> Vec<GenderRow> {
    rows.iter()
        .map(|g| GenderRow {
            year: g.year,
            male: g.male,
            female: g.female,
        })
        .collect()
}

pub fn build_measurement_rows(points: &[BodyMeasurement]) -> Vec<MeasurementRow> {
    points
        .iter()
        .map(|p| MeasurementRow {
            name: p.name.clone(),
            sport: p.sport.clone(),
            sex: p.sex.to_string(),
            weight: p.weight.map(|w| w.to_string()).unwrap_or_default(),
            height: p.height.map(|h| h.to_string()).unwrap_or_default(),
            medal: p.medal.clone(),
        })
        .collect()
}

pub fn build_age_summary_rows(series: &[AgeSeries]) -> Vec<AgeSummaryRow> {
    series
        .iter()
        .map(|s| match s.summary() {
            Some(summary) => AgeSummaryRow {
                group: s.label.clone(),
                count: summary.count,
                mean: format!("{:.1}", summary.mean),
                min: format!("{:.0}", summary.min),
                median: format!("{:.1}", summary.median),
                max: format!("{:.0}", summary.max),
            },
            None => AgeSummaryRow {
                group: s.label.clone(),
                count: 0,
                mean: "-".to_string(),
                min: "-".to_string(),
                median: "-".to_string(),
                max: "-".to_string(),
            },
        })
        .collect()
}

pub fn build_sport_age_rows(summaries: &[SportAgeSummary]) -> Vec<SportAgeRow> {
    summaries
        .iter()
        .map(|s| SportAgeRow {
            sport: s.sport.clone(),
            count: s.summary.count,
            min: s.summary.min,
            q1: s.summary.q1,
            median: s.summary.median,
            q3: s.summary.q3,
            max: s.summary.max,
        })
        .collect()
}

pub fn build_list_rows(values: &[String]) -> Vec<ListRow> {
    values
        .iter()
        .map(|v| ListRow { value: v.clone() })
        .collect()
}

// -- Generic row output --

/// Prints rows in the requested format. `root_tag` and `item_tag` name the
/// XML elements.
pub fn print_rows<T: Tabled + Serialize>(
    rows: &[T],
    format: &OutputFormat,
    root_tag: &str,
    item_tag: &str,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => write_csv(std::io::stdout(), rows)?,
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Xml => println!("{}", xml_output::items_to_xml(root_tag, item_tag, rows)?),
    }
    Ok(())
}

/// Writes rows as CSV with a header taken from the serde field names.
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Heatmap output --

fn heatmap_records(grid: &Heatmap) -> Vec<Vec<String>> {
    let format = grid.cell_format();
    let mut records = Vec::with_capacity(grid.sports.len() + 1);

    let mut header = vec!["Sport".to_string()];
    header.extend(grid.years.iter().map(|y| y.to_string()));
    records.push(header);

    for (sport, values) in grid.sports.iter().zip(&grid.values) {
        let mut record = vec![sport.clone()];
        record.extend(values.iter().map(|v| format.format(*v)));
        records.push(record);
    }
    records
}

fn heatmap_table(grid: &Heatmap) -> Table {
    let mut builder = Builder::default();
    for record in heatmap_records(grid) {
        builder.push_record(record);
    }
    builder.build()
}

/// Sports as rows and years as columns for the tabular formats; one
/// `{sport, year, value}` element per non-zero cell for JSON and XML.
pub fn print_heatmap(grid: &Heatmap, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", heatmap_table(grid)),
        OutputFormat::Markdown => {
            let mut table = heatmap_table(grid);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for record in heatmap_records(grid) {
                wtr.write_record(&record)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&grid.cells()),
        OutputFormat::Xml => {
            println!("{}", xml_output::items_to_xml("heatmap", "cell", &grid.cells())?)
        }
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Notice on stderr for a selection that produced no rows, with a "did you
/// mean" hint when a close known value exists.
pub fn print_empty_notice<D: Display>(what: &str, selector: D, suggestion: Option<&str>) {
    eprintln!("No {} found for '{}'.", what, selector);
    if let Some(s) = suggestion {
        eprintln!("Hint: did you mean '{}'?", s);
    }
}
