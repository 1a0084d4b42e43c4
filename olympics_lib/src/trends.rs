//! Participation over time and headline counts.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use olympics_data::types::Sex;
use serde::Serialize;

use crate::grid::Heatmap;
use crate::preprocess::{Dataset, OlympicRecord};

/// Column whose distinct values are counted per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColumn {
    /// Participating nations (regions).
    Region,
    Event,
    /// Athletes, by name.
    Athlete,
}

impl TrendColumn {
    pub fn label(&self) -> &'static str {
        match self {
            TrendColumn::Region => "Nations",
            TrendColumn::Event => "Events",
            TrendColumn::Athlete => "Athletes",
        }
    }

    fn value<'a>(&self, record: &'a OlympicRecord) -> Option<&'a str> {
        match self {
            TrendColumn::Region => record.region(),
            TrendColumn::Event => Some(record.event.event.as_str()),
            TrendColumn::Athlete => Some(record.event.name.as_str()),
        }
    }
}

impl fmt::Display for TrendColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrendColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "region" | "nations" => Ok(TrendColumn::Region),
            "event" | "events" => Ok(TrendColumn::Event),
            "name" | "athlete" | "athletes" => Ok(TrendColumn::Athlete),
            _ => Err(format!(
                "unknown trend column '{}'. Valid values: region (nations), event (events), name (athletes)",
                s
            )),
        }
    }
}

/// Distinct count for one Games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: u16,
    pub count: usize,
}

/// Number of distinct non-missing `column` values per year, oldest first.
pub fn data_over_time(ds: &Dataset, column: TrendColumn) -> Vec<YearCount> {
    let mut by_year: BTreeMap<u16, HashSet<&str>> = BTreeMap::new();
    for record in ds.iter() {
        let values = by_year.entry(record.event.year).or_default();
        if let Some(value) = column.value(record) {
            values.insert(value);
        }
    }
    by_year
        .into_iter()
        .map(|(year, values)| YearCount {
            year,
            count: values.len(),
        })
        .collect()
}

/// Distinct male and female athletes in one Games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderParticipation {
    pub year: u16,
    pub male: usize,
    pub female: usize,
}

/// Distinct athletes per year and sex. Every year in the data gets a row;
/// a sex with nobody competing reports zero.
pub fn men_vs_women(ds: &Dataset) -> Vec<GenderParticipation> {
    let mut by_year: BTreeMap<u16, (HashSet<&str>, HashSet<&str>)> = BTreeMap::new();
    for record in ds.iter() {
        let (male, female) = by_year.entry(record.event.year).or_default();
        match record.event.sex {
            Sex::Male => male.insert(record.event.name.as_str()),
            Sex::Female => female.insert(record.event.name.as_str()),
        };
    }
    by_year
        .into_iter()
        .map(|(year, (male, female))| GenderParticipation {
            year,
            male: male.len(),
            female: female.len(),
        })
        .collect()
}

/// Headline numbers for the whole season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallStats {
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub nations: usize,
    pub athletes: usize,
}

pub fn overall_stats(ds: &Dataset) -> OverallStats {
    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
        values.collect::<HashSet<_>>().len()
    }

    OverallStats {
        editions: ds.iter().map(|r| r.event.year).collect::<HashSet<_>>().len(),
        hosts: distinct(ds.iter().map(|r| r.event.city.as_str())),
        sports: distinct(ds.iter().map(|r| r.event.sport.as_str())),
        events: distinct(ds.iter().map(|r| r.event.event.as_str())),
        nations: distinct(ds.iter().filter_map(|r| r.region())),
        athletes: distinct(ds.iter().map(|r| r.event.name.as_str())),
    }
}

/// Number of distinct events per sport and year.
pub fn events_heatmap(ds: &Dataset) -> Heatmap {
    let unique: HashSet<(u16, &str, &str)> = ds
        .iter()
        .map(|r| (r.event.year, r.event.sport.as_str(), r.event.event.as_str()))
        .collect();
    Heatmap::count(unique.into_iter().map(|(year, sport, _)| (sport, year)))
}
