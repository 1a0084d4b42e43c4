//! Athlete views: medal leaderboards, body measurements and age profiles.

use std::collections::{BTreeMap, HashMap, HashSet};

use olympics_data::types::{Medal, Sex};
use serde::Serialize;

use crate::preprocess::{Dataset, OlympicRecord};
use crate::selector::Selector;
use crate::stats::Summary;

/// Rows kept by [`most_successful`].
pub const MOST_SUCCESSFUL_LIMIT: usize = 15;
/// Rows kept by [`top_athletes_countrywise`].
pub const COUNTRY_TOP_LIMIT: usize = 10;
/// Medal label for athletes without a medal.
pub const NO_MEDAL: &str = "No Medal";

pub fn medal_label(medal: Option<Medal>) -> &'static str {
    medal.map(|m| m.as_str()).unwrap_or(NO_MEDAL)
}

/// An athlete's place on a medal leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteRank {
    pub rank: usize,
    pub name: String,
    pub medals: u32,
    pub sport: String,
    pub region: Option<String>,
}

/// Counts medal rows per athlete name and keeps the `limit` largest counts.
/// Equal counts keep the order in which the athletes first appear; sport and
/// region come from that first row.
fn rank_athletes<'a, I>(medal_rows: I, limit: usize) -> Vec<AthleteRank>
where
    I: IntoIterator<Item = &'a OlympicRecord>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(&OlympicRecord, u32)> = Vec::new();
    for record in medal_rows {
        match index.get(record.event.name.as_str()) {
            Some(&i) => tallies[i].1 += 1,
            None => {
                index.insert(record.event.name.as_str(), tallies.len());
                tallies.push((record, 1));
            }
        }
    }

    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, (first, medals))| AthleteRank {
            rank: idx + 1,
            name: first.event.name.clone(),
            medals,
            sport: first.event.sport.clone(),
            region: first.region.clone(),
        })
        .collect()
}

/// The 15 athletes with the most medals, optionally within one sport.
pub fn most_successful(ds: &Dataset, sport: &str) -> Vec<AthleteRank> {
    let sport = Selector::parse(sport);
    rank_athletes(
        ds.iter()
            .filter(|r| r.has_medal())
            .filter(|r| sport.matches(Some(r.event.sport.as_str()))),
        MOST_SUCCESSFUL_LIMIT,
    )
}

/// The 10 athletes with the most medals for one country.
pub fn top_athletes_countrywise(ds: &Dataset, country: &str) -> Vec<AthleteRank> {
    let country = Selector::parse(country);
    rank_athletes(
        ds.iter()
            .filter(|r| r.has_medal())
            .filter(|r| country.matches(r.region())),
        COUNTRY_TOP_LIMIT,
    )
}

/// First row of every (name, region) pair.
fn unique_athletes(ds: &Dataset) -> Vec<&OlympicRecord> {
    let mut seen = HashSet::new();
    ds.iter()
        .filter(|r| seen.insert((r.event.name.as_str(), r.region())))
        .collect()
}

/// One point of the height/weight scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMeasurement {
    pub name: String,
    pub sport: String,
    pub sex: Sex,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub medal: String,
}

impl BodyMeasurement {
    /// Both measurements are recorded.
    pub fn is_plottable(&self) -> bool {
        self.weight.is_some() && self.height.is_some()
    }
}

/// Weight and height of each athlete (first row per name and region),
/// optionally restricted to one sport. Every athlete gets a row; missing
/// measurements stay `None`.
pub fn weight_v_height(ds: &Dataset, sport: &str) -> Vec<BodyMeasurement> {
    let sport = Selector::parse(sport);
    unique_athletes(ds)
        .into_iter()
        .filter(|r| sport.matches(Some(r.event.sport.as_str())))
        .map(|r| BodyMeasurement {
            name: r.event.name.clone(),
            sport: r.event.sport.clone(),
            sex: r.event.sex,
            weight: r.event.weight,
            height: r.event.height,
            medal: medal_label(r.event.medal).to_string(),
        })
        .collect()
}

/// Ages of one group of athletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSeries {
    pub label: String,
    pub ages: Vec<f64>,
}

impl AgeSeries {
    pub fn summary(&self) -> Option<Summary> {
        Summary::of(&self.ages)
    }
}

/// Age samples for all athletes and for gold, silver and bronze medalists,
/// in that order. Each athlete counts once (first row per name and region);
/// unknown ages are skipped.
pub fn age_distribution(ds: &Dataset) -> Vec<AgeSeries> {
    let athletes = unique_athletes(ds);

    let mut series = vec![AgeSeries {
        label: "Overall".to_string(),
        ages: ages_of(&athletes, |_| true),
    }];
    for medal in Medal::ALL {
        series.push(AgeSeries {
            label: medal.to_string(),
            ages: ages_of(&athletes, |r| r.event.medal == Some(medal)),
        });
    }
    series
}

fn ages_of<F>(athletes: &[&OlympicRecord], keep: F) -> Vec<f64>
where
    F: Fn(&OlympicRecord) -> bool,
{
    athletes
        .iter()
        .copied()
        .filter(|r| keep(*r))
        .filter_map(|r| r.event.age.map(f64::from))
        .collect()
}

/// Age profile of one sport's gold medalists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportAgeSummary {
    pub sport: String,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Gold medalist ages per sport, youngest median first.
pub fn gold_age_by_sport(ds: &Dataset) -> Vec<SportAgeSummary> {
    let mut by_sport: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in unique_athletes(ds) {
        if r.event.medal != Some(Medal::Gold) {
            continue;
        }
        if let Some(age) = r.event.age {
            by_sport
                .entry(r.event.sport.as_str())
                .or_default()
                .push(f64::from(age));
        }
    }

    let mut out: Vec<SportAgeSummary> = by_sport
        .into_iter()
        .filter_map(|(sport, ages)| {
            Some(SportAgeSummary {
                sport: sport.to_string(),
                summary: Summary::of(&ages)?,
            })
        })
        .collect();
    // BTreeMap order already breaks ties by sport name; the sort is stable.
    out.sort_by(|a, b| a.summary.median.total_cmp(&b.summary.median));
    out
}
