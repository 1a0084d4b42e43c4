//! Medal tallies: per region, per year for one country, and the per-sport
//! heatmap for one country.
//!
//! Medals are counted once per team: rows sharing team, NOC, games, year,
//! city, sport, event and medal collapse to one, so a relay gold is a single
//! medal for the delegation rather than one per runner.

use std::collections::{BTreeMap, HashMap, HashSet};

use olympics_data::types::Medal;
use serde::Serialize;

use crate::grid::Heatmap;
use crate::preprocess::{Dataset, OlympicRecord};
use crate::selector::Selector;

#[derive(PartialEq, Eq, Hash)]
struct TeamMedalKey<'a> {
    team: &'a str,
    noc: &'a str,
    games: &'a str,
    year: u16,
    city: &'a str,
    sport: &'a str,
    event: &'a str,
    medal: Option<Medal>,
}

impl<'a> TeamMedalKey<'a> {
    fn of(record: &'a OlympicRecord) -> Self {
        let e = &record.event;
        Self {
            team: &e.team,
            noc: &e.noc,
            games: &e.games,
            year: e.year,
            city: &e.city,
            sport: &e.sport,
            event: &e.event,
            medal: e.medal,
        }
    }
}

/// Rows with team entries collapsed, first occurrence kept.
pub(crate) fn team_medal_rows<'a, I>(records: I) -> Vec<&'a OlympicRecord>
where
    I: IntoIterator<Item = &'a OlympicRecord>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(TeamMedalKey::of(*r)))
        .collect()
}

/// Which of the two selectors were active; decides the shape of the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TallyView {
    /// All years, one row per region.
    Overall,
    /// One year, one row per region.
    Year { year: String },
    /// One country across all years.
    Country { country: String },
    /// One country in one year.
    YearAndCountry { year: String, country: String },
}

impl TallyView {
    fn from_selectors(year: &Selector, country: &Selector) -> Self {
        match (year.value(), country.value()) {
            (None, None) => TallyView::Overall,
            (Some(y), None) => TallyView::Year { year: y.to_string() },
            (None, Some(c)) => TallyView::Country {
                country: c.to_string(),
            },
            (Some(y), Some(c)) => TallyView::YearAndCountry {
                year: y.to_string(),
                country: c.to_string(),
            },
        }
    }

    pub fn title(&self) -> String {
        match self {
            TallyView::Overall => "Overall Medal Tally".to_string(),
            TallyView::Year { year } => format!("Medal Tally in {} Olympics", year),
            TallyView::Country { country } => format!("{} Overall Performance", country),
            TallyView::YearAndCountry { year, country } => {
                format!("{} Performance in {} Olympics", country, year)
            }
        }
    }
}

/// One line of a medal tally.
///
/// `year` is empty unless a year was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTallyRow {
    pub rank: usize,
    pub region: String,
    pub year: Option<u16>,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub view: TallyView,
    pub rows: Vec<MedalTallyRow>,
}

impl MedalTally {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Default, Clone, Copy)]
struct Counts {
    gold: u32,
    silver: u32,
    bronze: u32,
}

impl Counts {
    fn add(&mut self, record: &OlympicRecord) {
        self.gold += record.medals.gold as u32;
        self.silver += record.medals.silver as u32;
        self.bronze += record.medals.bronze as u32;
    }

    fn row(self, region: String, year: Option<u16>) -> MedalTallyRow {
        MedalTallyRow {
            rank: 0,
            region,
            year,
            gold: self.gold,
            silver: self.silver,
            bronze: self.bronze,
            total: self.gold + self.silver + self.bronze,
        }
    }
}

fn assign_ranks(rows: &mut [MedalTallyRow]) {
    for (idx, row) in rows.iter_mut().enumerate() {
        row.rank = idx + 1;
    }
}

/// Medal tally under optional year and country selectors (`Overall` = no
/// filter).
///
/// Rows are regions, sorted by gold, silver, bronze and total (all
/// descending), then region name; a country selector narrows the tally to
/// that country's single row. The per-Games history of a country is
/// [`yearwise_medal_tally`]. Rows without a region are never tallied.
pub fn medal_tally(ds: &Dataset, year: &str, country: &str) -> MedalTally {
    let year = Selector::parse(year);
    let country = Selector::parse(country);
    let view = TallyView::from_selectors(&year, &country);

    let rows = team_medal_rows(
        ds.iter()
            .filter(|r| r.region.is_some())
            .filter(|r| year.matches_year(r.event.year) && country.matches(r.region())),
    );

    let selected_year = year.value().and_then(|y| y.parse::<u16>().ok());
    let mut by_region: HashMap<&str, Counts> = HashMap::new();
    for r in &rows {
        if let Some(region) = r.region() {
            by_region.entry(region).or_default().add(r);
        }
    }
    let mut tally: Vec<MedalTallyRow> = by_region
        .into_iter()
        .map(|(region, counts)| counts.row(region.to_string(), selected_year))
        .collect();
    tally.sort_by(|a, b| {
        (b.gold, b.silver, b.bronze, b.total)
            .cmp(&(a.gold, a.silver, a.bronze, a.total))
            .then_with(|| a.region.cmp(&b.region))
    });

    assign_ranks(&mut tally);
    tracing::debug!("Medal tally '{}': {} rows", view.title(), tally.len());
    MedalTally { view, rows: tally }
}

/// Medals won by one country in one Games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearMedals {
    pub year: u16,
    pub medals: u32,
}

fn country_medal_rows<'a>(ds: &'a Dataset, country: &str) -> Vec<&'a OlympicRecord> {
    let country = Selector::parse(country);
    team_medal_rows(
        ds.iter()
            .filter(|r| r.has_medal())
            .filter(|r| country.matches(r.region())),
    )
}

/// Medals per Games for one country, oldest first. Games without a medal are
/// absent.
pub fn yearwise_medal_tally(ds: &Dataset, country: &str) -> Vec<YearMedals> {
    let mut by_year: BTreeMap<u16, u32> = BTreeMap::new();
    for r in country_medal_rows(ds, country) {
        *by_year.entry(r.event.year).or_default() += 1;
    }
    by_year
        .into_iter()
        .map(|(year, medals)| YearMedals { year, medals })
        .collect()
}

/// Sport x year medal counts for one country. Empty when the country has no
/// medals.
pub fn country_event_heatmap(ds: &Dataset, country: &str) -> Heatmap {
    let rows = country_medal_rows(ds, country);
    Heatmap::count(rows.iter().map(|r| (r.event.sport.as_str(), r.event.year)))
}
