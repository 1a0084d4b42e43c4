//! Preprocessing: season filter, region join, de-duplication and medal flags.
//!
//! The result is a [`Dataset`], built once per process and only ever read
//! afterwards. All aggregation helpers work from it, never from raw rows.

use std::collections::{HashMap, HashSet};

use olympics_data::types::{AthleteEvent, Medal, NocRegion, Season, Sex};

use crate::config::DataConfig;
use crate::error::OlympicsError;

/// NOC code to region name mapping.
#[derive(Debug, Clone, Default)]
pub struct RegionLookup {
    regions: HashMap<String, Option<String>>,
}

impl RegionLookup {
    /// Builds the lookup from `noc_regions.csv` rows. A repeated code keeps
    /// its first region.
    pub fn from_regions(rows: &[NocRegion]) -> Self {
        let mut regions = HashMap::with_capacity(rows.len());
        for row in rows {
            if regions.contains_key(&row.noc) {
                tracing::warn!("Duplicate NOC code {} in region lookup, keeping first", row.noc);
                continue;
            }
            regions.insert(row.noc.clone(), row.region.clone());
        }
        Self { regions }
    }

    /// Region for a code, or `None` when the code is unknown or unmapped.
    pub fn region_for(&self, noc: &str) -> Option<&str> {
        self.regions.get(noc).and_then(|r| r.as_deref())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// One-hot expansion of the medal column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MedalFlags {
    pub gold: bool,
    pub silver: bool,
    pub bronze: bool,
}

impl MedalFlags {
    pub fn from_medal(medal: Option<Medal>) -> Self {
        Self {
            gold: medal == Some(Medal::Gold),
            silver: medal == Some(Medal::Silver),
            bronze: medal == Some(Medal::Bronze),
        }
    }

    pub fn has(&self, medal: Medal) -> bool {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    /// Number of medals this row contributes (0 or 1).
    pub fn count(&self) -> u32 {
        self.gold as u32 + self.silver as u32 + self.bronze as u32
    }
}

/// A season-filtered athlete-event row with its region and medal flags.
#[derive(Debug, Clone, PartialEq)]
pub struct OlympicRecord {
    pub event: AthleteEvent,
    pub region: Option<String>,
    pub medals: MedalFlags,
}

impl OlympicRecord {
    fn joined(event: AthleteEvent, regions: &RegionLookup) -> Self {
        let region = regions.region_for(&event.noc).map(str::to_string);
        let medals = MedalFlags::from_medal(event.medal);
        Self {
            event,
            region,
            medals,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn has_medal(&self) -> bool {
        self.event.medal.is_some()
    }
}

/// The preprocessed, read-only table every view is computed from.
#[derive(Debug, Clone)]
pub struct Dataset {
    season: Season,
    records: Vec<OlympicRecord>,
}

impl Dataset {
    pub fn season(&self) -> Season {
        self.season
    }

    pub fn records(&self) -> &[OlympicRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OlympicRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The underlying athlete-event rows, without the joined columns.
    pub fn raw_events(&self) -> Vec<AthleteEvent> {
        self.records.iter().map(|r| r.event.clone()).collect()
    }
}

/// Full-row identity used for exact de-duplication. Floats compare by bit
/// pattern so the key can be hashed.
#[derive(PartialEq, Eq, Hash)]
struct RowKey<'a> {
    id: u32,
    name: &'a str,
    sex: Sex,
    age: Option<u8>,
    height: Option<u64>,
    weight: Option<u64>,
    team: &'a str,
    noc: &'a str,
    games: &'a str,
    year: u16,
    season: Season,
    city: &'a str,
    sport: &'a str,
    event: &'a str,
    medal: Option<Medal>,
    region: Option<&'a str>,
}

impl<'a> RowKey<'a> {
    fn of(record: &'a OlympicRecord) -> Self {
        let e = &record.event;
        Self {
            id: e.id,
            name: &e.name,
            sex: e.sex,
            age: e.age,
            height: e.height.map(f64::to_bits),
            weight: e.weight.map(f64::to_bits),
            team: &e.team,
            noc: &e.noc,
            games: &e.games,
            year: e.year,
            season: e.season,
            city: &e.city,
            sport: &e.sport,
            event: &e.event,
            medal: e.medal,
            region: record.region(),
        }
    }
}

fn drop_duplicate_rows(records: Vec<OlympicRecord>) -> Vec<OlympicRecord> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(records.len());
        records.iter().map(|r| seen.insert(RowKey::of(r))).collect()
    };
    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect()
}

/// Builds the working table: keeps only `season` rows, attaches regions by
/// NOC code (unknown codes keep a missing region), drops exact duplicate
/// rows keeping the first, and derives the medal flags.
///
/// Running it again on [`Dataset::raw_events`] with the same season yields
/// the same rows.
pub fn preprocess(events: Vec<AthleteEvent>, regions: &RegionLookup, season: Season) -> Dataset {
    let raw_rows = events.len();
    let joined: Vec<OlympicRecord> = events
        .into_iter()
        .filter(|e| e.season == season)
        .map(|e| OlympicRecord::joined(e, regions))
        .collect();
    let season_rows = joined.len();

    let records = drop_duplicate_rows(joined);
    let unmapped = records.iter().filter(|r| r.region.is_none()).count();

    tracing::info!(
        "Preprocessed {} rows: {} {} rows, {} after de-duplication, {} without region",
        raw_rows,
        season_rows,
        season,
        records.len(),
        unmapped
    );

    Dataset { season, records }
}

/// Reads both input files named by `config` and preprocesses them.
pub fn load_dataset(config: &DataConfig) -> Result<Dataset, OlympicsError> {
    let events = olympics_data::read_athlete_events(&config.athletes)?;
    let regions = olympics_data::read_noc_regions(&config.regions)?;
    let lookup = RegionLookup::from_regions(&regions);
    Ok(preprocess(events, &lookup, config.season))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{event, lookup};

    #[test]
    fn test_exact_duplicate_dropped() {
        let events = vec![
            event("Alice", "USA", 2000).medal(Medal::Gold).build(),
            event("Alice", "USA", 2000).medal(Medal::Gold).build(),
            event("Bernard", "FRA", 2004).medal(Medal::Silver).build(),
        ];
        let ds = preprocess(events, &lookup(&[("USA", "USA"), ("FRA", "France")]), Season::Summer);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].event.name, "Alice");
        assert_eq!(ds.records()[1].event.name, "Bernard");
    }

    #[test]
    fn test_season_filter() {
        let events = vec![
            event("Alice", "USA", 2000).build(),
            event("Bjorn", "NOR", 2002).season(Season::Winter).build(),
        ];
        let regions = lookup(&[("USA", "USA"), ("NOR", "Norway")]);

        let summer = preprocess(events.clone(), &regions, Season::Summer);
        assert_eq!(summer.len(), 1);
        assert_eq!(summer.season(), Season::Summer);

        let winter = preprocess(events, &regions, Season::Winter);
        assert_eq!(winter.len(), 1);
        assert_eq!(winter.records()[0].event.name, "Bjorn");
    }

    #[test]
    fn test_left_join_keeps_unmapped_rows() {
        let events = vec![
            event("Alice", "USA", 2000).build(),
            event("Zed", "XXX", 2000).build(),
        ];
        let ds = preprocess(events, &lookup(&[("USA", "USA")]), Season::Summer);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].region(), Some("USA"));
        assert_eq!(ds.records()[1].region(), None);
    }

    #[test]
    fn test_near_duplicates_are_kept() {
        let events = vec![
            event("Alice", "USA", 2000).weight(60.0).build(),
            event("Alice", "USA", 2000).weight(60.5).build(),
        ];
        let ds = preprocess(events, &lookup(&[("USA", "USA")]), Season::Summer);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_medal_flags() {
        let events = vec![
            event("Alice", "USA", 2000).medal(Medal::Gold).build(),
            event("Bea", "USA", 2000).medal(Medal::Bronze).build(),
            event("Cleo", "USA", 2000).build(),
        ];
        let ds = preprocess(events, &lookup(&[("USA", "USA")]), Season::Summer);
        let flags: Vec<MedalFlags> = ds.iter().map(|r| r.medals).collect();
        assert!(flags[0].gold && !flags[0].silver && !flags[0].bronze);
        assert!(flags[1].bronze && flags[1].has(Medal::Bronze));
        assert_eq!(flags[2], MedalFlags::default());
        assert_eq!(flags[2].count(), 0);
        assert_eq!(flags[0].count(), 1);
    }

    #[test]
    fn test_preprocess_is_idempotent() {
        let events = vec![
            event("Alice", "USA", 2000).medal(Medal::Gold).build(),
            event("Alice", "USA", 2000).medal(Medal::Gold).build(),
            event("Bjorn", "NOR", 2002).season(Season::Winter).build(),
            event("Zed", "XXX", 2004).build(),
        ];
        let regions = lookup(&[("USA", "USA"), ("NOR", "Norway")]);
        let once = preprocess(events, &regions, Season::Summer);
        let twice = preprocess(once.raw_events(), &regions, Season::Summer);
        assert_eq!(once.records(), twice.records());
    }

    #[test]
    fn test_duplicate_noc_keeps_first_region() {
        let rows = vec![
            NocRegion {
                noc: "SIN".to_string(),
                region: Some("Singapore".to_string()),
                notes: None,
            },
            NocRegion {
                noc: "SIN".to_string(),
                region: Some("Somewhere Else".to_string()),
                notes: None,
            },
            NocRegion {
                noc: "ROT".to_string(),
                region: None,
                notes: Some("Refugee Olympic Team".to_string()),
            },
        ];
        let lookup = RegionLookup::from_regions(&rows);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.region_for("SIN"), Some("Singapore"));
        assert_eq!(lookup.region_for("ROT"), None);
        assert_eq!(lookup.region_for("???"), None);
    }

    #[test]
    fn test_empty_input() {
        let ds = preprocess(Vec::new(), &RegionLookup::default(), Season::Summer);
        assert!(ds.is_empty());
    }
}
