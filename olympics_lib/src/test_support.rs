//! Builders for hand-written datasets in unit tests.

use olympics_data::types::{AthleteEvent, Medal, NocRegion, Season, Sex};

use crate::preprocess::{preprocess, Dataset, RegionLookup};

pub(crate) struct EventBuilder(AthleteEvent);

/// A Summer row for `name` competing for `noc` in `year`, no medal.
pub(crate) fn event(name: &str, noc: &str, year: u16) -> EventBuilder {
    EventBuilder(AthleteEvent {
        id: 0,
        name: name.to_string(),
        sex: Sex::Male,
        age: None,
        height: None,
        weight: None,
        team: noc.to_string(),
        noc: noc.to_string(),
        games: format!("{} Summer", year),
        year,
        season: Season::Summer,
        city: format!("Host {}", year),
        sport: "Athletics".to_string(),
        event: "Athletics Men's 100 metres".to_string(),
        medal: None,
    })
}

impl EventBuilder {
    pub(crate) fn sex(mut self, sex: Sex) -> Self {
        self.0.sex = sex;
        self
    }

    pub(crate) fn age(mut self, age: u8) -> Self {
        self.0.age = Some(age);
        self
    }

    pub(crate) fn height(mut self, height: f64) -> Self {
        self.0.height = Some(height);
        self
    }

    pub(crate) fn weight(mut self, weight: f64) -> Self {
        self.0.weight = Some(weight);
        self
    }

    pub(crate) fn team(mut self, team: &str) -> Self {
        self.0.team = team.to_string();
        self
    }

    pub(crate) fn city(mut self, city: &str) -> Self {
        self.0.city = city.to_string();
        self
    }

    pub(crate) fn sport(mut self, sport: &str) -> Self {
        self.0.sport = sport.to_string();
        self.0.event = format!("{} Men's Open", sport);
        self
    }

    pub(crate) fn event_name(mut self, event: &str) -> Self {
        self.0.event = event.to_string();
        self
    }

    pub(crate) fn medal(mut self, medal: Medal) -> Self {
        self.0.medal = Some(medal);
        self
    }

    pub(crate) fn season(mut self, season: Season) -> Self {
        self.0.season = season;
        self.0.games = format!("{} {}", self.0.year, season);
        self
    }

    pub(crate) fn build(self) -> AthleteEvent {
        self.0
    }
}

pub(crate) fn lookup(pairs: &[(&str, &str)]) -> RegionLookup {
    let rows: Vec<NocRegion> = pairs
        .iter()
        .map(|(noc, region)| NocRegion {
            noc: noc.to_string(),
            region: Some(region.to_string()),
            notes: None,
        })
        .collect();
    RegionLookup::from_regions(&rows)
}

/// Preprocessed Summer dataset from builder rows.
pub(crate) fn dataset(events: Vec<AthleteEvent>, pairs: &[(&str, &str)]) -> Dataset {
    preprocess(events, &lookup(pairs), Season::Summer)
}
