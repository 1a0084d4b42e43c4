//! Athlete-event records: one row per athlete, per event, per Games.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a categorical column holds an unknown value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    kind: &'static str,
    value: String,
}

impl ParseCategoryError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseCategoryError {}

/// Medal outcome of a single athlete-event row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medal {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Gold" => Ok(Medal::Gold),
            "Silver" => Ok(Medal::Silver),
            "Bronze" => Ok(Medal::Bronze),
            other => Err(ParseCategoryError::new("medal", other)),
        }
    }
}

/// Sex as recorded in the dataset (`M` / `F`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("M"),
            Sex::Female => f.write_str("F"),
        }
    }
}

/// Competition cycle of a Games edition.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Season {
    #[default]
    Summer,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => f.write_str("Summer"),
            Season::Winter => f.write_str("Winter"),
        }
    }
}

/// Case-insensitive, so `summer` and `WINTER` are accepted from user input.
impl FromStr for Season {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "winter" => Ok(Season::Winter),
            _ => Err(ParseCategoryError::new("season", s)),
        }
    }
}

/// A row of `athlete_events.csv`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AthleteEvent {
    /// Athlete identifier; stable across an athlete's rows.
    #[serde(rename = "ID")]
    pub id: u32,

    pub name: String,

    pub sex: Sex,

    #[serde(deserialize_with = "crate::na::deserialize", default)]
    pub age: Option<u8>,

    /// Height in centimetres.
    #[serde(deserialize_with = "crate::na::deserialize", default)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[serde(deserialize_with = "crate::na::deserialize", default)]
    pub weight: Option<f64>,

    pub team: String,

    /// National Olympic Committee code (e.g. "USA", "FRG").
    #[serde(rename = "NOC")]
    pub noc: String,

    /// Edition label, e.g. "2000 Summer".
    pub games: String,

    pub year: u16,

    pub season: Season,

    pub city: String,

    pub sport: String,

    pub event: String,

    #[serde(deserialize_with = "crate::na::deserialize", default)]
    pub medal: Option<Medal>,
}
