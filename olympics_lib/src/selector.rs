//! View selectors and the option lists they are chosen from.

use std::collections::BTreeSet;
use std::fmt;

use crate::preprocess::Dataset;

/// Sentinel selector value meaning "no filter".
pub const OVERALL: &str = "Overall";

/// A filter on one column: either everything, or one exact value.
///
/// Values are compared verbatim, so a selector naming something that is not
/// in the data simply matches no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Overall,
    Only(String),
}

impl Selector {
    /// Parses a raw selector. Surrounding whitespace is ignored and the
    /// sentinel is matched case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(OVERALL) {
            Selector::Overall
        } else {
            Selector::Only(trimmed.to_string())
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Selector::Overall)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selector::Overall => None,
            Selector::Only(v) => Some(v),
        }
    }

    /// True when `candidate` passes the filter. A missing candidate only
    /// passes `Overall`.
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match self {
            Selector::Overall => true,
            Selector::Only(v) => candidate == Some(v.as_str()),
        }
    }

    /// Year filter. A value that is not a year matches nothing.
    pub fn matches_year(&self, year: u16) -> bool {
        match self {
            Selector::Overall => true,
            Selector::Only(v) => v.parse::<u16>() == Ok(year),
        }
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::parse(raw)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Overall => f.write_str(OVERALL),
            Selector::Only(v) => f.write_str(v),
        }
    }
}

fn with_overall(values: impl IntoIterator<Item = String>) -> Vec<String> {
    std::iter::once(OVERALL.to_string()).chain(values).collect()
}

/// Year and country options for the medal tally, each led by `Overall`.
/// Years ascend; countries are sorted and exclude missing regions.
pub fn country_year_list(ds: &Dataset) -> (Vec<String>, Vec<String>) {
    let years: BTreeSet<u16> = ds.iter().map(|r| r.event.year).collect();
    let years = with_overall(years.into_iter().map(|y| y.to_string()));
    let countries = with_overall(country_list(ds));
    (years, countries)
}

/// Sorted sports led by `Overall`.
pub fn sport_list(ds: &Dataset) -> Vec<String> {
    let sports: BTreeSet<&str> = ds.iter().map(|r| r.event.sport.as_str()).collect();
    with_overall(sports.into_iter().map(str::to_string))
}

/// Sorted regions present in the data, without the sentinel.
pub fn country_list(ds: &Dataset) -> Vec<String> {
    let regions: BTreeSet<&str> = ds.iter().filter_map(|r| r.region()).collect();
    regions.into_iter().map(str::to_string).collect()
}
