//! Sport x year pivot grids used by the heatmap views.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// How grid values should be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    /// Every value is whole; print without decimals.
    Integer,
    /// At least one fractional value; print one decimal.
    Decimal,
}

impl CellFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            CellFormat::Integer => format!("{:.0}", value),
            CellFormat::Decimal => format!("{:.1}", value),
        }
    }
}

/// One non-pivoted cell of a [`Heatmap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub sport: String,
    pub year: u16,
    pub value: f64,
}

/// Dense grid with sports as rows and years as columns. Cells with no
/// observations hold zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Heatmap {
    pub sports: Vec<String>,
    pub years: Vec<u16>,
    /// Row-major: `values[row][column]`.
    pub values: Vec<Vec<f64>>,
}

const WHOLE_TOLERANCE: f64 = 1e-8;

impl Heatmap {
    /// Pivots `(sport, year)` observations into a count grid.
    pub fn count<'a, I>(observations: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u16)>,
    {
        let mut counts: BTreeMap<(&str, u16), f64> = BTreeMap::new();
        for key in observations {
            *counts.entry(key).or_insert(0.0) += 1.0;
        }
        Self::from_values(counts)
    }

    fn from_values(values: BTreeMap<(&str, u16), f64>) -> Self {
        let sports: BTreeSet<&str> = values.keys().map(|(s, _)| *s).collect();
        let years: BTreeSet<u16> = values.keys().map(|(_, y)| *y).collect();

        let grid = sports
            .iter()
            .map(|sport| {
                years
                    .iter()
                    .map(|year| values.get(&(*sport, *year)).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        Self {
            sports: sports.into_iter().map(str::to_string).collect(),
            years: years.into_iter().collect(),
            values: grid,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }

    pub fn get(&self, sport: &str, year: u16) -> Option<f64> {
        let row = self.sports.iter().position(|s| s == sport)?;
        let col = self.years.iter().position(|y| *y == year)?;
        Some(self.values[row][col])
    }

    /// Integer when every value is whole (within float tolerance).
    pub fn cell_format(&self) -> CellFormat {
        let whole = self
            .values
            .iter()
            .flatten()
            .all(|v| (v - v.round()).abs() <= WHOLE_TOLERANCE);
        if whole {
            CellFormat::Integer
        } else {
            CellFormat::Decimal
        }
    }

    /// Non-zero cells in row-major order.
    pub fn cells(&self) -> Vec<HeatmapCell> {
        let mut cells = Vec::new();
        for (sport, row) in self.sports.iter().zip(&self.values) {
            for (year, value) in self.years.iter().zip(row) {
                if *value != 0.0 {
                    cells.push(HeatmapCell {
                        sport: sport.clone(),
                        year: *year,
                        value: *value,
                    });
                }
            }
        }
        cells
    }

    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }
}
