//! Library layer for the Olympics explorer: preprocessing, per-view
//! aggregation helpers, selector validation and configuration.
//!
//! Every helper takes the preprocessed [`Dataset`] by reference plus plain
//! selector strings (with [`selector::OVERALL`] meaning "no filter") and
//! returns freshly built rows. Nothing here mutates the dataset.

pub mod athletes;
pub mod config;
pub mod error;
pub mod grid;
pub mod preprocess;
pub mod selector;
pub mod stats;
pub mod tally;
pub mod trends;
pub mod validation;

pub use olympics_data;
pub use olympics_data::types;

pub use config::{ConfigError, DataConfig};
pub use error::OlympicsError;
pub use grid::{CellFormat, Heatmap, HeatmapCell};
pub use preprocess::{load_dataset, preprocess, Dataset, MedalFlags, OlympicRecord, RegionLookup};
pub use selector::{Selector, OVERALL};

#[cfg(test)]
mod test_support;
