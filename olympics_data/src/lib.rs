mod errors;
mod na;
mod reader;
pub mod types;
pub use self::errors::Error;
pub use self::reader::{
    athlete_events_from_reader, noc_regions_from_reader, read_athlete_events, read_noc_regions,
};
