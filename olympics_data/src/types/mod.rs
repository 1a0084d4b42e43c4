//! Record types for the two raw input tables.

mod event;
mod region;

pub use self::event::*;
pub use self::region::*;
