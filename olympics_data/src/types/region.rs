//! NOC-to-region lookup rows.

use serde::{Deserialize, Serialize};

/// A row of `noc_regions.csv`.
///
/// Several codes map to the same region (e.g. `FRG`, `GDR` and `GER` all map
/// to "Germany"), and a few codes have no region at all.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NocRegion {
    #[serde(rename = "NOC")]
    pub noc: String,

    #[serde(deserialize_with = "crate::na::deserialize", default)]
    pub region: Option<String>,

    #[serde(deserialize_with = "crate::na::deserialize", default)]
    pub notes: Option<String>,
}
