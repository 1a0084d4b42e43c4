//! CSV readers for the athlete-event and region tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::Error;
use crate::types::{AthleteEvent, NocRegion};

fn read_records<T, R>(reader: R, origin: &str) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = rdr
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| Error::Malformed {
            origin: origin.to_string(),
            source,
        })?;

    tracing::debug!("Read {} rows from {}", records.len(), origin);
    Ok(records)
}

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads athlete-event rows from any CSV source with a header line.
pub fn athlete_events_from_reader<R: Read>(reader: R) -> Result<Vec<AthleteEvent>, Error> {
    read_records(reader, "athlete events")
}

/// Reads NOC region rows from any CSV source with a header line.
pub fn noc_regions_from_reader<R: Read>(reader: R) -> Result<Vec<NocRegion>, Error> {
    read_records(reader, "noc regions")
}

/// Reads `athlete_events.csv` from disk.
pub fn read_athlete_events<P: AsRef<Path>>(path: P) -> Result<Vec<AthleteEvent>, Error> {
    let path = path.as_ref();
    let events = read_records(open(path)?, &path.display().to_string())?;
    tracing::info!("Loaded {} athlete-event rows from {}", events.len(), path.display());
    Ok(events)
}

/// Reads `noc_regions.csv` from disk.
pub fn read_noc_regions<P: AsRef<Path>>(path: P) -> Result<Vec<NocRegion>, Error> {
    let path = path.as_ref();
    let regions = read_records(open(path)?, &path.display().to_string())?;
    tracing::info!("Loaded {} NOC regions from {}", regions.len(), path.display());
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Medal, Season, Sex};

    const EVENTS: &str = "\
\"ID\",\"Name\",\"Sex\",\"Age\",\"Height\",\"Weight\",\"Team\",\"NOC\",\"Games\",\"Year\",\"Season\",\"City\",\"Sport\",\"Event\",\"Medal\"
\"1\",\"A Dijiang\",\"M\",24,180,80,\"China\",\"CHN\",\"1992 Summer\",1992,\"Summer\",\"Barcelona\",\"Basketball\",\"Basketball Men's Basketball\",NA
\"4\",\"Edgar Lindenau Aabye\",\"M\",34,NA,NA,\"Denmark/Sweden\",\"DEN\",\"1900 Summer\",1900,\"Summer\",\"Paris\",\"Tug-Of-War\",\"Tug-Of-War Men's Tug-Of-War\",\"Gold\"
\"5\",\"Christine Jacoba Aaftink\",\"F\",21,185,82.5,\"Netherlands\",\"NED\",\"1988 Winter\",1988,\"Winter\",\"Calgary\",\"Speed Skating\",\"Speed Skating Women's 500 metres\",NA
";

    #[test]
    fn parse_athlete_events() {
        let events = athlete_events_from_reader(EVENTS.as_bytes()).unwrap();
        assert_eq!(events.len(), 3);

        let first = &events[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "A Dijiang");
        assert_eq!(first.sex, Sex::Male);
        assert_eq!(first.age, Some(24));
        assert_eq!(first.height, Some(180.0));
        assert_eq!(first.noc, "CHN");
        assert_eq!(first.season, Season::Summer);
        assert_eq!(first.medal, None);
    }

    #[test]
    fn na_cells_load_as_none() {
        let events = athlete_events_from_reader(EVENTS.as_bytes()).unwrap();
        let aabye = &events[1];
        assert_eq!(aabye.height, None);
        assert_eq!(aabye.weight, None);
        assert_eq!(aabye.medal, Some(Medal::Gold));
    }

    #[test]
    fn fractional_weight() {
        let events = athlete_events_from_reader(EVENTS.as_bytes()).unwrap();
        assert_eq!(events[2].weight, Some(82.5));
        assert_eq!(events[2].sex, Sex::Female);
        assert_eq!(events[2].season, Season::Winter);
    }

    #[test]
    fn unknown_medal_is_malformed() {
        let csv = EVENTS.replace("\"Gold\"", "\"Platinum\"");
        let err = athlete_events_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn missing_file() {
        let err = read_athlete_events("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn parse_noc_regions() {
        let csv = "NOC,region,notes\nAFG,Afghanistan,\nROT,,Refugee Olympic Team\n";
        let regions = noc_regions_from_reader(csv.as_bytes()).unwrap();
        insta::assert_yaml_snapshot!(regions, @r###"
        - NOC: AFG
          region: Afghanistan
          notes: ~
        - NOC: ROT
          region: ~
          notes: Refugee Olympic Team
        "###);
    }
}
