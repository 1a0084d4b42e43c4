use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_medal_tally_fixture_conforms_to_schema() {
    let data = load_fixture("medal_tally.json");
    let schema = load_schema("medal_tally_row.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("medal tally schema compiles");
    if let Err(e) = validator.validate(&data) {
        panic!("medal tally fixture failed validation: {e}");
    }
}

#[test]
fn test_country_tally_fixture_conforms_to_schema() {
    let data = load_fixture("country_tally.json");
    let schema = load_schema("medal_tally_row.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("medal tally schema compiles");
    if let Err(e) = validator.validate(&data) {
        panic!("country tally fixture failed validation: {e}");
    }
}

#[test]
fn test_most_successful_fixture_conforms_to_schema() {
    let data = load_fixture("most_successful.json");
    let schema = load_schema("athlete_rank_row.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("athlete rank schema compiles");
    if let Err(e) = validator.validate(&data) {
        panic!("most successful fixture failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_medal_tally_schema_rejects_missing_required_field() {
    let mut data = load_fixture("medal_tally.json");
    let schema = load_schema("medal_tally_row.schema.json");

    data[0]
        .as_object_mut()
        .expect("row is an object")
        .remove("Total");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a row missing Total"
    );
}

#[test]
fn test_medal_tally_schema_rejects_negative_count() {
    let mut data = load_fixture("medal_tally.json");
    let schema = load_schema("medal_tally_row.schema.json");

    data[1]
        .as_object_mut()
        .expect("row is an object")
        .insert("Gold".to_string(), Value::Number((-1).into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject negative medal counts"
    );
}

#[test]
fn test_medal_tally_schema_rejects_malformed_year() {
    let mut data = load_fixture("country_tally.json");
    let schema = load_schema("medal_tally_row.schema.json");

    data[0]
        .as_object_mut()
        .expect("row is an object")
        .insert("Year".to_string(), Value::String("84".to_string()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a two-digit year"
    );
}

#[test]
fn test_athlete_rank_schema_rejects_zero_medals() {
    let mut data = load_fixture("most_successful.json");
    let schema = load_schema("athlete_rank_row.schema.json");

    data[0]
        .as_object_mut()
        .expect("row is an object")
        .insert("Medals".to_string(), Value::Number(0.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject an athlete without medals"
    );
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_athlete_rank_schema_rejects_additional_properties() {
    let mut data = load_fixture("most_successful.json");
    let schema = load_schema("athlete_rank_row.schema.json");

    data[0]
        .as_object_mut()
        .expect("row is an object")
        .insert("Team".to_string(), Value::String("United States".to_string()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject additional properties"
    );
}

#[test]
fn test_empty_array_conforms_to_all_schemas() {
    let empty = serde_json::json!([]);

    for schema_name in ["medal_tally_row.schema.json", "athlete_rank_row.schema.json"] {
        let schema = load_schema(schema_name);
        let validator =
            jsonschema::draft202012::new(&schema).unwrap_or_else(|e| panic!("{schema_name}: {e}"));
        if let Err(e) = validator.validate(&empty) {
            panic!("empty array should conform to {schema_name}: {e}");
        }
    }
}
