use pricebook_etl::domain::schema::DEFAULT_COLUMNS;
use pricebook_etl::{
    EtlEngine, EtlError, ExtractorConfig, LocalStorage, PricebookDocument, PricebookPipeline,
};
use serde_json::Value;
use tempfile::TempDir;

fn data_row(cells: &[(usize, &str)]) -> String {
    let mut row = vec![""; DEFAULT_COLUMNS.len()];
    for (index, value) in cells {
        row[*index] = *value;
    }
    row.join(",")
}

fn populated_row(region: &str, country: &str, base: f64) -> String {
    let mut row: Vec<String> = (0..DEFAULT_COLUMNS.len())
        .map(|i| format!("{}", base + i as f64))
        .collect();
    row[0] = region.to_string();
    row[1] = country.to_string();
    row[2] = "Field Services Ltd".to_string();
    row[3] = "USD".to_string();
    row[4] = "\"Net 30, monthly\"".to_string();
    row.join(",")
}

fn write_sheet(dir: &TempDir, rows: &[String]) {
    let mut lines = vec![
        format!("Teceze Global Pricebook v0.1{}", ",".repeat(40)),
        DEFAULT_COLUMNS.join(","),
    ];
    lines.extend(rows.iter().cloned());
    std::fs::write(dir.path().join("pricebook.csv"), lines.join("\n")).unwrap();
}

fn run(dir: &TempDir) -> Result<Value, EtlError> {
    let config = ExtractorConfig {
        source_path: "pricebook.csv".to_string(),
        destination_path: "backend/data.json".to_string(),
        ..ExtractorConfig::default()
    };
    let pipeline = PricebookPipeline::new(LocalStorage::new(dir.path()), config)?;
    let output_path = EtlEngine::new(pipeline).run()?;
    assert_eq!(output_path, "backend/data.json");

    let bytes = std::fs::read(dir.path().join("backend/data.json")).unwrap();
    Ok(serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_blank_country_row_is_dropped() {
    let temp_dir = TempDir::new().unwrap();
    write_sheet(
        &temp_dir,
        &[
            populated_row("Americas", "USA", 100.0),
            populated_row("Americas", "", 200.0),
            populated_row("EMEA", "Germany", 300.0),
        ],
    );

    let output = run(&temp_dir).unwrap();
    let countries = output["countries"].as_array().unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0]["country"], "USA");
    assert_eq!(countries[1]["country"], "Germany");
    assert_eq!(countries[1]["levels"]["L1"]["with_backfill"], 305.0);
    assert_eq!(countries[0]["payment_terms"], "Net 30, monthly");
}

#[test]
fn test_partial_level_and_empty_short_term() {
    let temp_dir = TempDir::new().unwrap();
    write_sheet(
        &temp_dir,
        &[data_row(&[
            (0, "EMEA"),
            (1, "Spain"),
            (3, "EUR"),
            (10, "42.5"),
            (21, "not quoted"),
            (22, "-15"),
        ])],
    );

    let output = run(&temp_dir).unwrap();
    let spain = &output["countries"][0];

    assert_eq!(
        spain["levels"]["L3"],
        serde_json::json!({"with_backfill": 0.0, "without_backfill": 42.5})
    );
    assert_eq!(
        spain["dispatch"]["project_short_monthly"],
        serde_json::json!([0.0, 0.0, 0.0, 0.0, 0.0])
    );
    assert_eq!(spain["dispatch"]["incident_responses"]["9x5x4"], 0.0);
    assert_eq!(spain["dispatch"]["incident_responses"]["24x7x4"], -15.0);
    assert!(spain["supplier"].is_null());
    assert!(spain["payment_terms"].is_null());
}

#[test]
fn test_values_pass_through_exactly() {
    let temp_dir = TempDir::new().unwrap();
    write_sheet(
        &temp_dir,
        &[data_row(&[(1, "Japan"), (15, "123456.789"), (40, "0.1")])],
    );

    let output = run(&temp_dir).unwrap();
    let japan = &output["countries"][0];
    assert_eq!(japan["dispatch"]["full_day"].as_f64(), Some(123456.789));
    assert_eq!(japan["dispatch"]["project_long_monthly"][4].as_f64(), Some(0.1));
}

#[test]
fn test_document_shape_without_countries() {
    let temp_dir = TempDir::new().unwrap();
    write_sheet(&temp_dir, &[data_row(&[(0, "EMEA")]), data_row(&[(1, "  ")])]);

    let output = run(&temp_dir).unwrap();
    assert_eq!(output["countries"].as_array().unwrap().len(), 0);
    assert_eq!(output["terms"].as_array().unwrap().len(), 8);
    let description_keys: Vec<&String> = output["descriptions"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(description_keys, vec!["L1", "L2", "L3", "L4", "L5"]);

    let bytes = std::fs::read(temp_dir.path().join("backend/data.json")).unwrap();
    let document: PricebookDocument = serde_json::from_slice(&bytes).unwrap();
    assert!(document.countries.is_empty());
}

#[test]
fn test_narrow_sheet_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("pricebook.csv"),
        "title\nRegion,Country\nEMEA,Germany\n",
    )
    .unwrap();

    let err = run(&temp_dir).unwrap_err();
    assert!(matches!(err, EtlError::SourceFormat { .. }));
    assert!(!temp_dir.path().join("backend/data.json").exists());
}

#[test]
fn test_missing_source_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let err = run(&temp_dir).unwrap_err();
    assert!(matches!(err, EtlError::IoError(_)));
}
