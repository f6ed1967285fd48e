//! Export module tests
//!
//! These tests verify the CSV catalog serialization, including the
//! write-then-read round trip.

use autocatalog::catalog::{Brand, Catalog, Model};
use autocatalog::export::{write_catalog, CatalogWriter, HEADER};
use pretty_assertions::assert_eq;

fn brand(name: &str) -> Brand {
    Brand {
        name: name.to_string(),
        url: format!("https://www.autoevolution.com/{}/", name.to_lowercase()),
    }
}

#[test]
fn test_catalog_roundtrip() {
    let mut catalog = Catalog::new();
    catalog.insert(
        brand("Ford"),
        vec![Model::with_years(
            "Focus",
            Some("2010".to_string()),
            Some("2015".to_string()),
        )],
    );

    let buf = write_catalog(&catalog, Vec::new()).unwrap();

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(HEADER.to_vec())
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        csv::StringRecord::from(vec!["Ford", "Focus", "2010", "2015"])
    );
}

#[test]
fn test_rows_follow_catalog_order() {
    let mut catalog = Catalog::new();
    catalog.insert(
        brand("FORD"),
        vec![
            Model::with_years("Focus", Some("2010".to_string()), Some("2015".to_string())),
            Model::with_years("GT", Some("2004".to_string()), None),
        ],
    );
    catalog.insert(brand("AUDI"), vec![Model::new("A4")]);

    let buf = write_catalog(&catalog, Vec::new()).unwrap();
    let out = String::from_utf8(buf).unwrap();
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Brand,Model,Start Year,End Year",
            "Ford,Focus,2010,2015",
            "Ford,Gt,2004,",
            "Audi,A4,,",
        ]
    );
}

#[test]
fn test_names_with_commas_are_quoted() {
    let mut writer = CatalogWriter::from_writer(Vec::new()).unwrap();
    writer
        .append_brand("ford", &[Model::new("focus, mk2")])
        .unwrap();

    let buf = writer.into_inner().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.lines().any(|l| l == "Ford,\"Focus, mk2\",,"));

    let mut reader = csv::Reader::from_reader(out.as_bytes());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[1], "Focus, mk2");
}

#[test]
fn test_empty_catalog_writes_header_only() {
    let buf = write_catalog(&Catalog::new(), Vec::new()).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_overwriting_file_semantics() {
    let dir = std::env::temp_dir().join("autocatalog-export-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cars.csv");

    let mut writer = CatalogWriter::create(&path).unwrap();
    writer
        .append_brand("ford", &[Model::new("Focus"), Model::new("Ka")])
        .unwrap();
    drop(writer);

    // Re-running truncates the previous output.
    let writer = CatalogWriter::create(&path).unwrap();
    drop(writer);

    let out = std::fs::read_to_string(&path).unwrap();
    assert_eq!(out.lines().count(), 1);

    std::fs::remove_file(&path).ok();
}
