//! Integration tests for the raw and processed loaders.

use std::io::Write;
use std::path::Path;

use complaints_ingest::{IngestError, Window, load_processed, load_raw, write_csv};
use polars::prelude::*;
use tempfile::{NamedTempFile, tempdir};

const RAW_COMPLAINTS: &str = "\
Date received,Product,Sub-product,ZIP code,Consumer disputed?,Date sent to company,Complaint ID
2022-11-01,Mortgage,Conventional home mortgage,90210,No,2022-11-02,100
2022-11-03,Credit card,,9021O,Yes,2022-11-03,101
2022-11-07,Debt collection,Medical debt,,N/A,2022-11-08,102
2022-12-01,Mortgage,FHA mortgage,12345,No,2022-12-02,103
2022-12-15,Checking or savings account,Checking account,902XX,,2022-12-15,104
";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn zip_codes(df: &DataFrame) -> Vec<Option<i64>> {
    let zip = df
        .column("zip_code")
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap();
    zip.i64().unwrap().iter().collect()
}

#[test]
fn raw_headers_are_canonical() {
    let file = create_temp_csv(RAW_COMPLAINTS);
    let df = load_raw(file.path(), Window::all()).unwrap();

    assert_eq!(
        column_names(&df),
        vec![
            "date_received",
            "product",
            "sub_product",
            "zip_code",
            "consumer_disputed",
            "date_sent_to_company",
            "complaint_id",
        ]
    );
}

#[test]
fn raw_columns_are_coerced() {
    let file = create_temp_csv(RAW_COMPLAINTS);
    let df = load_raw(file.path(), Window::all()).unwrap();

    assert!(matches!(
        df.column("date_received").unwrap().dtype(),
        DataType::Datetime(TimeUnit::Milliseconds, None)
    ));
    assert!(matches!(
        df.column("date_sent_to_company").unwrap().dtype(),
        DataType::Datetime(_, _)
    ));
    assert_eq!(df.column("zip_code").unwrap().dtype(), &DataType::Int32);
    assert_eq!(
        zip_codes(&df),
        vec![Some(90210), None, None, Some(12345), None]
    );
    assert_eq!(df.column("complaint_id").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("product").unwrap().dtype(), &DataType::String);
}

#[test]
fn disputed_column_stays_text() {
    let file = create_temp_csv("Consumer disputed?,ZIP code\n1,10001\n0,10002\n");
    let df = load_raw(file.path(), Window::all()).unwrap();

    assert_eq!(
        df.column("consumer_disputed").unwrap().dtype(),
        &DataType::String
    );
}

#[test]
fn row_order_is_source_order() {
    let file = create_temp_csv(RAW_COMPLAINTS);
    let df = load_raw(file.path(), Window::all()).unwrap();

    let ids: Vec<Option<i64>> = df
        .column("complaint_id")
        .unwrap()
        .i64()
        .unwrap()
        .iter()
        .collect();
    assert_eq!(ids, vec![Some(100), Some(101), Some(102), Some(103), Some(104)]);
}

#[test]
fn window_keeps_header() {
    let file = create_temp_csv(RAW_COMPLAINTS);
    let df = load_raw(file.path(), Window::rows(2, 3)).unwrap();

    assert_eq!(df.shape(), (2, 7));
    let ids: Vec<Option<i64>> = df
        .column("complaint_id")
        .unwrap()
        .i64()
        .unwrap()
        .iter()
        .collect();
    assert_eq!(ids, vec![Some(103), Some(104)]);
}

#[test]
fn zero_row_limit_returns_schema_only() {
    let file = create_temp_csv(RAW_COMPLAINTS);
    let df = load_raw(file.path(), Window::rows(0, 0)).unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 7);
    assert!(column_names(&df).contains(&"consumer_disputed".to_string()));
}

#[test]
fn skip_past_end_returns_schema_only() {
    let file = create_temp_csv(RAW_COMPLAINTS);
    let df = load_raw(file.path(), Window::rows(10, 1_000)).unwrap();

    assert_eq!(df.shape(), (0, 7));
}

#[test]
fn bad_date_fails_the_load() {
    let file = create_temp_csv("Date received,ZIP code\n2022-11-01,90210\nsoon,10001\n");
    let err = load_raw(file.path(), Window::all()).unwrap_err();

    match err {
        IngestError::DateParseFailure { column, row, value } => {
            assert_eq!(column, "date_received");
            assert_eq!(row, 1);
            assert_eq!(value, "soon");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_date_outside_window_is_not_read() {
    let file = create_temp_csv("Date received,ZIP code\n2022-11-01,90210\nsoon,10001\n");
    let df = load_raw(file.path(), Window::rows(1, 0)).unwrap();

    assert_eq!(df.height(), 1);
}

#[test]
fn processed_loader_keeps_headers_verbatim() {
    let file = create_temp_csv("date_received,zip_code,consumer_disputed,Product\n2022-11-01,02134,No,Mortgage\n");
    let df = load_processed(file.path(), Window::all()).unwrap();

    assert_eq!(
        column_names(&df),
        vec!["date_received", "zip_code", "consumer_disputed", "Product"]
    );
    assert_eq!(zip_codes(&df), vec![Some(2134)]);
    assert_eq!(df.column("zip_code").unwrap().dtype(), &DataType::Int16);
}

#[test]
fn processed_loader_without_zip_column() {
    let file = create_temp_csv("date_received,product\n2022-11-01,Mortgage\n");
    let df = load_processed(file.path(), Window::all()).unwrap();

    assert_eq!(df.shape(), (1, 2));
}

#[test]
fn processed_loader_missing_source() {
    let err = load_processed(Path::new("/no/such/processed.csv"), Window::all()).unwrap_err();
    assert!(matches!(err, IngestError::SourceUnavailable { .. }));
}

#[test]
fn round_trip_keeps_fractional_seconds() {
    let file = create_temp_csv(
        "Date received,ZIP code,Complaint ID\n\
         2022-11-25 10:30:00.250,90210,100\n\
         2022-11-26T08:00:00,,101\n",
    );
    let dir = tempdir().unwrap();
    let processed_path = dir.path().join("complaints.csv");

    let raw = load_raw(file.path(), Window::all()).unwrap();
    write_csv(&raw, &processed_path).unwrap();
    let written = std::fs::read_to_string(&processed_path).unwrap();
    let processed = load_processed(&processed_path, Window::all()).unwrap();

    assert!(written.contains("2022-11-25T10:30:00.250"));
    assert_eq!(processed.dtypes(), raw.dtypes());
    assert!(processed.equals_missing(&raw));
}

#[test]
fn raw_output_round_trips_through_processed_loader() {
    let file = create_temp_csv(RAW_COMPLAINTS);
    let dir = tempdir().unwrap();
    let processed_path = dir.path().join("processed").join("complaints.csv");

    let raw = load_raw(file.path(), Window::all()).unwrap();
    write_csv(&raw, &processed_path).unwrap();
    let processed = load_processed(&processed_path, Window::all()).unwrap();

    assert_eq!(column_names(&processed), column_names(&raw));
    assert_eq!(processed.dtypes(), raw.dtypes());
    assert!(processed.equals_missing(&raw));
}
