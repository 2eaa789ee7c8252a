use std::fs;
use std::io::Cursor;

use conduction_plot::core::DiscretePoint;
use conduction_plot::loader::{load, load_from_reader, parse_record};
use conduction_plot::{PipelineStage, PlotError};
use tempfile::tempdir;

#[test]
fn loads_records_in_file_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    fs::write(&path, "0,100\n0.01,150\n0.02,200\n").expect("write results");

    let points = load(&path).expect("load");
    assert_eq!(
        points,
        vec![
            DiscretePoint::new(0.0, 100.0),
            DiscretePoint::new(0.01, 150.0),
            DiscretePoint::new(0.02, 200.0),
        ]
    );
}

#[test]
fn empty_file_yields_no_points() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    fs::write(&path, "").expect("write results");

    assert!(load(&path).expect("load").is_empty());
}

#[test]
fn missing_file_is_a_load_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.csv");

    let err = load(&path).expect_err("missing file must fail");
    match &err {
        PlotError::MissingSource { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.stage(), PipelineStage::Load);
}

#[test]
fn malformed_record_reports_its_line() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    fs::write(&path, "0,100\n0.01;150\n0.02,200\n").expect("write results");

    let err = load(&path).expect_err("malformed record must fail");
    match &err {
        PlotError::MalformedRecord { line, record, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(record, "0.01;150");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.stage(), PipelineStage::Load);
    // the file can still be replaced once the failed load returned
    fs::write(&path, "0,1\n").expect("rewrite after failed load");
}

#[test]
fn blank_lines_are_skipped_but_still_counted() {
    let input = "0,1\n\n   \n0.5,2\nabc,3\n";
    let err = load_from_reader(Cursor::new(input), "inline").expect_err("bad record");
    match err {
        PlotError::MalformedRecord { origin, line, .. } => {
            assert_eq!(origin, "inline");
            assert_eq!(line, 5);
        }
        other => panic!("unexpected error {other:?}"),
    }

    let points = load_from_reader(Cursor::new("0,1\n\n0.5,2\n"), "inline").expect("load");
    assert_eq!(points.len(), 2);
}

#[test]
fn crlf_and_padded_fields_are_accepted() {
    let points = load_from_reader(Cursor::new(" 0 , 1.5 \r\n1e-2,2E2\r\n"), "inline")
        .expect("load");
    assert_eq!(
        points,
        vec![DiscretePoint::new(0.0, 1.5), DiscretePoint::new(0.01, 200.0)]
    );
}

#[test]
fn record_parser_rejects_bad_shapes() {
    assert!(parse_record("1,2").is_ok());
    assert!(parse_record("1").is_err());
    assert!(parse_record("1,2,3").is_err());
    assert!(parse_record("1,").is_err());
    assert!(parse_record("x,2").is_err());
    assert!(parse_record("1,NaN").is_err());
    assert!(parse_record("inf,2").is_err());
}

#[test]
fn invalid_utf8_row_is_malformed_not_missing() {
    let err = load_from_reader(Cursor::new(&b"0,100\n0.01,\xff150\n"[..]), "inline")
        .expect_err("invalid utf-8 must fail");
    match &err {
        PlotError::MalformedRecord { origin, line, .. } => {
            assert_eq!(origin, "inline");
            assert_eq!(*line, 2);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.stage(), PipelineStage::Load);
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    fs::write(&path, "\u{feff}0,100\n0.02,200\n").expect("write results");

    let points = load(&path).expect("load");
    assert_eq!(
        points,
        vec![DiscretePoint::new(0.0, 100.0), DiscretePoint::new(0.02, 200.0)]
    );

    // only the first line may carry one
    let err = load_from_reader(Cursor::new("0,100\n\u{feff}0.02,200\n"), "inline")
        .expect_err("mark inside the file");
    assert!(matches!(err, PlotError::MalformedRecord { line: 2, .. }));
}
