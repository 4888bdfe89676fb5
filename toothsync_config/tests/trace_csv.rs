use std::io::Cursor;
use std::io::Write as _;

use toothsync_config::read_trace;

#[test]
fn reads_a_valid_trace() {
    let csv = "interval_ticks\n300\n150\n150\n";
    let ticks = read_trace(Cursor::new(csv)).expect("valid trace");
    assert_eq!(ticks, vec![300, 150, 150]);
}

#[test]
fn zero_intervals_are_data_not_errors() {
    // a stuck capture produces zero; the detector handles it downstream
    let csv = "interval_ticks\n300\n0\n150\n";
    let ticks = read_trace(Cursor::new(csv)).expect("trace with zero interval");
    assert_eq!(ticks, vec![300, 0, 150]);
}

#[test]
fn rejects_wrong_header() {
    let csv = "ticks\n300\n150\n";
    let err = read_trace(Cursor::new(csv)).expect_err("wrong header");
    assert!(format!("{err}").contains("interval_ticks"));
}

#[test]
fn rejects_extra_columns() {
    let csv = "interval_ticks,tooth\n300,0\n";
    assert!(read_trace(Cursor::new(csv)).is_err());
}

#[test]
fn rejects_empty_trace() {
    let csv = "interval_ticks\n";
    let err = read_trace(Cursor::new(csv)).expect_err("empty trace");
    assert!(format!("{err}").contains("no rows"));
}

#[test]
fn rejects_non_numeric_rows() {
    let csv = "interval_ticks\nfast\n";
    let err = read_trace(Cursor::new(csv)).expect_err("non-numeric row");
    assert!(format!("{err}").contains("row 1"));
}

#[test]
fn reads_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "interval_ticks").unwrap();
    for t in [300, 150, 150, 300] {
        writeln!(f, "{t}").unwrap();
    }
    drop(f);

    let ticks = read_trace(std::fs::File::open(&path).unwrap()).expect("file trace");
    assert_eq!(ticks.len(), 4);
}
