use std::fs;

use numtools::squares::{
    load_numbers, mean, weighted_sum_of_squares, FileSink, MemorySink, ResultSink,
};
use numtools::Error;

#[test]
fn weighted_run_from_text_files() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = dir.path().join("numbers.txt");
    let weights = dir.path().join("weights.txt");
    fs::write(&numbers, "2\n 4 \n").unwrap();
    fs::write(&weights, "1 0.5\n").unwrap();

    let values = load_numbers(&numbers).unwrap();
    let weights = load_numbers(&weights).unwrap();
    let result = weighted_sum_of_squares(&values, Some(&weights)).unwrap();
    assert_eq!(result, 12.0);
    assert!((result.sqrt() - 12f64.sqrt()).abs() < 1e-12);

    let out = dir.path().join("out.txt");
    fs::write(&out, "stale").unwrap();
    FileSink::new(&out).write_result(&result.to_string()).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "12");
}

#[test]
fn weighted_run_rejects_misaligned_files() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = dir.path().join("numbers.txt");
    let weights = dir.path().join("weights.csv");
    fs::write(&numbers, "1 2 4\n").unwrap();
    fs::write(&weights, "1,0.5\n").unwrap();

    let values = load_numbers(&numbers).unwrap();
    let weights = load_numbers(&weights).unwrap();
    let err = weighted_sum_of_squares(&values, Some(&weights)).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { numbers: 3, weights: 2 }));
    assert!(err.to_string().contains("same length"));
}

#[test]
fn mean_run_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = dir.path().join("numbers.json");
    fs::write(&numbers, "[4, 8, 15, 16, 23, 42]").unwrap();

    let values = load_numbers(&numbers).unwrap();
    assert_eq!(mean(&values).unwrap(), 18.0);
}

#[test]
fn mean_of_empty_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = dir.path().join("empty.txt");
    fs::write(&numbers, "\n\n").unwrap();

    let values = load_numbers(&numbers).unwrap();
    assert!(matches!(mean(&values), Err(Error::DivisionByZero(_))));
}

#[test]
fn parse_error_names_the_token() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = dir.path().join("numbers.txt");
    fs::write(&numbers, "1 2\n3 x4\n").unwrap();

    let err = load_numbers(&numbers).unwrap_err();
    assert_eq!(err.to_string(), "line 2: 'x4' is not a number");
}

#[test]
fn results_can_go_to_memory() {
    let mut sink = MemorySink::default();
    let result = weighted_sum_of_squares(&[1.0, 2.0, 4.0], None).unwrap();
    sink.write_result(&result.to_string()).unwrap();
    assert_eq!(sink.contents.as_deref(), Some("21"));
}
