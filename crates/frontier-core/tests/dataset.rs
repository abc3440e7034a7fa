// File: crates/frontier-core/tests/dataset.rs
// Purpose: Validate dataset construction, CSV loading, and input errors.

use chrono::NaiveDate;

use frontier_core::{DataError, Dataset, Record, VendorId};

#[test]
fn builtin_dataset_is_valid_and_nonempty() {
    let dataset = Dataset::builtin();
    assert!(!dataset.is_empty());
    for record in dataset.records() {
        assert!(record.score >= 0.0);
        assert!(!record.model.is_empty());
    }

    let (start, end) = dataset.date_extent().expect("non-empty dataset");
    assert_eq!(start, NaiveDate::from_ymd_opt(2022, 11, 15).expect("valid date"));
    assert!(end > start);
}

#[test]
fn csv_round_trip() {
    let csv = "\
model,date,score,vendor
GPT-4o,2024-05-13,1137,openai
Claude 3.5 Sonnet,2024-06-20,1082,anthropic
";
    let dataset = Dataset::from_csv_reader(csv.as_bytes()).expect("parse csv");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records()[0].vendor, VendorId::Openai);
    assert_eq!(dataset.records()[1].score, 1082.0);
}

#[test]
fn unknown_vendor_is_an_input_error() {
    let csv = "model,date,score,vendor\nFooNet,2024-05-13,1000,foocorp\n";
    let err = Dataset::from_csv_reader(csv.as_bytes()).expect_err("must reject");
    assert!(matches!(err, DataError::UnknownVendor(v) if v == "foocorp"));
}

#[test]
fn malformed_date_is_an_input_error() {
    let csv = "model,date,score,vendor\nGPT-4o,13/05/2024,1137,openai\n";
    let err = Dataset::from_csv_reader(csv.as_bytes()).expect_err("must reject");
    assert!(matches!(err, DataError::InvalidDate { .. }));
}

#[test]
fn negative_score_is_rejected() {
    let record = Record {
        model: "Bogus".into(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        score: -1.0,
        vendor: VendorId::Openai,
    };
    let err = Dataset::from_records(vec![record]).expect_err("must reject");
    assert!(matches!(err, DataError::InvalidScore(..)));
}

#[test]
fn empty_record_set_is_rejected() {
    assert!(matches!(
        Dataset::from_records(Vec::new()),
        Err(DataError::EmptyDataset)
    ));
}

#[test]
fn vendor_ids_parse_case_insensitively() {
    assert_eq!("OpenAI".parse::<VendorId>().expect("parse"), VendorId::Openai);
    assert_eq!(" moonshot ".parse::<VendorId>().expect("parse"), VendorId::Moonshot);
    assert!("closedai".parse::<VendorId>().is_err());
}
