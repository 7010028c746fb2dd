//! CSV files written from paper records

mod common;

use std::fs;

use common::efetch_fixture;
use pubmed_papers::export::{read_csv, save_csv};
use pubmed_papers::{PaperRecord, parse_records_from_xml};

#[test]
fn test_saved_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("papers.csv");

    let records = vec![PaperRecord {
        pubmed_id: "1".to_string(),
        title: "T".to_string(),
        authors: "A".to_string(),
        abstract_text: "Ab".to_string(),
    }];
    save_csv(&path, &records).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["PubmedID,Title,Authors,Abstract", "1,T,A,Ab"]);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("papers.csv");
    fs::write(&path, "stale content that is much longer than the new file\n".repeat(20)).unwrap();

    save_csv(&path, &[]).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "PubmedID,Title,Authors,Abstract\n"
    );
}

#[test]
fn test_round_trip_through_file() {
    let records = parse_records_from_xml(&efetch_fixture("three_articles.xml")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.csv");
    save_csv(&path, &records).unwrap();

    let file = fs::File::open(&path).unwrap();
    let reread = read_csv(file).unwrap();

    assert_eq!(reread.len(), records.len());
    for (original, copy) in records.iter().zip(&reread) {
        assert_eq!(original.fields(), copy.fields());
    }
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist").join("papers.csv");

    let err = save_csv(&path, &[]).unwrap_err();
    assert!(matches!(err, pubmed_papers::PubMedError::IoError(_)));
}
