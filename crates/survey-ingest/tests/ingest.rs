//! File-to-canonical integration tests.

use std::io::Write as _;

use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use survey_core::CategoryRegistry;
use survey_ingest::{TableShape, detect_shape, extract_department_matrix, normalize, read_csv_table};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn raw_response_csv_round_trip() {
    let file = write_csv(
        "社員ID,部署,Q1. 仕事にやりがいを感じる,Q2. 職場の環境は良い\n\
         101,営業部,4,3\n\
         102,営業部,2,\n\
         103,開発部,5,4\n",
    );
    let table = read_csv_table(file.path()).expect("read");
    assert!(matches!(detect_shape(&table), TableShape::Plain(_)));

    let mut rng = Pcg32::seed_from_u64(0);
    let canonical = normalize(&table, &mut rng);
    assert_eq!(canonical.questions.len(), 2);
    assert_eq!(canonical.rows.len(), 3);
    assert_eq!(canonical.rows[1].cells[1], None);
    assert_eq!(canonical.rows[2].department, "開発部");
}

#[test]
fn frequency_csv_reconstructs_counts() {
    let file = write_csv(
        "No,質問,5,4,3,2,1\n\
         ,,そう思う,やや思う,どちらとも,やや思わない,思わない\n\
         1,仕事にやりがいを感じる,6,16,23,17,2\n",
    );
    let table = read_csv_table(file.path()).expect("read");
    let mut rng = Pcg32::seed_from_u64(99);
    let canonical = normalize(&table, &mut rng);

    assert_eq!(canonical.rows.len(), 64);
    let mut counts = std::collections::BTreeMap::new();
    for row in &canonical.rows {
        if let Some(value) = &row.cells[0] {
            *counts.entry(value.clone()).or_insert(0u32) += 1;
        }
    }
    assert_eq!(counts.get("5"), Some(&6));
    assert_eq!(counts.get("4"), Some(&16));
    assert_eq!(counts.get("3"), Some(&23));
    assert_eq!(counts.get("2"), Some(&17));
    assert_eq!(counts.get("1"), Some(&2));
}

#[test]
fn department_matrix_csv_extracts() {
    let file = write_csv(
        "No,質問項目,A,B,Total\n\
         1,仕事にやりがいを感じる,3,4,3.5\n",
    );
    let table = read_csv_table(file.path()).expect("read");
    let data = extract_department_matrix(&table, &CategoryRegistry::default()).expect("extract");
    assert_eq!(data.overall_department, "Total");
    assert_eq!(data.questions[0].scores.get("A"), Some(&3.0));
    assert_eq!(data.questions[0].scores.get("B"), Some(&4.0));
    assert_eq!(data.questions[0].scores.get("Total"), Some(&3.5));
}
