use super::App;
use crate::{
    seq::{fasta::read_fasta, table::SeqTable},
    terms::read_terms,
};
use serde_json::Value;

const TERMS: &str = "EntryID\tterm\taspect\na\tGO:1\tBPO\nb\tGO:2\tMFO\nb\tGO:3\tBPO\n";

fn app_from(fasta: &str, terms: &str) -> App {
    let table = read_fasta(fasta.as_bytes()).expect("fasta");
    let terms = read_terms(terms.as_bytes()).expect("terms");
    App::new("TEST", table, &terms, 2)
}

fn info_text(app: &App, head: usize) -> String {
    let mut out: Vec<u8> = Vec::new();
    app.output_info(&mut out, head).expect("write");
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn test_app_counts() {
    let app = app_from(">a\nMMM\n>b\nKK\n", TERMS);
    assert_eq!(app.num_records(), 2);
    assert_eq!(app.num_annotations(), 3);
    assert_eq!(app.filename, "TEST");
}

#[test]
fn test_output_info() {
    let app = app_from(">a\nMMM\n>b\nKK\n", TERMS);
    let text = info_text(&app, 5);
    insta::assert_snapshot!(text.trim_end(), @r"
    Sequences: 2
    id  seq  desc
    a   MMM  a
    b   KK   b

    Sequence length: min 2, max 3, mean 2.5, median 2.5

    Amino-acid counts:
      M  3  Methionine
      K  2  Lysine

    Aspects (3 annotations):
      BPO  2  Biological Process
      MFO  1  Molecular Function
    ");
}

#[test]
fn test_output_info_head_limits_rows() {
    let app = app_from(">a\nMMM\n>b\nKK\n>c\nW\n", TERMS);
    let text = info_text(&app, 1);
    assert!(text.contains("a   MMM  a"));
    assert!(!text.contains("KK   b"));
    assert!(text.starts_with("Sequences: 3\n"));
}

#[test]
fn test_output_info_lists_non_standard_residues() {
    let app = app_from(">a\nMXUL\n", TERMS);
    let text = info_text(&app, 5);
    assert!(text.contains("  U  1  Selenocysteine"), "{}", text);
    assert!(text.contains("Non-standard residues: UX"), "{}", text);
}

#[test]
fn test_output_info_empty_table() {
    let terms = read_terms("EntryID\tterm\taspect\n".as_bytes()).expect("terms");
    let app = App::new("EMPTY", SeqTable::new(), &terms, 10);
    let text = info_text(&app, 5);
    assert!(text.contains("Sequences: 0\nid  seq  desc\n"));
    assert!(text.contains("Sequence length: n/a"));
    assert!(text.contains("Aspects (0 annotations):"));
}

#[test]
fn test_output_json() {
    let app = app_from(">a\nMMM\n>b\nKK\n", TERMS);
    let mut out: Vec<u8> = Vec::new();
    app.output_json(&mut out).expect("write");
    let json: Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(json["records"], 2);
    assert_eq!(json["residues"][0]["residue"], "M");
    assert_eq!(json["residues"][0]["count"], 3);
    assert_eq!(json["aspects"][1]["aspect"], "MFO");
    assert_eq!(json["length_histogram"].as_array().map(|a| a.len()), Some(2));
}
