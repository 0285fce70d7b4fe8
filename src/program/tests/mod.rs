//! Program store tests


use super::*;

#[test]
fn test_upsert_keeps_ascending_order() {
    let mut store = ProgramStore::new();
    store.upsert(10, "PRINT 1").unwrap();
    store.upsert(20, "PRINT 2").unwrap();
    store.upsert(15, "PRINT 1.5").unwrap();

    let numbers: Vec<u64> = store.list().iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![10, 15, 20]);
}

#[test]
fn test_upsert_replaces_in_place() {
    let mut store = ProgramStore::new();
    store.upsert(10, "PRINT 1").unwrap();
    store.upsert(20, "PRINT 2").unwrap();
    store.upsert(10, "PRINT \"again\"").unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(10), Some("PRINT \"again\""));
    assert_eq!(store.serialize(), vec!["10 PRINT \"again\"", "20 PRINT 2"]);
}

#[test]
fn test_upsert_trims_text() {
    let mut store = ProgramStore::new();
    store.upsert(5, "   FORWARD 10  ").unwrap();
    assert_eq!(store.get(5), Some("FORWARD 10"));
}

#[test]
fn test_upsert_rejects_blank_text() {
    let mut store = ProgramStore::new();
    store.upsert(10, "PRINT 1").unwrap();

    assert_eq!(store.upsert(10, "   "), Err(ProgramError::EmptyLine(10)));
    assert_eq!(store.get(10), Some("PRINT 1"));
    assert_eq!(store.upsert(30, ""), Err(ProgramError::EmptyLine(30)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_upsert_rejects_embedded_line_breaks() {
    let mut store = ProgramStore::new();
    store.upsert(10, "PRINT 0").unwrap();

    assert_eq!(
        store.upsert(10, "PRINT 1\n20 PRINT 2"),
        Err(ProgramError::LineBreak(10))
    );
    assert_eq!(store.upsert(30, "HOME\rFORWARD 5"), Err(ProgramError::LineBreak(30)));
    assert_eq!(store.serialize(), vec!["10 PRINT 0"]);

    let (restored, matched) = ProgramStore::from_content(&store.serialize().join("\n"));
    assert_eq!(matched, 1);
    assert_eq!(restored, store);
}

#[test]
fn test_surrounding_line_breaks_are_trimmed() {
    let mut store = ProgramStore::new();
    store.upsert(10, "\r\nPRINT 1\n").unwrap();
    assert_eq!(store.get(10), Some("PRINT 1"));
}

#[test]
fn test_remove_all_is_idempotent() {
    let mut store = ProgramStore::new();
    store.upsert(1, "HOME").unwrap();
    store.remove_all();
    assert!(store.is_empty());
    store.remove_all();
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn test_to_source_joins_with_line_breaks() {
    let mut store = ProgramStore::new();
    store.upsert(20, "PRINT 2").unwrap();
    store.upsert(10, "PRINT 1").unwrap();
    assert_eq!(store.to_source(), "10 PRINT 1\n20 PRINT 2");
}

#[test]
fn test_deserialize_unsorted_input() {
    let mut store = ProgramStore::new();
    let matched = store.deserialize("30 END\n10 LET A = 1\n20 PRINT A\n");
    assert_eq!(matched, 3);
    assert_eq!(store.serialize(), vec!["10 LET A = 1", "20 PRINT A", "30 END"]);
}

#[test]
fn test_deserialize_last_duplicate_wins() {
    let mut store = ProgramStore::new();
    store.deserialize("10 PRINT 1\n10 PRINT 2");
    assert_eq!(store.list(), vec![ProgramLine {
        number: 10,
        text: "PRINT 2".to_string()
    }]);
}

#[test]
fn test_deserialize_skips_non_program_lines() {
    let mut store = ProgramStore::new();
    let matched = store.deserialize("hello\n\n  10   PRINT 1  \n2x PRINT\n40\n");
    assert_eq!(matched, 1);
    assert_eq!(store.serialize(), vec!["10 PRINT 1"]);
}

#[test]
fn test_parse_program_line() {
    assert_eq!(parse_program_line("10 PRINT 1"), Some((10, "PRINT 1")));
    assert_eq!(parse_program_line("  7\tHOME "), Some((7, "HOME")));
    assert_eq!(parse_program_line("10"), None);
    assert_eq!(parse_program_line("10x PRINT"), None);
    assert_eq!(parse_program_line("PRINT 10"), None);
    assert_eq!(parse_program_line(""), None);
}

#[test]
fn test_program_line_display() {
    let line = ProgramLine {
        number: 100,
        text: "CIRCLE 20".to_string(),
    };
    assert_eq!(line.to_string(), "100 CIRCLE 20");
}
