//! Loading and saving programs through the router

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use timewarp::backends::dev::repl::{Color, CommandRouter, Transcript};
use timewarp::backends::DryRunExecutor;
use timewarp::program::file::{self, Loaded};

fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn router() -> CommandRouter<DryRunExecutor, Transcript> {
    CommandRouter::new(DryRunExecutor::new(), Transcript::new())
}

#[test]
fn test_open_program_file_sorts_lines() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "demo.tw", "20 PRINT \"B\"\n10 PRINT \"A\"\nnot a line\n");

    let mut r = router();
    r.open_file(&path);
    assert_eq!(r.session().store().serialize(), vec!["10 PRINT \"A\"", "20 PRINT \"B\""]);
    assert_eq!(r.session().current_file(), Some(path.as_path()));
    assert_eq!(
        r.display().texts_with(Color::Success),
        vec![
            format!("Loaded program from {}\n", path.display()).as_str(),
            "2 lines loaded.\n",
        ]
    );
}

#[test]
fn test_open_opaque_file_clears_store_and_displays() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "notes.txt", "just some notes\n");

    let mut r = router();
    r.handle_line("10 PRINT 1");
    r.open_file(&path);
    assert!(r.session().store().is_empty());
    assert!(r.display().all_text().contains("just some notes"));
    assert!(r.display().all_text().contains(&"=".repeat(50)));
}

#[test]
fn test_open_missing_file_reports_error() {
    let dir = TempDir::new().unwrap();
    let mut r = router();
    r.handle_line("10 PRINT 1");
    r.open_file(&dir.path().join("missing.tw"));

    let errors = r.display().texts_with(Color::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error: could not read"));
    assert_eq!(r.session().store().len(), 1);
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.tw");

    let mut r = router();
    r.handle_line("30 HOME");
    r.handle_line("10 FORWARD 50");
    r.save_file(Some(&path));
    assert_eq!(fs::read_to_string(&path).unwrap(), "10 FORWARD 50\n30 HOME\n");
    assert_eq!(r.session().current_file(), Some(path.as_path()));

    match file::load(&path).unwrap() {
        Loaded::Program(store) => assert_eq!(&store, r.session().store()),
        Loaded::Opaque(_) => panic!("saved program reloaded as opaque text"),
    }
}

#[test]
fn test_save_reuses_current_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "prog.tw", "10 PRINT 1\n");

    let mut r = router();
    r.open_file(&path);
    r.handle_line("20 PRINT 2");
    r.save_file(None);
    assert_eq!(fs::read_to_string(&path).unwrap(), "10 PRINT 1\n20 PRINT 2\n");
}

#[test]
fn test_save_without_program_or_name() {
    let mut r = router();
    r.save_file(None);
    assert_eq!(
        r.display().texts_with(Color::Warning),
        vec!["No program loaded to save.\n", "Create a line-numbered program first.\n"]
    );

    r.handle_line("10 PRINT 1");
    r.save_file(None);
    assert_eq!(r.display().texts_with(Color::Warning).last(), Some(&"No file name given.\n"));
}

#[test]
fn test_current_extension_guides_immediate_classification() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(&dir, "facts.plg", "10 likes(mary, wine).\n");

    let mut r = router();
    r.open_file(&path);
    r.display_mut().reset();
    r.handle_line("likes(X, wine)");
    assert_eq!(
        r.display().all_text(),
        "Line 1: Missing period at end of clause\n[prolog] likes(X, wine)\n"
    );
}
