//! Batch entry point

use std::fs;

use tempfile::TempDir;
use timewarp::backends::{DryRunExecutor, Execution, Executor, ExecutorError, ExecutorResult};
use timewarp::{BatchFile, LanguageTag};

#[test]
fn test_batch_forwards_whole_file_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("square.logo");
    fs::write(&path, "REPEAT 4 [FORWARD 50 RIGHT 90]\n").unwrap();

    let batch = BatchFile::read(&path).unwrap();
    assert_eq!(batch.source(), "REPEAT 4 [FORWARD 50 RIGHT 90]\n");

    let mut exec = DryRunExecutor::new();
    let result = batch.run(&mut exec, LanguageTag::Logo).unwrap();
    assert_eq!(
        result.output,
        "[logo] REPEAT 4 [FORWARD 50 RIGHT 90]\nProgram completed.\n"
    );
    assert_eq!(exec.runs(), 1);
}

#[test]
fn test_batch_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = BatchFile::read(&dir.path().join("nope.bas")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read file"));
}

#[test]
fn test_batch_engine_failure_is_reported() {
    struct Unsupported;
    impl Executor for Unsupported {
        fn run(
            &mut self,
            _source: &str,
            language: LanguageTag,
            _report_completion: bool,
        ) -> ExecutorResult<Execution> {
            Err(ExecutorError::UnsupportedLanguage(language))
        }
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.pas");
    fs::write(&path, "program hello;\n").unwrap();

    let batch = BatchFile::read(&path).unwrap();
    let err = batch.run(&mut Unsupported, LanguageTag::Pascal).unwrap_err();
    assert!(format!("{:#}", err).contains("unsupported language: pascal"));
}

#[test]
fn test_batch_unsuccessful_run_is_not_an_error() {
    struct Halting;
    impl Executor for Halting {
        fn run(
            &mut self,
            _source: &str,
            _language: LanguageTag,
            _report_completion: bool,
        ) -> ExecutorResult<Execution> {
            Ok(Execution::failed("Error on line 10\n"))
        }
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.bas");
    fs::write(&path, "10 GOTO\n").unwrap();

    let execution = BatchFile::read(&path)
        .unwrap()
        .run(&mut Halting, LanguageTag::Basic)
        .unwrap();
    assert!(!execution.success);
    assert_eq!(execution.output, "Error on line 10\n");
}
