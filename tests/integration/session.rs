//! End-to-end router sessions with the dry-run executor

use timewarp::backends::dev::repl::{Color, CommandRouter, Flow, Transcript};
use timewarp::backends::DryRunExecutor;
use timewarp::lang::validate;
use timewarp::{classify, Diagnostic, LanguageTag};

fn router() -> CommandRouter<DryRunExecutor, Transcript> {
    CommandRouter::new(DryRunExecutor::new(), Transcript::new())
}

fn feed(
    router: &mut CommandRouter<DryRunExecutor, Transcript>,
    lines: &[&str],
) {
    for line in lines {
        assert_eq!(router.handle_line(line), Flow::Continue, "{}", line);
    }
}

#[test]
fn test_out_of_order_entry_runs_sorted() {
    let mut r = router();
    feed(&mut r, &["10 PRINT 1", "20 PRINT 2", "15 PRINT 1.5"]);

    let listed: Vec<(u64, String)> = r
        .session()
        .store()
        .list()
        .into_iter()
        .map(|l| (l.number, l.text))
        .collect();
    assert_eq!(
        listed,
        vec![
            (10, "PRINT 1".to_string()),
            (15, "PRINT 1.5".to_string()),
            (20, "PRINT 2".to_string()),
        ]
    );

    feed(&mut r, &["RUN"]);
    assert_eq!(
        r.display().all_text(),
        "[time_warp] 10 PRINT 1\n\
         [time_warp] 15 PRINT 1.5\n\
         [time_warp] 20 PRINT 2\n\
         Program completed.\n"
    );
    assert_eq!(r.executor().runs(), 1);
}

#[test]
fn test_new_then_list_reports_empty() {
    let mut r = router();
    feed(&mut r, &["10 PRINT 1", "20 PRINT 2", "15 PRINT 1.5", "RUN", "NEW"]);
    assert!(r.session().store().is_empty());

    feed(&mut r, &["LIST"]);
    assert_eq!(r.display().texts_with(Color::Warning), vec!["No program loaded.\n"]);
}

#[test]
fn test_unbalanced_pascal_line_has_one_finding() {
    assert_eq!(
        validate("(a b", LanguageTag::Pascal),
        vec![Diagnostic::new(1, "Unmatched parentheses: 1 opening, 0 closing")]
    );
}

#[test]
fn test_unrecognised_text_runs_as_base_language() {
    assert_eq!(classify("abc", None), LanguageTag::TimeWarp);

    let mut r = router();
    feed(&mut r, &["abc"]);
    assert_eq!(r.display().all_text(), "[time_warp] abc\n");
}

#[test]
fn test_replacing_a_line_keeps_one_entry() {
    let mut r = router();
    feed(&mut r, &["10 PRINT \"A\"", "10 PRINT \"B\"", "LIST"]);
    assert_eq!(r.display().screen(), "Program:\n10 PRINT \"B\"\n");
}

#[test]
fn test_mistyped_lines_do_not_end_the_session() {
    let mut r = router();
    feed(&mut r, &["10", "1O PRINT 1", "", "   ", "HELP"]);
    assert_eq!(r.display().texts_with(Color::Error).len(), 2);
    assert!(r.session().store().is_empty());
    assert_eq!(r.handle_line("bye"), Flow::Exit);
}

#[test]
fn test_clear_screen_and_ok_prompt() {
    let mut r = router();
    feed(&mut r, &["PRINT 1", "CLEAR"]);
    assert_eq!(r.display().screen(), "");
    assert!(r.take_ok_prompt());
}
