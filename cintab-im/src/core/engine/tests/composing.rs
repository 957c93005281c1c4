use crate::core::session::SessionState;

use super::*;

#[test]
fn test_composition_keys_build_display() {
    let mut engine = engine();

    assert_eq!(engine.process_key(&press('n')), Verdict::Processed);
    assert_eq!(engine.context().composition(), "n");
    assert_eq!(engine.context().display_composition(), "ㄋ");

    assert_eq!(engine.process_key(&press('i')), Verdict::Processed);
    assert_eq!(engine.context().display_composition(), "ㄋㄧ");
    assert_eq!(engine.context().state(), SessionState::Composing);
}

#[test]
fn test_convert_and_select() {
    let mut engine = engine();
    type_keys(&mut engine, "ni");

    assert_eq!(engine.process_key(&press(' ')), Verdict::Processed);
    assert_eq!(engine.context().state(), SessionState::SelectingCandidate);
    assert_eq!(
        engine.context().candidates().window(),
        ["你", "尼", "妮", "擬"]
    );
    assert_eq!(engine.context().candidates().start(), 0);

    // "s" is the second selection key
    assert_eq!(engine.process_key(&press('s')), Verdict::Committed);
    assert_eq!(engine.context().commit_text(), "尼");
    assert_eq!(engine.context().state(), SessionState::Composing);
}

#[test]
fn test_selection_key_commits_from_composing_preview() {
    // Candidates are visible while composing; a selection key that cannot
    // compose picks straight from the preview window.
    let mut engine = engine();
    type_keys(&mut engine, "ni");

    assert_eq!(engine.process_key(&press('f')), Verdict::Committed);
    assert_eq!(engine.context().commit_text(), "擬");
}

#[test]
fn test_convert_with_empty_composition_is_ignored() {
    let mut engine = engine();
    assert_eq!(engine.process_key(&press(' ')), Verdict::Ignored);
}

#[test]
fn test_convert_without_match_is_an_error() {
    let mut engine = engine();
    type_keys(&mut engine, "n");

    assert_eq!(engine.process_key(&press(' ')), Verdict::Error);
    // Composition survives the failed conversion
    assert_eq!(engine.context().composition(), "n");
    assert_eq!(engine.context().state(), SessionState::Composing);
}

#[test]
fn test_error_verdicts_invoke_the_notifier() {
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<EngineError>>>);
    impl ErrorNotifier for Recorder {
        fn notify(&mut self, error: &EngineError) {
            self.0.borrow_mut().push(error.clone());
        }
    }

    let errors = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine();
    engine.set_notifier(Box::new(Recorder(errors.clone())));

    type_keys(&mut engine, "n");
    engine.process_key(&press(' '));

    assert_eq!(
        errors.borrow().as_slice(),
        [EngineError::NoCandidateMatch {
            composition: "n".into()
        }]
    );
}

#[test]
fn test_single_candidate_commits_on_convert() {
    let mut engine = engine();
    type_keys(&mut engine, "e");

    assert_eq!(engine.process_key(&press(' ')), Verdict::Committed);
    assert_eq!(engine.context().commit_text(), "之");
}

#[test]
fn test_backspace() {
    let mut engine = engine();
    type_keys(&mut engine, "ni");

    assert_eq!(engine.process_key(&press_key(Key::Backspace)), Verdict::Processed);
    assert_eq!(engine.context().composition(), "n");
    assert_eq!(engine.context().display_composition(), "ㄋ");

    engine.process_key(&press_key(Key::Backspace));
    assert!(engine.context().is_composition_empty());

    // Nothing left to delete
    assert_eq!(engine.process_key(&press_key(Key::Backspace)), Verdict::Ignored);
}

#[test]
fn test_append_then_delete_restores_composition() {
    let mut engine = engine();
    type_keys(&mut engine, "n");
    let before = engine.context().clone();

    engine.process_key(&press('i'));
    engine.process_key(&press_key(Key::Backspace));
    assert_eq!(engine.context(), &before);
}

#[test]
fn test_cancel() {
    let mut engine = engine();
    assert_eq!(engine.process_key(&press_key(Key::Escape)), Verdict::Ignored);

    type_keys(&mut engine, "ni");
    assert_eq!(engine.process_key(&press_key(Key::Escape)), Verdict::Processed);
    assert!(engine.context().is_composition_empty());
    assert!(engine.context().candidates().is_empty());
}

#[test]
fn test_end_key_converts_mid_composition() {
    let mut engine = engine();
    type_keys(&mut engine, "ni");

    // "3" is an end key and NI3 is a literal entry with one candidate
    assert_eq!(engine.process_key(&press('3')), Verdict::Committed);
    assert_eq!(engine.context().commit_text(), "你");
    // Never left dangling in Composing with the end key appended
    assert_eq!(engine.context().state(), SessionState::Composing);
    assert!(engine.context().is_composition_empty());
}

#[test]
fn test_extending_key_without_keyname_converts() {
    // "1" is neither a composition key nor an end key, but W1 is a literal
    // entry (Array30-style positional digits).
    let table = Arc::new(
        TableModel::from_toml_str(
            r#"
            selkey = "asdf"
            keyname = { w = "田" }
            chardef = { W1 = ["壹", "貳"] }
            "#,
        )
        .unwrap(),
    );
    let mut engine = InputEngine::new(table);

    type_keys(&mut engine, "w");
    assert_eq!(engine.process_key(&press('1')), Verdict::Processed);
    assert_eq!(engine.context().state(), SessionState::SelectingCandidate);
    assert_eq!(engine.context().candidates().window(), ["壹", "貳"]);
}

#[test]
fn test_unrelated_key_is_ignored() {
    let mut engine = engine();
    assert_eq!(engine.process_key(&press('z')), Verdict::Ignored);
    assert_eq!(engine.process_key(&press_key(Key::Left)), Verdict::Ignored);
}

#[test]
fn test_releases_and_control_modifiers_never_reach_the_machine() {
    let mut engine = engine();

    assert_eq!(engine.process_key(&release('n')), Verdict::Ignored);

    let ctrl_n = KeyEvent::new(
        Key::Char('n'),
        KeyModifiers::new().with_control(true),
        true,
    );
    assert_eq!(engine.process_key(&ctrl_n), Verdict::Ignored);

    let alt_n = KeyEvent::new(Key::Char('n'), KeyModifiers::new().with_alt(true), true);
    assert_eq!(engine.process_key(&alt_n), Verdict::Ignored);

    assert!(engine.context().is_composition_empty());
}

#[test]
fn test_commit_resets_to_a_fresh_session() {
    let mut engine = engine();
    type_keys(&mut engine, "ni");
    engine.process_key(&press(' '));
    assert_eq!(engine.process_key(&press('a')), Verdict::Committed);

    let ctx = engine.context();
    assert_eq!(ctx.state(), SessionState::Composing);
    assert!(ctx.is_composition_empty());
    assert!(ctx.candidates().is_empty());
    assert_eq!(ctx.display_composition(), "");
    // Only the committed text distinguishes it from a new session
    assert_eq!(ctx.commit_text(), "你");
}
