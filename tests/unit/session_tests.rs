/*!
 * Tests for the review-session state and the shell command grammar
 */

use trivox::session::{Action, Session, preview, resolve_version};

use crate::common::entry;

#[test]
fn test_action_parse_withEmptyInput_shouldAskForNewText() {
    assert_eq!(Action::parse(""), Action::NewText);
    assert_eq!(Action::parse("   "), Action::NewText);
}

#[test]
fn test_action_parse_withRefineCommands_shouldReturnRefine() {
    assert_eq!(Action::parse("r1"), Action::Refine(1));
    assert_eq!(Action::parse("r2"), Action::Refine(2));
    assert_eq!(Action::parse("R3"), Action::Refine(3));
    assert_eq!(Action::parse("r12"), Action::Refine(12));
}

#[test]
fn test_action_parse_withBadRefineCommands_shouldBeInvalid() {
    assert_eq!(Action::parse("r"), Action::Invalid);
    assert_eq!(Action::parse("r0"), Action::Invalid);
    assert_eq!(Action::parse("rx"), Action::Invalid);
    assert_eq!(Action::parse("r 2"), Action::Invalid);
    assert_eq!(Action::parse("r2,3"), Action::Invalid);
}

#[test]
fn test_action_parse_withSaveCommands_shouldCollectIndices() {
    assert_eq!(Action::parse("1"), Action::Save(vec![1]));
    assert_eq!(Action::parse("1,3"), Action::Save(vec![1, 3]));
    assert_eq!(Action::parse("3, 1"), Action::Save(vec![3, 1]));
    // Non-numeric tokens are dropped
    assert_eq!(Action::parse("1, a, 3"), Action::Save(vec![1, 3]));
    // Nothing parseable still routes to Save; the shell reports it
    assert_eq!(Action::parse("2,"), Action::Save(vec![2]));
}

#[test]
fn test_action_parse_withUnknownInput_shouldBeInvalid() {
    assert_eq!(Action::parse("q"), Action::Invalid);
    assert_eq!(Action::parse("save 1"), Action::Invalid);
    assert_eq!(Action::parse("abc"), Action::Invalid);
}

/// Test that version lookup is 1-based and bounds-checked
#[test]
fn test_resolveVersion_withOneBasedIndex_shouldBoundsCheck() {
    let results = vec![entry("Olá.", &["A", "B", "C"])];

    assert_eq!(resolve_version(&results, 1), Some("A"));
    assert_eq!(resolve_version(&results, 2), Some("B"));
    assert_eq!(resolve_version(&results, 3), Some("C"));
    assert_eq!(resolve_version(&results, 0), None);
    assert_eq!(resolve_version(&results, 4), None);
    assert_eq!(resolve_version(&[], 1), None);
}

#[test]
fn test_resolveVersion_withSeveralEntries_shouldUseFirstEntry() {
    let results = vec![
        entry("First.", &["A", "B"]),
        entry("Second.", &["X", "Y"]),
    ];

    assert_eq!(resolve_version(&results, 1), Some("A"));
}

/// Test that saves land in command order, not version order
#[test]
fn test_saveSelections_withValidIndices_shouldAppendInCommandOrder() {
    let results = vec![entry("Olá.", &["one", "two", "three"])];
    let mut session = Session::new();

    let saved = session.save_selections(&results, &[1, 3]);
    assert_eq!(saved, vec!["one", "three"]);
    assert_eq!(session.compiled(), &["one", "three"]);

    // Command order wins over version order
    let saved = session.save_selections(&results, &[3, 1]);
    assert_eq!(saved, vec!["three", "one"]);
    assert_eq!(session.len(), 4);
}

#[test]
fn test_saveSelections_withOutOfRangeIndex_shouldAppendNothing() {
    let results = vec![entry("Olá.", &["one", "two", "three"])];
    let mut session = Session::new();

    let saved = session.save_selections(&results, &[5]);
    assert!(saved.is_empty());
    assert!(session.is_empty());

    let saved = session.save_selections(&results, &[0]);
    assert!(saved.is_empty());

    // Valid indices still land when mixed with bad ones
    let saved = session.save_selections(&results, &[5, 2]);
    assert_eq!(saved, vec!["two"]);
    assert_eq!(session.compiled(), &["two"]);
}

#[test]
fn test_saveSelections_withNoResults_shouldBeNoOp() {
    let mut session = Session::new();
    let saved = session.save_selections(&[], &[1, 2]);
    assert!(saved.is_empty());
    assert!(session.is_empty());
}

#[test]
fn test_preview_withMultibyteText_shouldRespectCharBoundaries() {
    assert_eq!(preview("café está pronto", 4), "café");
    assert_eq!(preview("short", 40), "short");
    assert_eq!(preview("", 10), "");
}
