#[path = "common/mod.rs"]
mod common;

use common::SlateTest;

// ============================================================================
// Completions command tests
// ============================================================================

#[test]
fn test_completions_bash() {
    let slate = SlateTest::new();

    let stdout = slate.run_success(&["completions", "bash"]);
    assert!(stdout.contains("_slate"));
}

#[test]
fn test_completions_zsh() {
    let slate = SlateTest::new();

    let stdout = slate.run_success(&["completions", "zsh"]);
    assert!(stdout.contains("#compdef slate"));
}

#[test]
fn test_completions_fish() {
    let slate = SlateTest::new();

    let stdout = slate.run_success(&["completions", "fish"]);
    assert!(stdout.contains("complete -c slate"));
}

#[test]
fn test_completions_invalid_shell() {
    let slate = SlateTest::new();

    slate.run_failure(&["completions", "invalid"]);
}
