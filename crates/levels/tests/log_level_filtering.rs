//! Integration tests for threshold filtering.
//!
//! These tests verify that the level store admits exactly the severities at
//! or above the configured threshold, for every threshold.

use levels::{LevelConfig, LevelStore, Severity, StyleTable, Surface};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    proptest::sample::select(Severity::ALL.to_vec())
}

// ============================================================================
// Gating Predicate
// ============================================================================

proptest! {
    #[test]
    fn should_emit_matches_rank_order(threshold in severity(), level in severity()) {
        let store = LevelStore::with_level(threshold);
        let position = |s: Severity| Severity::ALL.iter().position(|&other| other == s);
        prop_assert_eq!(store.should_emit(level), position(level) <= position(threshold));
    }

    #[test]
    fn style_round_trips_any_token(level in severity(), token in ".*") {
        let store = LevelStore::new();
        store.set_terminal_style(level, token.clone());
        store.set_browser_style(level, token.clone());

        let terminal = store.terminal_styles();
        let browser = store.browser_styles();
        prop_assert_eq!(terminal.get(level), token.as_str());
        prop_assert_eq!(browser.get(level), token.as_str());
    }
}

/// Verifies the threshold admits every more severe level.
#[test]
fn threshold_warning_admits_severe_error_and_warning() {
    let store = LevelStore::with_level(Severity::Warning);

    assert!(store.should_emit(Severity::Severe));
    assert!(store.should_emit(Severity::Error));
    assert!(store.should_emit(Severity::Warning));
    assert!(!store.should_emit(Severity::Info));
    assert!(!store.should_emit(Severity::Debug));
    assert!(!store.should_emit(Severity::Trace));
}

/// Verifies the strictest threshold only admits severe messages.
#[test]
fn threshold_severe_admits_only_severe() {
    let store = LevelStore::with_level(Severity::Severe);
    let admitted: Vec<_> = Severity::ALL
        .into_iter()
        .filter(|&level| store.should_emit(level))
        .collect();
    assert_eq!(admitted, [Severity::Severe]);
}

/// Verifies the loosest threshold admits everything.
#[test]
fn threshold_trace_admits_everything() {
    let store = LevelStore::with_level(Severity::Trace);
    assert!(Severity::ALL.into_iter().all(|level| store.should_emit(level)));
}

/// Verifies the gate reads the threshold fresh on each call.
#[test]
fn gate_follows_threshold_changes() {
    let store = LevelStore::new();
    assert!(!store.should_emit(Severity::Info));

    store.set_level(Severity::Info);
    assert!(store.should_emit(Severity::Info));

    store.set_level(Severity::Error);
    assert!(!store.should_emit(Severity::Info));
}

// ============================================================================
// Configuration
// ============================================================================

/// Verifies configuration overrides leave unnamed entries untouched.
#[test]
fn config_overrides_are_partial() {
    let store = LevelStore::new();
    LevelConfig::default()
        .with_style(Surface::Terminal, Severity::Trace, "")
        .apply(&store);

    let mut expected = StyleTable::terminal_defaults();
    expected.set(Severity::Trace, "");
    assert_eq!(store.terminal_styles(), expected);
    assert_eq!(store.level(), Severity::Error);
}
