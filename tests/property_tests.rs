//! Property-based tests for rust_console_logger using proptest

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_console_logger::prelude::*;
use rust_console_logger::render;

fn any_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn plain_settings() -> LoggerSettings {
    LoggerSettings::default()
        .with_min_level(Level::Trace)
        .with_colors(false)
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level names parse back to the same level
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Parsing ignores case
    #[test]
    fn test_level_parse_case_insensitive(level in any_level()) {
        let lower: Level = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    /// Ordering follows the numeric value
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a.cmp(&b), (a as u8).cmp(&(b as u8)));
    }

    /// Print always passes; everything else passes exactly at or above the minimum
    #[test]
    fn test_level_gate(level in any_level(), min in any_level()) {
        prop_assert_eq!(level.passes(min), level == Level::Print || level >= min);
    }
}

// ============================================================================
// Field Sequence Tests
// ============================================================================

proptest! {
    /// Distinct keys keep their insertion order
    #[test]
    fn test_field_order_preserved(keys in prop::collection::btree_set(key_strategy(), 0..20)) {
        let keys: Vec<String> = keys.into_iter().rev().collect();
        let mut fields = Fields::new();
        for (i, key) in keys.iter().enumerate() {
            fields.set(key.clone(), i);
        }

        let got: Vec<String> = fields.keys().into_iter().map(String::from).collect();
        prop_assert_eq!(got, keys);
    }

    /// A repeated key keeps its first position and takes the last value
    #[test]
    fn test_duplicate_key_keeps_first_position(
        keys in prop::collection::vec(key_strategy(), 1..30),
    ) {
        let mut fields = Fields::new();
        let mut first_seen: Vec<String> = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            fields.set(key.clone(), i);
            if !first_seen.contains(key) {
                first_seen.push(key.clone());
            }
        }

        prop_assert_eq!(fields.len(), first_seen.len());
        let got: Vec<String> = fields.keys().into_iter().map(String::from).collect();
        prop_assert_eq!(&got, &first_seen);
        for key in &first_seen {
            let last = keys.iter().rposition(|k| k == key).unwrap();
            prop_assert_eq!(fields.get(key), Some(&FieldValue::from(last)));
        }
    }

    /// An odd argument count leaves a final key with an empty value
    #[test]
    fn test_from_args_pairs(values in prop::collection::vec("[a-z]{1,6}", 0..15)) {
        let args: Vec<FieldValue> = values.iter().map(|v| FieldValue::from(v.as_str())).collect();
        let fields = Fields::from_args(args);

        if values.len() % 2 == 1 {
            let key = values.last().unwrap();
            prop_assert!(fields.get(key).is_some_and(FieldValue::is_null));
        }
        prop_assert!(fields.len() <= values.len().div_ceil(2));
    }
}

// ============================================================================
// Render Tests
// ============================================================================

proptest! {
    /// N fields render as N rows: N-1 branches and exactly one closing branch
    #[test]
    fn test_connector_counts(
        level in any_level(),
        keys in prop::collection::btree_set(key_strategy(), 0..12),
        message in "[a-zA-Z ]{1,30}",
    ) {
        let fields: Fields = keys.iter().map(|k| (k.clone(), "v")).collect();
        let now = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        let output = render(level, &message, &fields, &plain_settings(), None, &now);

        let lines: Vec<&str> = output.lines().collect();
        prop_assert_eq!(lines.len(), 1 + fields.len());
        let branches = lines.iter().filter(|l| l.starts_with("  ├─ ")).count();
        let closers = lines.iter().filter(|l| l.starts_with("  └─ ")).count();
        if fields.is_empty() {
            prop_assert_eq!(closers, 0);
        } else {
            prop_assert_eq!(branches, fields.len() - 1);
            prop_assert_eq!(closers, 1);
            prop_assert!(lines.last().unwrap().starts_with("  └─ "));
        }
        prop_assert!(output.ends_with('\n'));
    }

    /// The caller row is the last row whatever fields precede it
    #[test]
    fn test_caller_always_last(
        keys in prop::collection::vec(key_strategy(), 0..10),
        line in 1u32..10_000,
    ) {
        let mut fields = Fields::new();
        for key in &keys {
            fields.set(key.clone(), "x");
        }
        fields.set("err", "boom");
        let caller = CallerInfo { file: "src/main.rs".to_string(), line };
        let now = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();

        let output = render(Level::Error, "m", &fields, &plain_settings(), Some(&caller), &now);

        let last = output.lines().last().unwrap();
        prop_assert_eq!(last.to_string(), format!("  └─ caller: src/main.rs:{}", line));
        prop_assert_eq!(output.lines().count(), 2 + fields.len());
    }

    /// The message is carried verbatim into the header
    #[test]
    fn test_header_contains_message(level in any_level(), message in "[^\n]{0,40}") {
        let now = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        let output = render(level, &message, &Fields::new(), &plain_settings(), None, &now);
        let header = output.strip_suffix('\n').unwrap();
        prop_assert!(header.ends_with(message.as_str()));
    }
}
