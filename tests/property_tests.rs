//! Property-based tests for rust_term_logger using proptest

use proptest::prelude::*;
use rust_term_logger::backends::{NonInteractive, SharedBuffer};
use rust_term_logger::prelude::*;
use rust_term_logger::trim_source_path;
use std::time::Duration;

fn any_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn any_class() -> impl Strategy<Value = LogClass> {
    prop::sample::select(LogClass::ALL.to_vec())
}

fn component() -> impl Strategy<Value = String> {
    "[a-z_]{1,8}(\\.[a-z]{1,3})?".prop_filter("not the root marker", |c| c != "src")
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Test that Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_level_case_insensitive(level in any_level(), upper in any::<bool>()) {
        let input = if upper {
            level.to_str().to_uppercase()
        } else {
            level.to_str().to_lowercase()
        };
        prop_assert_eq!(input.parse::<Level>().unwrap(), level);
    }
}

// ============================================================================
// Path Trimming Tests
// ============================================================================

proptest! {
    #[test]
    fn test_trim_after_last_root(
        prefix in prop::collection::vec(component(), 0..4),
        rest in prop::collection::vec(component(), 1..4),
        backslash in any::<bool>(),
    ) {
        let sep = if backslash { "\\" } else { "/" };
        let rest = rest.join(sep);
        let path = format!("{}{sep}src{sep}{}", prefix.join(sep), rest, sep = sep);
        prop_assert_eq!(trim_source_path(&path, "src"), rest.as_str());
    }

    #[test]
    fn test_trim_without_root_is_identity(parts in prop::collection::vec(component(), 1..6)) {
        let path = format!("/{}", parts.join("/"));
        prop_assert_eq!(trim_source_path(&path, "src"), path.as_str());
    }
}

// ============================================================================
// Entry and Formatter Tests
// ============================================================================

proptest! {
    #[test]
    fn test_equality_ignores_timestamp(
        class in any_class(),
        level in any_level(),
        message in "[ -~]{0,40}",
        t1 in 0u64..10_000_000_000,
        t2 in 0u64..10_000_000_000,
    ) {
        let a = Entry::new(class, level, "a.rs:a:1", &message).with_timestamp(Duration::from_micros(t1));
        let b = Entry::new(class, level, "a.rs:a:1", &message).with_timestamp(Duration::from_micros(t2));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_different_messages_are_not_equal(a in "[a-z]{1,20}", b in "[a-z]{1,20}") {
        prop_assume!(a != b);
        let first = Entry::new(LogClass::Core, Level::Info, "", &a);
        let second = Entry::new(LogClass::Core, Level::Info, "", &b);
        prop_assert_ne!(first, second);
    }

    #[test]
    fn test_format_is_deterministic(
        class in any_class(),
        level in any_level(),
        message in "[ -~]{0,80}",
        micros in 0u64..100_000_000_000,
    ) {
        let entry = Entry::new(class, level, "x.rs:x:2", &message)
            .with_timestamp(Duration::from_micros(micros));
        let formatter = PlainFormatter::new();
        prop_assert_eq!(formatter.format(&entry), formatter.format(&entry));
    }

    #[test]
    fn test_repeat_marker_matches_count(count in 0u64..100_000, message in "[a-z ]{0,30}") {
        let entry = Entry::new(LogClass::Log, Level::Debug, "", &message).with_repeat_count(count);
        let line = PlainFormatter::new().format(&entry);
        if count == 0 {
            prop_assert!(!line.contains("Repeated"));
        } else {
            let marker = format!("[Repeated {}x]", count);
            prop_assert!(line.contains(&marker));
        }
    }

    #[test]
    fn test_truncated_width_never_exceeds_limit(limit in 1usize..200, message in "\\PC{0,300}") {
        let entry = Entry::new(LogClass::Log, Level::Info, "", &message);
        let formatter = PlainFormatter::with_max_len(limit);
        let mut line = String::new();
        let written = formatter.format_into(&entry, &mut line);
        prop_assert!(line.len() <= limit);
        prop_assert_eq!(written, line.chars().count());
    }
}

// ============================================================================
// Backend Tests
// ============================================================================

proptest! {
    /// Runs of identical messages produce a counter equal to the run length
    #[test]
    fn test_repeat_runs(runs in prop::collection::vec(1usize..6, 1..6)) {
        let output = SharedBuffer::new();
        let context = LoggingContext::builder()
            .writer(output.clone())
            .terminal(NonInteractive)
            .build()
            .unwrap();

        for (i, run) in runs.iter().enumerate() {
            for _ in 0..*run {
                context.emit(Entry::new(LogClass::Core, Level::Info, "", format!("run {}", i)));
            }
        }

        let contents = output.contents();
        let lines: Vec<&str> = contents.lines().collect();
        prop_assert_eq!(lines.len(), runs.iter().sum::<usize>());

        let mut offset = 0;
        for run in &runs {
            prop_assert!(!lines[offset].contains("Repeated"));
            for n in 1..*run {
                let marker = format!("[Repeated {}x]", n);
                prop_assert!(lines[offset + n].contains(&marker));
            }
            offset += run;
        }
    }
}
