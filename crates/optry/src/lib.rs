//! Optional and Try value types for expressing absence and failure.
//!
//! Provides a unified entry point to the optry crates:
//!
//! - [`Optional`] — a value or nothing
//! - [`Try`] — a value or a captured [`Failure`]
//! - [`classify`] — the policy deciding which failures a `Try` may capture
//!
//! # Quick Start
//!
//! ```rust
//! use optry::{Failure, Optional, Try, Unrecoverable};
//!
//! fn lookup(id: u32) -> Result<Try<String>, Unrecoverable> {
//!     Try::of(|| match id {
//!         1 => Ok("root".to_string()),
//!         _ => Err(Failure::no_such_element(format!("user {id}"))),
//!     })
//! }
//!
//! let name: Optional<String> = lookup(2).unwrap().to_optional();
//! assert_eq!(name.or_else("guest".into()), "guest");
//! ```

pub use optry_core::{
    classify, config, constant, function, is_fatal, is_recoverable, lift, ClassifierConfig,
    Classify, ConfigError, Configured, Failure, FailureKind, NonFatal, Throws, Unrecoverable,
};
pub use optry_option::{Optional, OptionalError};
pub use optry_try::Try;

/// Glob-importable names for callers chaining wrappers.
pub mod prelude {
    pub use optry_core::{Failure, FailureKind, Throws, Unrecoverable};
    pub use optry_option::Optional::{self, Empty, Present};
    pub use optry_try::Try;
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::Write;
    use std::path::Path;

    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::{is_fatal, ClassifierConfig, Configured};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    /// Read a file of one integer per line and sum it.
    fn sum_lines(path: &Path) -> Result<Try<i64>, Unrecoverable> {
        Try::of(|| Ok(std::fs::read_to_string(path)?))?
            .map(|text| {
                text.lines()
                    .map(|line| -> Throws<i64> { Ok(line.trim().parse::<i64>()?) })
                    .collect::<Throws<Vec<i64>>>()
            })?
            .map(|numbers| Ok(numbers.iter().sum::<i64>()))
    }

    // -----------------------------------------------------------------------
    // 1. A failed read recovers into its textual form
    // -----------------------------------------------------------------------
    #[test]
    fn io_failure_recovers_to_string() {
        init_tracing();
        let t = Try::<String>::of(|| Err(Failure::io("")))
            .unwrap()
            .recover(|e| Ok(e.to_string()))
            .unwrap();
        assert_eq!(t.to_string(), "Ok{Io}");
        assert_eq!(t.get(), Ok("Io".to_string()));
    }

    // -----------------------------------------------------------------------
    // 2. Missing file falls back to a default file and sums it
    // -----------------------------------------------------------------------
    #[test]
    fn missing_file_recovers_with_default_file() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("numbers.txt");
        let mut file = std::fs::File::create(&default).unwrap();
        writeln!(file, "10\n20\n25").unwrap();

        let missing = dir.path().join("absent.txt");
        let total = Try::of(|| {
            std::fs::metadata(&missing)?;
            Ok(missing.clone())
        })
        .unwrap()
        .recover_with(|_| Ok(Try::ok(default.clone())?))
        .unwrap()
        .flat_map(|path| Ok(sum_lines(&path)?))
        .unwrap()
        .get_or_else(|| Ok(505))
        .unwrap();
        assert_eq!(total, 55);
    }

    // -----------------------------------------------------------------------
    // 3. A malformed line becomes a captured parse failure
    // -----------------------------------------------------------------------
    #[test]
    fn malformed_line_is_captured_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.txt");
        std::fs::write(&path, "1\ntwo\n3\n").unwrap();

        let t = sum_lines(&path).unwrap();
        assert_eq!(t.failure().map(Failure::kind), Some(&FailureKind::Parse));
        assert_eq!(t.get_or_else(|| Ok(505)), Ok(505));
    }

    // -----------------------------------------------------------------------
    // 4. Interruption escapes the boundary that observed it
    // -----------------------------------------------------------------------
    #[test]
    fn interruption_escapes_try_of() {
        init_tracing();
        let err = Try::<()>::of(|| Err(Failure::interrupted("task cancelled"))).unwrap_err();
        assert_eq!(err.failure().kind(), &FailureKind::Interrupted);
    }

    // -----------------------------------------------------------------------
    // 5. A fatal link stops the remaining chain
    // -----------------------------------------------------------------------
    #[test]
    fn fatal_mid_chain_skips_later_links() {
        let later = Cell::new(false);
        let run = || -> Result<Try<i32>, Unrecoverable> {
            Try::of(|| Ok(1))?
                .flat_map(|_| Err::<Try<i32>, _>(Failure::out_of_memory("arena")))?
                .recover(|_| {
                    later.set(true);
                    Ok(0)
                })
        };
        assert!(run().is_err());
        assert!(!later.get());
    }

    // -----------------------------------------------------------------------
    // 6. Nested chains cannot swallow an escaped failure
    // -----------------------------------------------------------------------
    #[test]
    fn escaped_failure_stays_fatal_in_outer_chain() {
        let inner = || Try::<i32>::of(|| Err(Failure::linkage("libfoo.so")));
        let err = Try::of(|| Ok(inner()?.get()?)).unwrap_err();
        assert!(is_fatal(err.failure()));
        assert_eq!(err.failure().kind(), &FailureKind::Linkage);
    }

    // -----------------------------------------------------------------------
    // 7. A captured failure re-raised by get() is captured again
    // -----------------------------------------------------------------------
    #[test]
    fn reraised_recoverable_failure_is_captured_again() {
        let first = Try::<i32>::of(|| Err(Failure::io("once"))).unwrap();
        let second = Try::of(|| first.get()).unwrap();
        assert_eq!(second.failure(), Some(&Failure::io("once")));
    }

    // -----------------------------------------------------------------------
    // 8. Optional filtering over a parsed list
    // -----------------------------------------------------------------------
    #[test]
    fn optional_pipeline_keeps_only_large_numbers() {
        let inputs = [Present("5"), Empty, Present("2"), Empty];
        let kept: Vec<Optional<i32>> = inputs
            .iter()
            .map(|o| o.map(|s| s.parse::<i32>().ok()).filter(|n| *n > 4))
            .collect();
        assert_eq!(kept, vec![Present(5), Empty, Empty, Empty]);
        assert_eq!(kept[0].to_string(), "Present{5}");
    }

    // -----------------------------------------------------------------------
    // 9. Try and Optional meet at to_optional
    // -----------------------------------------------------------------------
    #[test]
    fn try_projects_into_optional() {
        let ok = Try::of(|| Ok("x")).unwrap().to_optional();
        assert_eq!(ok, Present("x"));
        let err = Try::<&str>::of(|| Err(Failure::io(""))).unwrap().to_optional();
        assert_eq!(err, Empty);
    }

    // -----------------------------------------------------------------------
    // 10. Optional accessor errors flow into a Try callback
    // -----------------------------------------------------------------------
    #[test]
    fn empty_access_inside_try_is_captured() {
        let empty: Optional<i32> = Empty;
        let t = Try::of(|| Ok(*empty.get()?)).unwrap();
        assert_eq!(t.failure().map(Failure::kind), Some(&FailureKind::EmptyValueAccess));
    }

    // -----------------------------------------------------------------------
    // 11. Configured classifier loaded from TOML
    // -----------------------------------------------------------------------
    #[test]
    fn toml_configured_classifier() {
        let config = ClassifierConfig::from_toml_str(r#"fatal_kinds = ["Shutdown"]"#).unwrap();
        let classifier = Configured::from(config);
        let err = Try::<()>::of_with(&classifier, || Err(Failure::other("Shutdown", "")))
            .unwrap_err();
        assert_eq!(err.failure().kind().name(), "Shutdown");
        let t = Try::<()>::of_with(&classifier, || Err(Failure::stack_overflow(""))).unwrap();
        assert!(t.is_failure());
    }

    proptest! {
        // -------------------------------------------------------------------
        // 12. Recoverable producer failures are what failed() reports
        // -------------------------------------------------------------------
        #[test]
        fn failed_reports_captured_failure(msg in "[a-z ]{0,16}") {
            let t = Try::<u8>::of(|| Err(Failure::io(msg.clone()))).unwrap();
            prop_assert!(t.is_failure());
            prop_assert_eq!(t.failed().get(), Ok(Failure::io(msg)));
        }

        // -------------------------------------------------------------------
        // 13. of_nullable and get agree
        // -------------------------------------------------------------------
        #[test]
        fn of_nullable_get(v in proptest::option::of(any::<u32>())) {
            let o = Optional::of_nullable(v);
            prop_assert_eq!(o.get().ok().copied(), v);
            prop_assert_eq!(o.is_empty(), v.is_none());
        }
    }
}
