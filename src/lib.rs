//! Best-effort parser for four-component version numbers.
//!
//! ## Motivation
//!
//! Version strings found in the wild are rarely as tidy as `major.minor.build.revision`.
//! Installers append `-beta3`, build systems add a fifth number, and date stamps overflow a 32-bit component.
//! A strict parser rejects all of them, which leaves callers with nothing to compare.
//!
//! This crate parses the longest strict version a string starts with and reports precisely what was left:
//!
//! - Segments beyond the fourth are kept as excess (e.g. "1.2.3.4.5" parses as "1.2.3.4" with "5" left over)
//! - Trailing characters after the digits of a component end the version (e.g. "1.2.3.4-beta3" parses as "1.2.3.4" with "-beta3" left over)
//! - Components larger than `i32::MAX` are capped and the difference is left over (e.g. "1.2.2147483700.4" parses as "1.2.2147483647" with "53" and "4" left over)
//!
//! ## Examples
//!
//! ```rust
//! use flexible_version::{parse, Component, ParseOutcome, VersionValue};
//!
//! let parsed = parse("1.2.3.4");
//! assert_eq!(parsed.outcome, ParseOutcome::Success);
//! assert_eq!(parsed.version, Some(VersionValue::with_revision(1, 2, 3, 4)));
//!
//! let parsed = parse("1.2.3.4.5");
//! assert_eq!(parsed.outcome, ParseOutcome::SuccessWithExcess);
//! assert_eq!(parsed.leftovers.excess(), "5");
//!
//! let parsed = parse("1.2.3.4-beta3");
//! assert_eq!(parsed.outcome, ParseOutcome::RevisionTruncated);
//! assert_eq!(parsed.version, Some(VersionValue::with_revision(1, 2, 3, 4)));
//! assert_eq!(parsed.leftovers[Component::Revision], "-beta3");
//!
//! let parsed = parse("1.2.2147483700.4");
//! assert_eq!(parsed.outcome, ParseOutcome::BuildTruncated);
//! assert_eq!(parsed.version, Some(VersionValue::with_build(1, 2, 2147483647)));
//! assert_eq!(parsed.leftovers, ["", "", "53", "4", ""]);
//!
//! assert_eq!(parse("1").outcome, ParseOutcome::Unparseable);
//! assert_eq!(parse("").version, None);
//! ```
//!
//! Parsed versions compare component by component, an unset component sorts before `0`:
//!
//! ```rust
//! use flexible_version::parse;
//!
//! let installed = parse("5.1.2.0-preview").version;
//! let available = parse("5.1.10").version;
//! assert!(installed < available);
//!
//! let short = parse("1.2").version;
//! let long = parse("1.2.0").version;
//! assert!(short < long);
//! ```
//!
//! When the precise format matters, [`VersionValue::parse`] is the strict counterpart with detailed errors:
//!
//! ```rust
//! use flexible_version::VersionValue;
//!
//! let error = VersionValue::parse("1.2.3-beta").unwrap_err();
//! assert_eq!(
//!     format!("{:#}", error),
//!     "Could not parse the build component: `3-beta` is not a number\n|    1.2.3-beta\n|    ~~~~^^^^^^\n"
//! );
//! ```
//!
//! ## Features
//!
//! - `bigint` (default): components beyond the range of an `i64` are handled with arbitrary precision.
//!   Without it, a `f64` is used and the remainder of very long numbers may be imprecise.
//! - `version_serde`: `VersionValue` (de)serializes from and to its strict string form.
//! - `version_semver`: `VersionValue` converts into a `semver::Version`.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

pub use flexible_version_parser::{
    numeric, parse, split_literal, try_version, FlexibleVersion, Leftovers, ParseOutcome,
    EXCESS_SLOT, SLOTS,
};
pub use flexible_version_value::{Component, Error, ErrorKind, OwnedError, VersionValue};

#[cfg(test)]
mod tests;
