//! Best-effort parser for four-component version numbers.
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

use std::fmt::{self, Display};

use flexible_version_value::{Component, VersionValue};

mod leftovers;
pub mod numeric;

pub use leftovers::{Leftovers, EXCESS_SLOT, SLOTS};
use numeric::{try_int32, Precision};

const SEPARATOR: &str = ".";
const COMPONENTS: usize = 4;

/// Parse a string slice into the longest version it starts with.
///
/// Parsing never fails with an error. Instead, the returned [`FlexibleVersion`] reports
/// how far parsing got in its [`ParseOutcome`] and keeps whatever could not be
/// interpreted in its [`Leftovers`]:
///
/// - A strict `N.N`, `N.N.N`, or `N.N.N.N` version parses as is
/// - Segments beyond the fourth are kept as excess (e.g. "1.2.3.4.5" parses as "1.2.3.4" with "5" left over)
/// - Trailing characters after the digits of a component end the version (e.g. "1.2.3.4-beta3" parses as "1.2.3.4" with "-beta3" left over)
/// - Components larger than `i32::MAX` are capped and the difference is left over (e.g. "1.2.2147483700" parses as "1.2.2147483647" with "53" left over)
/// - Segments following the component where parsing stopped are left over verbatim
/// - Less than two segments, or no numeric prefix at all, is [`ParseOutcome::Unparseable`]
///
/// Longer versions are always preferred over shorter ones.
///
/// ## Examples
///
/// ```rust
/// use flexible_version_parser::{parse, ParseOutcome};
/// use flexible_version_value::VersionValue;
///
/// let parsed = parse("1.2.3.4");
/// assert_eq!(parsed.outcome, ParseOutcome::Success);
/// assert_eq!(parsed.version, Some(VersionValue::with_revision(1, 2, 3, 4)));
/// assert!(parsed.leftovers.is_empty());
///
/// let parsed = parse("1.2.3.4.5");
/// assert_eq!(parsed.outcome, ParseOutcome::SuccessWithExcess);
/// assert_eq!(parsed.version, Some(VersionValue::with_revision(1, 2, 3, 4)));
/// assert_eq!(parsed.leftovers, ["", "", "", "", "5"]);
///
/// let parsed = parse("1.2.3.4-beta3");
/// assert_eq!(parsed.outcome, ParseOutcome::RevisionTruncated);
/// assert_eq!(parsed.version, Some(VersionValue::with_revision(1, 2, 3, 4)));
/// assert_eq!(parsed.leftovers, ["", "", "", "-beta3", ""]);
///
/// let parsed = parse("1.2.2147483700.4");
/// assert_eq!(parsed.outcome, ParseOutcome::BuildTruncated);
/// assert_eq!(parsed.version, Some(VersionValue::with_build(1, 2, i32::MAX)));
/// assert_eq!(parsed.leftovers, ["", "", "53", "4", ""]);
///
/// assert_eq!(parse("1").outcome, ParseOutcome::Unparseable);
/// assert_eq!(parse("").outcome, ParseOutcome::Unparseable);
/// ```
pub fn parse(input: &str) -> FlexibleVersion {
    if let Some(version) = try_version(input) {
        return FlexibleVersion::new(version, Leftovers::new(), ParseOutcome::Success);
    }

    let segments = split_literal(input, SEPARATOR);
    if segments.len() < 2 {
        log::trace!("`{}` has no minor component", input);
        return FlexibleVersion::unparseable();
    }

    let mut excess = Leftovers::new();
    let segments = if segments.len() > COMPONENTS {
        excess.set_excess(segments[COMPONENTS..].join(SEPARATOR));
        let segments = &segments[..COMPONENTS];
        if let Some(version) = try_version(&segments.join(SEPARATOR)) {
            log::debug!("`{}` has excess segments `{}`", input, excess.excess());
            return FlexibleVersion::new(version, excess, ParseOutcome::SuccessWithExcess);
        }
        segments
    } else {
        &segments[..]
    };

    for failing in (1..segments.len()).rev() {
        if let Some(parsed) = truncate_at(segments, failing, &excess) {
            log::debug!(
                "`{}` parsed as {} ({})",
                input,
                parsed.canonical().unwrap_or_default(),
                parsed.outcome
            );
            return parsed;
        }
    }

    log::trace!("`{}` has no valid version prefix", input);
    FlexibleVersion::unparseable()
}

/// Try to end the version right before the component at `failing`,
/// keeping as much of that component as possible.
fn truncate_at(segments: &[&str], failing: usize, excess: &Leftovers) -> Option<FlexibleVersion> {
    let component = Component::from_index(failing)?;
    let prefix = segments[..failing].join(SEPARATOR);

    // a lone major cannot be checked as a version, only as a number
    let prefix_version = if failing >= 2 {
        Some(try_version(&prefix)?)
    } else if try_int32(&prefix).is_some() {
        None
    } else {
        log::trace!("major `{}` is not a number", prefix);
        return None;
    };

    let segment = segments[failing];
    let digits = leading_digits(segment);
    let trailing = &segment[digits.len()..];

    let mut leftovers = excess.clone();
    for (index, verbatim) in segments.iter().enumerate().skip(failing + 1) {
        if let Some(later) = Component::from_index(index) {
            leftovers.set(later, (*verbatim).to_string());
        }
    }

    if digits.is_empty() {
        log::trace!("{} `{}` has no leading digits", component, segment);
        let version = prefix_version?;
        leftovers.set(component, segment.to_string());
        return Some(FlexibleVersion::new(
            version,
            leftovers,
            ParseOutcome::truncated_at(component),
        ));
    }

    for precision in Precision::TIERS.iter() {
        let capped = match precision.cap(digits) {
            Some(capped) => capped,
            None => {
                log::trace!("{} `{}` does not fit {:?}", component, digits, precision);
                continue;
            }
        };
        let candidate = format!("{}{}{}", prefix, SEPARATOR, capped.component);
        if let Some(version) = try_version(&candidate) {
            let mut leftover = capped.remainder.unwrap_or_default();
            leftover.push_str(trailing);
            leftovers.set(component, leftover);
            return Some(FlexibleVersion::new(
                version,
                leftovers,
                ParseOutcome::truncated_at(component),
            ));
        }
    }

    unreachable!(
        "`{}` is a valid prefix, but `{}` could not be added as the {} component",
        prefix, digits, component
    )
}

fn leading_digits(segment: &str) -> &str {
    let end = segment
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or_else(|| segment.len());
    &segment[..end]
}

/// Split a string on a literal delimiter.
///
/// The result is always a sequence, even for an empty input or a single element.
/// An empty delimiter splits between every character and adds an empty element at both ends.
///
/// ## Examples
///
/// ```rust
/// use flexible_version_parser::split_literal;
///
/// assert_eq!(split_literal("1.2.3", "."), vec!["1", "2", "3"]);
/// assert_eq!(split_literal("1", "."), vec!["1"]);
/// assert_eq!(split_literal("", "."), vec![""]);
/// assert_eq!(split_literal("a*b", "*"), vec!["a", "b"]);
/// assert_eq!(split_literal("ab", ""), vec!["", "a", "b", ""]);
/// ```
pub fn split_literal<'input>(input: &'input str, delimiter: &str) -> Vec<&'input str> {
    input.split(delimiter).collect()
}

/// Strictly convert a string slice into a version, reporting only success or failure.
///
/// See [`VersionValue::parse`] for the accepted format and for a variant with error details.
///
/// ## Examples
///
/// ```rust
/// use flexible_version_parser::try_version;
/// use flexible_version_value::VersionValue;
///
/// assert_eq!(try_version("3.1.4"), Some(VersionValue::with_build(3, 1, 4)));
/// assert_eq!(try_version("3.1.4-rc"), None);
/// ```
pub fn try_version(candidate: &str) -> Option<VersionValue> {
    VersionValue::parse(candidate).ok()
}

/// The result of [`parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlexibleVersion {
    /// The longest version found at the start of the input,
    /// `None` if and only if the outcome is [`ParseOutcome::Unparseable`].
    pub version: Option<VersionValue>,
    /// Everything that could not be interpreted as part of the version.
    pub leftovers: Leftovers,
    /// How far parsing got.
    pub outcome: ParseOutcome,
}

impl FlexibleVersion {
    fn new(version: VersionValue, leftovers: Leftovers, outcome: ParseOutcome) -> Self {
        Self {
            version: Some(version),
            leftovers,
            outcome,
        }
    }

    fn unparseable() -> Self {
        Self {
            version: None,
            leftovers: Leftovers::new(),
            outcome: ParseOutcome::Unparseable,
        }
    }

    /// The strict version string of the parsed version, if there is one.
    ///
    /// Parsing this string again always results in [`ParseOutcome::Success`] with the same version.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// let parsed = flexible_version_parser::parse("10.0.19041.1.1-beta");
    /// assert_eq!(parsed.canonical(), Some(String::from("10.0.19041.1")));
    ///
    /// let reparsed = flexible_version_parser::parse(&parsed.canonical().unwrap());
    /// assert_eq!(reparsed.version, parsed.version);
    /// ```
    pub fn canonical(&self) -> Option<String> {
        self.version.map(|version| version.to_string())
    }

    /// Splits the result into its version, leftovers, and outcome.
    pub fn into_parts(self) -> (Option<VersionValue>, [String; SLOTS], ParseOutcome) {
        (self.version, self.leftovers.into_array(), self.outcome)
    }
}

/// How far [`parse`] got.
///
/// Every outcome has a stable numeric code, see [`ParseOutcome::code`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ParseOutcome {
    /// The whole input is a version with two to four components.
    Success = 0,
    /// The major component has trailing content.
    ///
    /// A version needs at least a major and a minor component,
    /// so [`parse`] never reports this; it exists to complete the code table.
    MajorTruncated = 1,
    /// The minor component has trailing content.
    MinorTruncated = 2,
    /// The build component has trailing content.
    BuildTruncated = 3,
    /// The revision component has trailing content.
    RevisionTruncated = 4,
    /// A four component version, followed by more dot-separated segments.
    SuccessWithExcess = 5,
    /// Not even a major and minor component could be found.
    Unparseable = -1,
}

impl ParseOutcome {
    /// The numeric code of this outcome.
    ///
    /// Truncation codes are the one-based position of the truncated component.
    ///
    /// ```rust
    /// use flexible_version_parser::ParseOutcome;
    ///
    /// assert_eq!(ParseOutcome::Success.code(), 0);
    /// assert_eq!(ParseOutcome::BuildTruncated.code(), 3);
    /// assert_eq!(ParseOutcome::Unparseable.code(), -1);
    /// ```
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// The outcome with the given numeric code.
    pub fn from_code(code: i8) -> Option<Self> {
        let outcome = match code {
            0 => ParseOutcome::Success,
            1 => ParseOutcome::MajorTruncated,
            2 => ParseOutcome::MinorTruncated,
            3 => ParseOutcome::BuildTruncated,
            4 => ParseOutcome::RevisionTruncated,
            5 => ParseOutcome::SuccessWithExcess,
            -1 => ParseOutcome::Unparseable,
            _ => return None,
        };
        Some(outcome)
    }

    /// The outcome for a version that stopped at the given component.
    pub fn truncated_at(component: Component) -> Self {
        match component {
            Component::Major => ParseOutcome::MajorTruncated,
            Component::Minor => ParseOutcome::MinorTruncated,
            Component::Build => ParseOutcome::BuildTruncated,
            Component::Revision => ParseOutcome::RevisionTruncated,
        }
    }

    /// The component that had trailing content, if any.
    pub fn truncated(self) -> Option<Component> {
        match self {
            ParseOutcome::MajorTruncated => Some(Component::Major),
            ParseOutcome::MinorTruncated => Some(Component::Minor),
            ParseOutcome::BuildTruncated => Some(Component::Build),
            ParseOutcome::RevisionTruncated => Some(Component::Revision),
            _ => None,
        }
    }

    /// Returns `true` if the complete version could be parsed, with or without excess segments.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            ParseOutcome::Success | ParseOutcome::SuccessWithExcess
        )
    }
}

impl Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutcome::Success => f.pad("success"),
            ParseOutcome::SuccessWithExcess => f.pad("success with excess segments"),
            ParseOutcome::Unparseable => f.pad("unparseable"),
            ParseOutcome::MajorTruncated => f.pad("truncated at the major component"),
            ParseOutcome::MinorTruncated => f.pad("truncated at the minor component"),
            ParseOutcome::BuildTruncated => f.pad("truncated at the build component"),
            ParseOutcome::RevisionTruncated => f.pad("truncated at the revision component"),
        }
    }
}
