//! Four-component version value.
//!
//! Companion value type for the flexible_version_parser parser.
//! A [`VersionValue`] follows the `major.minor[.build[.revision]]` layout:
//!  - Major and minor are mandatory, build and revision are optional
//!  - Every explicit component is a non-negative `i32`
//!  - Absent components are [`VersionValue::UNSET`] (`-1`), which is distinct from `0`
//!
//! [`VersionValue::parse`] is strict: it only accepts two to four dot-separated runs of ASCII digits.
//! Anything more forgiving lives in the parser crate.
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

use std::{
    convert::TryFrom,
    fmt::{self, Display, Write},
    str::FromStr,
};

mod error;
pub use error::{Error, ErrorKind, OwnedError};
use error::Span;

/// Represents a version number with up to four components.
///
/// The derived ordering compares major, minor, build, and revision in that order.
/// Since unset components are `-1`, a version with fewer components sorts before
/// the same version with explicit zeroes (`1.2 < 1.2.0 < 1.2.0.0`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionValue {
    /// The major version.
    pub major: i32,
    /// The minor version.
    pub minor: i32,
    /// The build number, or [`VersionValue::UNSET`].
    pub build: i32,
    /// The revision number, or [`VersionValue::UNSET`].
    pub revision: i32,
}

impl VersionValue {
    /// The value of a component that is not part of the version.
    pub const UNSET: i32 = -1;

    /// Constructs a new version with only major and minor components.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use flexible_version_value::VersionValue;
    /// let version = VersionValue::new(1, 2);
    /// assert_eq!(version.to_string(), "1.2");
    /// assert_eq!(version.build, VersionValue::UNSET);
    /// ```
    pub const fn new(major: i32, minor: i32) -> Self {
        VersionValue {
            major,
            minor,
            build: Self::UNSET,
            revision: Self::UNSET,
        }
    }

    /// Constructs a new version with major, minor, and build components.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use flexible_version_value::VersionValue;
    /// let version = VersionValue::with_build(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3");
    /// ```
    pub const fn with_build(major: i32, minor: i32, build: i32) -> Self {
        VersionValue {
            major,
            minor,
            build,
            revision: Self::UNSET,
        }
    }

    /// Constructs a new version with all four components.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use flexible_version_value::VersionValue;
    /// let version = VersionValue::with_revision(1, 2, 3, 4);
    /// assert_eq!(version.to_string(), "1.2.3.4");
    /// ```
    pub const fn with_revision(major: i32, minor: i32, build: i32, revision: i32) -> Self {
        VersionValue {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Strictly parse a string slice into a version.
    ///
    /// The input must consist of two to four components separated by `.`,
    /// each one a non-empty run of ASCII digits that fits into an `i32`.
    /// Leading zeroes are accepted. Whitespace, signs, and any other characters are not.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use flexible_version_value::VersionValue;
    ///
    /// assert_eq!(VersionValue::parse("1.2.3.4"), Ok(VersionValue::with_revision(1, 2, 3, 4)));
    /// assert_eq!(VersionValue::parse("2020.04"), Ok(VersionValue::new(2020, 4)));
    /// assert!(VersionValue::parse("1").is_err());
    /// assert!(VersionValue::parse("1.2.3-beta").is_err());
    /// assert!(VersionValue::parse(" 1.2").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error<'_>> {
        parse_strict(input).map_err(|(error, span)| Error::new(input, error, span))
    }

    /// Returns the value of the given component, or `None` if it is unset.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use flexible_version_value::{Component, VersionValue};
    ///
    /// let version = VersionValue::with_build(1, 2, 3);
    /// assert_eq!(version.component(Component::Build), Some(3));
    /// assert_eq!(version.component(Component::Revision), None);
    /// ```
    pub fn component(&self, component: Component) -> Option<i32> {
        let value = match component {
            Component::Major => self.major,
            Component::Minor => self.minor,
            Component::Build => self.build,
            Component::Revision => self.revision,
        };
        if value < 0 {
            None
        } else {
            Some(value)
        }
    }

    /// Returns the number of explicit components.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use flexible_version_value::VersionValue;
    ///
    /// assert_eq!(VersionValue::new(1, 0).component_count(), 2);
    /// assert_eq!(VersionValue::with_revision(1, 0, 0, 0).component_count(), 4);
    /// ```
    pub fn component_count(&self) -> usize {
        self.components().count()
    }

    /// Returns an iterator over the explicit components, starting with major.
    pub fn components(&self) -> impl Iterator<Item = i32> + '_ {
        Component::ALL
            .iter()
            .map(move |&component| self.component(component))
            .take_while(Option::is_some)
            .flatten()
    }
}

impl Default for VersionValue {
    fn default() -> Self {
        VersionValue::new(0, 0)
    }
}

impl From<[i32; 2]> for VersionValue {
    fn from([major, minor]: [i32; 2]) -> Self {
        VersionValue::new(major, minor)
    }
}

impl From<[i32; 3]> for VersionValue {
    fn from([major, minor, build]: [i32; 3]) -> Self {
        VersionValue::with_build(major, minor, build)
    }
}

impl From<[i32; 4]> for VersionValue {
    fn from([major, minor, build, revision]: [i32; 4]) -> Self {
        VersionValue::with_revision(major, minor, build, revision)
    }
}

impl FromStr for VersionValue {
    type Err = OwnedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionValue::parse(s).map_err(|e| e.owned())
    }
}

impl<'input> TryFrom<&'input str> for VersionValue {
    type Error = Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        for (index, component) in self.components().enumerate() {
            if index > 0 {
                result.push('.');
            }
            write!(result, "{}", component)?;
        }
        f.pad(result.as_ref())
    }
}

/// Names one of the four components of a [`VersionValue`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    /// The first component.
    Major,
    /// The second component.
    Minor,
    /// The third component.
    Build,
    /// The fourth component.
    Revision,
}

impl Component {
    /// All components in positional order.
    pub const ALL: [Component; 4] = [
        Component::Major,
        Component::Minor,
        Component::Build,
        Component::Revision,
    ];

    /// The zero-based position of this component in a dotted version string.
    pub const fn index(self) -> usize {
        match self {
            Component::Major => 0,
            Component::Minor => 1,
            Component::Build => 2,
            Component::Revision => 3,
        }
    }

    /// The component at the given position, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => f.pad("major"),
            Component::Minor => f.pad("minor"),
            Component::Build => f.pad("build"),
            Component::Revision => f.pad("revision"),
        }
    }
}

fn parse_strict(input: &str) -> Result<VersionValue, (ErrorKind, Span)> {
    let mut numbers = [VersionValue::UNSET; 4];
    let mut count = 0;
    let mut start = 0;

    for segment in input.split('.') {
        let span = Span::new(start, start + segment.len());
        let component = match Component::from_index(count) {
            Some(component) => component,
            None => {
                return Err((
                    ErrorKind::TooManyComponents,
                    Span::new(start, input.len()),
                ))
            }
        };
        numbers[count] = parse_component(segment, component).map_err(|error| (error, span))?;
        count += 1;
        start += segment.len() + 1;
    }

    if count < 2 {
        return Err((ErrorKind::TooFewComponents, Span::new(0, input.len())));
    }

    let [major, minor, build, revision] = numbers;
    Ok(VersionValue {
        major,
        minor,
        build,
        revision,
    })
}

fn parse_component(segment: &str, component: Component) -> Result<i32, ErrorKind> {
    if segment.is_empty() {
        return Err(ErrorKind::EmptyComponent(component));
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::NotANumber(component));
    }
    segment
        .parse::<i32>()
        .map_err(|_| ErrorKind::Overflow(component))
}

#[cfg(feature = "serde")]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for VersionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for VersionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = VersionValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string like 1.2.3.4")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                VersionValue::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(feature = "semver")]
impl From<VersionValue> for semver::Version {
    /// Build becomes the patch number (`0` if unset),
    /// an explicit revision is kept as build metadata.
    fn from(v: VersionValue) -> Self {
        let mut version = semver::Version::new(
            u64::try_from(v.major).unwrap_or(0),
            u64::try_from(v.minor).unwrap_or(0),
            u64::try_from(v.build).unwrap_or(0),
        );
        if let Some(revision) = v.component(Component::Revision) {
            if let Ok(build) = semver::BuildMetadata::new(&revision.to_string()) {
                version.build = build;
            }
        }
        version
    }
}
