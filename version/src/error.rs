use crate::Component;
use std::{fmt::Display, ops::Range};

/// Possible errors that happen during strict parsing
/// and the location of the input where the error occurred.
///
/// # Example
///
/// ```rust
/// use flexible_version_value::VersionValue;
///
/// let error = VersionValue::parse("1.2.x").unwrap_err();
/// assert_eq!(error.to_string(), "Could not parse the build component: `x` is not a number");
///
/// let error = VersionValue::parse("1").unwrap_err();
/// assert_eq!(error.to_string(), "Expected at least a major and a minor component in `1`");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorKind,
}

impl<'input> Error<'input> {
    pub(crate) fn new(input: &'input str, error: ErrorKind, span: Span) -> Self {
        Self { input, span, error }
    }

    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = flexible_version_value::VersionValue::parse("1.2.").unwrap_err();
    /// assert_eq!(error.input(), "1.2.");
    /// ```
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = flexible_version_value::VersionValue::parse("1.2.3b").unwrap_err();
    /// assert_eq!(error.error_span(), 4..6);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flexible_version_value::{Component, ErrorKind, VersionValue};
    ///
    /// assert_eq!(
    ///     VersionValue::parse("7").unwrap_err().error_kind(),
    ///     ErrorKind::TooFewComponents
    /// );
    /// assert_eq!(
    ///     VersionValue::parse("1.2.3.4.5").unwrap_err().error_kind(),
    ///     ErrorKind::TooManyComponents
    /// );
    /// assert_eq!(
    ///     VersionValue::parse("1..3").unwrap_err().error_kind(),
    ///     ErrorKind::EmptyComponent(Component::Minor)
    /// );
    /// assert_eq!(
    ///     VersionValue::parse("1.2.3.rc1").unwrap_err().error_kind(),
    ///     ErrorKind::NotANumber(Component::Revision)
    /// );
    /// assert_eq!(
    ///     VersionValue::parse("1.2147483648").unwrap_err().error_kind(),
    ///     ErrorKind::Overflow(Component::Minor)
    /// );
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = flexible_version_value::VersionValue::parse("1.2.3.4.5.6").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "5.6");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        &self.input[self.error_span()]
    }

    /// Returns a text representation of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = flexible_version_value::VersionValue::parse("1.").unwrap_err();
    /// assert_eq!(error.error_line(), String::from("Could not parse the minor component: No input"));
    /// ```
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    ///
    /// ```rust
    /// let error = flexible_version_value::VersionValue::parse("1.?").unwrap_err();
    /// assert_eq!(
    ///     format!("{:!^64}", error),
    ///     String::from("!!!!Could not parse the minor component: `?` is not a number!!!!")
    /// );
    /// ```
    pub fn error_line(&self) -> String {
        match self.error {
            ErrorKind::TooFewComponents => format!(
                "Expected at least a major and a minor component in `{}`",
                self.input
            ),
            ErrorKind::TooManyComponents => format!(
                "Unexpected components after the revision: `{}`",
                self.erroneous_input()
            ),
            ErrorKind::EmptyComponent(component) => {
                format!("Could not parse the {} component: No input", component)
            }
            ErrorKind::NotANumber(component) => format!(
                "Could not parse the {} component: `{}` is not a number",
                component,
                self.erroneous_input()
            ),
            ErrorKind::Overflow(component) => format!(
                "Could not parse the {} component: `{}` is larger than {}",
                component,
                self.erroneous_input(),
                i32::MAX
            ),
        }
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = flexible_version_value::VersionValue::parse("foo.1").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^^^");
    ///
    /// let error = flexible_version_value::VersionValue::parse("1.2.3-rc").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~^^^^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = self.span.end - self.span.start
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorKind,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

/// Possible errors that can happen.
/// These don't include an information as those are covered by various
/// error methods like [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input has only one component, a version needs major and minor
    TooFewComponents,
    /// The input has more than four components
    TooManyComponents,
    /// A component was expected, but nothing was found
    EmptyComponent(Component),
    /// A component contains something other than ASCII digits
    NotANumber(Component),
    /// A component is a number, but does not fit into an `i32`
    Overflow(Component),
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}
