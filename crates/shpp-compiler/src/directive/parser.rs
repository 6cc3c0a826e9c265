//! Directive syntax parsing.
//!
//! Parses `@name arg` lines into a [`Directive`].

use std::fmt;

use crate::error::CompileError;

/// Known directive names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `@include <path>`: compile another document in place.
    Include,
    /// `@style <path>`: embed a stylesheet verbatim.
    Style,
    /// `@script <path>`: embed a script verbatim.
    Script,
}

impl DirectiveKind {
    /// Directive name without the marker.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Style => "style",
            Self::Script => "script",
        }
    }

    /// Look up a directive from its marker-prefixed token (e.g. `@style`).
    fn from_token(token: &str) -> Option<Self> {
        match token.strip_prefix('@')? {
            "include" => Some(Self::Include),
            "style" => Some(Self::Style),
            "script" => Some(Self::Script),
            _ => None,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}

/// A parsed directive line.
///
/// # Example
///
/// ```
/// use shpp_compiler::directive::{Directive, DirectiveKind};
///
/// let directive = Directive::parse("@style css/site.css").unwrap();
/// assert_eq!(directive.kind, DirectiveKind::Style);
/// assert_eq!(directive.path, "css/site.css");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Which directive this is.
    pub kind: DirectiveKind,
    /// The single path argument, relative to the enclosing document.
    pub path: String,
}

impl Directive {
    /// Parse a trimmed directive line.
    ///
    /// Tokens are separated by single spaces, so arguments cannot contain
    /// spaces and repeated spaces produce empty tokens.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnknownDirective`] for an unknown name and
    /// [`CompileError::Syntax`] when the argument count is not exactly one.
    pub fn parse(line: &str) -> Result<Self, CompileError> {
        let mut tokens = line.split(' ');
        let name = tokens.next().unwrap_or_default();
        let kind = DirectiveKind::from_token(name)
            .ok_or_else(|| CompileError::UnknownDirective(name.to_owned()))?;

        let args: Vec<&str> = tokens.collect();
        match args.as_slice() {
            [path] => Ok(Self {
                kind,
                path: (*path).to_owned(),
            }),
            _ => Err(CompileError::Syntax {
                directive: kind,
                expected: "a single parameter",
            }),
        }
    }

    /// Parse a directive line given as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidUtf8`] if the line is not UTF-8, otherwise
    /// the same errors as [`parse`](Self::parse).
    pub fn parse_bytes(line: &[u8]) -> Result<Self, CompileError> {
        let line = std::str::from_utf8(line).map_err(|_| CompileError::InvalidUtf8)?;
        Self::parse(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_include() {
        let directive = Directive::parse("@include partials/header.html").unwrap();
        assert_eq!(directive.kind, DirectiveKind::Include);
        assert_eq!(directive.path, "partials/header.html");
    }

    #[test]
    fn test_parse_style_and_script() {
        assert_eq!(
            Directive::parse("@style a.css").unwrap().kind,
            DirectiveKind::Style
        );
        assert_eq!(
            Directive::parse("@script app.js").unwrap().kind,
            DirectiveKind::Script
        );
    }

    #[test]
    fn test_missing_argument() {
        let err = Directive::parse("@include").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Syntax {
                directive: DirectiveKind::Include,
                ..
            }
        ));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Directive::parse("@include a b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "@include: syntax error: requires a single parameter"
        );
    }

    #[test]
    fn test_double_space_is_two_arguments() {
        let err = Directive::parse("@script  app.js").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Syntax {
                directive: DirectiveKind::Script,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_directive() {
        let err = Directive::parse("@unknown x").unwrap_err();
        assert!(matches!(err, CompileError::UnknownDirective(ref name) if name == "@unknown"));
    }

    #[test]
    fn test_unknown_checked_before_arity() {
        let err = Directive::parse("@import").unwrap_err();
        assert!(matches!(err, CompileError::UnknownDirective(_)));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(Directive::parse("@Include a.txt").is_err());
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        let err = Directive::parse("@include\ta.txt").unwrap_err();
        assert!(matches!(err, CompileError::UnknownDirective(_)));
    }

    #[test]
    fn test_bare_marker() {
        let err = Directive::parse("@").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized directive '@'");
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let err = Directive::parse_bytes(b"@include \xff.txt").unwrap_err();
        assert!(matches!(err, CompileError::InvalidUtf8));
    }

    #[test]
    fn test_display() {
        assert_eq!(DirectiveKind::Include.to_string(), "@include");
        assert_eq!(DirectiveKind::Script.name(), "script");
    }
}
