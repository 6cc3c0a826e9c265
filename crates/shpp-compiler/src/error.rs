//! Compile errors and diagnostics.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::directive::DirectiveKind;

/// Broad error category, used by callers that only care whether the document
/// itself is malformed or the filesystem failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The directive line is malformed.
    Syntax,
    /// A file could not be opened or read.
    Io,
}

/// Error produced while evaluating a directive or reading a document.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// Directive was called with the wrong number of arguments.
    #[error("{directive}: syntax error: requires {expected}")]
    Syntax {
        /// Directive that was misused.
        directive: DirectiveKind,
        /// Human-readable arity description (e.g., "a single parameter").
        expected: &'static str,
    },

    /// Directive name is not one of the known directives.
    #[error("unrecognized directive '{0}'")]
    UnknownDirective(String),

    /// Directive line contains bytes that are not valid UTF-8.
    #[error("directive is not valid UTF-8")]
    InvalidUtf8,

    /// File referenced by a directive could not be read.
    #[error("{directive}: failed to read '{}': {source}", .path.display())]
    Io {
        /// Directive that referenced the file.
        directive: DirectiveKind,
        /// Resolved path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// `@include` nesting went past the configured limit.
    #[error("@include: maximum include depth ({0}) exceeded")]
    DepthExceeded(usize),

    /// The document stream itself failed mid-read.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
}

impl CompileError {
    /// Error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } | Self::UnknownDirective(_) | Self::InvalidUtf8 => {
                ErrorKind::Syntax
            }
            Self::Io { .. } | Self::DepthExceeded(_) | Self::Read(_) => ErrorKind::Io,
        }
    }
}

/// A compile error together with the place it was detected.
#[derive(Debug)]
pub struct Diagnostic {
    /// Document containing the failing line, if it came from a named file.
    pub source_path: Option<PathBuf>,
    /// Line number of the failing line (1-indexed).
    pub line: usize,
    /// The error itself.
    pub error: CompileError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_path {
            Some(path) => write!(f, "{}:{}: {}", path.display(), self.line, self.error),
            None => write!(f, "<input>:{}: {}", self.line, self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_message() {
        let err = CompileError::Syntax {
            directive: DirectiveKind::Include,
            expected: "a single parameter",
        };
        assert_eq!(
            err.to_string(),
            "@include: syntax error: requires a single parameter"
        );
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_io_message() {
        let err = CompileError::Io {
            directive: DirectiveKind::Style,
            path: PathBuf::from("css/a.css"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "@style: failed to read 'css/a.css': not found");
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            CompileError::UnknownDirective("@foo".to_owned()).kind(),
            ErrorKind::Syntax
        );
        assert_eq!(CompileError::InvalidUtf8.kind(), ErrorKind::Syntax);
        assert_eq!(CompileError::DepthExceeded(3).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic {
            source_path: Some(PathBuf::from("docs/index.html")),
            line: 7,
            error: CompileError::UnknownDirective("@foo".to_owned()),
        };
        assert_eq!(
            diag.to_string(),
            "docs/index.html:7: unrecognized directive '@foo'"
        );

        let diag = Diagnostic {
            source_path: None,
            line: 1,
            error: CompileError::DepthExceeded(2),
        };
        assert_eq!(
            diag.to_string(),
            "<input>:1: @include: maximum include depth (2) exceeded"
        );
    }
}
