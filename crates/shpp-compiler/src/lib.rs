//! Line-oriented directive compiler for shpp documents.
//!
//! A document is read line by line. Each line is trimmed of surrounding spaces
//! and tabs, blank lines are dropped, and lines starting with `@` are expanded:
//!
//! - `@include <path>` compiles another document in place
//! - `@style <path>` embeds a file verbatim inside `<style>` tags
//! - `@script <path>` embeds a file verbatim inside `<script>` tags
//!
//! Each expansion is bracketed by `<!-- START ... -->` / `<!-- END ... -->`
//! comment lines echoing the directive. A line starting with `\@` is emitted
//! without the backslash and never evaluated.
//!
//! # Errors
//!
//! A failing directive stops the document it appears in. Everything emitted
//! before it is kept, and an included document that fails still contributes
//! its partial output to its parent. Errors are collected as [`Diagnostic`]s
//! on the returned [`Compilation`].
//!
//! # Example
//!
//! ```
//! use shpp_compiler::{Compiler, CompilerConfig};
//!
//! let compiler = Compiler::with_config(
//!     CompilerConfig::new().with_read_file(|_| Ok(b"hello\n".to_vec())),
//! );
//! let result = compiler.compile(&b"@include sub.txt\n"[..], ".");
//!
//! assert!(result.is_success());
//! assert_eq!(
//!     String::from_utf8(result.output).unwrap(),
//!     "<!-- START @include sub.txt -->\nhello\n<!-- END @include sub.txt -->\n"
//! );
//! ```

mod compiler;
pub mod directive;
mod error;
mod line;

pub use compiler::{
    Compilation, Compiler, CompilerConfig, DEFAULT_MAX_INCLUDE_DEPTH, ReadFileFn, compile,
};
pub use error::{CompileError, Diagnostic, ErrorKind};
pub use line::{ESCAPE, Line, MARKER, classify};
