//! Directives: `@include`, `@style` and `@script`.
//!
//! A directive occupies a whole trimmed line starting with `@`:
//!
//! ```text
//! @include <relative-path>
//! @style <relative-path>
//! @script <relative-path>
//! ```
//!
//! Every directive takes exactly one argument. Paths are resolved against the
//! [`CompileContext`] of the document that contains the directive, so an
//! included file can reference its own siblings.

mod context;
mod embed;
mod parser;

pub use context::CompileContext;
pub use embed::Embed;
pub use parser::{Directive, DirectiveKind};
