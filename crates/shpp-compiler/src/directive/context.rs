//! Compile context.
//!
//! Tracks where the document being compiled lives so directive paths resolve
//! relative to it.

use std::path::{Path, PathBuf};

/// Per-document compile context.
///
/// A context is created once when a document starts compiling and handed
/// unchanged to every directive in that document. Each `@include` derives a
/// fresh child context via [`for_include`](Self::for_include).
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use shpp_compiler::directive::CompileContext;
///
/// let ctx = CompileContext::new("site");
/// let resolved = ctx.resolve_path("partials/nav.html");
/// assert_eq!(resolved, Path::new("site/partials/nav.html"));
///
/// let child = ctx.for_include(&resolved);
/// assert_eq!(child.base_dir, Path::new("site/partials"));
/// assert_eq!(child.depth, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileContext {
    /// Directory that relative directive paths resolve against.
    pub base_dir: PathBuf,
    /// Document being compiled, when it came from a named file.
    pub source_path: Option<PathBuf>,
    /// Number of `@include` levels above this document (0 for the top level).
    pub depth: usize,
}

impl CompileContext {
    /// Context for a top-level document read from somewhere other than a file.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            source_path: None,
            depth: 0,
        }
    }

    /// Context for a top-level document read from `source_path`.
    ///
    /// The base directory is the file's parent (empty for a bare file name,
    /// which resolves against the working directory).
    #[must_use]
    pub fn for_source(source_path: impl Into<PathBuf>) -> Self {
        let source_path = source_path.into();
        Self {
            base_dir: parent_dir(&source_path),
            source_path: Some(source_path),
            depth: 0,
        }
    }

    /// Resolve a directive argument against the base directory.
    ///
    /// Absolute arguments replace the base, as with [`Path::join`].
    #[must_use]
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }

    /// Derive the context for an included document at `path`.
    #[must_use]
    pub fn for_include(&self, path: &Path) -> Self {
        Self {
            base_dir: parent_dir(path),
            source_path: Some(path.to_path_buf()),
            depth: self.depth + 1,
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let ctx = CompileContext::new("docs");
        assert_eq!(
            ctx.resolve_path("snippets/code.html"),
            PathBuf::from("docs/snippets/code.html")
        );
    }

    #[test]
    fn test_resolve_absolute_path() {
        let ctx = CompileContext::new("/home/user/site");
        assert_eq!(ctx.resolve_path("/etc/motd"), PathBuf::from("/etc/motd"));
    }

    #[test]
    fn test_for_source() {
        let ctx = CompileContext::for_source("site/index.html");
        assert_eq!(ctx.base_dir, PathBuf::from("site"));
        assert_eq!(ctx.source_path, Some(PathBuf::from("site/index.html")));
        assert_eq!(ctx.depth, 0);
    }

    #[test]
    fn test_for_source_bare_file_name() {
        let ctx = CompileContext::for_source("index.html");
        assert_eq!(ctx.base_dir, PathBuf::new());
        assert_eq!(ctx.resolve_path("a.css"), PathBuf::from("a.css"));
    }

    #[test]
    fn test_for_include_narrows_base_dir() {
        let root = CompileContext::new("site");
        let first = root.for_include(&root.resolve_path("a/page.html"));
        let second = first.for_include(&first.resolve_path("b/part.html"));

        assert_eq!(first.base_dir, PathBuf::from("site/a"));
        assert_eq!(second.base_dir, PathBuf::from("site/a/b"));
        assert_eq!(second.resolve_path("x.txt"), PathBuf::from("site/a/b/x.txt"));
        assert_eq!(second.depth, 2);
    }

    #[test]
    fn test_siblings_do_not_share_context() {
        let root = CompileContext::new("site");
        let _first = root.for_include(&root.resolve_path("a/one.html"));
        let second = root.for_include(&root.resolve_path("two.html"));

        assert_eq!(root.base_dir, PathBuf::from("site"));
        assert_eq!(second.base_dir, PathBuf::from("site"));
        assert_eq!(second.depth, 1);
    }
}
