//! Recursive document compiler.
//!
//! [`Compiler::compile`] reads a document line by line and expands directives.
//! `@include` calls back into the compiler for the included file, so the
//! inclusion depth maps 1:1 onto the call stack.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::directive::{CompileContext, Directive, DirectiveKind, Embed};
use crate::error::{CompileError, Diagnostic};
use crate::line::{Line, classify};

/// Type alias for the file reading callback function.
pub type ReadFileFn = dyn Fn(&Path) -> io::Result<Vec<u8>> + Send;

/// Default include depth limit.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 64;

/// Configuration for the compiler.
pub struct CompilerConfig {
    /// Callback to read files referenced by directives.
    ///
    /// Default: `std::fs::read`
    pub read_file: Option<Box<ReadFileFn>>,
    /// Maximum `@include` nesting, or `None` for no limit.
    ///
    /// Without a limit a cyclic include recurses until the stack overflows.
    ///
    /// Default: 64
    pub max_include_depth: Option<usize>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            read_file: None,
            max_include_depth: Some(DEFAULT_MAX_INCLUDE_DEPTH),
        }
    }

    /// Set the file reading callback.
    #[must_use]
    pub fn with_read_file<F>(mut self, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<Vec<u8>> + Send + 'static,
    {
        self.read_file = Some(Box::new(read_file));
        self
    }

    /// Set the maximum include depth (`None` disables the limit).
    #[must_use]
    pub fn with_max_include_depth(mut self, depth: Option<usize>) -> Self {
        self.max_include_depth = depth;
        self
    }
}

/// Result of compiling one top-level document.
#[derive(Debug, Default)]
pub struct Compilation {
    /// Expanded output, possibly truncated if a diagnostic was reported.
    pub output: Vec<u8>,
    /// Errors reported while compiling, in the order they were detected.
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    /// Whether the document compiled without any diagnostics.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Directive compiler.
///
/// # Example
///
/// ```
/// use shpp_compiler::{Compiler, CompilerConfig};
///
/// let config = CompilerConfig::new().with_read_file(|_| Ok(b"body{}\n".to_vec()));
/// let compiler = Compiler::with_config(config);
///
/// let result = compiler.compile(&b"<head>\n@style a.css\n</head>\n"[..], "site");
/// assert!(result.is_success());
/// assert_eq!(
///     String::from_utf8(result.output).unwrap(),
///     "<head>\n<!-- START @style a.css -->\n<style>\nbody{}\n</style>\n<!-- END @style a.css -->\n</head>\n"
/// );
/// ```
#[derive(Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Create a compiler with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CompilerConfig::default())
    }

    /// Create a compiler with custom configuration.
    #[must_use]
    pub fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Compile a document whose directive paths resolve against `base_dir`.
    ///
    /// The reader is consumed to the end but not closed.
    pub fn compile<R: BufRead>(&self, reader: R, base_dir: impl Into<PathBuf>) -> Compilation {
        self.compile_with_context(reader, &CompileContext::new(base_dir))
    }

    /// Compile a document read from `source_path`.
    ///
    /// Directive paths resolve against the file's parent directory and
    /// diagnostics carry the path.
    pub fn compile_source<R: BufRead>(
        &self,
        reader: R,
        source_path: impl Into<PathBuf>,
    ) -> Compilation {
        self.compile_with_context(reader, &CompileContext::for_source(source_path))
    }

    /// Compile a document with an explicit context.
    pub fn compile_with_context<R: BufRead>(
        &self,
        reader: R,
        ctx: &CompileContext,
    ) -> Compilation {
        let mut diagnostics = Vec::new();
        let output = self.compile_document(reader, ctx, &mut diagnostics);
        Compilation {
            output,
            diagnostics,
        }
    }

    /// Evaluate one trimmed directive line and return its expansion.
    ///
    /// Errors inside an included document are pushed to `diagnostics` and
    /// truncate that document only; the partial output is still returned here.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not parse or a referenced file cannot
    /// be read. Nothing is expanded in that case.
    pub fn eval_directive(
        &self,
        line: &[u8],
        ctx: &CompileContext,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<u8>, CompileError> {
        let directive = Directive::parse_bytes(line)?;
        let path = ctx.resolve_path(&directive.path);

        match directive.kind {
            DirectiveKind::Include => self.include(&path, ctx, diagnostics),
            DirectiveKind::Style => self.embed(Embed::Style, &path),
            DirectiveKind::Script => self.embed(Embed::Script, &path),
        }
    }

    fn compile_document<R: BufRead>(
        &self,
        mut reader: R,
        ctx: &CompileContext,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<u8> {
        let mut output = Vec::new();
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => line_num += 1,
                Err(e) => {
                    report(ctx, line_num + 1, CompileError::Read(e), diagnostics);
                    break;
                }
            }

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            match classify(raw) {
                Line::Blank => continue,
                Line::Text(text) | Line::Escaped(text) => output.extend_from_slice(text),
                Line::Directive(line) => match self.eval_directive(line, ctx, diagnostics) {
                    Ok(expansion) => {
                        write_marker(&mut output, "START", line);
                        output.push(b'\n');
                        output.extend_from_slice(&expansion);
                        write_marker(&mut output, "END", line);
                    }
                    Err(error) => {
                        report(ctx, line_num, error, diagnostics);
                        break;
                    }
                },
            }
            output.push(b'\n');
        }

        output
    }

    fn include(
        &self,
        path: &Path,
        ctx: &CompileContext,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<u8>, CompileError> {
        if let Some(limit) = self.config.max_include_depth
            && ctx.depth >= limit
        {
            return Err(CompileError::DepthExceeded(limit));
        }

        let contents = self.read(DirectiveKind::Include, path)?;
        let child = ctx.for_include(path);
        tracing::debug!(path = %path.display(), depth = child.depth, "Including file");

        Ok(self.compile_document(contents.as_slice(), &child, diagnostics))
    }

    fn embed(&self, embed: Embed, path: &Path) -> Result<Vec<u8>, CompileError> {
        let contents = self.read(embed.directive(), path)?;
        tracing::debug!(path = %path.display(), tag = embed.open_tag(), "Embedding file");
        Ok(embed.wrap(&contents))
    }

    fn read(&self, directive: DirectiveKind, path: &Path) -> Result<Vec<u8>, CompileError> {
        let result = match &self.config.read_file {
            Some(read_file) => read_file(path),
            None => std::fs::read(path),
        };
        result.map_err(|source| CompileError::Io {
            directive,
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Compile a document with the default configuration.
///
/// # Example
///
/// ```
/// let result = shpp_compiler::compile(&b"  hello  \n\n\\@world\n"[..], ".");
/// assert_eq!(result.output, b"hello\n@world\n");
/// ```
pub fn compile<R: BufRead>(reader: R, base_dir: impl Into<PathBuf>) -> Compilation {
    Compiler::new().compile(reader, base_dir)
}

/// Write `<!-- {label} {directive} -->` without a trailing newline.
fn write_marker(output: &mut Vec<u8>, label: &str, directive: &[u8]) {
    output.extend_from_slice(b"<!-- ");
    output.extend_from_slice(label.as_bytes());
    output.push(b' ');
    output.extend_from_slice(directive);
    output.extend_from_slice(b" -->");
}

fn report(
    ctx: &CompileContext,
    line: usize,
    error: CompileError,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let diagnostic = Diagnostic {
        source_path: ctx.source_path.clone(),
        line,
        error,
    };
    tracing::debug!(%diagnostic, "Failed to compile");
    diagnostics.push(diagnostic);
}
