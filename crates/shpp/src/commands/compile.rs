//! `shpp` compile command implementation.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use shpp_compiler::{Compilation, Compiler, CompilerConfig};
use shpp_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for compiling a document.
#[derive(Args)]
pub(crate) struct CompileArgs {
    /// Source document (omit when using --stdin).
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    source: Option<PathBuf>,

    /// Read the source document from stdin. Relative directive paths resolve
    /// against the current directory.
    #[arg(short = 'x', long)]
    stdin: bool,

    /// Write output to FILE instead of stdout (overrides config).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover shpp.toml).
    #[arg(short, long, env = "SHPP_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum @include nesting (overrides config).
    #[arg(long, value_name = "N")]
    max_include_depth: Option<usize>,

    /// Enable verbose output.
    #[arg(long)]
    pub verbose: bool,
}

impl CompileArgs {
    /// Execute the compile command.
    ///
    /// Partial output is written even when compilation reports errors.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the source cannot be opened,
    /// the output cannot be written, or any directive failed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output: self.output,
            max_include_depth: self.max_include_depth,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let compiler = Compiler::with_config(
            CompilerConfig::new().with_max_include_depth(config.compile.include_limit()),
        );
        let compilation = compile_input(&compiler, self.source.as_deref())?;

        let destination = config.output_resolved.path.as_deref();
        write_output(destination, &compilation.output)?;

        for diagnostic in &compilation.diagnostics {
            output.error(&format!("failed to compile: {diagnostic}"));
        }

        if self.verbose {
            let target = destination
                .map_or_else(|| "stdout".to_owned(), |p| p.display().to_string());
            output.info(&format!(
                "Wrote {} bytes to {target}",
                compilation.output.len()
            ));
        }

        if compilation.is_success() {
            Ok(())
        } else {
            Err(CliError::Compile(compilation.diagnostics.len()))
        }
    }
}

/// Compile the named source file, or stdin when `source` is `None`.
fn compile_input(compiler: &Compiler, source: Option<&Path>) -> Result<Compilation, CliError> {
    if let Some(path) = source {
        let file = File::open(path).map_err(|source| CliError::Source {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Compiling source file");
        return Ok(compiler.compile_source(BufReader::new(file), path));
    }

    compile_stdin(compiler, io::stdin().lock())
}

/// Compile a document read from stdin; directive paths resolve against the
/// current working directory.
fn compile_stdin<R: BufRead>(compiler: &Compiler, reader: R) -> Result<Compilation, CliError> {
    let cwd = std::env::current_dir()?;
    tracing::info!(base_dir = %cwd.display(), "Compiling stdin");
    Ok(compiler.compile(reader, cwd))
}

/// Write the compiled bytes to `path` (created or truncated) or stdout.
fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    if let Some(path) = path {
        return std::fs::write(path, bytes).map_err(|source| CliError::Output {
            path: path.to_path_buf(),
            source,
        });
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}
