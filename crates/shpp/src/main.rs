//! shpp CLI - line-oriented HTML preprocessor.
//!
//! Reads a source document (a file or stdin), expands `@include`, `@style`
//! and `@script` directives, and writes the result to stdout or a file.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::CompileArgs;
use output::Output;

/// shpp - expand @include, @style and @script directives.
#[derive(Parser)]
#[command(name = "shpp", version, about)]
struct Cli {
    #[command(flatten)]
    compile: CompileArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to ERROR
    let filter = if cli.compile.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(err) = cli.compile.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
