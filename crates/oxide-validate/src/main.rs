//! oxide-validate CLI
//!
//! Validates SQL DML statements and prints one JSON report per statement.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_validate::{write_reports, Source};

/// Syntax checker for SELECT, INSERT, UPDATE and DELETE statements.
#[derive(Parser)]
#[command(name = "oxide-validate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statements to validate, one per argument. Reads stdin when absent.
    #[arg(conflicts_with = "file")]
    sql: Vec<String>,

    /// Read input from a file ("-" for stdin).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Treat each non-blank input line as its own statement.
    #[arg(long)]
    lines: bool,

    /// Pretty-print the JSON reports.
    #[arg(long, env = "OXIDE_VALIDATE_PRETTY")]
    pretty: bool,

    /// Enable verbose output.
    #[arg(short, long, env = "OXIDE_VALIDATE_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let source = Source::new(cli.sql, cli.file);
    debug!(?source, lines = cli.lines, "reading input");
    let statements = source.statements(cli.lines)?;

    let mut out = io::stdout().lock();
    let all_valid = write_reports(&mut out, &statements, cli.pretty)?;
    out.flush()?;
    Ok(all_valid)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inline_statements() {
        let cli = Cli::try_parse_from([
            "oxide-validate",
            "--pretty",
            "SELECT * FROM t",
            "DELETE FROM t",
        ])
        .unwrap();
        assert_eq!(cli.sql.len(), 2);
        assert!(cli.pretty);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_file_conflicts_with_inline_sql() {
        let result = Cli::try_parse_from(["oxide-validate", "-f", "q.sql", "SELECT * FROM t"]);
        assert!(result.is_err());
    }
}
