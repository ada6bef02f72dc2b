//! truplc - the TruPL front-end driver.
//!
//! Reads a source file, runs the Buffer → Scanner → Parser pipeline, and
//! converts its outcome into a process exit status (spec.md §6/§7).
//!
//! `faxc_drv`'s `Config`/`Session`/`compile()` shape is the grounding
//! template here, trimmed to the front-end's scope (no `OptLevel`,
//! `EmitType`, or codegen stages). Its own CLI has no argument-parsing
//! crate at all, so the `clap` derive + `tracing`/`tracing-subscriber`
//! stack is grounded instead on the unrelated `faxt` crate in this same
//! workspace, which already uses that combination for its own CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, Subcommand};

use trupl_lex::Scanner;
use trupl_par::{ParseOutcome, Parser};

/// The TruPL compiler front-end: scans and parses a source file, reporting
/// syntax and semantic diagnostics.
#[derive(Debug, ClapParser)]
#[command(name = "truplc", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Source file to compile. Equivalent to `truplc compile <FILE>`.
    file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan and parse the given file, reporting diagnostics.
    Compile { file: PathBuf },
    /// Print one `Kind:Attribute` line per token, then `kEOF:EndOfFile`.
    DumpTokens { file: PathBuf },
}

/// Installs a `tracing` subscriber honoring `TRUPLC_LOG` (default `warn`).
/// Purely additive: it never changes accept/reject outcomes.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("TRUPLC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Parses argv, dispatches to the requested mode, and returns the exit
/// status the process should report.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Compile { file }) => compile(&file),
        Some(Command::DumpTokens { file }) => dump_tokens(&file),
        None => match cli.file {
            Some(file) => compile(&file),
            None => {
                eprintln!("usage: truplc <FILE> | truplc compile <FILE> | truplc dump-tokens <FILE>");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn open(path: &PathBuf) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open '{}': {}", path.display(), e))?;
    Ok(BufReader::new(file))
}

/// Runs the full Scanner → Parser pipeline over `path`.
pub fn compile(path: &PathBuf) -> anyhow::Result<ExitCode> {
    let reader = open(path)?;
    let scanner = Scanner::new(reader);
    let mut parser = Parser::new(scanner);

    match parser.parse_program() {
        ParseOutcome::Accept => {
            tracing::info!(file = %path.display(), "accepted");
            Ok(ExitCode::SUCCESS)
        }
        ParseOutcome::Reject => {
            for diagnostic in parser.handler().diagnostics() {
                eprintln!("{}", diagnostic);
            }
            Ok(ExitCode::FAILURE)
        }
        ParseOutcome::Fatal(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Scans `path` and prints one debug-string line per token, per spec.md §6's
/// scanner dump tool contract.
pub fn dump_tokens(path: &PathBuf) -> anyhow::Result<ExitCode> {
    let reader = open(path)?;
    let mut scanner = Scanner::new(reader);
    loop {
        match scanner.next_token() {
            Ok(token) => {
                let is_eof = token.is_eof();
                println!("{}", token.debug_string());
                if is_eof {
                    return Ok(ExitCode::SUCCESS);
                }
            }
            Err(e) => {
                eprintln!("Exiting on Scanner Fatal Error: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
    }
}
