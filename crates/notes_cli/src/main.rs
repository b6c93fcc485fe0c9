//! Notes command-line front end.
//!
//! # Responsibility
//! - Convert stored notes values between storage, display and stats forms.
//! - Read from a file argument or stdin; write results to stdout.

use clap::{Parser, Subcommand};
use notes_core::{
    checklist_stats, default_log_level, init_logging, logging_status, notes_to_plain_text,
    parse_notes, parse_notes_with_path, serialize_notes,
};
use std::io::Read;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notes", version, about = "Block notes converter")]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the storage (JSON) form
    Parse(InputArgs),

    /// Print the display (plain text) form
    Plain(InputArgs),

    /// Print checklist progress as `completed/total`
    Stats(InputArgs),

    /// Report the decode path taken and the active logging config
    Check(InputArgs),
}

#[derive(clap::Args)]
struct InputArgs {
    /// Notes file to read; stdin when omitted
    file: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(default_log_level().as_str());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let (args, render): (&InputArgs, fn(&str) -> String) = match &cli.command {
        Command::Parse(args) => (args, render_storage),
        Command::Plain(args) => (args, render_plain),
        Command::Stats(args) => (args, render_stats),
        Command::Check(args) => (args, render_check),
    };

    let input = match read_input(args.file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", render(input.as_str()));
    ExitCode::SUCCESS
}

fn read_input(file: Option<&str>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("cannot read '{path}': {err}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("cannot read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

fn render_storage(input: &str) -> String {
    serialize_notes(&parse_notes(Some(input)))
}

fn render_plain(input: &str) -> String {
    notes_to_plain_text(&parse_notes(Some(input)))
}

fn render_stats(input: &str) -> String {
    let stats = checklist_stats(&parse_notes(Some(input)));
    format!("{}/{}", stats.completed, stats.total)
}

fn render_check(input: &str) -> String {
    let (document, path) = parse_notes_with_path(Some(input));
    let logging = logging_status().map_or_else(|| "off".to_string(), |config| config.to_string());
    format!(
        "path={} blocks={} logging={logging}",
        path.as_str(),
        document.len()
    )
}
