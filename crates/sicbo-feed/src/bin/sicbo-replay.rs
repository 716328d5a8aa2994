//! sicbo-replay - replay a captured feed and print the final status.
//!
//! Usage:
//!   sicbo-replay [frames.jsonl] [--config sicbo.toml] [--log-format text|json]
//!
//! Reads one JSON frame per line from the file, or stdin when no file is
//! given, and prints the status snapshot as JSON on stdout. Logs go to
//! stderr; the level comes from `SICBO_LOG`.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use sicbo_core::tracing_setup::{init_tracing_with, LogFormat};
use sicbo_core::SicboConfig;
use sicbo_feed::FeedIngestor;
use sicbo_session::SharedSession;

fn main() {
    let mut input: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut log_format = LogFormat::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = args.next() else {
                    eprintln!("sicbo-replay: --config requires a path");
                    process::exit(2);
                };
                config_path = Some(PathBuf::from(path));
            }
            "--log-format" => {
                let Some(value) = args.next() else {
                    eprintln!("sicbo-replay: --log-format requires text or json");
                    process::exit(2);
                };
                log_format = value.parse().unwrap_or_else(|err| {
                    eprintln!("sicbo-replay: {err}");
                    process::exit(2);
                });
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            other if other.starts_with('-') && other != "-" => {
                eprintln!("sicbo-replay: unknown argument '{other}'");
                print_help();
                process::exit(2);
            }
            other => {
                if input.is_some() {
                    eprintln!("sicbo-replay: only one input file is accepted");
                    process::exit(2);
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    init_tracing_with(log_format);

    let config = SicboConfig::load(config_path.as_deref(), None).unwrap_or_else(|err| {
        eprintln!("sicbo-replay: {err}");
        process::exit(2);
    });

    let mut ingestor = FeedIngestor::new(SharedSession::with_config(&config));
    let result = match input.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let file = File::open(&path).unwrap_or_else(|err| {
                eprintln!("sicbo-replay: failed to open {}: {err}", path.display());
                process::exit(2);
            });
            ingestor.ingest_lines(BufReader::new(file))
        }
        None => ingestor.ingest_lines(io::stdin().lock()),
    };
    if let Err(err) = result {
        eprintln!("sicbo-replay: {err}");
        process::exit(1);
    }

    let Some(status) = ingestor.status() else {
        eprintln!("sicbo-replay: waiting for round data (no finished and upcoming round seen)");
        process::exit(1);
    };
    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("sicbo-replay: failed to encode status: {err}");
            process::exit(1);
        }
    }
}

fn print_help() {
    eprintln!(
        "Usage: sicbo-replay [frames.jsonl] [--config sicbo.toml] [--log-format text|json]\n\
         \n\
         Replays captured feed frames (file, or stdin when omitted or '-')\n\
         and prints the final status snapshot as JSON."
    );
}
