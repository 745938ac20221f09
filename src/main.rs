//! Warlord -- a greedy decision agent for a Risk-style strategy game.
//!
//! This binary reads one JSON decision request per stdin line and writes one
//! JSON response per stdout line. Diagnostics go to stderr through
//! `env_logger`; set `RUST_LOG` to raise the level above `warn`.
//!
//! Usage:
//!   warlord [OPTIONS]
//!
//! Options:
//!   --config FILE   Evaluator tuning as JSON (default: built-in tuning)
//!   --threads N     Scoring worker threads (default: from config, else 1)
//!   --derived-borders  Compute border territories from the map adjacency

use std::env;
use std::io::{self, BufRead};
use std::process;

use warlord::board::Board;
use warlord::config::EvaluatorConfig;
use warlord::engine::{Engine, Flow};

struct Options {
    config: Option<String>,
    threads: Option<usize>,
    derived_borders: bool,
}

fn print_usage() {
    eprintln!("Usage: warlord [--config FILE] [--threads N] [--derived-borders]");
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();
    let mut opts = Options {
        config: None,
        threads: None,
        derived_borders: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config needs a file")?;
                opts.config = Some(path.clone());
            }
            "--threads" => {
                i += 1;
                let n = args
                    .get(i)
                    .and_then(|v| v.parse::<usize>().ok())
                    .filter(|n| *n >= 1)
                    .ok_or("invalid --threads value")?;
                opts.threads = Some(n);
            }
            "--derived-borders" => {
                opts.derived_borders = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(opts)
}

fn build_engine(opts: &Options) -> warlord::Result<Engine> {
    let mut config = match &opts.config {
        Some(path) => EvaluatorConfig::load(path)?,
        None => EvaluatorConfig::default(),
    };
    if let Some(n) = opts.threads {
        config.workers = n;
    }
    if opts.derived_borders {
        config = config.with_derived_borders(&Board::classic());
    }
    Engine::new(config)
}

/// Runs the request loop, reading from stdin and writing to stdout.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            process::exit(2);
        }
    };
    let engine = match build_engine(&opts) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };
    log::info!("workers: {}", engine.agent().config().workers);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        match engine.handle_line(&line, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(e) => {
                log::error!("write failed: {}", e);
                break;
            }
        }
    }
}
