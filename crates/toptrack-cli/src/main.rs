//! `toptrack` CLI - replay a touch log through a [`toptrack_core::Tracker`]
//!
//! Usage:
//!   `toptrack run touches.log`
//!   `toptrack run touches.log --capacity 256 --thresh 32`

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use thiserror::Error;
use toptrack_core::{DecayConfig, Tracker, TrackerConfig, TrackerParams};

#[derive(Parser)]
#[command(name = "toptrack")]
#[command(author, version, about = "toptrack CLI - replay a touch log through a popularity tracker")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a touch log, printing promote/demote events as they occur.
    Run {
        /// Path to a touch log: one key (u64) per line, or the literal
        /// word `progress` to end the current epoch.
        path: PathBuf,

        /// LRU admission filter / score table capacity.
        #[arg(long, default_value_t = 1024)]
        capacity: usize,

        /// Number of top ranks promoted each epoch.
        #[arg(long, default_value_t = 64)]
        thresh: usize,

        /// Hysteresis band for the ranking comparator.
        #[arg(long, default_value_t = 0.05)]
        remove_thresh: f64,

        /// Multiplicative decay factor per epoch.
        #[arg(long, default_value_t = 0.8)]
        decay_m: f64,

        /// Additive bump for keys touched in an epoch.
        #[arg(long, default_value_t = 0.2)]
        decay_c: f64,
    },

    /// Show the currently promoted keys after replaying a touch log.
    Show {
        /// Path to a touch log, same format as `run`.
        path: PathBuf,

        /// LRU admission filter / score table capacity.
        #[arg(long, default_value_t = 1024)]
        capacity: usize,

        /// Number of top ranks promoted each epoch.
        #[arg(long, default_value_t = 64)]
        thresh: usize,
    },
}

/// CLI-level errors, distinct from [`toptrack_core::Error`] since they can
/// arise purely from argument/file handling before a tracker exists.
#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read touch log '{path}': {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} is neither a u64 key nor 'progress': '{content}'")]
    BadLine { line: usize, content: String },

    #[error(transparent)]
    Tracker(#[from] toptrack_core::Error),
}

enum LogLine {
    Touch(u64),
    Progress,
}

fn parse_log(path: &PathBuf) -> Result<Vec<LogLine>, CliError> {
    let file = File::open(path).map_err(|source| CliError::ReadLog {
        path: path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (i, raw) in reader.lines().enumerate() {
        let raw = raw.map_err(|source| CliError::ReadLog {
            path: path.clone(),
            source,
        })?;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("progress") {
            lines.push(LogLine::Progress);
        } else if let Ok(key) = trimmed.parse::<u64>() {
            lines.push(LogLine::Touch(key));
        } else {
            return Err(CliError::BadLine {
                line: i + 1,
                content: trimmed.to_string(),
            });
        }
    }
    Ok(lines)
}

fn build_tracker(
    capacity: usize,
    thresh: usize,
    remove_thresh: f64,
    decay_m: f64,
    decay_c: f64,
    verbose: bool,
) -> Result<(Tracker, Rc<RefCell<Vec<u64>>>, Rc<RefCell<Vec<u64>>>), CliError> {
    let promotions = Rc::new(RefCell::new(Vec::new()));
    let demotions = Rc::new(RefCell::new(Vec::new()));
    let p = Rc::clone(&promotions);
    let d = Rc::clone(&demotions);

    let config = TrackerConfig {
        promote_capacity: capacity,
        promote_thresh: thresh,
        remove_thresh,
        exp_decay: DecayConfig { m: decay_m, c: decay_c },
        min_promote_score: 0.0,
        ..TrackerConfig::default()
    };

    let params = TrackerParams::new(config)
        .with_promote_cb(move |key| {
            p.borrow_mut().push(key);
            if verbose {
                println!("{} {key}", "promote".green().bold());
            }
        })
        .with_demote_cb(move |key| {
            d.borrow_mut().push(key);
            if verbose {
                println!("{} {key}", "demote".red().bold());
            }
        });

    let tracker = Tracker::create(params)?;
    Ok((tracker, promotions, demotions))
}

fn run(
    path: PathBuf,
    capacity: usize,
    thresh: usize,
    remove_thresh: f64,
    decay_m: f64,
    decay_c: f64,
) -> Result<(), CliError> {
    let log = parse_log(&path)?;
    let (mut tracker, promotions, demotions) = build_tracker(capacity, thresh, remove_thresh, decay_m, decay_c, true)?;

    for line in log {
        match line {
            LogLine::Touch(key) => tracker.touch(key),
            LogLine::Progress => tracker.progress(),
        }
    }

    println!();
    println!(
        "replay complete: {} promotions, {} demotions, {} keys tracked",
        promotions.borrow().len(),
        demotions.borrow().len(),
        tracker.table_size()
    );
    Ok(())
}

fn show(path: PathBuf, capacity: usize, thresh: usize) -> Result<(), CliError> {
    let log = parse_log(&path)?;
    let (mut tracker, _promotions, _demotions) = build_tracker(capacity, thresh, 0.05, 0.8, 0.2, false)?;

    for line in log {
        match line {
            LogLine::Touch(key) => tracker.touch(key),
            LogLine::Progress => tracker.progress(),
        }
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["key", "score"]);
    let mut promoted = tracker.promoted_keys();
    promoted.sort_unstable();
    for key in promoted {
        let score = tracker.get_score(key)?;
        table.add_row(vec![key.to_string(), format!("{score:.4}")]);
    }
    println!("{table}");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            path,
            capacity,
            thresh,
            remove_thresh,
            decay_m,
            decay_c,
        } => run(path, capacity, thresh, remove_thresh, decay_m, decay_c),
        Commands::Show { path, capacity, thresh } => show(path, capacity, thresh),
    };

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
