//! CLI interface for Pitchlog.
//!
//! Commands:
//!
//! - `pitchlog play --pitcher <name>` — chart a live game line by line.
//! - `pitchlog replay <script>` — apply a JSONL game script and export it.
//! - `pitchlog classify` — show what each pitch result means.
//! - `pitchlog exports` — list exported CSV files.
//!
//! Exports land in `--out-dir`, `PITCHLOG_EXPORT_DIR`, the config file's
//! `export-dir`, or `~/.pitchlog/exports`, in that order.

mod format;
mod play;

use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::export::render_csv;
use crate::model::PitchResultKind;
use crate::script;
use crate::session::Session;
use crate::storage::Storage;

use format::{format_classify_table, format_status, log_event};

/// Pitchlog — chart softball pitches and export them as CSV.
#[derive(Debug, Parser)]
#[command(name = "pitchlog", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Directory for CSV exports.
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// More log output on stderr (repeat for more).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Command,
}

const WORKFLOW_HELP: &str = r"Charting a game:
  1. pitchlog play --pitcher Avery --opponent 'Case Western'
  2. > pitch no-swing-ball 2 1 1-2 3+ Drop
     > pitch swing-out 4 2 0 1 Change Up
     > out
     > pitcher Blake
  3. > end
     → writes pitch_data_vs_case-western_<date>_<time>.csv

Replaying a saved game:
  pitchlog replay game.jsonl --stdout";

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Chart a game interactively from stdin.
    ///
    /// Type `help` at the prompt for the command list.
    Play {
        /// Starting pitcher.
        #[arg(long)]
        pitcher: String,

        /// Opponent name. Leave out for practice.
        #[arg(long)]
        opponent: Option<String>,
    },

    /// Replay a JSONL game script and export the result.
    Replay {
        /// Script file, one event per line.
        script: PathBuf,

        /// Print the CSV to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the outcome facts for each pitch result.
    Classify {
        /// Only this result.
        #[arg(value_enum)]
        kind: Option<ResultKindArg>,
    },

    /// List exported CSV files.
    Exports,
}

/// CLI-facing result kind, mapped to the domain `PitchResultKind`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ResultKindArg {
    /// Swung and missed.
    SwingStrike,
    /// Swung and fouled off.
    SwingFoul,
    /// Swung, put in play, reached on a hit.
    SwingHit,
    /// Swung, put in play, made an out.
    SwingOut,
    /// Swung, put in play, reached on an error.
    SwingError,
    /// Called strike.
    NoSwingStrike,
    /// Called ball.
    NoSwingBall,
    /// Hit by pitch.
    HitByPitch,
}

impl ResultKindArg {
    fn to_domain(self) -> PitchResultKind {
        match self {
            Self::SwingStrike => PitchResultKind::SwingStrike,
            Self::SwingFoul => PitchResultKind::SwingFoul,
            Self::SwingHit => PitchResultKind::SwingHit,
            Self::SwingOut => PitchResultKind::SwingOut,
            Self::SwingError => PitchResultKind::SwingError,
            Self::NoSwingStrike => PitchResultKind::NoSwingStrike,
            Self::NoSwingBall => PitchResultKind::NoSwingBall,
            Self::HitByPitch => PitchResultKind::HitByPitch,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    let out_dir = cli.out_dir.as_deref();

    match cli.command {
        Command::Play { pitcher, opponent } => {
            let storage = open_storage(config, out_dir)?;
            cmd_play(config, &storage, &pitcher, opponent.as_deref())
        }
        Command::Replay { script, stdout } => {
            let storage = if stdout {
                None
            } else {
                Some(open_storage(config, out_dir)?)
            };
            cmd_replay(&script, storage.as_ref())
        }
        Command::Classify { kind } => {
            let kinds = match kind {
                Some(k) => vec![k.to_domain()],
                None => PitchResultKind::ALL.to_vec(),
            };
            print!("{}", format_classify_table(&kinds));
            Ok(())
        }
        Command::Exports => cmd_exports(&open_storage(config, out_dir)?),
    }
}

fn open_storage(config: &Config, out_dir: Option<&Path>) -> Result<Storage, String> {
    let dir = config.resolve_export_dir(out_dir)?;
    Storage::new(&dir)
        .map_err(|e| format!("failed to open export directory {}: {e}", dir.display()))
}

fn cmd_play(
    config: &Config,
    storage: &Storage,
    pitcher: &str,
    opponent: Option<&str>,
) -> Result<(), String> {
    if pitcher.trim().is_empty() {
        return Err("pitcher name cannot be empty".to_string());
    }

    let mut session = Session::new();
    session.subscribe(log_event);
    session.start_session(pitcher, opponent);

    eprintln!(
        "Charting {} vs {}. Type `help` for commands.",
        session.pitcher(),
        session.opponent()
    );
    eprintln!("{}", format_status(&session));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play::run(
        &mut session,
        storage,
        &config.default_pitch_type,
        stdin.lock(),
        &mut stdout,
    )
}

fn cmd_replay(path: &Path, storage: Option<&Storage>) -> Result<(), String> {
    let events =
        script::load(path).map_err(|e| format!("failed to load {}: {e}", path.display()))?;

    let mut session = Session::new();
    session.subscribe(log_event);
    script::apply(&mut session, &events);

    match storage {
        Some(storage) => {
            let at = jiff::Zoned::now().datetime();
            let out = storage
                .write_export(&session, at)
                .map_err(|e| format!("failed to export: {e}"))?;
            eprintln!(
                "Replayed {} pitch(es), {} batter(s) → {}",
                session.pitch_total(),
                session.batter_total(),
                out.display()
            );
        }
        None => {
            let csv = render_csv(&session.export_records())
                .map_err(|e| format!("failed to render CSV: {e}"))?;
            print!("{csv}");
        }
    }

    Ok(())
}

fn cmd_exports(storage: &Storage) -> Result<(), String> {
    let exports = storage
        .list_exports()
        .map_err(|e| format!("failed to list exports: {e}"))?;

    if exports.is_empty() {
        println!("No exports in {}", storage.root().display());
        return Ok(());
    }

    for path in &exports {
        println!("{}", path.display());
    }

    Ok(())
}
