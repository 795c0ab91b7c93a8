//! pogo - command line front end
//!
//! Downloads the game master and prints move leaderboards, creature reports
//! and the roster-wide moveset leaderboard.

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pogokit::analysis::SortKey;
use pogokit::config::Settings;
use pogokit::gamemaster::GameMasterSource;
use pogokit::{PogoError, Pogokit};

/// Number cruncher for Pokemon GO trainer battles
#[derive(Parser)]
#[command(name = "pogo")]
#[command(about = "Pokemon GO PvP move and moveset rankings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct CommonArgs {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the game master and legacy lists
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Game master file, overrides --data-dir
    #[arg(long, global = true)]
    game_master: Option<PathBuf>,

    /// Directory for report files
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Legacy fast move list (CSV)
    #[arg(long, global = true)]
    legacy_fast: Option<PathBuf>,

    /// Legacy charged move list (CSV)
    #[arg(long, global = true)]
    legacy_charged: Option<PathBuf>,

    /// Write report files as CSV
    #[arg(long, global = true)]
    csv: bool,
}

impl CommonArgs {
    fn settings(&self) -> Result<Settings, PogoError> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(self.apply(settings))
    }

    /// Command line values override `settings`
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if self.game_master.is_some() {
            settings.game_master = self.game_master.clone();
        }
        if self.output_dir.is_some() {
            settings.output_dir = self.output_dir.clone();
        }
        if self.legacy_fast.is_some() {
            settings.legacy_fast = self.legacy_fast.clone();
        }
        if self.legacy_charged.is_some() {
            settings.legacy_charged = self.legacy_charged.clone();
        }
        if self.csv {
            settings.reports.csv = true;
        }
        settings
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Default,
    /// Track the newest game master
    Latest,
    /// Write reports as CSV
    Spreadsheet,
}

impl Preset {
    fn settings(self) -> Settings {
        match self {
            Preset::Default => Settings::default(),
            Preset::Latest => Settings::latest_preset(),
            Preset::Spreadsheet => Settings::spreadsheet_preset(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Download the game master into the data directory
    Download {
        /// Fetch the newest version instead of the pinned one
        #[arg(long)]
        latest: bool,
    },

    /// Write a settings file from a preset and the given options
    Config {
        /// Where to write the settings (JSON)
        path: PathBuf,

        #[arg(long, value_enum, default_value = "default")]
        preset: Preset,
    },

    /// Rank fast and charged moves
    #[command(alias = "best_pvp_moves")]
    Moves,

    /// Show creature reports, interactively or for one query
    #[command(visible_aliases = ["pok", "mon"])]
    Pokemon {
        /// Dex number or name; omit for an interactive session
        #[arg(long)]
        query: Option<String>,

        /// Movesets listed per creature
        #[arg(long)]
        max_movesets: Option<usize>,
    },

    /// Rank every moveset of every creature
    Leaderboard {
        /// throughput, gl, ul, ml or level1
        #[arg(long, default_value = "throughput")]
        sort: SortKey,

        /// Rows shown on screen
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("pogokit=info,pogo=info"),
    )
    .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PogoError> {
    let mut settings = cli.common.settings()?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Download { latest } => {
            let source = if latest {
                GameMasterSource::Latest
            } else {
                settings.source
            };
            let path = pogokit::download(&settings, source)?;
            log::info!("Game master ready at {}", path.display());
        }
        Command::Config { path, preset } => {
            let written = cli.common.apply(preset.settings());
            written.save(&path)?;
            log::info!("Wrote settings to {}", path.display());
        }
        Command::Moves => {
            let kit = Pogokit::load(settings)?;
            kit.write_move_reports(&mut stdout)?;
        }
        Command::Pokemon {
            query,
            max_movesets,
        } => {
            if let Some(n) = max_movesets {
                settings.reports.max_movesets = n;
            }
            let kit = Pogokit::load(settings)?;
            let inspector = kit.inspector();
            match query {
                Some(query) => inspector.run_query(&query, &mut stdout)?,
                None => {
                    inspector.run_session(io::stdin().lock(), &mut stdout, &mut io::stderr())?;
                }
            }
        }
        Command::Leaderboard { sort, top } => {
            if let Some(n) = top {
                settings.reports.leaderboard_top = n;
            }
            let kit = Pogokit::load(settings)?;
            kit.write_leaderboard(sort, &mut stdout)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_writes_preset_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pogo.json");
        let cli = Cli::try_parse_from([
            "pogo",
            "config",
            path.to_str().unwrap(),
            "--preset",
            "latest",
            "--csv",
        ])
        .unwrap();

        run(cli).unwrap();
        let saved = Settings::load(&path).unwrap();
        assert_eq!(saved.source, GameMasterSource::Latest);
        assert!(saved.reports.csv);
    }

    #[test]
    fn test_config_defaults_to_plain_settings() {
        let cli = Cli::try_parse_from(["pogo", "config", "out.json", "--data-dir", "/data"]).unwrap();
        let Command::Config { preset, .. } = cli.command else {
            panic!("expected config command");
        };
        let settings = cli.common.apply(preset.settings());
        assert_eq!(settings.source, GameMasterSource::Pinned);
        assert_eq!(settings.data_dir, PathBuf::from("/data"));
        assert!(!settings.reports.csv);
    }
}
