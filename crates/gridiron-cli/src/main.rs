// Mock draft command-line entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout stays machine-readable)
// 2. Resolve and load the engine config
// 3. Load the player pool
// 4. Parse and validate settings
// 5. Simulate and print the result

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing::{info, warn};

use gridiron_core::config::{self, EngineConfig};
use gridiron_core::pool::PlayerPool;
use gridiron_core::{run_with_config, DraftResult, MockDraftSettings};

const LOCAL_CONFIG: &str = "config/engine.toml";

#[derive(Parser)]
#[command(name = "mockdraft")]
#[command(about = "Simulate a seeded fantasy football mock draft", long_about = None)]
#[command(group(
    ArgGroup::new("settings_source")
        .required(true)
        .args(["settings", "settings_json"])
))]
struct Cli {
    /// Player pool CSV (id,name,position,team,bye,adp,ppr,half_ppr,standard)
    #[arg(long)]
    players: PathBuf,

    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Settings as an inline JSON string
    #[arg(long)]
    settings_json: Option<String>,

    /// Engine tuning TOML; defaults to ./config/engine.toml or the user config dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long, default_value = "false")]
    pretty: bool,

    /// Print a summary table for one team instead of JSON
    #[arg(long)]
    team: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing
    init_tracing()?;

    // 2. Engine config
    let engine = resolve_config(cli.config.as_deref())?;

    // 3. Player pool
    let pool = PlayerPool::from_csv_path(&cli.players)
        .with_context(|| format!("failed to load player pool from {}", cli.players.display()))?;
    info!("Loaded {} players from {}", pool.len(), cli.players.display());

    // 4. Settings
    let settings_text = match (&cli.settings, &cli.settings_json) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?,
        (None, Some(json)) => json.clone(),
        (None, None) => anyhow::bail!("one of --settings or --settings-json is required"),
    };
    let settings = MockDraftSettings::from_json(&settings_text).context("invalid settings")?;

    // 5. Simulate
    let result = run_with_config(&settings, &pool, &engine).context("simulation failed")?;
    if result.truncated {
        warn!("Draft truncated at {} picks", result.picks.len());
    }

    match cli.team {
        Some(team) => print_team_summary(&result, team)?,
        None => {
            let json = if cli.pretty {
                result.to_json_pretty()
            } else {
                result.to_json()
            }
            .context("failed to serialize draft result")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Pick the engine config: explicit flag, then the working directory, then
/// the per-user config dir, then built-in defaults. An explicit path that
/// fails to load is an error; discovered files are only used if they exist.
fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<EngineConfig> {
    if let Some(path) = explicit {
        let cfg = config::load_config_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        info!("Engine config loaded from {}", path.display());
        return Ok(cfg);
    }

    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dirs) = directories::ProjectDirs::from("", "", "gridiron") {
        candidates.push(dirs.config_dir().join("engine.toml"));
    }

    for path in candidates {
        if path.is_file() {
            let cfg = config::load_config_from(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            info!("Engine config loaded from {}", path.display());
            return Ok(cfg);
        }
    }

    info!("No engine config found; using built-in defaults");
    Ok(EngineConfig::default())
}

fn print_team_summary(result: &DraftResult, team: u32) -> anyhow::Result<()> {
    let teams = result.settings.teams();
    if team == 0 || team > teams {
        anyhow::bail!("--team must be between 1 and {teams}, got {team}");
    }

    let strategy = result
        .managers
        .iter()
        .find(|m| m.team_index == team)
        .map(|m| m.strategy.to_string())
        .unwrap_or_default();
    let you = if team == result.user_team() { ", your slot" } else { "" };
    println!("Team {team} ({strategy}{you})");
    println!(
        "{:>5} {:>7}  {:<4} {:<28} {:<4} {:>7}",
        "Round", "Overall", "Pos", "Player", "Tm", "ADP"
    );
    for pick in result.team_picks(team) {
        let adp = pick
            .player
            .adp
            .map_or_else(|| "-".to_string(), |a| format!("{a:.1}"));
        println!(
            "{:>5} {:>7}  {:<4} {:<28} {:<4} {:>7}",
            pick.round,
            pick.overall_pick,
            pick.player.position.display_str(),
            pick.player.name,
            pick.player.team_abbr,
            adp
        );
    }

    if let Some(roster) = result.roster(team) {
        let open: Vec<String> = roster
            .slots
            .iter()
            .filter(|s| s.player.is_none())
            .map(|s| format!("{:?}", s.slot))
            .collect();
        if !open.is_empty() {
            println!("Unfilled slots: {}", open.join(", "));
        }
    }

    if let Some(grade) = result.grade(team) {
        println!();
        println!(
            "Grade {:?}: value {:+.1}, projected lineup {:.1} pts",
            grade.letter_grade, grade.value_score, grade.total_projected_points
        );
        if let Some(best) = &grade.best_value_pick {
            println!(
                "Best value:    {} (pick {}, {:+.0})",
                best.player_name, best.overall_pick, best.delta
            );
        }
        if let Some(reach) = &grade.biggest_reach {
            println!(
                "Biggest reach: {} (pick {}, {:+.0})",
                reach.player_name, reach.overall_pick, reach.delta
            );
        }
    }
    if result.truncated {
        println!("(draft truncated: {} picks made)", result.picks.len());
    }
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gridiron_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
