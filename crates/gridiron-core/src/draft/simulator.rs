// Full mock draft simulation.
//
// A pure function of (settings, player pool, engine config): rosters and the
// RNG stream are created fresh for every call and nothing is shared between
// calls, so simulations may run concurrently without coordination.

use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::draft::order;
use crate::draft::pick::{DraftResult, Manager, Pick};
use crate::draft::roster::{RosterSlotSchema, TeamRoster};
use crate::error::DraftError;
use crate::grading;
use crate::pool::PlayerSource;
use crate::rng::RngState;
use crate::settings::{MockDraftSettings, Strategy};
use crate::strategy::{self, PickContext};

/// Run a mock draft with the built-in engine tuning.
pub fn run<P: PlayerSource + ?Sized>(
    settings: &MockDraftSettings,
    pool: &P,
) -> Result<DraftResult, DraftError> {
    run_with_config(settings, pool, &EngineConfig::default())
}

/// Run a mock draft.
///
/// Returns `DraftError::Validation` only if the settings fail re-validation;
/// otherwise always returns a result. The draft runs until every pick is made
/// or the board is empty. A team that cannot legally take any remaining
/// player passes, leaving a gap in `overall_pick` numbering. Any shortfall
/// against `teams * rounds` sets `truncated: true`.
pub fn run_with_config<P: PlayerSource + ?Sized>(
    settings: &MockDraftSettings,
    pool: &P,
    config: &EngineConfig,
) -> Result<DraftResult, DraftError> {
    settings.validate()?;

    let teams = settings.teams();
    let rounds = settings.rounds();
    let total_picks = settings.total_picks();
    info!(
        "Simulating mock draft: {} teams, {} rounds, slot {}, {} scoring, {} strategy",
        teams,
        rounds,
        settings.draft_slot(),
        settings.scoring(),
        settings.strategy()
    );

    let schema = RosterSlotSchema::standard(rounds);
    let mut rosters: Vec<TeamRoster> =
        (1..=teams).map(|t| TeamRoster::new(t, &schema)).collect();

    let rng = RngState::create(settings.derived_seed());
    let (managers, mut rng) = assign_managers(settings, rng);

    let players = pool.list_players(settings.scoring());
    let mut board = strategy::build_board(players, settings.scoring());
    let mut picks: Vec<Pick> = Vec::with_capacity(total_picks as usize);
    let mut passed = 0u32;

    for overall_pick in 1..=total_picks {
        if board.is_empty() {
            warn!(
                "Player pool exhausted after {} of {} picks; returning truncated draft",
                picks.len(),
                total_picks
            );
            break;
        }

        let team_index = order::team_on_clock(overall_pick, teams);
        let round = order::round_of(overall_pick, teams);
        let slot = (team_index - 1) as usize;
        let ctx = PickContext {
            overall_pick,
            round,
            rounds_total: rounds,
            teams,
        };

        let (choice, next) = strategy::select_pick(
            managers[slot].strategy,
            &ctx,
            &board,
            &rosters[slot],
            rng,
            config,
        );
        rng = next;

        // A team whose open slots nothing on the board can fill forfeits the
        // pick; everyone else keeps drafting.
        let Some(choice) = choice else {
            warn!(
                "No remaining player fits team {}'s open needs {:?}; pick {} passed",
                team_index,
                rosters[slot].open_needs(),
                overall_pick
            );
            passed += 1;
            continue;
        };

        let prospect = board.remove(choice);
        match rosters[slot].apply_pick(&prospect.player) {
            Ok(slot_kind) => {
                debug!(
                    "Pick {} (round {}): team {} takes {} {} into {:?}",
                    overall_pick,
                    round,
                    team_index,
                    prospect.player.position,
                    prospect.player.name,
                    slot_kind
                );
            }
            Err(e) => {
                error!("Roster invariant violated at pick {}: {}", overall_pick, e);
                passed += 1;
                continue;
            }
        }

        picks.push(Pick {
            overall_pick,
            round,
            team_index,
            player: prospect.player,
        });
    }

    if passed > 0 {
        warn!("{} picks passed for lack of a legal player", passed);
    }
    let truncated = picks.len() < total_picks as usize;

    let mut result = DraftResult {
        settings: settings.clone(),
        managers,
        picks,
        rosters,
        grades: Vec::new(),
        truncated,
    };
    result.grades = grading::grade(&result, &config.grades);

    info!(
        "Mock draft complete: {} picks{}",
        result.picks.len(),
        if result.truncated { " (truncated)" } else { "" }
    );
    Ok(result)
}

/// Assign a strategy to every team. Each team draws from the stream in index
/// order; the user's draft slot then takes `settings.strategy`, so opponent
/// personalities depend only on the seed, not on which slot the user holds.
fn assign_managers(settings: &MockDraftSettings, rng: RngState) -> (Vec<Manager>, RngState) {
    let mut rng = rng;
    let mut managers = Vec::with_capacity(settings.teams() as usize);
    for team_index in 1..=settings.teams() {
        let (idx, next) = rng.next_index(Strategy::ALL.len());
        rng = next;
        let strategy = if team_index == settings.draft_slot() {
            settings.strategy()
        } else {
            Strategy::ALL[idx]
        };
        managers.push(Manager {
            team_index,
            strategy,
        });
    }
    (managers, rng)
}
