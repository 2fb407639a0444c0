// Snake draft ordering.

/// Round number (1-based) that contains `overall_pick`.
pub fn round_of(overall_pick: u32, teams: u32) -> u32 {
    overall_pick.div_ceil(teams)
}

/// Team index (1-based) on the clock for `overall_pick`.
///
/// Odd rounds run 1..=teams, even rounds run teams..=1.
pub fn team_on_clock(overall_pick: u32, teams: u32) -> u32 {
    let round = round_of(overall_pick, teams);
    let pos_in_round = overall_pick - (round - 1) * teams;
    if round % 2 == 1 {
        pos_in_round
    } else {
        teams - pos_in_round + 1
    }
}
