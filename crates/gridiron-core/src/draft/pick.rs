// Pick records and the completed draft result.

use serde::{Deserialize, Serialize};

use crate::draft::roster::TeamRoster;
use crate::grading::TeamGrade;
use crate::player::{Player, Position};
use crate::settings::{MockDraftSettings, Strategy};

/// A single completed pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub overall_pick: u32,
    pub round: u32,
    pub team_index: u32,
    pub player: Player,
}

/// The strategy a team drafted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub team_index: u32,
    pub strategy: Strategy,
}

/// Output of one simulation. A plain value with no further lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResult {
    pub settings: MockDraftSettings,
    pub managers: Vec<Manager>,
    pub picks: Vec<Pick>,
    pub rosters: Vec<TeamRoster>,
    pub grades: Vec<TeamGrade>,
    /// Set when the pool ran out before every pick was made.
    pub truncated: bool,
}

impl DraftResult {
    /// Picks made by one team, in draft order.
    pub fn team_picks(&self, team_index: u32) -> impl Iterator<Item = &Pick> {
        self.picks.iter().filter(move |p| p.team_index == team_index)
    }

    pub fn roster(&self, team_index: u32) -> Option<&TeamRoster> {
        self.rosters.iter().find(|r| r.team_index == team_index)
    }

    pub fn grade(&self, team_index: u32) -> Option<&TeamGrade> {
        self.grades.iter().find(|g| g.team_index == team_index)
    }

    /// The team sitting in the configured draft slot.
    pub fn user_team(&self) -> u32 {
        self.settings.draft_slot()
    }

    /// How many players at `pos` a team took within `rounds`.
    pub fn count_position_in_rounds(
        &self,
        team_index: u32,
        pos: Position,
        rounds: std::ops::RangeInclusive<u32>,
    ) -> usize {
        self.team_picks(team_index)
            .filter(|p| rounds.contains(&p.round) && p.player.position == pos)
            .count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
