// Roster construction: slot schema, positional caps and open needs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::{Player, Position};

/// A roster slot designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "FLEX")]
    Flex,
    #[serde(rename = "DST")]
    Defense,
    #[serde(rename = "K")]
    Kicker,
    #[serde(rename = "BN")]
    Bench,
}

impl SlotKind {
    /// The dedicated starter slot for a position.
    pub fn dedicated_for(pos: Position) -> SlotKind {
        match pos {
            Position::Quarterback => SlotKind::Quarterback,
            Position::RunningBack => SlotKind::RunningBack,
            Position::WideReceiver => SlotKind::WideReceiver,
            Position::TightEnd => SlotKind::TightEnd,
            Position::Kicker => SlotKind::Kicker,
            Position::Defense => SlotKind::Defense,
        }
    }

    pub fn accepts(&self, pos: Position) -> bool {
        match self {
            SlotKind::Flex => pos.is_flex_eligible(),
            SlotKind::Bench => true,
            dedicated => *dedicated == SlotKind::dedicated_for(pos),
        }
    }

    pub fn is_starter(&self) -> bool {
        !matches!(self, SlotKind::Bench)
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Required starter slots, in lineup order.
pub const STARTER_SLOTS: &[SlotKind] = &[
    SlotKind::Quarterback,
    SlotKind::RunningBack,
    SlotKind::RunningBack,
    SlotKind::WideReceiver,
    SlotKind::WideReceiver,
    SlotKind::TightEnd,
    SlotKind::Flex,
    SlotKind::Defense,
    SlotKind::Kicker,
];

/// Maximum players per position including bench, indexed by `Position::index()`.
pub const POSITION_CAPS: [u32; 6] = [3, 7, 7, 3, 1, 1];

/// Shared roster shape for every team in a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSlotSchema {
    pub starters: &'static [SlotKind],
    pub bench: u32,
    pub caps: [u32; 6],
}

impl RosterSlotSchema {
    /// Standard schema for a draft of `rounds` rounds. Bench capacity is
    /// whatever the starters leave over.
    pub fn standard(rounds: u32) -> Self {
        RosterSlotSchema {
            starters: STARTER_SLOTS,
            bench: rounds.saturating_sub(STARTER_SLOTS.len() as u32),
            caps: POSITION_CAPS,
        }
    }

    pub fn total_slots(&self) -> u32 {
        self.starters.len() as u32 + self.bench
    }
}

// ---------------------------------------------------------------------------
// Per-team state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("team {team_index} has no open roster slots")]
    RosterFull { team_index: u32 },

    #[error("team {team_index} is at its {position} cap")]
    PositionCapped { team_index: u32, position: Position },

    #[error("team {team_index} has no open slot that accepts a {position}")]
    NoEligibleSlot { team_index: u32, position: Position },
}

/// A drafted player as recorded on a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosteredPlayer {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub bye_week: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub slot: SlotKind,
    pub player: Option<RosteredPlayer>,
}

/// One team's roster. Mutated once per pick that team makes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    pub team_index: u32,
    pub slots: Vec<RosterSlot>,
    #[serde(skip, default = "standard_caps")]
    caps: [u32; 6],
}

fn standard_caps() -> [u32; 6] {
    POSITION_CAPS
}

impl TeamRoster {
    pub fn new(team_index: u32, schema: &RosterSlotSchema) -> Self {
        let mut slots: Vec<RosterSlot> = Vec::with_capacity(schema.total_slots() as usize);
        slots.extend(
            schema
                .starters
                .iter()
                .map(|&slot| RosterSlot { slot, player: None }),
        );
        for _ in 0..schema.bench {
            slots.push(RosterSlot {
                slot: SlotKind::Bench,
                player: None,
            });
        }
        TeamRoster {
            team_index,
            slots,
            caps: schema.caps,
        }
    }

    fn has_open(&self, kind: SlotKind) -> bool {
        self.slots
            .iter()
            .any(|s| s.slot == kind && s.player.is_none())
    }

    /// Players drafted at a position, wherever they are slotted.
    pub fn count(&self, pos: Position) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.player.as_ref().is_some_and(|p| p.position == pos))
            .count() as u32
    }

    pub fn at_cap(&self, pos: Position) -> bool {
        self.count(pos) >= self.caps[pos.index()]
    }

    /// Open dedicated starter slots for a position.
    pub fn unfilled_dedicated(&self, pos: Position) -> u32 {
        let kind = SlotKind::dedicated_for(pos);
        self.slots
            .iter()
            .filter(|s| s.slot == kind && s.player.is_none())
            .count() as u32
    }

    /// Players currently occupying starter slots (dedicated or FLEX) at a position.
    pub fn starters_at(&self, pos: Position) -> impl Iterator<Item = &RosteredPlayer> {
        self.slots.iter().filter_map(move |s| match &s.player {
            Some(p) if s.slot.is_starter() && p.position == pos => Some(p),
            _ => None,
        })
    }

    pub fn open_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.player.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.open_slots() == 0
    }

    /// Positions acceptable for this team's next pick, most urgent first:
    /// positions with an open dedicated starter slot, then FLEX-eligible
    /// positions if FLEX is open, then anything the bench can still take.
    /// Positions at their cap are never included.
    pub fn open_needs(&self) -> Vec<Position> {
        let mut needs: Vec<Position> = Vec::new();
        let push = |pos: Position, needs: &mut Vec<Position>| {
            if !self.at_cap(pos) && !needs.contains(&pos) {
                needs.push(pos);
            }
        };

        for pos in Position::ALL {
            if self.has_open(SlotKind::dedicated_for(pos)) {
                push(pos, &mut needs);
            }
        }
        if self.has_open(SlotKind::Flex) {
            for pos in Position::ALL.into_iter().filter(|p| p.is_flex_eligible()) {
                push(pos, &mut needs);
            }
        }
        if self.has_open(SlotKind::Bench) {
            for pos in Position::ALL {
                push(pos, &mut needs);
            }
        }
        needs
    }

    /// The slot a player at `pos` would occupy if drafted now.
    pub fn slot_for(&self, pos: Position) -> Option<SlotKind> {
        [SlotKind::dedicated_for(pos), SlotKind::Flex, SlotKind::Bench]
            .into_iter()
            .find(|kind| kind.accepts(pos) && self.has_open(*kind))
    }

    /// Place a drafted player: dedicated slot, then FLEX, then bench.
    pub fn apply_pick(&mut self, player: &Player) -> Result<SlotKind, RosterError> {
        if self.is_full() {
            return Err(RosterError::RosterFull {
                team_index: self.team_index,
            });
        }
        if self.at_cap(player.position) {
            return Err(RosterError::PositionCapped {
                team_index: self.team_index,
                position: player.position,
            });
        }
        let kind = self
            .slot_for(player.position)
            .ok_or(RosterError::NoEligibleSlot {
                team_index: self.team_index,
                position: player.position,
            })?;
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|s| s.slot == kind && s.player.is_none())
        {
            slot.player = Some(RosteredPlayer {
                id: player.id.clone(),
                name: player.name.clone(),
                position: player.position,
                bye_week: player.bye_week,
            });
        }
        Ok(kind)
    }
}
