// Property tests: draft invariants hold for any valid settings.

mod common;

use std::collections::HashSet;

use proptest::prelude::*;

use gridiron_core::draft::order;
use gridiron_core::draft::roster::POSITION_CAPS;
use gridiron_core::player::Position;
use gridiron_core::settings::{ALLOWED_ROUNDS, ALLOWED_TEAMS};
use gridiron_core::{run, MockDraftSettings, ScoringFormat, Seed, Strategy as DraftStrategy};

fn arb_settings() -> impl Strategy<Value = MockDraftSettings> {
    (
        prop::sample::select(ALLOWED_TEAMS.to_vec()),
        prop::sample::select(ALLOWED_ROUNDS.to_vec()),
        0u32..14,
        prop::sample::select(ScoringFormat::ALL.to_vec()),
        prop::sample::select(DraftStrategy::ALL.to_vec()),
        prop::option::of(prop_oneof![
            any::<u64>().prop_map(|n| Seed::Number(n.into())),
            "[a-z0-9]{1,12}".prop_map(Seed::Text),
        ]),
    )
        .prop_map(|(teams, rounds, slot, scoring, strategy, seed)| {
            let draft_slot = slot % teams + 1;
            MockDraftSettings::new(teams, rounds, draft_slot, scoring, strategy, seed)
                .expect("generated settings are valid")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn draft_invariants_hold(settings in arb_settings()) {
        let pool = common::synthetic_pool();
        let result = run(&settings, &pool).unwrap();
        let teams = settings.teams();

        prop_assert!(!result.truncated);
        prop_assert_eq!(result.picks.len() as u32, settings.total_picks());

        let mut seen = HashSet::new();
        for (i, pick) in result.picks.iter().enumerate() {
            let overall = i as u32 + 1;
            prop_assert_eq!(pick.overall_pick, overall);
            prop_assert_eq!(pick.team_index, order::team_on_clock(overall, teams));
            prop_assert!(seen.insert(pick.player.id.clone()));
        }

        for roster in &result.rosters {
            prop_assert!(roster.is_full());
            for pos in Position::ALL {
                prop_assert!(roster.count(pos) <= POSITION_CAPS[pos.index()]);
            }
        }

        let user = &result.managers[(settings.draft_slot() - 1) as usize];
        prop_assert_eq!(user.strategy, settings.strategy());

        let sum: f64 = result.grades.iter().map(|g| g.value_score).sum();
        prop_assert!(sum.abs() < 1e-6);
    }

    #[test]
    fn reruns_are_identical(settings in arb_settings()) {
        let pool = common::synthetic_pool();
        let a = run(&settings, &pool).unwrap().to_json().unwrap();
        let b = run(&settings, &pool).unwrap().to_json().unwrap();
        prop_assert_eq!(a, b);
    }
}
