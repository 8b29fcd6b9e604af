//! Unit tests for the scoring engine

use super::*;
use crate::cli::types::Role;
use crate::cricket::types::Player;

#[cfg(test)]
mod scoring_tests {
    use super::*;

    const GAIKWAD: &str = "Ruturaj Gaikwad";
    const CONWAY: &str = "Devon Conway";
    const DHONI: &str = "MS Dhoni";
    const JADEJA: &str = "Ravindra Jadeja";
    const BOULT: &str = "Trent Boult";
    const CHAHAL: &str = "Yuzvendra Chahal";
    const SAMSON: &str = "Sanju Samson";

    fn create_test_roster() -> Roster {
        let players = vec![
            Player::new(GAIKWAD, Role::Batter),
            Player::new(CONWAY, Role::Batter),
            Player::new(DHONI, Role::WicketKeeper),
            Player::new(JADEJA, Role::AllRounder),
            Player::new(BOULT, Role::Bowler),
            Player::new(CHAHAL, Role::Bowler),
            Player::new(SAMSON, Role::WicketKeeper),
        ];
        Roster::new(&players)
    }

    fn ball(over: u32, batter: &str, bowler: &str) -> Delivery {
        Delivery::new(over, batter, bowler, DHONI)
    }

    fn score(deliveries: &[Delivery]) -> MatchStats {
        compute_match_stats(deliveries, &create_test_roster()).unwrap()
    }

    #[test]
    fn test_empty_match_has_no_players() {
        let table = score(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_every_participant_is_registered() {
        let deliveries = vec![ball(0, GAIKWAD, BOULT)
            .with_runs(1)
            .with_wicket(WicketKind::Caught)
            .with_fielder(SAMSON)];
        let table = score(&deliveries);

        assert_eq!(table.len(), 4);
        assert!(table.contains_key(GAIKWAD));
        assert!(table.contains_key(BOULT));
        assert!(table.contains_key(DHONI));
        assert!(table.contains_key(SAMSON));
        assert_eq!(table[DHONI], PlayerMatchStats::new(Some(Role::WicketKeeper)));
    }

    #[test]
    fn test_four_scores_boundary_bonus() {
        let table = score(&[ball(0, GAIKWAD, BOULT).with_runs(4)]);

        assert_eq!(table[GAIKWAD].runs, 4);
        assert_eq!(table[GAIKWAD].points, 5);
    }

    #[test]
    fn test_six_scores_six_bonus() {
        let table = score(&[ball(0, GAIKWAD, BOULT).with_runs(6)]);

        assert_eq!(table[GAIKWAD].runs, 6);
        assert_eq!(table[GAIKWAD].points, 8);
    }

    #[test]
    fn test_other_runs_score_one_point_each() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, GAIKWAD, BOULT).with_runs(2),
            ball(0, GAIKWAD, BOULT).with_runs(3),
            ball(0, GAIKWAD, BOULT).with_runs(5),
        ]);

        assert_eq!(table[GAIKWAD].runs, 11);
        assert_eq!(table[GAIKWAD].points, 11);
    }

    #[test]
    fn test_bowled_wicket_scores_bonus() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, CONWAY, BOULT).with_wicket(WicketKind::Bowled),
        ]);

        assert_eq!(table[BOULT].wickets, 1);
        assert_eq!(table[BOULT].points, 33);
    }

    #[test]
    fn test_lbw_wicket_scores_bonus() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, CONWAY, BOULT).with_wicket(WicketKind::Lbw),
        ]);

        assert_eq!(table[BOULT].points, 33);
    }

    #[test]
    fn test_caught_wicket_credits_bowler_and_fielder() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, CONWAY, BOULT)
                .with_wicket(WicketKind::Caught)
                .with_fielder(SAMSON),
        ]);

        assert_eq!(table[BOULT].wickets, 1);
        assert_eq!(table[BOULT].points, 25);
        assert_eq!(table[BOULT].catches, 0);
        assert_eq!(table[SAMSON].catches, 1);
        assert_eq!(table[SAMSON].points, 8);
    }

    #[test]
    fn test_caught_without_fielder_credits_no_catch() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, CONWAY, BOULT).with_wicket(WicketKind::Caught),
        ]);

        assert_eq!(table[BOULT].points, 25);
        assert!(table.values().all(|s| s.catches == 0));
    }

    #[test]
    fn test_caught_and_bowled_credits_bowler_catch() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, CONWAY, BOULT).with_wicket(WicketKind::CaughtAndBowled),
        ]);

        assert_eq!(table[BOULT].wickets, 1);
        assert_eq!(table[BOULT].catches, 1);
        assert_eq!(table[BOULT].points, 33);
    }

    #[test]
    fn test_run_out_earns_bowler_nothing() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, CONWAY, BOULT)
                .with_wicket(WicketKind::RunOut)
                .with_fielder(SAMSON),
        ]);

        assert_eq!(table[BOULT].wickets, 0);
        assert_eq!(table[BOULT].points, 0);
        assert_eq!(table[SAMSON].catches, 0);
        assert!(table[CONWAY].out);
    }

    #[test]
    fn test_run_out_of_non_striker_marks_non_striker_out() {
        let table = score(&[
            ball(0, GAIKWAD, BOULT).with_runs(1),
            Delivery::new(0, GAIKWAD, BOULT, CONWAY)
                .with_wicket(WicketKind::RunOut)
                .with_player_out(CONWAY),
        ]);

        assert!(!table[GAIKWAD].out);
        assert!(table[CONWAY].out);
        assert_eq!(table[CONWAY].points, -2);
    }

    #[test]
    fn test_maiden_over_awarded_on_over_change() {
        let mut deliveries: Vec<Delivery> = (0..6).map(|_| ball(0, GAIKWAD, BOULT)).collect();
        deliveries.push(ball(1, GAIKWAD, CHAHAL).with_runs(1));

        let table = score(&deliveries);

        assert_eq!(table[BOULT].maidens, 1);
        assert_eq!(table[BOULT].points, 12);
        assert_eq!(table[CHAHAL].maidens, 0);
        assert_eq!(table[CHAHAL].points, 0);
    }

    #[test]
    fn test_over_with_a_run_is_not_a_maiden() {
        let mut deliveries: Vec<Delivery> = (0..5).map(|_| ball(0, GAIKWAD, BOULT)).collect();
        deliveries.push(ball(0, GAIKWAD, BOULT).with_runs(1));
        deliveries.push(ball(1, GAIKWAD, CHAHAL).with_runs(2));

        let table = score(&deliveries);

        assert_eq!(table[BOULT].maidens, 0);
        assert_eq!(table[BOULT].points, 0);
    }

    #[test]
    fn test_final_over_is_closed_out() {
        let mut deliveries = vec![ball(0, GAIKWAD, CHAHAL).with_runs(1)];
        deliveries.extend((0..6).map(|_| ball(1, GAIKWAD, BOULT)));

        let table = score(&deliveries);

        assert_eq!(table[BOULT].maidens, 1);
        assert_eq!(table[BOULT].points, 12);
    }

    #[test]
    fn test_same_over_number_in_next_innings_is_a_new_over() {
        let mut deliveries: Vec<Delivery> = (0..6).map(|_| ball(19, GAIKWAD, BOULT)).collect();
        deliveries.extend((0..6).map(|_| ball(19, SAMSON, CHAHAL).with_innings(2)));

        let table = score(&deliveries);

        assert_eq!(table[BOULT].maidens, 1);
        assert_eq!(table[CHAHAL].maidens, 1);
    }

    #[test]
    fn test_maiden_and_wickets_stack() {
        let deliveries = vec![
            ball(0, GAIKWAD, BOULT),
            ball(0, GAIKWAD, BOULT).with_wicket(WicketKind::Bowled),
            ball(0, CONWAY, BOULT),
            ball(0, CONWAY, BOULT),
            ball(0, CONWAY, BOULT),
            ball(0, CONWAY, BOULT),
            ball(1, CONWAY, CHAHAL).with_runs(4),
        ];

        let table = score(&deliveries);

        assert_eq!(table[BOULT].maidens, 1);
        assert_eq!(table[BOULT].points, 33 + 12);
    }

    #[test]
    fn test_duck_penalty_applied_once() {
        let mut deliveries = vec![ball(0, CONWAY, BOULT).with_wicket(WicketKind::Bowled)];
        for over in 1..4 {
            deliveries.extend((0..6).map(|_| ball(over, GAIKWAD, CHAHAL).with_runs(1)));
        }

        let table = score(&deliveries);

        assert!(table[CONWAY].out);
        assert_eq!(table[CONWAY].runs, 0);
        assert_eq!(table[CONWAY].points, -2);
    }

    #[test]
    fn test_duck_penalty_not_repeated_on_second_dismissal() {
        let deliveries = vec![
            ball(0, CONWAY, BOULT).with_wicket(WicketKind::Bowled),
            ball(0, CONWAY, BOULT).with_wicket(WicketKind::Bowled),
        ];

        let table = score(&deliveries);

        assert_eq!(table[CONWAY].points, -2);
    }

    #[test]
    fn test_duck_penalty_applies_to_batting_roles_only() {
        let deliveries = vec![
            ball(0, DHONI, CHAHAL).with_wicket(WicketKind::Bowled),
            ball(0, JADEJA, CHAHAL).with_wicket(WicketKind::Bowled),
            ball(0, BOULT, CHAHAL).with_wicket(WicketKind::Bowled),
        ];

        let table = score(&deliveries);

        assert_eq!(table[DHONI].points, -2);
        assert_eq!(table[JADEJA].points, -2);
        assert_eq!(table[BOULT].points, 0);
        assert!(table[BOULT].out);
    }

    #[test]
    fn test_no_duck_when_runs_scored_on_dismissal_ball() {
        let deliveries = vec![
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, CONWAY, BOULT)
                .with_runs(1)
                .with_wicket(WicketKind::RunOut),
        ];

        let table = score(&deliveries);

        assert!(table[CONWAY].out);
        assert_eq!(table[CONWAY].points, 1);
    }

    #[test]
    fn test_unknown_player_tracked_without_role() {
        let deliveries = vec![
            ball(0, GAIKWAD, BOULT).with_runs(1),
            ball(0, "Mystery Man", BOULT).with_wicket(WicketKind::Bowled),
        ];

        let table = score(&deliveries);

        let mystery = &table["Mystery Man"];
        assert_eq!(mystery.role, None);
        assert!(mystery.out);
        assert_eq!(mystery.points, 0);
        assert_eq!(table[BOULT].points, 33);
    }

    #[test]
    fn test_run_milestone_applied_after_pass() {
        let deliveries: Vec<Delivery> = (0..9)
            .map(|over| ball(over, GAIKWAD, BOULT).with_runs(6))
            .collect();

        let table = score(&deliveries);

        assert_eq!(table[GAIKWAD].runs, 54);
        assert_eq!(table[GAIKWAD].points, 54 + 9 * 2 + 8);
    }

    #[test]
    fn test_century_earns_only_top_tier() {
        let deliveries: Vec<Delivery> = (0..25)
            .map(|over| ball(over, GAIKWAD, BOULT).with_runs(4))
            .collect();

        let table = score(&deliveries);

        assert_eq!(table[GAIKWAD].runs, 100);
        assert_eq!(table[GAIKWAD].points, 100 + 25 + 16);
    }

    #[test]
    fn test_five_wicket_haul() {
        let mut deliveries = vec![ball(0, GAIKWAD, BOULT).with_runs(1)];
        for batter in [CONWAY, DHONI, JADEJA, SAMSON, CHAHAL] {
            deliveries.push(
                ball(0, batter, BOULT)
                    .with_runs(0)
                    .with_wicket(WicketKind::Caught)
                    .with_fielder(GAIKWAD),
            );
        }

        let table = score(&deliveries);

        assert_eq!(table[BOULT].wickets, 5);
        assert_eq!(table[BOULT].points, 5 * 25 + 16);
        assert_eq!(table[GAIKWAD].catches, 5);
        assert_eq!(table[GAIKWAD].points, 1 + 5 * 8);
    }

    #[test]
    fn test_milestone_bonus_tiers() {
        let rules = ScoringRules::default();

        assert_eq!(rules.milestone_bonus(0, 0), 0);
        assert_eq!(rules.milestone_bonus(29, 2), 0);
        assert_eq!(rules.milestone_bonus(30, 0), 4);
        assert_eq!(rules.milestone_bonus(49, 3), 8);
        assert_eq!(rules.milestone_bonus(50, 4), 16);
        assert_eq!(rules.milestone_bonus(99, 0), 8);
        assert_eq!(rules.milestone_bonus(100, 5), 32);
        assert_eq!(rules.milestone_bonus(180, 10), 32);
    }

    #[test]
    fn test_milestone_bonus_is_a_pure_function_of_totals() {
        let rules = ScoringRules::default();
        let first = rules.milestone_bonus(64, 4);
        let second = rules.milestone_bonus(64, 4);
        assert_eq!(first, second);
        assert_eq!(first, 16);
    }

    #[test]
    fn test_custom_rules_are_honoured() {
        let rules = ScoringRules {
            maiden: 20,
            ..ScoringRules::default()
        };
        let deliveries: Vec<Delivery> = (0..6).map(|_| ball(0, GAIKWAD, BOULT)).collect();

        let table = compute_match_stats_with(&rules, &deliveries, &create_test_roster()).unwrap();

        assert_eq!(table[BOULT].points, 20);
    }

    #[test]
    fn test_malformed_delivery_is_rejected() {
        let deliveries = vec![ball(0, GAIKWAD, BOULT), ball(0, GAIKWAD, "  ")];

        let result = compute_match_stats(&deliveries, &create_test_roster());

        match result {
            Err(FantasyError::MalformedDelivery { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("bowler"));
            }
            other => panic!("Expected MalformedDelivery, got {:?}", other),
        }
    }

    #[test]
    fn test_independent_runs_do_not_share_state() {
        let deliveries: Vec<Delivery> = (0..6).map(|_| ball(0, GAIKWAD, BOULT)).collect();

        let first = score(&deliveries);
        let second = score(&deliveries);

        assert_eq!(first, second);
        assert_eq!(second[BOULT].maidens, 1);
    }
}
