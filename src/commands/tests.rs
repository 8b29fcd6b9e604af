//! Integration tests for command handlers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::{
        commands::{add_team::submit_team, process_result::process_match, team_result::team_results},
        cricket::{Delivery, Player, Roster, WicketKind},
        fantasy::Team,
        storage::FantasyDatabase,
        Role,
    };
    use rust_decimal_macros::dec;

    fn test_players() -> Vec<Player> {
        let mut players = vec![
            Player::new("Keeper 1", Role::WicketKeeper),
            Player::new("All Rounder 1", Role::AllRounder),
            Player::new("All Rounder 2", Role::AllRounder),
        ];
        for i in 1..=6 {
            players.push(Player::new(format!("Batter {}", i), Role::Batter));
            players.push(Player::new(format!("Bowler {}", i), Role::Bowler));
        }
        players
    }

    fn team(name: &str, captain: &str, vice_captain: &str) -> Team {
        let players = [
            "Keeper 1",
            "Batter 1",
            "Batter 2",
            "Batter 3",
            "Batter 4",
            "All Rounder 1",
            "All Rounder 2",
            "Bowler 1",
            "Bowler 2",
            "Bowler 3",
            "Bowler 4",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        Team::new(name, players, captain, vice_captain)
    }

    /// A four then a catch, both in the first over.
    fn test_deliveries() -> Vec<Delivery> {
        vec![
            Delivery::new(1, "Batter 1", "Bowler 1", "Batter 2").with_runs(4),
            Delivery::new(1, "Batter 1", "Bowler 1", "Batter 2")
                .with_wicket(WicketKind::Caught)
                .with_fielder("Keeper 1"),
        ]
    }

    fn create_test_db() -> FantasyDatabase {
        FantasyDatabase::new_in_memory().unwrap()
    }

    #[test]
    fn test_resolve_match_name_from_option() {
        let result = resolve_match_name(Some(MatchName::new("CSKvRR")));
        assert_eq!(result.unwrap().as_str(), "CSKvRR");
    }

    #[test]
    fn test_resolve_match_name_from_env() {
        // Single test for every env-dependent case so they never interleave
        std::env::remove_var(MATCH_NAME_ENV_VAR);
        match resolve_match_name(None).unwrap_err() {
            FantasyError::MissingMatchName { env_var } => {
                assert_eq!(env_var, MATCH_NAME_ENV_VAR);
            }
            other => panic!("Expected MissingMatchName error, got {:?}", other),
        }

        std::env::set_var(MATCH_NAME_ENV_VAR, "MIvKKR");
        assert_eq!(resolve_match_name(None).unwrap().as_str(), "MIvKKR");

        // Option should take precedence
        let result = resolve_match_name(Some(MatchName::new("CSKvRR")));
        assert_eq!(result.unwrap().as_str(), "CSKvRR");

        // Blank values count as unset
        std::env::set_var(MATCH_NAME_ENV_VAR, "   ");
        assert!(resolve_match_name(None).is_err());

        // Clean up
        std::env::remove_var(MATCH_NAME_ENV_VAR);
    }

    #[test]
    fn test_submit_team_stores_valid_team() {
        let mut db = create_test_db();
        let roster = Roster::new(&test_players());

        let id = submit_team(&mut db, &roster, &team("Chargers", "Bowler 1", "Keeper 1")).unwrap();

        let stored = db.get_team(id).unwrap().unwrap();
        assert_eq!(stored.team_name, "Chargers");
        assert_eq!(stored.players.len(), 11);
        assert!(stored.total_points.is_none());
    }

    #[test]
    fn test_submit_team_rejects_without_writing() {
        let mut db = create_test_db();
        let roster = Roster::new(&test_players());

        let result = submit_team(&mut db, &roster, &team("Chargers", "Bowler 1", "Bowler 1"));
        assert!(matches!(result, Err(FantasyError::InvalidTeam { .. })));
        assert!(db.list_teams().unwrap().is_empty());
    }

    #[test]
    fn test_submit_team_duplicate_name() {
        let mut db = create_test_db();
        let roster = Roster::new(&test_players());

        submit_team(&mut db, &roster, &team("Chargers", "Bowler 1", "Keeper 1")).unwrap();
        let result = submit_team(&mut db, &roster, &team("Chargers", "Batter 1", "Keeper 1"));
        assert!(result.unwrap_err().is_validation());
        assert_eq!(db.list_teams().unwrap().len(), 1);
    }

    #[test]
    fn test_process_match_stores_stats() {
        let mut db = create_test_db();
        let match_name = MatchName::new("CSKvRR");

        let outcome =
            process_match(&mut db, &match_name, &test_deliveries(), &test_players(), false).unwrap();
        assert!(outcome.stored);

        let stats = &outcome.result.stats;
        assert_eq!(stats["Batter 1"].points, 5);
        assert!(stats["Batter 1"].out);
        assert_eq!(stats["Bowler 1"].points, 25);
        assert_eq!(stats["Keeper 1"].catches, 1);
        assert_eq!(stats["Batter 2"].points, 0);

        let stored = db.find_match_result(&match_name).unwrap().unwrap();
        assert_eq!(stored.stats, outcome.result.stats);
    }

    #[test]
    fn test_process_match_keeps_existing_without_force() {
        let mut db = create_test_db();
        let match_name = MatchName::new("CSKvRR");
        let players = test_players();

        process_match(&mut db, &match_name, &test_deliveries(), &players, false).unwrap();

        let replay = vec![Delivery::new(1, "Batter 3", "Bowler 2", "Batter 4").with_runs(6)];
        let outcome = process_match(&mut db, &match_name, &replay, &players, false).unwrap();
        assert!(!outcome.stored);
        let stored = db.find_match_result(&match_name).unwrap().unwrap();
        assert!(stored.stats.contains_key("Batter 1"));
        assert!(!stored.stats.contains_key("Batter 3"));

        let outcome = process_match(&mut db, &match_name, &replay, &players, true).unwrap();
        assert!(outcome.stored);
        let stored = db.find_match_result(&match_name).unwrap().unwrap();
        assert!(stored.stats.contains_key("Batter 3"));
        assert!(!stored.stats.contains_key("Batter 1"));
    }

    #[test]
    fn test_process_match_malformed_stores_nothing() {
        let mut db = create_test_db();
        let match_name = MatchName::new("CSKvRR");
        let deliveries = vec![Delivery::new(1, "", "Bowler 1", "Batter 2")];

        let result = process_match(&mut db, &match_name, &deliveries, &test_players(), false);
        assert!(matches!(
            result,
            Err(FantasyError::MalformedDelivery { index: 0, .. })
        ));
        assert!(db.find_match_result(&match_name).unwrap().is_none());
    }

    #[test]
    fn test_team_results_full_pipeline() {
        let mut db = create_test_db();
        let roster = Roster::new(&test_players());
        let match_name = MatchName::new("CSKvRR");

        submit_team(&mut db, &roster, &team("Alpha", "Bowler 1", "Keeper 1")).unwrap();
        submit_team(&mut db, &roster, &team("Bravo", "Batter 1", "Bowler 1")).unwrap();
        submit_team(&mut db, &roster, &team("Charlie", "Bowler 1", "Keeper 1")).unwrap();
        process_match(&mut db, &match_name, &test_deliveries(), &test_players(), false).unwrap();

        let board = team_results(&mut db, &match_name).unwrap();

        // Alpha: 25*2 + 8*1.5 + 5, Bravo: 5*2 + 25*1.5 + 8
        assert_eq!(board.top_score(), Some(dec!(67)));
        let winners: Vec<&str> = board.winners.iter().map(|t| t.team_name.as_str()).collect();
        assert_eq!(winners, vec!["Alpha", "Charlie"]);
        assert_eq!(board.sorted_teams.len(), 3);
        assert_eq!(board.sorted_teams[2].team_name, "Bravo");
        assert_eq!(board.sorted_teams[2].total_points, dec!(55.5));

        let bravo = db.find_team_by_name("Bravo").unwrap().unwrap();
        assert_eq!(bravo.total_points, Some(dec!(55.5)));
        let points = bravo.player_points.unwrap();
        assert_eq!(points.len(), 11);
        assert!(points
            .iter()
            .any(|p| p.player_name == "Bowler 1" && p.points == dec!(37.5)));
    }

    #[test]
    fn test_team_results_missing_match() {
        let mut db = create_test_db();
        let match_name = MatchName::new("NoSuchMatch");

        match team_results(&mut db, &match_name).unwrap_err() {
            FantasyError::MatchResultNotFound { match_name } => {
                assert_eq!(match_name, "NoSuchMatch");
            }
            other => panic!("Expected MatchResultNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_team_results_without_teams() {
        let mut db = create_test_db();
        let match_name = MatchName::new("CSKvRR");
        process_match(&mut db, &match_name, &test_deliveries(), &test_players(), false).unwrap();

        let result = team_results(&mut db, &match_name);
        assert!(matches!(result, Err(FantasyError::NoTeams)));
    }
}
