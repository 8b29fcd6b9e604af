//! Team and match result queries

use super::{models::*, schema::FantasyDatabase};
use crate::cli::types::{MatchName, TeamId};
use crate::cricket::types::{MatchStats, PlayerMatchStats};
use crate::error::{FantasyError, Result};
use crate::fantasy::Team;
use rusqlite::{params, types::Type, ErrorCode, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Decimal columns are stored as text so totals never pass through floats.
fn decimal_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Decimal>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        Decimal::from_str(&s)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// Team row without its members
struct TeamRow {
    id: TeamId,
    team_name: String,
    captain: String,
    vice_captain: String,
    total_points: Option<Decimal>,
    created_at: u64,
    updated_at: u64,
}

const TEAM_COLUMNS: &str =
    "team_id, team_name, captain, vice_captain, total_points, created_at, updated_at";

impl FantasyDatabase {
    /// Store a validated team submission and return its new ID
    pub fn insert_team(&mut self, team: &Team) -> Result<TeamId> {
        let now = now_secs();
        let tx = self.conn.transaction()?;

        let inserted = tx.execute(
            "INSERT INTO teams (team_name, captain, vice_captain, total_points, created_at, updated_at)
             VALUES (?, ?, ?, NULL, ?, ?)",
            params![team.team_name, team.captain, team.vice_captain, now, now],
        );
        if let Err(e) = inserted {
            if is_unique_violation(&e) {
                return Err(FantasyError::invalid_team(format!(
                    "Team name {} is already taken",
                    team.team_name
                )));
            }
            return Err(e.into());
        }
        let team_id = TeamId::new(tx.last_insert_rowid());

        {
            let mut stmt = tx.prepare(
                "INSERT INTO team_players (team_id, slot, player_name, points)
                 VALUES (?, ?, ?, NULL)",
            )?;
            for (slot, player) in team.players.iter().enumerate() {
                stmt.execute(params![team_id.as_i64(), slot as i64, player])?;
            }
        }

        tx.commit()?;
        info!(team = %team.team_name, id = %team_id, "stored team");
        Ok(team_id)
    }

    /// Get one team by ID
    pub fn get_team(&self, team_id: TeamId) -> Result<Option<TeamRecord>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM teams WHERE team_id = ?", TEAM_COLUMNS),
                params![team_id.as_i64()],
                Self::row_to_team,
            )
            .optional()?;

        row.map(|r| self.with_players(r)).transpose()
    }

    /// Get one team by name
    pub fn find_team_by_name(&self, team_name: &str) -> Result<Option<TeamRecord>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM teams WHERE team_name = ?", TEAM_COLUMNS),
                params![team_name],
                Self::row_to_team,
            )
            .optional()?;

        row.map(|r| self.with_players(r)).transpose()
    }

    /// All stored teams, oldest first
    pub fn list_teams(&self) -> Result<Vec<TeamRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM teams ORDER BY team_id",
            TEAM_COLUMNS
        ))?;

        let rows = stmt.query_map([], Self::row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(self.with_players(row?)?);
        }
        Ok(teams)
    }

    /// Write per-player points and totals back onto the stored teams.
    ///
    /// All teams are updated in one transaction: if any team is missing
    /// nothing is written. Re-running with the same scores is a no-op.
    pub fn update_team_scores(&mut self, scored: &[ScoredTeam]) -> Result<usize> {
        let now = now_secs();
        let tx = self.conn.transaction()?;

        {
            let mut team_stmt = tx.prepare(
                "UPDATE teams SET total_points = ?, updated_at = ? WHERE team_id = ?",
            )?;
            let mut player_stmt = tx.prepare(
                "UPDATE team_players SET points = ? WHERE team_id = ? AND player_name = ?",
            )?;

            for team in scored {
                let rows = team_stmt.execute(params![
                    team.total_points.to_string(),
                    now,
                    team.id.as_i64()
                ])?;
                if rows == 0 {
                    return Err(FantasyError::TeamNotFound {
                        name: team.team_name.clone(),
                    });
                }

                for player in &team.player_points {
                    player_stmt.execute(params![
                        player.points.to_string(),
                        team.id.as_i64(),
                        player.player_name
                    ])?;
                }
            }
        }

        tx.commit()?;
        debug!(teams = scored.len(), "updated team scores");
        Ok(scored.len())
    }

    /// Store a match result.
    ///
    /// Returns `false` without touching anything if a result for the match
    /// already exists and `force` is not set; with `force` the old result is
    /// replaced.
    pub fn upsert_match_result(&mut self, result: &MatchResult, force: bool) -> Result<bool> {
        let now = now_secs();
        let tx = self.conn.transaction()?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM match_results WHERE match_name = ?)",
            params![result.match_name.as_str()],
            |row| row.get(0),
        )?;

        if exists {
            if !force {
                return Ok(false);
            }
            tx.execute(
                "DELETE FROM match_results WHERE match_name = ?",
                params![result.match_name.as_str()],
            )?;
        }

        tx.execute(
            "INSERT INTO match_results (match_name, created_at) VALUES (?, ?)",
            params![result.match_name.as_str(), now],
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO player_match_stats
                 (match_name, player_name, role, runs, wickets, maidens, catches, out, points)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for (player, stats) in &result.stats {
                stmt.execute(params![
                    result.match_name.as_str(),
                    player,
                    stats.role.map(|r| r.to_string()),
                    stats.runs,
                    stats.wickets,
                    stats.maidens,
                    stats.catches,
                    stats.out,
                    stats.points
                ])?;
            }
        }

        tx.commit()?;
        info!(
            match_name = %result.match_name,
            players = result.stats.len(),
            replaced = exists,
            "stored match result"
        );
        Ok(true)
    }

    /// Get the stored result for a match
    pub fn find_match_result(&self, match_name: &MatchName) -> Result<Option<MatchResult>> {
        let created_at: Option<u64> = self
            .conn
            .query_row(
                "SELECT created_at FROM match_results WHERE match_name = ?",
                params![match_name.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(created_at) = created_at else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT player_name, role, runs, wickets, maidens, catches, out, points
             FROM player_match_stats
             WHERE match_name = ?
             ORDER BY player_name",
        )?;
        let rows = stmt.query_map(params![match_name.as_str()], |row| {
            let role: Option<String> = row.get(1)?;
            Ok((
                row.get::<_, String>(0)?,
                PlayerMatchStats {
                    role: role.and_then(|r| r.parse().ok()),
                    runs: row.get(2)?,
                    wickets: row.get(3)?,
                    maidens: row.get(4)?,
                    catches: row.get(5)?,
                    out: row.get(6)?,
                    points: row.get(7)?,
                },
            ))
        })?;

        let mut stats = MatchStats::new();
        for row in rows {
            let (player, player_stats) = row?;
            stats.insert(player, player_stats);
        }

        Ok(Some(MatchResult {
            match_name: match_name.clone(),
            stats,
            created_at,
        }))
    }

    /// Clear all data from the database (useful for starting a new season)
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "DELETE FROM team_players;
             DELETE FROM teams;
             DELETE FROM player_match_stats;
             DELETE FROM match_results;",
        )?;
        Ok(())
    }

    fn row_to_team(row: &Row) -> rusqlite::Result<TeamRow> {
        Ok(TeamRow {
            id: TeamId::new(row.get(0)?),
            team_name: row.get(1)?,
            captain: row.get(2)?,
            vice_captain: row.get(3)?,
            total_points: decimal_column(row, 4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    /// Attach members (and their points, once every member is scored)
    fn with_players(&self, team: TeamRow) -> Result<TeamRecord> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, points FROM team_players WHERE team_id = ? ORDER BY slot",
        )?;
        let rows = stmt.query_map(params![team.id.as_i64()], |row| {
            Ok((row.get::<_, String>(0)?, decimal_column(row, 1)?))
        })?;

        let mut players = Vec::new();
        let mut points = Vec::new();
        for row in rows {
            let (name, pts) = row?;
            if let Some(pts) = pts {
                points.push(PlayerPoints {
                    player_name: name.clone(),
                    points: pts,
                });
            }
            players.push(name);
        }

        let player_points = (!players.is_empty() && points.len() == players.len()).then_some(points);

        Ok(TeamRecord {
            id: team.id,
            team_name: team.team_name,
            players,
            captain: team.captain,
            vice_captain: team.vice_captain,
            player_points,
            total_points: team.total_points,
            created_at: team.created_at,
            updated_at: team.updated_at,
        })
    }
}
