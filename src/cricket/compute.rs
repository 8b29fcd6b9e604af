//! Fantasy points computation from ball-by-ball match data.
//!
//! [`compute_match_stats`] walks the deliveries once, in order, accumulating
//! runs, wickets, maidens and catches per player and converting each event to
//! fantasy points as it goes. Milestone bonuses are applied once at the end.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::cricket::types::{Delivery, MatchStats, PlayerMatchStats, Roster, WicketKind};
use crate::error::{FantasyError, Result};

#[cfg(test)]
mod tests;

/// Point values for every scoring event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRules {
    /// Points per run off the bat.
    pub run: i64,
    /// Extra points for a four.
    pub boundary_bonus: i64,
    /// Extra points for a six.
    pub six_bonus: i64,
    pub wicket: i64,
    /// Extra points when the wicket is bowled or lbw.
    pub unassisted_wicket_bonus: i64,
    pub maiden: i64,
    pub catch: i64,
    /// Deducted once from a batting player dismissed without scoring.
    pub duck_penalty: i64,
    /// `(minimum runs, bonus)`, highest tier first.
    pub run_milestones: Vec<(u32, i64)>,
    /// `(minimum wickets, bonus)`, highest tier first.
    pub wicket_milestones: Vec<(u32, i64)>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            run: 1,
            boundary_bonus: 1,
            six_bonus: 2,
            wicket: 25,
            unassisted_wicket_bonus: 8,
            maiden: 12,
            catch: 8,
            duck_penalty: 2,
            run_milestones: vec![(100, 16), (50, 8), (30, 4)],
            wicket_milestones: vec![(5, 16), (4, 8), (3, 4)],
        }
    }
}

impl ScoringRules {
    /// Bonus earned by final runs and wickets. Tiers are exclusive: only the
    /// highest reached tier of each kind counts.
    pub fn milestone_bonus(&self, runs: u32, wickets: u32) -> i64 {
        let tier = |tiers: &[(u32, i64)], value: u32| {
            tiers
                .iter()
                .find(|(threshold, _)| value >= *threshold)
                .map(|(_, bonus)| *bonus)
                .unwrap_or(0)
        };
        tier(&self.run_milestones, runs) + tier(&self.wicket_milestones, wickets)
    }
}

/// Over identity: the same over number recurs in every innings.
type OverKey = (u8, u32);

/// Running state for one scoring pass. Never shared between matches.
struct ScoringPass<'a> {
    rules: &'a ScoringRules,
    roster: &'a Roster,
    table: MatchStats,
    current_over: Option<OverKey>,
    /// Runs off the bat conceded by each bowler in the current over
    over_runs: BTreeMap<String, u32>,
    /// Players already charged the duck penalty
    ducked: BTreeSet<String>,
}

impl<'a> ScoringPass<'a> {
    fn new(rules: &'a ScoringRules, roster: &'a Roster) -> Self {
        Self {
            rules,
            roster,
            table: MatchStats::new(),
            current_over: None,
            over_runs: BTreeMap::new(),
            ducked: BTreeSet::new(),
        }
    }

    /// Stats entry for a player, created zeroed on first appearance.
    fn stats(&mut self, name: &str) -> &mut PlayerMatchStats {
        let roster = self.roster;
        self.table.entry(name.to_string()).or_insert_with(|| {
            if !roster.contains(name) {
                debug!(player = name, "player not in roster, tracking without a role");
            }
            PlayerMatchStats::new(roster.role_of(name))
        })
    }

    fn close_over(&mut self) {
        let maiden = self.rules.maiden;
        let bowlers: Vec<String> = self
            .over_runs
            .iter()
            .filter(|(_, conceded)| **conceded == 0)
            .map(|(bowler, _)| bowler.clone())
            .collect();
        for bowler in bowlers {
            debug!(bowler = %bowler, over = ?self.current_over, "maiden over");
            let stats = self.stats(&bowler);
            stats.maidens += 1;
            stats.points += maiden;
        }
        self.over_runs.clear();
    }

    fn apply(&mut self, index: usize, delivery: &Delivery) -> Result<()> {
        if delivery.batter.trim().is_empty() {
            return Err(FantasyError::MalformedDelivery {
                index,
                reason: "missing batter".to_string(),
            });
        }
        if delivery.bowler.trim().is_empty() {
            return Err(FantasyError::MalformedDelivery {
                index,
                reason: "missing bowler".to_string(),
            });
        }

        for name in delivery.participants() {
            self.stats(name);
        }

        let rules = self.rules;
        let runs = delivery.batter_runs;
        if runs > 0 {
            let batter = self.stats(&delivery.batter);
            batter.runs += runs;
            batter.points += i64::from(runs) * rules.run;
            match runs {
                4 => batter.points += rules.boundary_bonus,
                6 => batter.points += rules.six_bonus,
                _ => {}
            }
        }

        let dismissed = delivery.dismissed();
        if let Some(out) = dismissed {
            self.stats(out).out = true;
        }

        let over = (delivery.innings, delivery.over);
        if self.current_over != Some(over) {
            self.close_over();
            self.current_over = Some(over);
        }
        *self.over_runs.entry(delivery.bowler.clone()).or_insert(0) += runs;

        if delivery.is_wicket {
            let kind = delivery.kind.as_ref();
            if kind.map_or(true, WicketKind::credits_bowler) {
                let bowler = self.stats(&delivery.bowler);
                bowler.wickets += 1;
                bowler.points += rules.wicket;
                if kind.is_some_and(WicketKind::is_unassisted) {
                    bowler.points += rules.unassisted_wicket_bonus;
                }
            }
        }

        if let Some(out) = dismissed {
            self.charge_duck(out);
        }

        match &delivery.kind {
            Some(WicketKind::Caught) => {
                if let Some(fielder) = delivery.fielders.first() {
                    let fielder = self.stats(fielder);
                    fielder.catches += 1;
                    fielder.points += rules.catch;
                }
            }
            Some(WicketKind::CaughtAndBowled) => {
                let bowler = self.stats(&delivery.bowler);
                bowler.catches += 1;
                bowler.points += rules.catch;
            }
            _ => {}
        }

        Ok(())
    }

    /// Duck penalty, at most once per player.
    fn charge_duck(&mut self, name: &str) {
        if self.ducked.contains(name) {
            return;
        }
        let penalty = self.rules.duck_penalty;
        let stats = self.stats(name);
        if stats.runs == 0 && stats.role.is_some_and(|r| r.bats()) {
            stats.points -= penalty;
            self.ducked.insert(name.to_string());
            debug!(player = name, "out for a duck");
        }
    }

    fn finish(mut self) -> MatchStats {
        self.close_over();
        for stats in self.table.values_mut() {
            stats.points += self.rules.milestone_bonus(stats.runs, stats.wickets);
        }
        self.table
    }
}

/// Compute per-player statistics and fantasy points with the default rules.
pub fn compute_match_stats(deliveries: &[Delivery], roster: &Roster) -> Result<MatchStats> {
    compute_match_stats_with(&ScoringRules::default(), deliveries, roster)
}

/// Compute per-player statistics and fantasy points.
///
/// Fails only on a malformed delivery (blank batter or bowler). Players missing
/// from the roster are tracked with no role and never earn role-based
/// adjustments.
pub fn compute_match_stats_with(
    rules: &ScoringRules,
    deliveries: &[Delivery],
    roster: &Roster,
) -> Result<MatchStats> {
    let mut pass = ScoringPass::new(rules, roster);
    for (index, delivery) in deliveries.iter().enumerate() {
        pass.apply(index, delivery)?;
    }
    let table = pass.finish();

    info!(
        deliveries = deliveries.len(),
        players = table.len(),
        "computed match statistics"
    );
    Ok(table)
}
