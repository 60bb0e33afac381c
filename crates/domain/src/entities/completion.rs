//! Weekly ledger records.
//!
//! One `WeeklyCompletion` exists per character x raid x week, with one
//! `GateCompletion` per gate definition. Both are created untouched by
//! checklist generation and mutated only through the ledger use cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::raid::RaidGate;
use crate::ids::{CharacterId, GateCompletionId, RaidGateId, RaidId, WeeklyCompletionId};

/// Per-week completion state of one raid for one character.
///
/// `completed` and `earned_gold` are derived: completed iff any gate is
/// completed, gold as the sum over completed gates. Cross-difficulty
/// propagation can also force them from a sibling difficulty's totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCompletion {
    pub id: WeeklyCompletionId,
    pub character_id: CharacterId,
    pub raid_id: RaidId,
    pub week_start: DateTime<Utc>,
    pub completed: bool,
    pub earned_gold: i32,
}

impl WeeklyCompletion {
    pub fn new(character_id: CharacterId, raid_id: RaidId, week_start: DateTime<Utc>) -> Self {
        Self {
            id: WeeklyCompletionId::new(),
            character_id,
            raid_id,
            week_start,
            completed: false,
            earned_gold: 0,
        }
    }

    /// Re-derive `completed` and `earned_gold` from this record's gates.
    pub fn recompute_from_gates(&mut self, gates: &[GateCompletion]) {
        self.completed = gates.iter().any(|g| g.completed);
        self.earned_gold = gates
            .iter()
            .filter(|g| g.completed)
            .map(|g| g.earned_gold)
            .sum();
    }

    /// Force-complete from a sibling difficulty's total (cross-difficulty
    /// exclusivity: clearing one difficulty uses up the whole raid-group).
    pub fn sync_to(&mut self, earned_gold: i32) {
        self.completed = true;
        self.earned_gold = earned_gold;
    }

    /// Walk the record back to untouched.
    pub fn clear(&mut self) {
        self.completed = false;
        self.earned_gold = 0;
    }
}

/// Per-week completion state of a single gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateCompletion {
    pub id: GateCompletionId,
    pub weekly_completion_id: WeeklyCompletionId,
    pub raid_gate_id: RaidGateId,
    pub gate_number: u8,
    pub completed: bool,
    pub extra_reward: bool,
    pub earned_gold: i32,
}

impl GateCompletion {
    pub fn new(weekly_completion_id: WeeklyCompletionId, gate: &RaidGate) -> Self {
        Self {
            id: GateCompletionId::new(),
            weekly_completion_id,
            raid_gate_id: gate.id,
            gate_number: gate.gate_number,
            completed: false,
            extra_reward: false,
            earned_gold: 0,
        }
    }

    pub fn complete(&mut self, extra_reward: bool, earned_gold: i32) {
        self.completed = true;
        self.extra_reward = extra_reward;
        self.earned_gold = earned_gold;
    }

    /// In-place reset back to incomplete (the delete-and-recreate strategy
    /// was retired in favor of this).
    pub fn reset(&mut self) {
        self.completed = false;
        self.extra_reward = false;
        self.earned_gold = 0;
    }
}

impl RaidGate {
    /// Gold a clear of this gate earns, with the bonus cost deducted when
    /// the extra reward is taken. Clamped at zero: the bonus can consume a
    /// gate's entire payout but never puts the character in the red.
    pub fn earned_gold(&self, extra_reward: bool) -> i32 {
        let gold = if extra_reward {
            self.reward_gold - self.extra_cost
        } else {
            self.reward_gold
        };
        gold.max(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::raid::{Difficulty, PartyShape, Raid};

    use super::*;

    fn gate(reward: i32, extra_cost: i32) -> RaidGate {
        let raid = Raid::new("G", Difficulty::Normal, 0.0, PartyShape::Four, 1, reward)
            .with_gate(1, reward, extra_cost);
        raid.gates[0].clone()
    }

    #[test]
    fn extra_reward_deducts_its_cost() {
        let g = gate(5500, 1820);
        assert_eq!(g.earned_gold(false), 5500);
        assert_eq!(g.earned_gold(true), 3680);
    }

    #[test]
    fn earned_gold_never_goes_negative() {
        let g = gate(1000, 2500);
        assert_eq!(g.earned_gold(true), 0);
    }

    #[test]
    fn weekly_totals_follow_completed_gates() {
        let mut weekly = WeeklyCompletion::new(CharacterId::new(), RaidId::new(), Utc::now());
        let def_a = gate(5500, 1820);
        let def_b = gate(11000, 3720);
        let mut a = GateCompletion::new(weekly.id, &def_a);
        let b = GateCompletion::new(weekly.id, &def_b);

        a.complete(false, def_a.earned_gold(false));
        weekly.recompute_from_gates(&[a.clone(), b.clone()]);
        assert!(weekly.completed);
        assert_eq!(weekly.earned_gold, 5500);

        a.reset();
        weekly.recompute_from_gates(&[a, b]);
        assert!(!weekly.completed);
        assert_eq!(weekly.earned_gold, 0);
    }
}
