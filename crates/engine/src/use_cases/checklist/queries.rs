//! Read-only ledger queries.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use raidledger_domain::{reset_week, CharacterId};
use serde::Serialize;

use crate::infrastructure::ports::{CharacterRepo, ClockPort, CompletionRepo, RaidRepo};

use super::complete_gate::CompleteGate;
use super::error::ChecklistError;

/// Gold a character has banked this week.
///
/// Sibling difficulties of a completed raid-group all carry the group's
/// total, so the sum is taken once per group rather than per record.
pub struct TotalEarnedGold {
    character_repo: Arc<dyn CharacterRepo>,
    raid_repo: Arc<dyn RaidRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    clock: Arc<dyn ClockPort>,
}

impl TotalEarnedGold {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        raid_repo: Arc<dyn RaidRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            raid_repo,
            completion_repo,
            clock,
        }
    }

    pub async fn execute(&self, character_id: CharacterId) -> Result<i32, ChecklistError> {
        self.character_repo
            .get(character_id)
            .await?
            .ok_or(ChecklistError::CharacterNotFound)?;

        let week_start = reset_week::week_start(self.clock.now());
        let gold_by_group =
            completed_gold_by_group(&*self.raid_repo, &*self.completion_repo, character_id, week_start)
                .await?;
        Ok(gold_by_group.values().sum())
    }
}

/// Has this character used up a raid-group this week (any difficulty)?
pub struct IsRaidGroupCompleted {
    raid_repo: Arc<dyn RaidRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    clock: Arc<dyn ClockPort>,
}

impl IsRaidGroupCompleted {
    pub fn new(
        raid_repo: Arc<dyn RaidRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            raid_repo,
            completion_repo,
            clock,
        }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
        raid_group: &str,
    ) -> Result<bool, ChecklistError> {
        let week_start = reset_week::week_start(self.clock.now());
        for raid in self.raid_repo.list_by_group(raid_group).await? {
            if let Some(weekly) = self
                .completion_repo
                .find_weekly(character_id, raid.id, week_start)
                .await?
            {
                if weekly.completed {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Snapshot of a character's week.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekProgress {
    pub week_start: DateTime<Utc>,
    pub next_reset: DateTime<Utc>,
    pub countdown: String,
    pub total_earned_gold: i32,
    pub completed_groups: Vec<String>,
    /// Gold-earning group slots still open under the weekly cap.
    pub earnable_groups_left: usize,
}

pub struct CurrentWeekProgress {
    character_repo: Arc<dyn CharacterRepo>,
    raid_repo: Arc<dyn RaidRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CurrentWeekProgress {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        raid_repo: Arc<dyn RaidRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            raid_repo,
            completion_repo,
            clock,
        }
    }

    pub async fn execute(&self, character_id: CharacterId) -> Result<WeekProgress, ChecklistError> {
        self.character_repo
            .get(character_id)
            .await?
            .ok_or(ChecklistError::CharacterNotFound)?;

        let now = self.clock.now();
        let week_start = reset_week::week_start(now);
        let gold_by_group =
            completed_gold_by_group(&*self.raid_repo, &*self.completion_repo, character_id, week_start)
                .await?;

        let total_earned_gold = gold_by_group.values().sum();
        let completed_groups: Vec<String> = gold_by_group.into_keys().collect();
        Ok(WeekProgress {
            week_start,
            next_reset: reset_week::next_reset(now),
            countdown: reset_week::until_reset(now).to_string(),
            total_earned_gold,
            earnable_groups_left: CompleteGate::GOLD_EARNING_CAP
                .saturating_sub(completed_groups.len()),
            completed_groups,
        })
    }
}

/// Per raid-group gold for a character's completed groups this week. All
/// sibling difficulties of a completed group carry the same total; the map
/// holds it once per group.
async fn completed_gold_by_group(
    raid_repo: &dyn RaidRepo,
    completion_repo: &dyn CompletionRepo,
    character_id: CharacterId,
    week_start: DateTime<Utc>,
) -> Result<std::collections::BTreeMap<String, i32>, ChecklistError> {
    let group_by_raid: HashMap<_, _> = raid_repo
        .list()
        .await?
        .into_iter()
        .map(|r| (r.id, r.raid_group))
        .collect();

    let mut gold = std::collections::BTreeMap::new();
    let weeklies = completion_repo
        .list_weekly_for_character(character_id, week_start)
        .await?;
    for weekly in weeklies.iter().filter(|w| w.completed) {
        let Some(group) = group_by_raid.get(&weekly.raid_id) else {
            continue;
        };
        gold.entry(group.clone()).or_insert(weekly.earned_gold);
    }
    Ok(gold)
}
