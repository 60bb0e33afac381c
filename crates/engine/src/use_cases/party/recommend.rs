//! Party recommendation.
//!
//! Pools are shuffled before selection so equally-ranked characters rotate
//! between runs, then filled first-fit per the raid's shape. No party ever
//! holds two characters from the same account, and the greedy 4-man loop
//! blocks an account for the whole run once one of its alts is placed.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use raidledger_domain::{AccountId, Character, PartyShape, RaidId};

use crate::infrastructure::ports::{RaidRepo, RandomPort};

use super::availability::AvailableCharacters;
use super::error::PartyError;
use super::types::RecommendedParty;

pub struct RecommendParty {
    available: Arc<AvailableCharacters>,
    random: Arc<dyn RandomPort>,
}

impl RecommendParty {
    pub fn new(available: Arc<AvailableCharacters>, random: Arc<dyn RandomPort>) -> Self {
        Self { available, random }
    }

    /// Recommend parties for one raid. An 8-player raid yields at most one
    /// full party (or none when a role pool is short); a 4-player raid
    /// yields as many full parties as the pools allow.
    pub async fn execute(&self, raid_id: RaidId) -> Result<Vec<RecommendedParty>, PartyError> {
        let pool = self.available.execute(raid_id).await?;
        let supports = shuffled(&pool.supports, &*self.random);
        let damage = shuffled(&pool.damage, &*self.random);

        let parties = match pool.raid.party_shape {
            PartyShape::Eight => {
                single_party(&supports, &damage, pool.raid.party_shape).into_iter().collect()
            }
            PartyShape::Four => greedy_parties(&supports, &damage, pool.raid.party_shape),
        };
        Ok(parties)
    }
}

/// Recommendations for every raid in the catalog, keyed by display name.
/// Raids without a fillable party are left out.
pub struct RecommendAllParties {
    raid_repo: Arc<dyn RaidRepo>,
    recommend: Arc<RecommendParty>,
}

impl RecommendAllParties {
    pub fn new(raid_repo: Arc<dyn RaidRepo>, recommend: Arc<RecommendParty>) -> Self {
        Self { raid_repo, recommend }
    }

    pub async fn execute(&self) -> Result<BTreeMap<String, Vec<RecommendedParty>>, PartyError> {
        let mut all = BTreeMap::new();
        for raid in self.raid_repo.list().await? {
            let parties = self.recommend.execute(raid.id).await?;
            if !parties.is_empty() {
                all.insert(raid.display_name(), parties);
            }
        }
        Ok(all)
    }
}

fn shuffled(pool: &[Character], random: &dyn RandomPort) -> Vec<Character> {
    let order = random.permutation(pool.len());
    order.iter().filter_map(|&i| pool.get(i).cloned()).collect()
}

/// Fill one party first-fit, skipping characters whose account is already
/// in the party. Returns `None` unless every slot fills.
fn single_party(
    supports: &[Character],
    damage: &[Character],
    shape: PartyShape,
) -> Option<RecommendedParty> {
    fill_party(supports, damage, shape, &mut HashSet::new())
}

/// Form parties until the pools can no longer fill a whole one. The
/// account set is shared across the whole loop: once any character of an
/// account is placed, the account's remaining alts are out for the run.
fn greedy_parties(
    supports: &[Character],
    damage: &[Character],
    shape: PartyShape,
) -> Vec<RecommendedParty> {
    let mut used_accounts = HashSet::new();
    let mut parties = Vec::new();
    while let Some(party) = fill_party(supports, damage, shape, &mut used_accounts) {
        parties.push(party);
    }
    parties
}

fn fill_party(
    supports: &[Character],
    damage: &[Character],
    shape: PartyShape,
    party_accounts: &mut HashSet<AccountId>,
) -> Option<RecommendedParty> {
    let picked_damage = pick(damage, shape.damage_slots(), party_accounts)?;
    let picked_supports = pick(supports, shape.support_slots(), party_accounts)?;
    Some(RecommendedParty {
        supports: picked_supports,
        damage: picked_damage,
    })
}

fn pick(
    pool: &[Character],
    slots: usize,
    party_accounts: &mut HashSet<AccountId>,
) -> Option<Vec<Character>> {
    let mut picked = Vec::with_capacity(slots);
    for candidate in pool {
        if picked.len() == slots {
            break;
        }
        if party_accounts.insert(candidate.account_id) {
            picked.push(candidate.clone());
        }
    }
    (picked.len() == slots).then_some(picked)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use raidledger_domain::{Character, Difficulty, Raid};

    use crate::infrastructure::clock::{FixedClock, IdentityRandom};
    use crate::infrastructure::memory::{
        InMemoryCharacterRepo, InMemoryCompletionRepo, InMemoryPartyRepo, InMemoryRaidRepo,
    };
    use crate::infrastructure::ports::{CharacterRepo, ClockPort, CompletionRepo, PartyRepo};

    use super::*;

    struct Harness {
        characters: Arc<InMemoryCharacterRepo>,
        raids: Arc<InMemoryRaidRepo>,
        recommend: RecommendParty,
        recommend_all: RecommendAllParties,
        now: chrono::DateTime<Utc>,
    }

    fn harness() -> Harness {
        let characters = Arc::new(InMemoryCharacterRepo::new());
        let raids = Arc::new(InMemoryRaidRepo::new());
        let completions = Arc::new(InMemoryCompletionRepo::new());
        let parties = Arc::new(InMemoryPartyRepo::new());
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap();
        let clock = Arc::new(FixedClock(now));

        let available = Arc::new(AvailableCharacters::new(
            Arc::clone(&characters) as Arc<dyn CharacterRepo>,
            Arc::clone(&raids) as Arc<dyn RaidRepo>,
            Arc::clone(&completions) as Arc<dyn CompletionRepo>,
            Arc::clone(&parties) as Arc<dyn PartyRepo>,
            clock as Arc<dyn ClockPort>,
        ));
        let recommend = RecommendParty::new(Arc::clone(&available), Arc::new(IdentityRandom));
        let recommend_all = RecommendAllParties::new(
            Arc::clone(&raids) as Arc<dyn RaidRepo>,
            Arc::new(RecommendParty::new(available, Arc::new(IdentityRandom))),
        );
        Harness {
            characters,
            raids,
            recommend,
            recommend_all,
            now,
        }
    }

    async fn add(h: &Harness, account: AccountId, name: &str, class: &str) -> Character {
        let c = Character::new(account, name, class, 1700.0, h.now);
        h.characters.save(&c).await.unwrap();
        c
    }

    async fn roster(h: &Harness, damage: usize, supports: usize) {
        for i in 0..damage {
            add(h, AccountId::new(), &format!("Dps{i}"), "Berserker").await;
        }
        for i in 0..supports {
            add(h, AccountId::new(), &format!("Sup{i}"), "Bard").await;
        }
    }

    fn eight_raid() -> Raid {
        Raid::new("Serka", Difficulty::Normal, 1600.0, PartyShape::Eight, 1, 15000)
            .with_gate(1, 5000, 1500)
    }

    fn four_raid() -> Raid {
        Raid::new("Cube", Difficulty::Normal, 1600.0, PartyShape::Four, 1, 4000)
            .with_gate(1, 2000, 600)
    }

    #[tokio::test]
    async fn eight_shape_yields_one_full_party() {
        let h = harness();
        let raid = eight_raid();
        h.raids.save(&raid).await.unwrap();
        roster(&h, 7, 3).await;

        let parties = h.recommend.execute(raid.id).await.unwrap();
        assert_eq!(parties.len(), 1);
        assert_eq!(parties[0].damage.len(), 6);
        assert_eq!(parties[0].supports.len(), 2);
    }

    #[tokio::test]
    async fn eight_shape_yields_nothing_when_a_role_is_short() {
        let h = harness();
        let raid = eight_raid();
        h.raids.save(&raid).await.unwrap();
        roster(&h, 10, 1).await;

        let parties = h.recommend.execute(raid.id).await.unwrap();
        assert!(parties.is_empty());
    }

    #[tokio::test]
    async fn a_party_never_doubles_up_an_account() {
        let h = harness();
        let raid = eight_raid();
        h.raids.save(&raid).await.unwrap();

        // One account owns two damage alts; the party must use only one of
        // them, so a seventh independent character is needed to fill up.
        let shared = AccountId::new();
        add(&h, shared, "Main", "Berserker").await;
        add(&h, shared, "Alt", "Sorceress").await;
        for i in 0..5 {
            add(&h, AccountId::new(), &format!("Dps{i}"), "Berserker").await;
        }
        roster(&h, 0, 2).await;

        let parties = h.recommend.execute(raid.id).await.unwrap();
        assert_eq!(parties.len(), 1);
        let accounts: HashSet<AccountId> =
            parties[0].members().map(|c| c.account_id).collect();
        assert_eq!(accounts.len(), 8);
    }

    #[tokio::test]
    async fn four_shape_forms_parties_greedily() {
        let h = harness();
        let raid = four_raid();
        h.raids.save(&raid).await.unwrap();
        // Enough for two full parties and a leftover damage pair.
        roster(&h, 8, 2).await;

        let parties = h.recommend.execute(raid.id).await.unwrap();
        assert_eq!(parties.len(), 2);
        for party in &parties {
            assert_eq!(party.damage.len(), 3);
            assert_eq!(party.supports.len(), 1);
        }
        let all: HashSet<_> = parties.iter().flat_map(|p| p.members().map(|c| c.id)).collect();
        assert_eq!(all.len(), 8);
    }

    #[tokio::test]
    async fn an_account_is_blocked_for_the_run_once_an_alt_is_placed() {
        let h = harness();
        let raid = four_raid();
        h.raids.save(&raid).await.unwrap();

        // One account owns two damage alts. With four independent damage
        // and two supports the pools could fill two parties by character
        // count, but the second party would need the second alt.
        let shared = AccountId::new();
        add(&h, shared, "Main", "Berserker").await;
        add(&h, shared, "Alt", "Sorceress").await;
        roster(&h, 4, 2).await;

        let parties = h.recommend.execute(raid.id).await.unwrap();
        assert_eq!(parties.len(), 1);
        let accounts: Vec<AccountId> = parties
            .iter()
            .flat_map(|p| p.members().map(|c| c.account_id))
            .collect();
        let distinct: HashSet<AccountId> = accounts.iter().copied().collect();
        assert_eq!(accounts.len(), distinct.len());
    }

    #[tokio::test]
    async fn recommend_all_skips_unfillable_raids() {
        let h = harness();
        let fillable = eight_raid();
        let empty = Raid::new("Ghost", Difficulty::Hard, 1800.0, PartyShape::Eight, 2, 1)
            .with_gate(1, 1, 0);
        h.raids.save(&fillable).await.unwrap();
        h.raids.save(&empty).await.unwrap();
        roster(&h, 6, 2).await;

        let all = h.recommend_all.execute().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.contains_key("Serka Normal"));
    }
}
