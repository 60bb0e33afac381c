//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    locks::GroupLocks,
    memory::{
        InMemoryCharacterRepo, InMemoryCompletionRepo, InMemoryPartyRepo, InMemoryRaidRepo,
    },
    ports::{CharacterRepo, ClockPort, CompletionRepo, PartyRepo, RaidRepo, RandomPort},
};
use crate::use_cases::checklist::{
    CompleteGate, CurrentWeekProgress, GenerateChecklist, IsRaidGroupCompleted, TotalEarnedGold,
    UncompleteGate,
};
use crate::use_cases::party::{
    AvailableCharacters, CancelPartyCompletion, CompleteParty, CompletePartyRaid,
    ListCompletedParties, RecommendAllParties, RecommendParty,
};
use crate::use_cases::reset::WeeklyReset;

/// Main application state.
///
/// Holds the repository ports and all wired use cases.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for the repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub raid: Arc<dyn RaidRepo>,
    pub completion: Arc<dyn CompletionRepo>,
    pub party: Arc<dyn PartyRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub generate_checklist: Arc<GenerateChecklist>,
    pub complete_gate: Arc<CompleteGate>,
    pub uncomplete_gate: Arc<UncompleteGate>,
    pub total_earned_gold: Arc<TotalEarnedGold>,
    pub is_raid_group_completed: Arc<IsRaidGroupCompleted>,
    pub week_progress: Arc<CurrentWeekProgress>,
    pub weekly_reset: Arc<WeeklyReset>,
    pub available_characters: Arc<AvailableCharacters>,
    pub recommend_party: Arc<RecommendParty>,
    pub recommend_all_parties: Arc<RecommendAllParties>,
    pub complete_party: Arc<CompleteParty>,
    pub complete_party_raid: Arc<CompletePartyRaid>,
    pub cancel_party: Arc<CancelPartyCompletion>,
    pub list_completed_parties: Arc<ListCompletedParties>,
}

impl App {
    /// Wire the whole application against the given ports.
    pub fn new(
        repositories: Repositories,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let locks = Arc::new(GroupLocks::new());

        let generate_checklist = Arc::new(GenerateChecklist::new(
            Arc::clone(&repositories.character),
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.completion),
            Arc::clone(&clock),
        ));
        let complete_gate = Arc::new(CompleteGate::new(
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.completion),
            Arc::clone(&clock),
            Arc::clone(&locks),
        ));
        let uncomplete_gate = Arc::new(UncompleteGate::new(
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.completion),
            Arc::clone(&locks),
        ));
        let total_earned_gold = Arc::new(TotalEarnedGold::new(
            Arc::clone(&repositories.character),
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.completion),
            Arc::clone(&clock),
        ));
        let is_raid_group_completed = Arc::new(IsRaidGroupCompleted::new(
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.completion),
            Arc::clone(&clock),
        ));
        let week_progress = Arc::new(CurrentWeekProgress::new(
            Arc::clone(&repositories.character),
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.completion),
            Arc::clone(&clock),
        ));
        let weekly_reset = Arc::new(WeeklyReset::new(
            Arc::clone(&repositories.character),
            Arc::clone(&repositories.completion),
            Arc::clone(&repositories.party),
            Arc::clone(&generate_checklist),
        ));

        let available_characters = Arc::new(AvailableCharacters::new(
            Arc::clone(&repositories.character),
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.completion),
            Arc::clone(&repositories.party),
            Arc::clone(&clock),
        ));
        let recommend_party = Arc::new(RecommendParty::new(
            Arc::clone(&available_characters),
            random,
        ));
        let recommend_all_parties = Arc::new(RecommendAllParties::new(
            Arc::clone(&repositories.raid),
            Arc::clone(&recommend_party),
        ));
        let complete_party = Arc::new(CompleteParty::new(
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.party),
            Arc::clone(&clock),
            Arc::clone(&locks),
        ));
        let complete_party_raid = Arc::new(CompletePartyRaid::new(
            Arc::clone(&repositories.character),
            Arc::clone(&repositories.completion),
            Arc::clone(&clock),
            Arc::clone(&generate_checklist),
            Arc::clone(&complete_gate),
        ));
        let cancel_party = Arc::new(CancelPartyCompletion::new(
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.party),
            Arc::clone(&locks),
        ));
        let list_completed_parties = Arc::new(ListCompletedParties::new(
            Arc::clone(&repositories.character),
            Arc::clone(&repositories.raid),
            Arc::clone(&repositories.party),
            Arc::clone(&clock),
        ));

        Self {
            repositories,
            use_cases: UseCases {
                generate_checklist,
                complete_gate,
                uncomplete_gate,
                total_earned_gold,
                is_raid_group_completed,
                week_progress,
                weekly_reset,
                available_characters,
                recommend_party,
                recommend_all_parties,
                complete_party,
                complete_party_raid,
                cancel_party,
                list_completed_parties,
            },
            clock,
        }
    }

    /// App wired against the in-memory adapters and the real clock.
    pub fn in_memory() -> Self {
        let repositories = Repositories {
            character: Arc::new(InMemoryCharacterRepo::new()),
            raid: Arc::new(InMemoryRaidRepo::new()),
            completion: Arc::new(InMemoryCompletionRepo::new()),
            party: Arc::new(InMemoryPartyRepo::new()),
        };
        Self::new(
            repositories,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }
}
