//! Shared result types for checklist use cases.

use raidledger_domain::{GateCompletion, Raid, WeeklyCompletion};
use serde::Serialize;

/// One raid's weekly state for a character: the weekly record plus its
/// gate records in gate order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistEntry {
    pub raid: Raid,
    pub completion: WeeklyCompletion,
    pub gates: Vec<GateCompletion>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use raidledger_domain::{CharacterId, Difficulty, PartyShape, WeeklyCompletion};

    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let raid = Raid::new("Serka", Difficulty::Normal, 1700.0, PartyShape::Eight, 1, 15000)
            .with_gate(1, 5000, 1500);
        let weekly = WeeklyCompletion::new(CharacterId::new(), raid.id, Utc::now());
        let gates = vec![GateCompletion::new(weekly.id, &raid.gates[0])];
        let entry = ChecklistEntry {
            raid,
            completion: weekly,
            gates,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["raid"]["requiredItemLevel"], 1700.0);
        assert_eq!(json["completion"]["earnedGold"], 0);
        assert_eq!(json["gates"][0]["gateNumber"], 1);
    }
}
