//! Default raid catalog seeding.
//!
//! Populates an empty catalog with the current gold-earning raid rotation.
//! Gate rewards and extra-reward costs mirror the live values; seeding is
//! skipped when any catalog entry already exists.

use raidledger_domain::{Difficulty, PartyShape, Raid};

use crate::infrastructure::ports::{RaidRepo, RepoError};

/// Seed the default catalog. Returns how many raids were inserted.
pub async fn seed_default_catalog(raids: &dyn RaidRepo) -> Result<usize, RepoError> {
    if raids.count().await? > 0 {
        return Ok(0);
    }

    let catalog = default_catalog();
    let inserted = catalog.len();
    for raid in catalog {
        raids.save(&raid).await?;
    }
    tracing::info!(raids = inserted, "seeded default raid catalog");
    Ok(inserted)
}

fn default_catalog() -> Vec<Raid> {
    vec![
        Raid::new("Kazeros Act 2", Difficulty::Normal, 1670.0, PartyShape::Eight, 1, 16500)
            .with_gate(1, 5500, 1820)
            .with_gate(2, 11000, 3720),
        Raid::new("Kazeros Act 2", Difficulty::Hard, 1690.0, PartyShape::Eight, 2, 23000)
            .with_gate(1, 7500, 2400)
            .with_gate(2, 15500, 5100),
        Raid::new("Kazeros Act 3", Difficulty::Normal, 1680.0, PartyShape::Eight, 3, 21000)
            .with_gate(1, 4000, 1300)
            .with_gate(2, 7000, 2350)
            .with_gate(3, 10000, 3360),
        Raid::new("Kazeros Act 3", Difficulty::Hard, 1700.0, PartyShape::Eight, 4, 27000)
            .with_gate(1, 5000, 1650)
            .with_gate(2, 8000, 2640)
            .with_gate(3, 14000, 4060),
        Raid::new("Kazeros Act 4", Difficulty::Normal, 1700.0, PartyShape::Eight, 5, 33000)
            .with_gate(1, 12500, 4000)
            .with_gate(2, 20500, 6560),
        Raid::new("Kazeros Act 4", Difficulty::Hard, 1720.0, PartyShape::Eight, 6, 42000)
            .with_gate(1, 15000, 4800)
            .with_gate(2, 27000, 8640),
        Raid::new("Kazeros Finale", Difficulty::Normal, 1710.0, PartyShape::Eight, 7, 40000)
            .with_gate(1, 14000, 4480)
            .with_gate(2, 26000, 8320),
        Raid::new("Kazeros Finale", Difficulty::Hard, 1730.0, PartyShape::Eight, 8, 52000)
            .with_gate(1, 17000, 5440)
            .with_gate(2, 35000, 11200),
        Raid::new("Serka", Difficulty::Normal, 1710.0, PartyShape::Eight, 9, 35000)
            .with_gate(1, 14000, 4480)
            .with_gate(2, 21000, 6720),
        Raid::new("Serka", Difficulty::Hard, 1730.0, PartyShape::Eight, 10, 44000)
            .with_gate(1, 17500, 5600)
            .with_gate(2, 26500, 8480),
        Raid::new("Serka", Difficulty::Nightmare, 1750.0, PartyShape::Eight, 11, 54000)
            .with_gate(1, 21000, 6720)
            .with_gate(2, 33000, 10560),
    ]
}
