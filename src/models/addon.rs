use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnKind {
    ChairSet,
    SupplyBox,
    Bonfire,
    PhotoSession,
}

/// Per-add-on pricing in whole US dollars. Built once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOnCatalog {
    /// Per chair set, per week.
    pub chair_set: u32,
    /// Flat, per week.
    pub supply_box: u32,
    pub bonfire: u32,
    pub photo_session: u32,
}

impl AddOnCatalog {
    pub fn price(&self, kind: AddOnKind) -> u32 {
        match kind {
            AddOnKind::ChairSet => self.chair_set,
            AddOnKind::SupplyBox => self.supply_box,
            AddOnKind::Bonfire => self.bonfire,
            AddOnKind::PhotoSession => self.photo_session,
        }
    }
}

impl Default for AddOnCatalog {
    fn default() -> Self {
        Self {
            chair_set: 300,
            supply_box: 375,
            bonfire: 500,
            photo_session: 300,
        }
    }
}
