use serde::{Deserialize, Serialize};

use crate::models::addon::AddOnKind;
use crate::models::selection::DayChip;

/// One priced row of the itinerary. A deselected add-on still appears with
/// `quantity` 0 and `amount` 0 so the presentation layer can render a stable
/// four-row breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: AddOnKind,
    pub label: String,
    pub quantity: u32,
    /// Whole US dollars.
    pub amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<DayChip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The derived, priced summary of the current selection. Recomputed from
/// scratch on every read; never stored independently of the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub paid_chair_sets: u32,
    pub line_items: Vec<LineItem>,
    /// Whole US dollars, always the sum of the line item amounts.
    pub total: u32,
}
