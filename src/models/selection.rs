use serde::{Deserialize, Serialize};

pub const MIN_CHAIR_SETS: u32 = 1;
pub const MAX_CHAIR_SETS: u32 = 10;

/// One of the seven weekday selectors used to schedule a single-occurrence
/// add-on (bonfire, photo session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayChip {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayChip {
    pub const ALL: [DayChip; 7] = [
        DayChip::Sun,
        DayChip::Mon,
        DayChip::Tue,
        DayChip::Wed,
        DayChip::Thu,
        DayChip::Fri,
        DayChip::Sat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayChip::Sun => "Sunday",
            DayChip::Mon => "Monday",
            DayChip::Tue => "Tuesday",
            DayChip::Wed => "Wednesday",
            DayChip::Thu => "Thursday",
            DayChip::Fri => "Friday",
            DayChip::Sat => "Saturday",
        }
    }
}

/// Everything the guest has currently selected. Owned by the itinerary
/// engine; all writes go through the engine's operations, which normalize
/// input instead of rejecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Always within [MIN_CHAIR_SETS, MAX_CHAIR_SETS].
    pub chair_set_count: u32,
    pub supply_box_included: bool,
    /// None means the bonfire is not scheduled.
    pub bonfire_day: Option<DayChip>,
    /// None means the photo session is not scheduled.
    pub photo_day: Option<DayChip>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            chair_set_count: 2,
            supply_box_included: false,
            bonfire_day: None,
            photo_day: None,
        }
    }
}
