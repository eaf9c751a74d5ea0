use crate::models::addon::{AddOnCatalog, AddOnKind};
use crate::models::itinerary::{Itinerary, LineItem};
use crate::models::property::PropertyConfig;
use crate::models::selection::{DayChip, SelectionState, MAX_CHAIR_SETS, MIN_CHAIR_SETS};

/// Day picked when the bonfire is toggled on without an explicit chip.
pub const DEFAULT_BONFIRE_DAY: DayChip = DayChip::Fri;
/// Day picked when the photo session is toggled on without an explicit chip.
pub const DEFAULT_PHOTO_DAY: DayChip = DayChip::Thu;

/// Sole owner of a session's `SelectionState`. Every mutation normalizes its
/// input (clamp or toggle) instead of rejecting it, so no operation here can
/// fail, and the priced itinerary is always a pure function of the current
/// selection plus the two immutable configs.
pub struct ItineraryEngine {
    catalog: AddOnCatalog,
    property: PropertyConfig,
    selection: SelectionState,
}

impl ItineraryEngine {
    pub fn new(catalog: AddOnCatalog, property: PropertyConfig) -> Self {
        Self {
            catalog,
            property,
            selection: SelectionState::default(),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn property(&self) -> &PropertyConfig {
        &self.property
    }

    /// Saturating clamp into [MIN_CHAIR_SETS, MAX_CHAIR_SETS].
    pub fn set_chair_set_count(&mut self, count: i64) {
        self.selection.chair_set_count =
            count.clamp(i64::from(MIN_CHAIR_SETS), i64::from(MAX_CHAIR_SETS)) as u32;
    }

    pub fn increment_chair_sets(&mut self) {
        self.set_chair_set_count(i64::from(self.selection.chair_set_count) + 1);
    }

    pub fn decrement_chair_sets(&mut self) {
        self.set_chair_set_count(i64::from(self.selection.chair_set_count) - 1);
    }

    pub fn toggle_supply_box(&mut self) {
        self.selection.supply_box_included = !self.selection.supply_box_included;
    }

    /// Pure toggle between unscheduled and scheduled. Toggling off wins over
    /// re-selection: if a day is already set, it is cleared no matter what
    /// `day` was passed.
    pub fn toggle_bonfire(&mut self, day: Option<DayChip>) {
        self.selection.bonfire_day = match self.selection.bonfire_day {
            Some(_) => None,
            None => Some(day.unwrap_or(DEFAULT_BONFIRE_DAY)),
        };
    }

    /// Re-clicking the currently scheduled chip un-schedules the bonfire.
    pub fn set_bonfire_day(&mut self, day: DayChip) {
        self.selection.bonfire_day = match self.selection.bonfire_day {
            Some(current) if current == day => None,
            _ => Some(day),
        };
    }

    pub fn toggle_photo_session(&mut self, day: Option<DayChip>) {
        self.selection.photo_day = match self.selection.photo_day {
            Some(_) => None,
            None => Some(day.unwrap_or(DEFAULT_PHOTO_DAY)),
        };
    }

    pub fn set_photo_day(&mut self, day: DayChip) {
        self.selection.photo_day = match self.selection.photo_day {
            Some(current) if current == day => None,
            _ => Some(day),
        };
    }

    /// Pure recomputation of the priced breakdown. Deliberately not cached;
    /// the caller always sees the latest selection.
    pub fn compute_itinerary(&self) -> Itinerary {
        let selection = &self.selection;
        let paid_chair_sets = selection
            .chair_set_count
            .saturating_sub(self.property.included_chair_sets);
        let included_sets = selection.chair_set_count - paid_chair_sets;

        let chair_note = if included_sets > 0 {
            Some(format!(
                "{} of {} sets included with your stay",
                included_sets, selection.chair_set_count
            ))
        } else {
            None
        };

        let line_items = vec![
            LineItem {
                kind: AddOnKind::ChairSet,
                label: "Beach chair sets".to_string(),
                quantity: selection.chair_set_count,
                amount: paid_chair_sets * self.catalog.price(AddOnKind::ChairSet),
                day: None,
                note: chair_note,
            },
            LineItem {
                kind: AddOnKind::SupplyBox,
                label: "Beach supply box".to_string(),
                quantity: u32::from(selection.supply_box_included),
                amount: if selection.supply_box_included {
                    self.catalog.price(AddOnKind::SupplyBox)
                } else {
                    0
                },
                day: None,
                note: None,
            },
            LineItem {
                kind: AddOnKind::Bonfire,
                label: "Private beach bonfire".to_string(),
                quantity: u32::from(selection.bonfire_day.is_some()),
                amount: if selection.bonfire_day.is_some() {
                    self.catalog.price(AddOnKind::Bonfire)
                } else {
                    0
                },
                day: selection.bonfire_day,
                note: selection
                    .bonfire_day
                    .map(|day| format!("Scheduled for {}", day.label())),
            },
            LineItem {
                kind: AddOnKind::PhotoSession,
                label: "Family photo session".to_string(),
                quantity: u32::from(selection.photo_day.is_some()),
                amount: if selection.photo_day.is_some() {
                    self.catalog.price(AddOnKind::PhotoSession)
                } else {
                    0
                },
                day: selection.photo_day,
                note: selection
                    .photo_day
                    .map(|day| format!("Scheduled for {}", day.label())),
            },
        ];

        let total = line_items.iter().map(|item| item.amount).sum();

        Itinerary {
            paid_chair_sets,
            line_items,
            total,
        }
    }
}
