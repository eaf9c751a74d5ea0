use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::itinerary::Itinerary;

/// What the guest gets back after saving: the snapshot that was handed off,
/// plus enough identity to reference it later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryReceipt {
    pub receipt_id: Uuid,
    pub email: String,
    pub itinerary: Itinerary,
    pub saved_at: DateTime<Utc>,
}

pub struct SaveService;

impl SaveService {
    /// Snapshots the itinerary for the delivery collaborator. The email is
    /// passed through unvalidated; delivery itself happens outside this
    /// service.
    pub fn save(email: &str, itinerary: Itinerary) -> ItineraryReceipt {
        let receipt = ItineraryReceipt {
            receipt_id: Uuid::new_v4(),
            email: email.to_string(),
            itinerary,
            saved_at: Utc::now(),
        };

        println!(
            "Itinerary snapshot (${}) queued for {} (receipt {})",
            receipt.itinerary.total, receipt.email, receipt.receipt_id
        );

        receipt
    }
}
