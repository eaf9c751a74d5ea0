use serde::{Deserialize, Serialize};

/// Decimal-degree coordinate, longitude first to match GeoJSON ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Fixed facts about the rental property. Built once at startup; the
/// display fields are presentation-only and never priced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfig {
    pub name: String,
    pub address: String,
    pub date_range: String,
    /// Chair sets bundled free with the stay; reduces the paid quantity.
    pub included_chair_sets: u32,
    pub location: GeoPoint,
    pub beach_access: GeoPoint,
}

impl PropertyConfig {
    pub fn driftwood_cottage() -> Self {
        Self {
            name: "Driftwood Cottage".to_string(),
            address: "214 Gulf Dunes Ln, Santa Rosa Beach, FL".to_string(),
            date_range: "June 14 to June 21".to_string(),
            included_chair_sets: 1,
            location: GeoPoint {
                lon: -86.2794,
                lat: 30.3693,
            },
            beach_access: GeoPoint {
                lon: -86.2771,
                lat: 30.3659,
            },
        }
    }
}
