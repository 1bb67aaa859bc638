use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fixed hour-of-day bucket available for booking. Hours are unique
/// across all slots and slots are always enumerated sorted by hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub hour: i32,
    pub created_at: DateTime<Utc>,
}

impl TimeSlot {
    /// 12-hour clock rendering of this slot, e.g. "7:00 AM".
    pub fn formatted_slot(&self) -> String {
        formatted_hour(self.hour)
    }
}

/// Formats an hour of day on the 12-hour clock. Hours 0 and 12 both render
/// as "12"; AM for hours below 12, PM otherwise.
pub fn formatted_hour(hour: i32) -> String {
    let hour_12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let am_pm = if hour < 12 { "AM" } else { "PM" };
    format!("{}:00 {}", hour_12, am_pm)
}

/// Payload for the time-slot listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotResponse {
    pub id: String,
    pub hour: i32,
    pub formatted_slot: String,
}
