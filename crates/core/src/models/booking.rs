use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sport::Sport;

/// Status of a booked slot. A slot with no booking row at all is
/// `Available` — the row is deleted rather than stored with that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Available,
    #[default]
    Booked,
    Maintenance,
    Reserved,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Available,
        BookingStatus::Booked,
        BookingStatus::Maintenance,
        BookingStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Available => "available",
            BookingStatus::Booked => "booked",
            BookingStatus::Maintenance => "maintenance",
            BookingStatus::Reserved => "reserved",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BookingStatus::Available),
            "booked" => Ok(BookingStatus::Booked),
            "maintenance" => Ok(BookingStatus::Maintenance),
            "reserved" => Ok(BookingStatus::Reserved),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

/// A booking row. At most one exists per (court, time slot, date) triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub court_id: Uuid,
    pub time_slot_id: Uuid,
    pub date: NaiveDate,
    pub status: BookingStatus,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One cell of the status grid, keyed by its frontend slot index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub id: String,
    pub time: String,
    pub status: BookingStatus,
}

/// A court together with its per-index slot map for one date.
///
/// Keys are the 1-based frontend slot indices; serde renders integer keys
/// as JSON object keys, so the map serializes in numeric order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtSlots {
    pub id: String,
    pub name: String,
    pub slots: BTreeMap<u32, SlotEntry>,
}

/// A time slot as the frontend addresses it: by its 1-based position in the
/// hour-sorted list, not by its stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotEntry {
    pub id: u32,
    pub formatted_slot: String,
}

/// Full court-status payload for one sport and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtStatusResponse {
    pub date: String,
    pub current_time: String,
    pub sports: Vec<Sport>,
    pub selected_sport: String,
    pub time_slots: Vec<TimeSlotEntry>,
    pub courts: Vec<CourtSlots>,
}

/// Booking update request. All fields arrive optional so the handler can
/// report missing ones itself; `time_slot_id` accepts a number or a numeric
/// string, as clients send both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub court_id: Option<String>,
    pub time_slot_id: Option<serde_json::Value>,
    pub status: Option<String>,
    pub date: Option<String>,
}

/// What the reconciler did with the addressed booking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    Created,
    Updated,
    Deleted,
    NoChange,
}

/// Summary of the booking state after an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub court: String,
    pub time_slot: String,
    pub date: String,
    pub status: BookingStatus,
    pub user: String,
    pub action: BookingAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingResponse {
    pub success: bool,
    pub booking: BookingSummary,
}

/// Raw collection counts plus the slot dump, for the debug endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugResponse {
    pub sports_count: i64,
    pub courts_count: i64,
    pub time_slots_count: i64,
    pub bookings_count: i64,
    pub time_slots: Vec<DebugSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugSlot {
    pub id: String,
    pub hour: i32,
    pub formatted: String,
}
