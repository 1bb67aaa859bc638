//! Positional slot addressing shared by the status and booking handlers.
//!
//! The frontend works with 1-based slot positions within the hour-sorted
//! list rather than stable slot identifiers. The mapping is request-scoped:
//! it is recomputed from a fresh sort on every read and every write and is
//! never persisted.

use courtbook_db::models::DbTimeSlot;
use uuid::Uuid;

/// Resolves a 1-based frontend slot index against the hour-sorted slot
/// list. Index 1 is the earliest hour; 0 and out-of-range indices resolve
/// to nothing.
pub fn slot_at_index(slots: &[DbTimeSlot], index: usize) -> Option<&DbTimeSlot> {
    if index == 0 {
        return None;
    }
    slots.get(index - 1)
}

/// 1-based position of a slot id within the hour-sorted list, if the slot
/// still exists.
pub fn slot_index_of(slots: &[DbTimeSlot], time_slot_id: Uuid) -> Option<usize> {
    slots
        .iter()
        .position(|slot| slot.id == time_slot_id)
        .map(|pos| pos + 1)
}
