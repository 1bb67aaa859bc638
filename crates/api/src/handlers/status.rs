//! # Court Status Handler
//!
//! Builds the per-court, per-slot status grid the frontend renders for one
//! sport and date.
//!
//! ## Aggregation
//!
//! The grid is reconstructed on every request:
//!
//! 1. Resolve the date (default today) and the sport (default first in
//!    catalog order).
//! 2. Seed the default hour catalog if no time slots exist yet.
//! 3. Load the slots sorted by hour; the 1-based position in that ordering
//!    is the frontend slot index for this response.
//! 4. Load the sport's courts and their bookings for the date in one pass.
//! 5. Default every (court, index) cell to "available", then overlay each
//!    booking by locating its stable slot id among the sorted slots.
//!
//! A booking whose time slot has since been deleted no longer has a
//! position and is skipped rather than surfaced as an error.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::{
        booking::{BookingStatus, CourtSlots, CourtStatusResponse, SlotEntry, TimeSlotEntry},
        sport::Sport,
        time_slot::formatted_hour,
    },
};
use courtbook_db::models::{DbBooking, DbCourt, DbSport, DbTimeSlot};

use crate::{handlers::slots::slot_index_of, middleware::error_handling::AppError, ApiState};

/// Query parameters for the court-status endpoint
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// Sport id; defaults to the first sport in catalog order
    pub sport: Option<String>,

    /// ISO calendar date; defaults to today
    pub date: Option<String>,
}

#[axum::debug_handler]
pub async fn court_status(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<CourtStatusResponse>, AppError> {
    // Resolve the date up front; a malformed one fails fast
    let date = match &query.date {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map_err(|_| AppError(CourtError::Validation("Invalid date format".to_string())))?,
        None => Utc::now().date_naive(),
    };

    // Resolve the sport, defaulting to the first available
    let sports = courtbook_db::repositories::sport::list_sports(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;
    let sport_id = match query.sport.clone() {
        Some(id) => id,
        None => sports
            .first()
            .map(|sport| sport.id.clone())
            .ok_or_else(|| AppError(CourtError::NotFound("No sports available".to_string())))?,
    };

    // Ensure we have time slots before computing positions
    let slot_count = courtbook_db::repositories::time_slot::count_time_slots(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;
    if slot_count == 0 {
        courtbook_db::repositories::time_slot::ensure_default_slots(&state.db_pool)
            .await
            .map_err(CourtError::Database)?;
    }

    let time_slots = courtbook_db::repositories::time_slot::list_time_slots(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;
    let courts = courtbook_db::repositories::court::list_courts_by_sport(&state.db_pool, &sport_id)
        .await
        .map_err(CourtError::Database)?;
    let bookings =
        courtbook_db::repositories::booking::list_bookings_for_sport(&state.db_pool, &sport_id, date)
            .await?;

    let current_time = Utc::now().format("%I:%M %p").to_string();
    let response = build_status_grid(
        date,
        current_time,
        sports,
        sport_id,
        time_slots,
        courts,
        bookings,
    );

    Ok(Json(response))
}

/// Assembles the status grid from already-loaded rows.
///
/// Pure with respect to storage, so tests can drive it with constructed
/// rows. Frontend slot indices are assigned here from the 1-based positions
/// of the hour-sorted `time_slots`.
pub fn build_status_grid(
    date: NaiveDate,
    current_time: String,
    sports: Vec<DbSport>,
    selected_sport: String,
    time_slots: Vec<DbTimeSlot>,
    courts: Vec<DbCourt>,
    bookings: Vec<DbBooking>,
) -> CourtStatusResponse {
    let time_slot_entries: Vec<TimeSlotEntry> = time_slots
        .iter()
        .enumerate()
        .map(|(i, slot)| TimeSlotEntry {
            id: (i + 1) as u32,
            formatted_slot: formatted_hour(slot.hour),
        })
        .collect();

    let mut court_entries = Vec::with_capacity(courts.len());
    for court in &courts {
        // Every cell starts out available; bookings overwrite below
        let mut slots = BTreeMap::new();
        for (i, slot) in time_slots.iter().enumerate() {
            let index = (i + 1) as u32;
            slots.insert(
                index,
                SlotEntry {
                    id: index.to_string(),
                    time: formatted_hour(slot.hour),
                    status: BookingStatus::Available,
                },
            );
        }

        for booking in bookings.iter().filter(|b| b.court_id == court.id) {
            // Bookings referencing a deleted slot have no position; skip them
            let Some(index) = slot_index_of(&time_slots, booking.time_slot_id) else {
                continue;
            };
            if let Some(entry) = slots.get_mut(&(index as u32)) {
                entry.status = booking.status.parse().unwrap_or_default();
            }
        }

        court_entries.push(CourtSlots {
            id: court.id.to_string(),
            name: court.name.clone(),
            slots,
        });
    }

    CourtStatusResponse {
        date: date.to_string(),
        current_time,
        sports: sports
            .into_iter()
            .map(|s| Sport {
                id: s.id,
                name: s.name,
            })
            .collect(),
        selected_sport,
        time_slots: time_slot_entries,
        courts: court_entries,
    }
}
