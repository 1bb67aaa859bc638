//! # Booking Update Handler
//!
//! Transitions one (court, slot, date) cell of the status grid. The slot is
//! addressed by its frontend position, so the handler first re-resolves
//! that position against the current hour-sorted slot list, then applies
//! the row-absence-means-available encoding: setting "available" deletes
//! the booking row, any other status upserts the single row for the triple.

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::{
        booking::{
            BookingAction, BookingStatus, BookingSummary, UpdateBookingRequest,
            UpdateBookingResponse,
        },
        time_slot::formatted_hour,
    },
};
use uuid::Uuid;

use crate::{
    handlers::slots::slot_at_index,
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Parses the frontend's positional slot reference, which arrives either as
/// a JSON number or a numeric string.
pub fn parse_slot_index(value: &serde_json::Value) -> Option<usize> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

#[axum::debug_handler]
pub async fn update_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<UpdateBookingResponse>, AppError> {
    let (Some(court_id), Some(slot_ref), Some(status_raw)) =
        (&payload.court_id, &payload.time_slot_id, &payload.status)
    else {
        return Err(AppError(CourtError::Validation(
            "Missing required fields: courtId, timeSlotId, status".to_string(),
        )));
    };

    let status: BookingStatus = status_raw.parse().map_err(|_| {
        AppError(CourtError::Validation(format!(
            "Invalid status. Valid options: {}",
            BookingStatus::ALL.map(|s| s.as_str()).join(", ")
        )))
    })?;

    let date = match &payload.date {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map_err(|_| AppError(CourtError::Validation("Invalid date format".to_string())))?,
        None => Utc::now().date_naive(),
    };

    // The slot arrives as a position, not an id. Resolve it against the
    // current sort order; bad index and bad court share one coarse message.
    let invalid = || AppError(CourtError::Validation("Invalid court or time slot".to_string()));

    let time_slots = courtbook_db::repositories::time_slot::list_time_slots(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;
    let slot_index = parse_slot_index(slot_ref).ok_or_else(invalid)?;
    let time_slot = slot_at_index(&time_slots, slot_index)
        .ok_or_else(invalid)?
        .clone();

    let court_uuid = Uuid::parse_str(court_id).map_err(|_| invalid())?;
    let court = courtbook_db::repositories::court::get_court_by_id(&state.db_pool, court_uuid)
        .await
        .map_err(CourtError::Database)?
        .ok_or_else(invalid)?;

    let booking = if status == BookingStatus::Available {
        // An available slot has no row; delete whatever is there
        let deleted = courtbook_db::repositories::booking::delete_booking(
            &state.db_pool,
            court.id,
            time_slot.id,
            date,
        )
        .await
        .map_err(write_failure)?;

        BookingSummary {
            id: None,
            court: court.name.clone(),
            time_slot: formatted_hour(time_slot.hour),
            date: date.to_string(),
            status,
            user: user.username.clone(),
            action: if deleted {
                BookingAction::Deleted
            } else {
                BookingAction::NoChange
            },
        }
    } else {
        let (row, created) = courtbook_db::repositories::booking::upsert_booking(
            &state.db_pool,
            court.id,
            time_slot.id,
            date,
            status,
            user.id,
        )
        .await
        .map_err(write_failure)?;

        BookingSummary {
            id: Some(row.id.to_string()),
            court: court.name.clone(),
            time_slot: formatted_hour(time_slot.hour),
            date: date.to_string(),
            status,
            user: user.username.clone(),
            action: if created {
                BookingAction::Created
            } else {
                BookingAction::Updated
            },
        }
    };

    Ok(Json(UpdateBookingResponse {
        success: true,
        booking,
    }))
}

/// Storage failures during the write leave as a descriptive internal error
/// rather than a bare fault. The post-retry conflict keeps its own kind.
fn write_failure(err: CourtError) -> AppError {
    match err {
        conflict @ CourtError::Conflict(_) => AppError(conflict),
        other => AppError(CourtError::Internal(
            format!("Failed to update booking: {}", other).into(),
        )),
    }
}
