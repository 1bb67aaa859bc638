//! # Catalog Handlers
//!
//! Listings for the reference data (sports, time slots), the debug counts
//! endpoint, and the idempotent sample-data seeder.

use axum::{extract::State, Json};
use std::sync::Arc;

use courtbook_core::{
    errors::CourtError,
    models::{
        booking::{DebugResponse, DebugSlot},
        sport::Sport,
        time_slot::{formatted_hour, TimeSlotResponse},
    },
};

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Sports seeded by the sample-data endpoint, keyed by slug.
const SAMPLE_SPORTS: [(&str, &str); 6] = [
    ("badminton", "Badminton"),
    ("volleyball", "Volleyball"),
    ("basketball", "Basketball"),
    ("squash", "Squash"),
    ("table-tennis", "Table Tennis"),
    ("cricket", "Cricket"),
];

const SAMPLE_COURTS_PER_SPORT: u32 = 4;

#[axum::debug_handler]
pub async fn list_sports(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Sport>>, AppError> {
    let sports = courtbook_db::repositories::sport::list_sports(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;

    let response = sports
        .into_iter()
        .map(|s| Sport {
            id: s.id,
            name: s.name,
        })
        .collect();

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn list_time_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<TimeSlotResponse>>, AppError> {
    // Seed on first contact so the catalog is never empty
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

    let response = time_slots
        .iter()
        .map(|slot| TimeSlotResponse {
            id: slot.id.to_string(),
            hour: slot.hour,
            formatted_slot: formatted_hour(slot.hour),
        })
        .collect();

    Ok(Json(response))
}

/// Collection counts plus a raw slot dump. Diagnostic only.
#[axum::debug_handler]
pub async fn debug_data(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DebugResponse>, AppError> {
    let sports_count = courtbook_db::repositories::sport::count_sports(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;
    let courts_count = courtbook_db::repositories::court::count_courts(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;
    let time_slots_count = courtbook_db::repositories::time_slot::count_time_slots(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;
    let bookings_count =
        courtbook_db::repositories::booking::count_bookings(&state.db_pool).await?;

    let time_slots = courtbook_db::repositories::time_slot::list_time_slots(&state.db_pool)
        .await
        .map_err(CourtError::Database)?
        .iter()
        .map(|slot| DebugSlot {
            id: slot.id.to_string(),
            hour: slot.hour,
            formatted: formatted_hour(slot.hour),
        })
        .collect();

    Ok(Json(DebugResponse {
        sports_count,
        courts_count,
        time_slots_count,
        bookings_count,
        time_slots,
    }))
}

/// Seeds a fixed catalog of sports, courts, and the default time slots.
/// Get-or-create throughout, so repeated calls change nothing.
#[axum::debug_handler]
pub async fn create_sample_data(
    State(state): State<Arc<ApiState>>,
    AuthUser(_user): AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    for (id, name) in SAMPLE_SPORTS {
        let sport = courtbook_db::repositories::sport::get_or_create_sport(&state.db_pool, id, name)
            .await
            .map_err(CourtError::Database)?;

        for i in 1..=SAMPLE_COURTS_PER_SPORT {
            let court_name = if sport.id == "cricket" {
                format!("Pitch-{}", i)
            } else {
                format!("{} Court {}", sport.name, i)
            };
            courtbook_db::repositories::court::get_or_create_court(
                &state.db_pool,
                &sport.id,
                &court_name,
            )
            .await
            .map_err(CourtError::Database)?;
        }
    }

    courtbook_db::repositories::time_slot::ensure_default_slots(&state.db_pool)
        .await
        .map_err(CourtError::Database)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Sample data created successfully"
    })))
}
