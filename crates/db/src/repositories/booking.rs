use crate::models::DbBooking;
use chrono::{NaiveDate, Utc};
use courtbook_core::errors::{CourtError, CourtResult};
use courtbook_core::models::booking::BookingStatus;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// All bookings for a sport's courts on one date, for the status grid.
pub async fn list_bookings_for_sport(
    pool: &Pool<Postgres>,
    sport_id: &str,
    date: NaiveDate,
) -> CourtResult<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT b.id, b.court_id, b.time_slot_id, b.date, b.status,
               b.user_id, b.created_at, b.updated_at
        FROM bookings b
        JOIN courts c ON c.id = b.court_id
        WHERE c.sport_id = $1 AND b.date = $2
        "#,
    )
    .bind(sport_id)
    .bind(date)
    .fetch_all(pool)
    .await
    .map_err(|e| CourtError::Database(e.into()))?;

    Ok(bookings)
}

/// Removes the booking for a (court, time slot, date) triple. Absence of a
/// row encodes the "available" state, so setting a slot back to available
/// is a delete. Returns whether a row actually went away.
pub async fn delete_booking(
    pool: &Pool<Postgres>,
    court_id: Uuid,
    time_slot_id: Uuid,
    date: NaiveDate,
) -> CourtResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE court_id = $1 AND time_slot_id = $2 AND date = $3
        "#,
    )
    .bind(court_id)
    .bind(time_slot_id)
    .bind(date)
    .execute(pool)
    .await
    .map_err(|e| CourtError::Database(e.into()))?;

    Ok(result.rows_affected() > 0)
}

/// Creates or updates the single booking row for a triple. The second tuple
/// element reports whether this call inserted the row.
///
/// Uniqueness is enforced by the database constraint, not by the
/// read-then-write sequence here: if the insert loses a race against a
/// concurrent writer, `ON CONFLICT DO NOTHING` returns no row and the
/// update path is retried once against the row that writer created.
pub async fn upsert_booking(
    pool: &Pool<Postgres>,
    court_id: Uuid,
    time_slot_id: Uuid,
    date: NaiveDate,
    status: BookingStatus,
    user_id: Uuid,
) -> CourtResult<(DbBooking, bool)> {
    if let Some(updated) =
        update_booking_row(pool, court_id, time_slot_id, date, status, user_id).await?
    {
        return Ok((updated, false));
    }

    let id = Uuid::new_v4();
    let now = Utc::now();
    let inserted = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, court_id, time_slot_id, date, status, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        ON CONFLICT (court_id, time_slot_id, date) DO NOTHING
        RETURNING id, court_id, time_slot_id, date, status, user_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(court_id)
    .bind(time_slot_id)
    .bind(date)
    .bind(status.as_str())
    .bind(user_id)
    .bind(now)
    .fetch_optional(pool)
    .await
    .map_err(|e| CourtError::Database(e.into()))?;

    if let Some(booking) = inserted {
        return Ok((booking, true));
    }

    // Lost the insert race; someone else created the row between our two
    // statements. Their row wins the triple, so update it.
    match update_booking_row(pool, court_id, time_slot_id, date, status, user_id).await? {
        Some(updated) => Ok((updated, false)),
        None => Err(CourtError::Conflict(
            "Booking changed concurrently, please retry".to_string(),
        )),
    }
}

/// Updates the row for a triple in place, preserving its id and created_at.
async fn update_booking_row(
    pool: &Pool<Postgres>,
    court_id: Uuid,
    time_slot_id: Uuid,
    date: NaiveDate,
    status: BookingStatus,
    user_id: Uuid,
) -> CourtResult<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET status = $4, user_id = $5, updated_at = $6
        WHERE court_id = $1 AND time_slot_id = $2 AND date = $3
        RETURNING id, court_id, time_slot_id, date, status, user_id, created_at, updated_at
        "#,
    )
    .bind(court_id)
    .bind(time_slot_id)
    .bind(date)
    .bind(status.as_str())
    .bind(user_id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
    .map_err(|e| CourtError::Database(e.into()))?;

    Ok(booking)
}

pub async fn count_bookings(pool: &Pool<Postgres>) -> CourtResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await
        .map_err(|e| CourtError::Database(e.into()))?;

    Ok(count)
}
