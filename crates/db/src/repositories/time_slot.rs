use crate::models::DbTimeSlot;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Hours covered by the default slot catalog, 7 AM through 10 PM.
pub const DEFAULT_SLOT_HOURS: std::ops::RangeInclusive<i32> = 7..=22;

/// All time slots sorted ascending by hour. Frontend slot indices are the
/// 1-based positions within this ordering.
pub async fn list_time_slots(pool: &Pool<Postgres>) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, hour, created_at
        FROM time_slots
        ORDER BY hour ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}

/// Seeds the default hour catalog. Idempotent: each hour is inserted only
/// if absent, so concurrent callers and repeated startups are harmless.
pub async fn ensure_default_slots(pool: &Pool<Postgres>) -> Result<()> {
    let now = Utc::now();

    for hour in DEFAULT_SLOT_HOURS {
        sqlx::query(
            r#"
            INSERT INTO time_slots (id, hour, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (hour) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(hour)
        .bind(now)
        .execute(pool)
        .await?;
    }

    Ok(())
}

pub async fn count_time_slots(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM time_slots")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
