use crate::models::DbCourt;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_court_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCourt>> {
    let court = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, sport_id, name
        FROM courts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(court)
}

pub async fn list_courts_by_sport(pool: &Pool<Postgres>, sport_id: &str) -> Result<Vec<DbCourt>> {
    let courts = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, sport_id, name
        FROM courts
        WHERE sport_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(sport_id)
    .fetch_all(pool)
    .await?;

    Ok(courts)
}

/// Court names are unique per sport only by convention, so this is a plain
/// find-then-insert used by the sample-data seeder.
pub async fn get_or_create_court(
    pool: &Pool<Postgres>,
    sport_id: &str,
    name: &str,
) -> Result<DbCourt> {
    let existing = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, sport_id, name
        FROM courts
        WHERE sport_id = $1 AND name = $2
        LIMIT 1
        "#,
    )
    .bind(sport_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;

    if let Some(court) = existing {
        return Ok(court);
    }

    let id = Uuid::new_v4();
    let court = sqlx::query_as::<_, DbCourt>(
        r#"
        INSERT INTO courts (id, sport_id, name)
        VALUES ($1, $2, $3)
        RETURNING id, sport_id, name
        "#,
    )
    .bind(id)
    .bind(sport_id)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(court)
}

pub async fn count_courts(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
