use crate::models::DbSport;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn list_sports(pool: &Pool<Postgres>) -> Result<Vec<DbSport>> {
    let sports = sqlx::query_as::<_, DbSport>(
        r#"
        SELECT id, name
        FROM sports
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(sports)
}

pub async fn get_sport_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<DbSport>> {
    let sport = sqlx::query_as::<_, DbSport>(
        r#"
        SELECT id, name
        FROM sports
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(sport)
}

/// First sport in catalog order, used when a request names no sport.
pub async fn first_sport(pool: &Pool<Postgres>) -> Result<Option<DbSport>> {
    let sport = sqlx::query_as::<_, DbSport>(
        r#"
        SELECT id, name
        FROM sports
        ORDER BY id ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(sport)
}

pub async fn get_or_create_sport(pool: &Pool<Postgres>, id: &str, name: &str) -> Result<DbSport> {
    let inserted = sqlx::query_as::<_, DbSport>(
        r#"
        INSERT INTO sports (id, name)
        VALUES ($1, $2)
        ON CONFLICT (id) DO NOTHING
        RETURNING id, name
        "#,
    )
    .bind(id)
    .bind(name)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(sport) => Ok(sport),
        // Row already existed; keep its stored name
        None => {
            let existing = get_sport_by_id(pool, id)
                .await?
                .ok_or_else(|| eyre::eyre!("Sport {} vanished during get-or-create", id))?;
            Ok(existing)
        }
    }
}

pub async fn count_sports(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sports")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
