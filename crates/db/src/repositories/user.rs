use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use rand::{distributions::Alphanumeric, Rng};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const API_TOKEN_LEN: usize = 40;

pub async fn get_user_by_token(pool: &Pool<Postgres>, api_token: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, api_token, created_at
        FROM users
        WHERE api_token = $1
        "#,
    )
    .bind(api_token)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_username(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, api_token, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Creates a user with a freshly generated opaque API token. Token issuance
/// beyond this operator-side hook is out of the backend's hands.
pub async fn create_user(pool: &Pool<Postgres>, username: &str) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let api_token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(API_TOKEN_LEN)
        .map(char::from)
        .collect();

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, username, api_token, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, api_token, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(api_token)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn count_users(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
