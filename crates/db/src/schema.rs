use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username VARCHAR(150) NOT NULL UNIQUE,
            api_token VARCHAR(64) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create sports table; ids are human-assigned slugs
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sports (
            id VARCHAR(50) PRIMARY KEY,
            name VARCHAR(100) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_slots table; one row per hour of day
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            hour INTEGER NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_hour CHECK (hour >= 0 AND hour <= 23)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create courts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            sport_id VARCHAR(50) NOT NULL REFERENCES sports(id) ON DELETE CASCADE,
            name VARCHAR(100) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. The unique constraint over the
    // (court, time slot, date) triple is what the upsert path leans on.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            court_id UUID NOT NULL REFERENCES courts(id) ON DELETE CASCADE,
            time_slot_id UUID NOT NULL REFERENCES time_slots(id) ON DELETE CASCADE,
            date DATE NOT NULL,
            status VARCHAR(20) NOT NULL DEFAULT 'booked',
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_booking_per_court_slot_date
                UNIQUE (court_id, time_slot_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_courts_sport_id ON courts(sport_id);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_court_id_date ON bookings(court_id, date);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_date ON bookings(date);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
