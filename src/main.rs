use color_eyre::eyre::Result;
use courtbook_api::config::ApiConfig;
use courtbook_db::{create_pool, repositories::time_slot::ensure_default_slots, schema::initialize_database};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Seed the default time-slot catalog so first reads don't have to
    ensure_default_slots(&db_pool).await?;

    // Start API server
    courtbook_api::start_server(config, db_pool).await?;

    Ok(())
}
