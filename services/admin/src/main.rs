use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod activity;
mod error;
mod middleware;
mod models;
mod reports;
mod repositories;
mod routes;
mod state;
mod timeago;

use common::database::{DatabaseConfig, init_pool};
use common::error::DatabaseError;
use tokio::net::TcpListener;

use crate::middleware::{JwtConfig, JwtVerifier};
use crate::repositories::{AttendanceRepository, StatsRepository, UnlockRequestRepository};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting admin service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Apply schema migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    // Initialize token verification
    let jwt_config = JwtConfig::from_env()?;
    let jwt_verifier = JwtVerifier::new(&jwt_config)?;

    info!("Admin service initialized successfully");

    // Initialize repositories
    let stats_repository = StatsRepository::new(pool.clone());
    let unlock_repository = UnlockRequestRepository::new(pool.clone());
    let attendance_repository = AttendanceRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        jwt_verifier,
        stats_repository,
        unlock_repository,
        attendance_repository,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr =
        std::env::var("ADMIN_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3002".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Admin service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
