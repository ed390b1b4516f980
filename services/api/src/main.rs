use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::database::{DatabaseConfig, health_check, init_pool};
use common::error::DatabaseError;

use api::{
    config::ServerConfig,
    jwt::{JwtConfig, JwtService},
    repositories::{MediaRepository, UserRepository},
    routes,
    state::AppState,
    uploads::UploadStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting media catalog API service");

    let server_config = ServerConfig::from_env();

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Apply pending migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;
    info!("Database migrations applied");

    // Initialize JWT service and upload store
    let jwt_service = JwtService::new(JwtConfig::from_env()?);
    let uploads = UploadStore::new(&server_config.upload_dir)?;

    let app_state = AppState {
        user_repository: UserRepository::new(pool.clone()),
        media_repository: MediaRepository::new(pool),
        jwt_service,
        uploads,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr()).await?;
    info!("API service listening on {}", server_config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
