//! School Back Office API - Main Entry Point

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use school_back_office::application::use_cases::auth::AdminSeed;
use school_back_office::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use school_back_office::infrastructure::driven_adapters::database::create_pool;
use school_back_office::infrastructure::driving_adapters::api_rest::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "school_back_office=debug,tower_http=debug".into());
    match config.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let bootstrap_admin = config.bootstrap_admin.clone();
    let state = AppState::new(&pool, config);

    if let Some(admin) = bootstrap_admin {
        let seeded = state
            .auth
            .ensure_admin
            .execute(AdminSeed {
                email: admin.email,
                password: admin.password,
                first_name: admin.first_name,
                last_name: admin.last_name,
            })
            .await?;
        if seeded.is_none() {
            tracing::debug!("Users already exist, bootstrap administrator skipped");
        }
    }

    let app = router(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
