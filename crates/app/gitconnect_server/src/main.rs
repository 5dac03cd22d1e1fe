//! GitConnect API server binary.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "gitconnect_server", about = "GitConnect API server")]
struct Args {
    /// Port to listen on. Overrides the `BIND_ADDR` port when set.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,gitconnect_api=debug,gitconnect_core=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    // Missing JWT_SECRET is fatal here, before anything binds or connects.
    let mut config = gitconnect_api::config::ApiConfig::from_env()?;
    if let Some(port) = args.port {
        config.bind_addr = format!("0.0.0.0:{port}");
    }

    info!(
        bind_addr = %config.bind_addr,
        max_connections = args.max_connections,
        "starting gitconnect_server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.pg_connection_url)
        .await?;

    info!("running database migrations");
    gitconnect_api::migrate(&pool).await?;

    let state = gitconnect_api::AppState {
        pool,
        config: config.clone(),
    };

    let app = gitconnect_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
