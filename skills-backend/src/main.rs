// src/main.rs
use migration::{Migrator, MigratorTrait};
use skills_backend::api::AppState;
use skills_backend::app_router;
use skills_backend::config::AppConfig;
use skills_backend::db::create_db_pool;
use skills_backend::utils::jwt::JwtManager;
use skills_backend::utils::password::PasswordManager;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skills_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Skills Backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config.database).await?;
    tracing::info!("Database pool created successfully.");

    if app_config.database.run_migrations {
        Migrator::up(&db_pool, None).await?;
        tracing::info!("Database migrations applied.");
    }

    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone())?);
    let password_manager = Arc::new(PasswordManager::from_env()?);

    let app_state = AppState::new(db_pool, jwt_manager, password_manager);
    let app = app_router(app_state, &app_config);

    // サーバーの起動
    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!("Server listening on {}", app_config.server_addr());

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
