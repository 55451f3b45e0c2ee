use std::sync::Arc;

use crate::server::{config::Config, error::AppError, service::calendar::CalendarSync};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations so
/// the schema is up-to-date before the application accesses it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outbound calendar requests.
///
/// Redirects are disabled; the calendar API never redirects and following
/// one would only mask a misconfigured base URL.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Constructs the calendar-sync collaborator with its dependencies.
pub fn setup_calendar_sync(
    db: sea_orm::DatabaseConnection,
    http_client: reqwest::Client,
    config: &Config,
) -> Arc<CalendarSync> {
    Arc::new(CalendarSync::new(
        db,
        http_client,
        config.calendar.clone(),
    ))
}
