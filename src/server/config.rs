use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_CALENDAR_API_URL: &str = "https://www.googleapis.com/calendar/v3";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub calendar: CalendarConfig,
}

/// External calendar collaborator settings.
///
/// Sync is opt-in: with `enabled` false the post-commit hook short-circuits
/// and bookings never touch the network.
#[derive(Clone, Debug)]
pub struct CalendarConfig {
    pub enabled: bool,
    pub api_base_url: String,
    pub default_calendar_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            calendar: CalendarConfig {
                enabled: std::env::var("GOOGLE_CALENDAR_ENABLED")
                    .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
                api_base_url: std::env::var("GOOGLE_CALENDAR_API_URL")
                    .unwrap_or_else(|_| DEFAULT_CALENDAR_API_URL.to_string()),
                default_calendar_id: std::env::var("GOOGLE_DEFAULT_CALENDAR_ID").ok(),
            },
        })
    }
}
