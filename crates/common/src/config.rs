//! Application configuration

use std::env;

use chrono_tz::Tz;
use tracing::warn;

/// Civil timezone every "today" comparison is made in
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Timezone used to decide which calendar day "today" is
    pub timezone: Tz,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: env::var("TRACK_TIMEZONE")
                .ok()
                .map(|tz| parse_timezone(&tz))
                .unwrap_or(DEFAULT_TIMEZONE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

fn parse_timezone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        warn!(
            "Unknown TRACK_TIMEZONE {:?}, falling back to {}",
            name, DEFAULT_TIMEZONE
        );
        DEFAULT_TIMEZONE
    })
}
