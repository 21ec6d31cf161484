use std::env;

/// Default tracing filter when neither `RUST_LOG` nor `LOG_FILTER` is set
pub const DEFAULT_LOG_FILTER: &str = "info,campus_records=debug";

/// Default sender address for student notifications
pub const DEFAULT_NOTIFICATION_FROM: &str = "registrar@university.local";

#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback `EnvFilter` directive used when `RUST_LOG` is absent
    pub log_filter: String,
    /// Address notifications are sent from
    pub notification_from: String,
    /// When false, notifications are discarded instead of emitted
    pub notifications_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notification_from: DEFAULT_NOTIFICATION_FROM.to_string(),
            notifications_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            log_filter: env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            notification_from: env::var("NOTIFICATION_FROM")
                .unwrap_or_else(|_| DEFAULT_NOTIFICATION_FROM.to_string()),
            notifications_enabled: env::var("NOTIFICATIONS_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

/// Lenient boolean parsing; anything unrecognised counts as enabled
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
