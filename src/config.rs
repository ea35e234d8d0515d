use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Notifications
    pub notifications_enabled: bool,
    pub log_notifications_enabled: bool,

    // Webhook destinations
    pub error_hook_url: String,
    pub log_hook_url: String,

    // Diagnostic context included in notification payloads
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Master toggle for all outbound notifications
            notifications_enabled: std::env::var("NOTIFICATIONS_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),

            // Log notifications are additionally gated by their own flag
            log_notifications_enabled: std::env::var("LOG_NOTIFICATIONS_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),

            error_hook_url: std::env::var("ERROR_HOOK_URL").unwrap_or_default(),
            log_hook_url: std::env::var("LOG_HOOK_URL").unwrap_or_default(),

            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "NOTIFICATIONS_ENABLED",
            "LOG_NOTIFICATIONS_ENABLED",
            "ERROR_HOOK_URL",
            "LOG_HOOK_URL",
            "ENVIRONMENT",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        clear_env();

        let config = Config::from_env().expect("Should build from empty env");
        assert!(!config.notifications_enabled);
        assert!(!config.log_notifications_enabled);
        assert!(config.error_hook_url.is_empty());
        assert!(config.log_hook_url.is_empty());
        assert_eq!(config.environment, "development");
    }

    #[test]
    #[serial]
    fn test_reads_all_variables() {
        clear_env();
        std::env::set_var("NOTIFICATIONS_ENABLED", "true");
        std::env::set_var("LOG_NOTIFICATIONS_ENABLED", "true");
        std::env::set_var("ERROR_HOOK_URL", "https://hooks.example.com/errors");
        std::env::set_var("LOG_HOOK_URL", "https://hooks.example.com/logs");
        std::env::set_var("ENVIRONMENT", "production");

        let config = Config::from_env().expect("Should build");
        assert!(config.notifications_enabled);
        assert!(config.log_notifications_enabled);
        assert_eq!(config.error_hook_url, "https://hooks.example.com/errors");
        assert_eq!(config.log_hook_url, "https://hooks.example.com/logs");
        assert_eq!(config.environment, "production");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_toggle_falls_back_to_disabled() {
        clear_env();
        std::env::set_var("NOTIFICATIONS_ENABLED", "yes please");

        let config = Config::from_env().expect("Should build");
        assert!(!config.notifications_enabled);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_clone() {
        clear_env();
        let config = Config::from_env().expect("Should build");
        let cloned = config.clone();

        assert_eq!(config.notifications_enabled, cloned.notifications_enabled);
        assert_eq!(config.error_hook_url, cloned.error_hook_url);
        assert_eq!(config.environment, cloned.environment);
    }
}
