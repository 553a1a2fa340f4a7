use std::time::Duration;

/// Settings for a demo run, read from the environment
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Seed for the guessing game; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Debounce delay (default: 1000ms)
    pub debounce_delay: Duration,
    /// Guessing game attempt bound (default: 10)
    pub max_attempts: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            debounce_delay: Duration::from_millis(1000),
            max_attempts: 10,
        }
    }
}

impl DemoConfig {
    /// Create a configuration from environment variables.
    ///
    /// Reads:
    /// - `UTILKIT_SEED` - Guessing game seed (random if unset or invalid)
    /// - `UTILKIT_DEBOUNCE_MS` - Debounce delay in milliseconds (default 1000)
    /// - `UTILKIT_MAX_ATTEMPTS` - Guessing game attempt bound (default 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let seed = std::env::var("UTILKIT_SEED")
            .ok()
            .and_then(|s| s.parse().ok());
        let debounce_delay = std::env::var("UTILKIT_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce_delay);
        let max_attempts = std::env::var("UTILKIT_MAX_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_attempts);

        Self {
            seed,
            debounce_delay,
            max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.debounce_delay, Duration::from_millis(1000));
        assert_eq!(config.max_attempts, 10);
    }

    #[test]
    fn test_from_env_debounce_delay() {
        // Both cases share one test so the variable is never set concurrently
        std::env::set_var("UTILKIT_DEBOUNCE_MS", "250");
        let configured = DemoConfig::from_env();
        std::env::set_var("UTILKIT_DEBOUNCE_MS", "not-a-number");
        let fallback = DemoConfig::from_env();
        std::env::remove_var("UTILKIT_DEBOUNCE_MS");

        assert_eq!(configured.debounce_delay, Duration::from_millis(250));
        assert_eq!(fallback.debounce_delay, DemoConfig::default().debounce_delay);
    }
}
