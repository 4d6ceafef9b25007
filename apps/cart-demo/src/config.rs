//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// Demo run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Owner of the demo cart
    pub user_id: String,

    /// Loyalty level used for the bonus suggestion (unknown levels get 0%)
    pub loyalty_level: String,

    /// Apply the larger of the bulk and loyalty suggestions to the cart
    pub apply_suggested_discount: bool,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = DemoConfig {
            user_id: lookup("CART_USER_ID").unwrap_or_else(|| "demo-user".to_string()),

            loyalty_level: lookup("CART_LOYALTY_LEVEL").unwrap_or_else(|| "none".to_string()),

            apply_suggested_discount: lookup("CART_APPLY_SUGGESTED_DISCOUNT")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CART_APPLY_SUGGESTED_DISCOUNT".to_string()))?,
        };

        if config.user_id.is_empty() {
            return Err(ConfigError::InvalidValue("CART_USER_ID".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.user_id, "demo-user");
        assert_eq!(config.loyalty_level, "none");
        assert!(config.apply_suggested_discount);
    }

    #[test]
    fn test_overrides() {
        let config = load_with(&[
            ("CART_USER_ID", "user-7"),
            ("CART_LOYALTY_LEVEL", "Gold"),
            ("CART_APPLY_SUGGESTED_DISCOUNT", "false"),
        ])
        .unwrap();

        assert_eq!(config.user_id, "user-7");
        assert_eq!(config.loyalty_level, "Gold");
        assert!(!config.apply_suggested_discount);
    }

    #[test]
    fn test_invalid_flag() {
        let err = load_with(&[("CART_APPLY_SUGGESTED_DISCOUNT", "yes")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "CART_APPLY_SUGGESTED_DISCOUNT"));
    }

    #[test]
    fn test_empty_user_id() {
        let err = load_with(&[("CART_USER_ID", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "CART_USER_ID"));
        assert_eq!(err.to_string(), "Invalid value for CART_USER_ID");
    }
}
