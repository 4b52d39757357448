use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Ranking weights, thresholds and confidences
/// - Result window is not empty
/// - Configured external clients carry an API key
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.addon.top_n == 0 {
        return Err(ConfigError::ValidationError(
            "addon.top_n cannot be 0".to_string(),
        ));
    }

    config
        .ranking
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("ranking: {}", e)))?;

    if let Some(omdb) = &config.title_lookup {
        if omdb.api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "title_lookup.api_key cannot be empty".to_string(),
            ));
        }
    }

    if let Some(debrid) = &config.debrid {
        if debrid.api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "debrid.api_key cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RealDebridConfig, ServerConfig};
    use std::net::IpAddr;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse::<IpAddr>().unwrap(),
                port: 0,
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_top_n_zero_fails() {
        let mut config = Config::default();
        config.addon.top_n = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_ranking_errors_are_prefixed() {
        let mut config = Config::default();
        config.ranking.weights.title = 0.5;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("ranking: weights must sum"), "{}", err);
    }

    #[test]
    fn test_validate_empty_debrid_key_fails() {
        let config = Config {
            debrid: Some(RealDebridConfig {
                api_key: "  ".to_string(),
                base_url: "http://localhost".to_string(),
                timeout_secs: 5,
            }),
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("debrid.api_key"));
    }
}
