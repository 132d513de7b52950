use crate::config::types::{Config, CrawlerConfig, EmbedderConfig, IndexConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_embedder_config(&config.embedder)?;
    validate_index_config(&config.index)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be >= 1, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    for ext in &config.denied_extensions {
        if ext.is_empty() || ext.contains('.') {
            return Err(ConfigError::Validation(format!(
                "denied extension must be a bare suffix without dots, got '{}'",
                ext
            )));
        }
    }

    Ok(())
}

/// Validates embedding service configuration
fn validate_embedder_config(config: &EmbedderConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.endpoint)
        .map_err(|_| ConfigError::InvalidUrl(config.endpoint.clone()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "embedder endpoint must be http(s), got {}",
            config.endpoint
        )));
    }

    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation(
            "embedder model cannot be empty".to_string(),
        ));
    }

    if config.dimension < 1 {
        return Err(ConfigError::Validation(format!(
            "embedder dimension must be >= 1, got {}",
            config.dimension
        )));
    }

    if config.max_retries < 1 {
        return Err(ConfigError::Validation(format!(
            "embedder max_retries must be >= 1, got {}",
            config.max_retries
        )));
    }

    Ok(())
}

/// Validates index configuration
fn validate_index_config(config: &IndexConfig) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.crawler.fetch_timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_extension_with_dot_rejected() {
        let mut config = Config::default();
        config.crawler.denied_extensions.push(".pdf".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_deny_list_allowed() {
        let mut config = Config::default();
        config.crawler.denied_extensions.clear();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let mut config = Config::default();
        config.embedder.endpoint = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let mut config = Config::default();
        config.embedder.endpoint = "ftp://example.com/embed".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = Config::default();
        config.embedder.dimension = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let mut config = Config::default();
        config.index.database_path = "".to_string();
        assert!(validate(&config).is_err());
    }
}
