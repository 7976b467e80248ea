use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub resend_api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub read_token: Option<String>,
    pub use_cdn: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub frontend_dist: PathBuf,
    pub sentry_dsn: Option<String>,
    pub mail: MailConfig,
    pub sanity: SanityConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let use_cdn = match get("SANITY_USE_CDN") {
            None => true,
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                key: "SANITY_USE_CDN",
                value: v,
            })?,
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            frontend_dist: get("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../frontend/dist")),
            sentry_dsn: get("SENTRY_DSN"),
            mail: MailConfig {
                resend_api_key: required("RESEND_API_KEY")?,
                from: get("CONTACT_FROM").unwrap_or_else(|| "onboarding@resend.dev".to_string()),
                to: required("CONTACT_TO")?,
            },
            sanity: SanityConfig {
                project_id: required("SANITY_PROJECT_ID")?,
                dataset: required("SANITY_DATASET")?,
                api_version: required("SANITY_API_VERSION")?
                    .trim_start_matches('v')
                    .to_string(),
                read_token: get("SANITY_READ_TOKEN"),
                use_cdn,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("RESEND_API_KEY", "re_test"),
            ("CONTACT_TO", "studio@example.com"),
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "production"),
            ("SANITY_API_VERSION", "v2024-06-01"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_fill_optional_values() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.frontend_dist, PathBuf::from("../frontend/dist"));
        assert_eq!(config.mail.from, "onboarding@resend.dev");
        assert_eq!(config.sanity.api_version, "2024-06-01");
        assert!(config.sanity.use_cdn);
        assert!(config.sanity.read_token.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn missing_required_var_is_named() {
        let mut vars = base_env();
        vars.remove("CONTACT_TO");
        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("CONTACT_TO"));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut vars = base_env();
        vars.insert("SANITY_DATASET", "  ");
        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("SANITY_DATASET"));
    }

    #[test]
    fn cdn_flag_is_parsed() {
        let mut vars = base_env();
        vars.insert("SANITY_USE_CDN", "false");
        assert!(!load(&vars).unwrap().sanity.use_cdn);
        vars.insert("SANITY_USE_CDN", "sometimes");
        assert!(matches!(load(&vars), Err(ConfigError::Invalid { key: "SANITY_USE_CDN", .. })));
    }
}
