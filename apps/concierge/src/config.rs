use anyhow::{Context, Result};

pub const DEFAULT_RESUME_SUMMARY: &str = "Cloud Solutions Architect with AWS expertise";
const DEFAULT_REGION: &str = "us-east-1";

/// Process-wide configuration, read once at startup.
/// Nothing in the request path reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    /// Embedded verbatim into every prompt.
    pub resume_summary: String,
    pub aws_region: String,
    /// Only used by the local HTTP surface.
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            resume_summary: lookup("RESUME_SUMMARY")
                .unwrap_or_else(|| DEFAULT_RESUME_SUMMARY.to_string()),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_vars(lookup_from(&[])).unwrap();
        assert_eq!(config.resume_summary, DEFAULT_RESUME_SUMMARY);
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_resume_summary_is_taken_verbatim() {
        let config = Config::from_vars(lookup_from(&[(
            "RESUME_SUMMARY",
            "  Platform engineer, 8 years of Kubernetes  ",
        )]))
        .unwrap();
        assert_eq!(
            config.resume_summary,
            "  Platform engineer, 8 years of Kubernetes  "
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_vars(lookup_from(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
