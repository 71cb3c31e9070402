use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub rust_log: String,
    /// `["*"]` means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            cors_allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            cors_allowed_origins: match std::env::var("CORS_ALLOWED_ORIGINS") {
                Ok(v) => parse_origins(&v),
                Err(_) => defaults.cors_allowed_origins,
            },
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => defaults.max_upload_bytes,
            },
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

/// Splits a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:3000"]);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test", "http://b.test"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_wildcard_origin() {
        let config = Config {
            cors_allowed_origins: parse_origins("*"),
            ..Config::default()
        };
        assert!(config.allows_any_origin());
    }
}
