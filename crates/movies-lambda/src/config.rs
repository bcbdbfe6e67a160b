//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{bail, Result};

/// How the process is hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Registered with the AWS Lambda runtime API
    Lambda,
    /// Plain HTTP server for development
    Local,
}

impl FromStr for RunMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lambda" => Ok(RunMode::Lambda),
            "local" => Ok(RunMode::Local),
            other => bail!("unknown MOVIES_LAMBDA_MODE {:?} (expected \"lambda\" or \"local\")", other),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hosting mode
    pub mode: RunMode,

    /// Bind address for the local server
    pub bind_addr: String,

    /// Port for the local server
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mode = match lookup("MOVIES_LAMBDA_MODE") {
            Some(value) => value.parse()?,
            // The Lambda runtime always sets this for the function process
            None if lookup("AWS_LAMBDA_RUNTIME_API").is_some() => RunMode::Lambda,
            None => RunMode::Local,
        };

        Ok(Self {
            mode,

            bind_addr: lookup("MOVIES_LAMBDA_BIND")
                .unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("MOVIES_LAMBDA_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        })
    }

    /// Address the local server listens on
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_outside_lambda() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.mode, RunMode::Local);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_detects_lambda_runtime() {
        let config = config_from(&[("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001")]).unwrap();
        assert_eq!(config.mode, RunMode::Lambda);
    }

    #[test]
    fn test_explicit_mode_wins() {
        let config = config_from(&[
            ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
            ("MOVIES_LAMBDA_MODE", "Local"),
            ("MOVIES_LAMBDA_BIND", "127.0.0.1"),
            ("MOVIES_LAMBDA_PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.mode, RunMode::Local);
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = config_from(&[("MOVIES_LAMBDA_PORT", "not-a-port")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        assert!(config_from(&[("MOVIES_LAMBDA_MODE", "kubernetes")]).is_err());
    }
}
