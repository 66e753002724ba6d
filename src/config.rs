//! Application configuration loaded from environment variables and flags.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags take priority over the environment.
//!
//! ```bash
//! export SERVER_ADDRESS=":8080"
//! export BASE_URL="http://localhost:8080"
//!
//! # or, equivalently
//! url-shortener -a :8080 -b http://localhost:8080
//! ```
//!
//! ## Variables
//!
//! - `SERVER_ADDRESS` - Bind address (default: `:8080`, all interfaces);
//!   `HTTP_PORT` is accepted as an alias
//! - `BASE_URL` - Prefix of returned short URLs (default: `http://localhost:8080`)
//! - `DEBUG` - `true`/`1` lowers the default log level to `debug`
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::net::SocketAddr;

const DEFAULT_LISTEN_ADDR: &str = ":8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Command-line overrides.
#[derive(Debug, Default, Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// HTTP server address (e.g. `:8888` or `127.0.0.1:8888`)
    #[arg(short = 'a', long = "address")]
    pub address: Option<String>,

    /// Base URL for shortened links (e.g. `http://localhost:8000`)
    #[arg(short = 'b', long = "base-url")]
    pub base_url: Option<String>,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub debug: bool,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let debug = env::var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let listen_addr = env::var("SERVER_ADDRESS")
            .or_else(|_| env::var("HTTP_PORT"))
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| {
            if debug { "debug" } else { "info" }.to_string()
        });

        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            debug,
            listen_addr,
            base_url,
            log_level,
            log_format,
        }
    }

    /// Applies command-line overrides on top of the environment values.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(address) = cli.address {
            self.listen_addr = address;
        }
        if let Some(base_url) = cli.base_url {
            self.base_url = base_url;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a `host:port` or `:port` socket address
    /// - `base_url` does not start with `http://` or `https://`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Resolves the listen address; a bare `:port` binds all interfaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        };

        addr.parse().with_context(|| {
            format!(
                "SERVER_ADDRESS must be in format 'host:port' or ':port', got '{}'",
                self.listen_addr
            )
        })
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Debug: {}", self.debug);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads configuration from the environment, applies `cli`, and validates it.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(cli: Cli) -> Result<Config> {
    let config = Config::from_env().with_cli(cli);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DEBUG",
        "SERVER_ADDRESS",
        "HTTP_PORT",
        "BASE_URL",
        "RUST_LOG",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn test_config() -> Config {
        Config {
            debug: false,
            listen_addr: ":8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:9000".to_string();
        assert!(config.validate().is_ok());

        config.base_url = "localhost:8080".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://s.example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_socket_addr_bare_port_binds_all_interfaces() {
        let config = test_config();

        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_cli_flags_parse() {
        let cli = Cli::try_parse_from(["url-shortener", "-a", ":8888", "-b", "http://s.test"])
            .unwrap();

        assert_eq!(cli.address.as_deref(), Some(":8888"));
        assert_eq!(cli.base_url.as_deref(), Some("http://s.test"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = test_config().with_cli(Cli {
            address: Some("127.0.0.1:8000".to_string()),
            base_url: None,
        });

        assert_eq!(config.listen_addr, "127.0.0.1:8000");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert!(!config.debug);
        assert_eq!(config.listen_addr, ":8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DEBUG", "true");
            env::set_var("HTTP_PORT", ":9090");
            env::set_var("BASE_URL", "https://s.example.com");
        }

        let config = Config::from_env();

        assert!(config.debug);
        assert_eq!(config.listen_addr, ":9090");
        assert_eq!(config.base_url, "https://s.example.com");
        assert_eq!(config.log_level, "debug");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_server_address_priority() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SERVER_ADDRESS", "127.0.0.1:7000");
            env::set_var("HTTP_PORT", ":9090");
        }

        let config = Config::from_env();

        // SERVER_ADDRESS should take priority
        assert_eq!(config.listen_addr, "127.0.0.1:7000");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_applies_cli_over_env() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BASE_URL", "http://from-env");
        }

        let config = load(Cli {
            address: None,
            base_url: Some("http://from-flag".to_string()),
        })
        .unwrap();

        assert_eq!(config.base_url, "http://from-flag");

        clear_env();
    }
}
