use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::intake::credential::DEFAULT_CREDENTIAL_LENGTH;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the site.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub backend: BackendConfig,
    pub intake: IntakeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let backend = BackendConfig::from_env()?;

        let credential_length = env::var("APPLICANT_CREDENTIAL_LENGTH")
            .unwrap_or_else(|_| DEFAULT_CREDENTIAL_LENGTH.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidCredentialLength)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            backend,
            intake: IntakeConfig { credential_length },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

const DEFAULT_APPLICATIONS_TABLE: &str = "applications";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection details for the hosted Supabase project.
#[derive(Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub applications_table: String,
    pub request_timeout: Duration,
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = required_var("SUPABASE_URL")?;
        let anon_key = required_var("SUPABASE_ANON_KEY")?;

        let applications_table = env::var("SUPABASE_APPLICATIONS_TABLE")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_APPLICATIONS_TABLE.to_string());

        let timeout_secs = env::var("SUPABASE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            applications_table,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// The anon key is a credential; keep it out of startup logs.
impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("applications_table", &self.applications_table)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Knobs for the application intake flow.
#[derive(Debug, Clone, Copy)]
pub struct IntakeConfig {
    pub credential_length: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            credential_length: DEFAULT_CREDENTIAL_LENGTH,
        }
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingVar(&'static str),
    InvalidTimeout,
    InvalidCredentialLength,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingVar(name) => write!(f, "{name} must be set"),
            ConfigError::InvalidTimeout => {
                write!(f, "SUPABASE_TIMEOUT_SECS must be a whole number of seconds")
            }
            ConfigError::InvalidCredentialLength => {
                write!(f, "APPLICANT_CREDENTIAL_LENGTH must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::MissingVar(_)
            | ConfigError::InvalidTimeout
            | ConfigError::InvalidCredentialLength => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "SUPABASE_URL",
            "SUPABASE_ANON_KEY",
            "SUPABASE_APPLICATIONS_TABLE",
            "SUPABASE_TIMEOUT_SECS",
            "APPLICANT_CREDENTIAL_LENGTH",
        ] {
            env::remove_var(name);
        }
    }

    fn set_backend_env() {
        env::set_var("SUPABASE_URL", "https://yaa.supabase.co/");
        env::set_var("SUPABASE_ANON_KEY", "anon-key");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        set_backend_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.backend.url, "https://yaa.supabase.co");
        assert_eq!(config.backend.applications_table, "applications");
        assert_eq!(config.backend.request_timeout, Duration::from_secs(10));
        assert_eq!(config.intake.credential_length, 24);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        set_backend_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn missing_supabase_url_is_reported() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SUPABASE_ANON_KEY", "anon-key");
        match AppConfig::load() {
            Err(ConfigError::MissingVar("SUPABASE_URL")) => {}
            other => panic!("expected missing SUPABASE_URL, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        set_backend_env();
        env::set_var("SUPABASE_TIMEOUT_SECS", "soon");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidTimeout)
        ));
    }

    #[test]
    fn debug_output_redacts_anon_key() {
        let config = BackendConfig {
            url: "https://yaa.supabase.co".to_string(),
            anon_key: "super-secret".to_string(),
            applications_table: "applications".to_string(),
            request_timeout: Duration::from_secs(5),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
