use crate::config::ConfigError;
use crate::intake::SupabaseClientError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Backend(SupabaseClientError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Backend(err) => write!(f, "backend client error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Backend(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SupabaseClientError> for AppError {
    fn from(value: SupabaseClientError) -> Self {
        Self::Backend(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_exposes_the_wrapped_error() {
        use std::error::Error;

        let err = AppError::from(ConfigError::MissingVar("SUPABASE_URL"));
        let source = err.source().expect("config error is the source");
        assert_eq!(source.to_string(), "SUPABASE_URL must be set");
    }

    #[test]
    fn display_names_the_failing_layer() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "port taken",
        ));
        assert_eq!(err.to_string(), "io error: port taken");
    }
}
