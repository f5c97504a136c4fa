use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP listener configuration, read explicitly from the environment.
///
/// Port 0 is valid and asks the OS for an ephemeral port; tests rely on this
/// to run real listeners without colliding.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpConfig {
    /// Read `CHECKOUT_HOST` / `CHECKOUT_PORT`, falling back to defaults.
    ///
    /// An unparseable port is a configuration error, not a panic.
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("CHECKOUT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("CHECKOUT_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("CHECKOUT_PORT must be a valid port number, got {raw:?}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Loopback config on an ephemeral port, for tests.
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_interfaces() {
        let config = HttpConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_config_uses_ephemeral_port() {
        let config = HttpConfig::for_tests();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 0);
    }
}
