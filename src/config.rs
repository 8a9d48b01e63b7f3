use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

/// Startup configuration that could not be parsed. Reported by `main`
/// before the listener is bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl Config {
    /// Reads `POSTFLOW_HOST` and `POSTFLOW_PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = match lookup("POSTFLOW_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "POSTFLOW_HOST",
                value,
            })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("POSTFLOW_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "POSTFLOW_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
        })
    }
}
