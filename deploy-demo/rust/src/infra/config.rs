use std::{
    fmt::{Debug, Display},
    net::{IpAddr, SocketAddr},
};

use super::env::Environment;

pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_PORT: u16 = 5000;
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(thiserror::Error, Debug)]
pub(crate) enum ConfigError {
    #[error("invalid PORT value {0:?}: {1}")]
    InvalidPort(String, std::num::ParseIntError),
    #[error("invalid HOST value {0:?}: {1}")]
    InvalidHost(String, std::net::AddrParseError),
}

pub(crate) struct Config {
    inner: Box<ConfigInner>,
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl Config {
    pub(crate) fn load(env: &dyn Environment) -> Result<Self, ConfigError> {
        let host = env.var_or("HOST", DEFAULT_HOST);
        let host: IpAddr = host.parse().map_err(|e| ConfigError::InvalidHost(host, e))?;

        let port = match env.var("PORT") {
            Some(port) => port.trim().parse().map_err(|e| ConfigError::InvalidPort(port, e))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            inner: Box::new(ConfigInner {
                address: SocketAddr::new(host, port),
                log_level: env.var_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            }),
        })
    }

    pub(crate) fn get_address(&self) -> SocketAddr {
        self.inner.address
    }

    pub(crate) fn get_log_level(&self) -> &str {
        &self.inner.log_level
    }
}

#[derive(Debug)]
struct ConfigInner {
    address: SocketAddr,
    log_level: String,
}
