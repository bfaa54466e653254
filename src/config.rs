//! Process configuration, read once from the environment at startup.
//!
//! | variable | required | meaning |
//! |---|---|---|
//! | `SUPABASE_URL` | yes | REST endpoint of the cars table, e.g. `https://xyz.supabase.co/rest/v1/cars` |
//! | `SUPABASE_ANON_KEY` | yes | static credential sent as `apikey` and bearer token |
//! | `PORT` | no | listen port, default `8080` |

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::{Error, Result};

pub const STORE_URL_VAR: &str = "SUPABASE_URL";
pub const API_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 8080;

/// Immutable configuration shared by the transport and the server.
#[derive(Clone)]
pub struct Config {
    pub store_url: String,
    pub api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty values
    /// count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(Error::ConfigurationMissing { key })
        };

        let store_url = required(STORE_URL_VAR)?;
        let api_key = required(API_KEY_VAR)?;

        let port = match lookup(PORT_VAR).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| Error::ConfigurationInvalid {
                key: PORT_VAR,
                value: raw,
            })?,
        };

        Ok(Self { store_url, api_key, port })
    }

    /// All interfaces, configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("store_url", &self.store_url)
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn port_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[
            (STORE_URL_VAR, "https://db.example/rest/v1/cars"),
            (API_KEY_VAR, "anon"),
        ]))
        .unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn explicit_port_is_used() {
        let config = Config::from_lookup(lookup(&[
            (STORE_URL_VAR, "https://db.example/rest/v1/cars"),
            (API_KEY_VAR, "anon"),
            (PORT_VAR, "10000"),
        ]))
        .unwrap();

        assert_eq!(config.port, 10000);
    }

    #[test]
    fn missing_or_empty_required_values_fail() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "anon")])).unwrap_err();
        assert!(matches!(err, Error::ConfigurationMissing { key: STORE_URL_VAR }));

        let err = Config::from_lookup(lookup(&[
            (STORE_URL_VAR, "https://db.example/rest/v1/cars"),
            (API_KEY_VAR, ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigurationMissing { key: API_KEY_VAR }));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            (STORE_URL_VAR, "https://db.example/rest/v1/cars"),
            (API_KEY_VAR, "anon"),
            (PORT_VAR, "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigurationInvalid { key: PORT_VAR, .. }));
    }

    #[test]
    fn debug_redacts_key() {
        let config = Config {
            store_url: "u".into(),
            api_key: "secret".into(),
            port: 1,
        };
        assert!(!format!("{config:?}").contains("secret"));
    }
}
