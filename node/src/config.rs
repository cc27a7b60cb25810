// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Node configuration, read once at startup.
//!
//! The store endpoint and credential are required: the node refuses to start
//! without them instead of failing on the first store call.

use std::net::SocketAddr;

use thiserror::Error;

pub const ENV_STORE_URL: &str = "ONEMIL_STORE_URL";
pub const ENV_SERVICE_KEY: &str = "ONEMIL_SERVICE_KEY";
pub const ENV_BIND_ADDR: &str = "ONEMIL_BIND_ADDR";
pub const ENV_RNG_SEED: &str = "ONEMIL_RNG_SEED";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Base URL of the hosted store.
    pub store_url: String,
    /// Privileged access credential for the store.
    pub service_key: String,
    pub bind_addr: SocketAddr,
    /// Optional fixed seed for the event generators. Unset in production so
    /// every run produces a fresh batch; set it to reproduce a run exactly.
    pub rng_seed: Option<u64>,
}

impl NodeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_url = require(ENV_STORE_URL)?;
        let service_key = require(ENV_SERVICE_KEY)?;

        let bind_addr = match std::env::var(ENV_BIND_ADDR) {
            Ok(raw) => raw.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidVar {
                    var: ENV_BIND_ADDR,
                    message: e.to_string(),
                }
            })?,
            Err(_) => DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address parses"),
        };

        let rng_seed = match std::env::var(ENV_RNG_SEED) {
            Ok(raw) => Some(raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    var: ENV_RNG_SEED,
                    message: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self {
            store_url,
            service_key,
            bind_addr,
            rng_seed,
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(ConfigError::MissingVar(var)),
    }
}
