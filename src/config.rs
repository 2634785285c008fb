use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Artificial latency awaited before each mutation is applied.
    pub simulated_delay: Duration,
    /// Start with the demo accounts instead of an empty directory.
    pub seed_demo_users: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            simulated_delay: Duration::ZERO,
            seed_demo_users: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = lookup("APP_HOST").unwrap_or(defaults.host);
        let port = match lookup("APP_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("APP_PORT must be a port number, got {v:?}"))?,
            None => defaults.port,
        };
        let simulated_delay = match lookup("SIMULATED_DELAY_MS") {
            Some(v) => Duration::from_millis(
                v.trim()
                    .parse::<u64>()
                    .with_context(|| format!("SIMULATED_DELAY_MS must be milliseconds, got {v:?}"))?,
            ),
            None => defaults.simulated_delay,
        };
        let seed_demo_users = match lookup("SEED_DEMO_USERS") {
            Some(v) => parse_bool(&v)
                .with_context(|| format!("SEED_DEMO_USERS must be a boolean, got {v:?}"))?,
            None => defaults.seed_demo_users,
        };
        Ok(Self {
            host,
            port,
            simulated_delay,
            seed_demo_users,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr: SocketAddr = format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))?;
        Ok(addr)
    }
}

fn parse_bool(v: &str) -> anyhow::Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("not a boolean"),
    }
}
