use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Signing secret. Left unset, login fails per request instead of at startup.
    pub secret: Option<String>,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub bcrypt_cost: u32,
    pub base_path: String,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            ttl_minutes: parse_or(std::env::var("JWT_TTL_MINUTES").ok(), 60 * 24),
        };
        Ok(Self {
            database_url,
            jwt,
            bcrypt_cost: parse_or(std::env::var("BCRYPT_COST").ok(), DEFAULT_BCRYPT_COST),
            base_path: normalize_base_path(
                &std::env::var("AUTH_BASE_PATH").unwrap_or_else(|_| "/api/auth".into()),
            ),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_or(std::env::var("APP_PORT").ok(), 8080),
            log_format: LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref()),
        })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .with_context(|| format!("APP_HOST {:?} is not an IP address", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Leading slash, no trailing slash; the root mount comes back as "".
pub(crate) fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
