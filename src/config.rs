use std::net::SocketAddr;

use anyhow::{anyhow, Context};
use tracing::Level;

use crate::routes::{SIGNIN_PATH, SIGNOUT_PATH, SIGNUP_PATH};

const RESERVED_PATHS: [&str; 3] = [SIGNIN_PATH, SIGNUP_PATH, SIGNOUT_PATH];
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_HOME_PATH: &str = "/home";
/// Two weeks, in seconds.
const DEFAULT_SESSION_COOKIE_AGE: i64 = 60 * 60 * 24 * 7 * 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Where a successful sign-in redirects to.
    pub home_path: String,
    pub session_cookie_secure: bool,
    pub session_cookie_age: i64,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let home_path = lookup("HOME_PATH").unwrap_or_else(|| DEFAULT_HOME_PATH.to_string());
        if !home_path.starts_with('/') {
            return Err(anyhow!("HOME_PATH must start with '/'"));
        }
        if RESERVED_PATHS.contains(&home_path.as_str()) {
            return Err(anyhow!("HOME_PATH `{}` collides with an auth route", home_path));
        }

        let session_cookie_secure = match lookup("SESSION_COOKIE_SECURE") {
            Some(v) => parse_bool(&v).context("SESSION_COOKIE_SECURE must be true or false")?,
            None => false,
        };

        let session_cookie_age = match lookup("SESSION_COOKIE_AGE") {
            Some(v) => v
                .parse()
                .context("SESSION_COOKIE_AGE must be a number of seconds")?,
            None => DEFAULT_SESSION_COOKIE_AGE,
        };

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .parse()
            .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?;

        Ok(Config {
            database_url,
            bind_addr,
            home_path,
            session_cookie_secure,
            session_cookie_age,
            log_level,
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(anyhow!("unrecognized boolean `{}`", other)),
    }
}
