use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Default upload ceiling, matching the 5 MB limit the upload form enforces.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_TOP_N_ROLES: usize = 3;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub top_n_roles: usize,
    /// Directory for transient DOCX scratch files.
    pub scratch_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            top_n_roles: DEFAULT_TOP_N_ROLES,
            scratch_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let top_n_roles = parse_env("TOP_N_ROLES", defaults.top_n_roles)?;
        if top_n_roles == 0 {
            bail!("TOP_N_ROLES must be at least 1");
        }

        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            top_n_roles,
            scratch_dir: std::env::var_os("SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.scratch_dir),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid value, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
