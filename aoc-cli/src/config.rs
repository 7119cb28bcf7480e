//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use zeroize::Zeroizing;

/// Environment variable holding the session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Resolved runtime configuration
pub struct Config {
    pub year: u16,
    pub day: u8,
    /// Cache root, `None` when caching is disabled
    pub cache_dir: Option<PathBuf>,
    pub timeout: Duration,
    /// Session key (zeroized on drop)
    pub session: Zeroizing<String>,
}

impl Config {
    /// Build config from CLI args, resolving the session
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let cache_dir = resolve_cache_dir(&args.cache_dir, args.no_cache);
        let session = resolve_session(std::env::var(SESSION_ENV).ok())?;

        Ok(Config {
            year: args.year,
            day: args.day,
            cache_dir,
            timeout: Duration::from_secs(args.timeout),
            session,
        })
    }
}

/// Cache root to use, if any
fn resolve_cache_dir(cache_dir: &Path, no_cache: bool) -> Option<PathBuf> {
    (!no_cache).then(|| expand_tilde(cache_dir))
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.strip_prefix("~/").unwrap_or(""));
    }
    path.to_path_buf()
}

/// Use the session from the environment, prompting when it is absent or empty
fn resolve_session(env_session: Option<String>) -> Result<Zeroizing<String>, CliError> {
    match env_session {
        Some(s) if !s.trim().is_empty() => Ok(Zeroizing::new(s.trim().to_string())),
        _ => prompt_session("No AOC_SESSION set; a session token is required to fetch inputs"),
    }
}

/// Prompt user for session token
fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session key: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    if s.is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(Zeroizing::new(s))
}
