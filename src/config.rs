//! Runtime configuration from environment variables.

use crate::models::RosterMode;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// `HOST`, default `0.0.0.0` so the app is reachable on a VPS.
    pub host: String,
    /// `PORT`, default 8080.
    pub port: u16,
    /// `REVEAL_DELAY_MS`: suspense before a drawn card is shown (0 allowed).
    pub reveal_delay: Duration,
    /// `EDIT_STORE_DIR`: where edits are saved; unset means no store.
    pub edit_store_dir: Option<PathBuf>,
    /// `SESSION_TTL_HOURS`: auctions idle this long are dropped.
    pub session_ttl: Duration,
    /// `ROSTER_MODE` (`rounds` or `flat`) for auctions created without one.
    pub default_mode: RosterMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            reveal_delay: Duration::from_millis(1500),
            edit_store_dir: None,
            session_ttl: Duration::from_secs(12 * 3600),
            default_mode: RosterMode::Rounds,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            reveal_delay: parsed("REVEAL_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.reveal_delay),
            edit_store_dir: lookup("EDIT_STORE_DIR")
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            session_ttl: parsed("SESSION_TTL_HOURS")
                .map(|h| Duration::from_secs(h * 3600))
                .unwrap_or(defaults.session_ttl),
            default_mode: lookup("ROSTER_MODE")
                .and_then(|m| m.parse().ok())
                .unwrap_or(defaults.default_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let env: HashMap<&str, &str> = [
            ("PORT", "not-a-port"),
            ("REVEAL_DELAY_MS", "0"),
            ("ROSTER_MODE", "flat"),
            ("EDIT_STORE_DIR", ""),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.reveal_delay, Duration::ZERO);
        assert_eq!(config.default_mode, RosterMode::Flat);
        assert_eq!(config.edit_store_dir, None);
        assert_eq!(config.host, "0.0.0.0");
    }
}
