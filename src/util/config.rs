//! Build-time shell configuration.
//!
//! The shell runs in the browser, so overrides are read from the build
//! environment (`option_env!`). Missing or unparseable values fall back to
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use crate::state::bootstrap::DEFAULT_BOOTSTRAP_DELAY_MS;
use crate::state::notifications::DEFAULT_ALERT_TTL_MS;
use crate::util::theme::Theme;

const DEFAULT_API_BASE: &str = "/api/auth";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Base path of the identity backend's REST surface.
    pub api_base: String,
    pub bootstrap_delay_ms: u32,
    pub alert_ttl_ms: u64,
    /// Resolved once at startup and passed down.
    pub theme: Theme,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            bootstrap_delay_ms: DEFAULT_BOOTSTRAP_DELAY_MS,
            alert_ttl_ms: DEFAULT_ALERT_TTL_MS,
            theme: Theme::Light,
        }
    }
}

impl ShellConfig {
    /// Load from `QUIZ_SHELL_API_BASE`, `QUIZ_SHELL_BOOTSTRAP_DELAY_MS` and
    /// `QUIZ_SHELL_ALERT_TTL_MS` captured at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("QUIZ_SHELL_API_BASE"),
            option_env!("QUIZ_SHELL_BOOTSTRAP_DELAY_MS"),
            option_env!("QUIZ_SHELL_ALERT_TTL_MS"),
        )
    }

    fn from_values(api_base: Option<&str>, bootstrap_delay_ms: Option<&str>, alert_ttl_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map_or(defaults.api_base, str::to_owned),
            bootstrap_delay_ms: parse_or(bootstrap_delay_ms, defaults.bootstrap_delay_ms),
            alert_ttl_ms: parse_or(alert_ttl_ms, defaults.alert_ttl_ms),
            theme: defaults.theme,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
