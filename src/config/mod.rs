//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, DEFAULT_API_BASE_URL, DEFAULT_SEARCH_PER_PAGE, MAX_SEARCH_PER_PAGE,
};

use std::fmt;

/// GitHub token, read once at startup and never written anywhere.
///
/// `Debug` output is redacted so the token cannot leak into the log file.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an environment value. Unset and empty values mean "no credential".
    pub fn from_env_value(value: Option<String>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Credential)
    }

    /// The raw token, for building the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
