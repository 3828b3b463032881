//! Facade configuration
//!
//! Read once when the facade is built and handed to its constructor; nothing
//! in the facade consults the environment at call time.

use serde::Deserialize;

use crate::errors::{CaseViewError, Result};

/// Environment variable holding the bypass flag
pub const ENV_BYPASS_AUTH_USER: &str = "CASEVIEW_BYPASS_AUTH_USER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeConfig {
    /// Trust the user name supplied by the caller instead of the
    /// authenticated identity. Only for back-office deployments.
    pub bypass_auth_user: bool,
}

impl FacadeConfig {
    pub fn with_bypass_auth_user(bypass_auth_user: bool) -> Self {
        Self { bypass_auth_user }
    }

    /// Parse from a TOML document; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML, unknown keys or wrong types.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CaseViewError::from(e).into())
    }

    /// Read `CASEVIEW_BYPASS_AUTH_USER`; unset or unparseable means `false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bypass_auth_user = lookup(ENV_BYPASS_AUTH_USER)
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);
        Self { bypass_auth_user }
    }
}

/// `true` in any letter case is true, everything else is false
fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}
