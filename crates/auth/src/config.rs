//! Guard configuration.
//!
//! Defaults reproduce the console's built-in catalog. A JSON document may
//! override any subset of fields; omitted fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use navguard_core::{GuardError, GuardResult};

use crate::catalog::{RouteCatalog, Whitelist};

pub const DEFAULT_REDIRECT_QUERY_KEY: &str = "redirect_uri";
pub const DEFAULT_EXTERNAL_FALLBACK_URL: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub catalog: RouteCatalog,
    pub whitelist: Whitelist,
    /// Query parameter carrying the URL to return to after signing in.
    pub redirect_query_key: String,
    /// Substituted when a role's login redirect resolves to an empty URL.
    pub external_fallback_url: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            catalog: RouteCatalog::default(),
            whitelist: Whitelist::default(),
            redirect_query_key: DEFAULT_REDIRECT_QUERY_KEY.to_string(),
            external_fallback_url: DEFAULT_EXTERNAL_FALLBACK_URL.to_string(),
        }
    }
}

impl GuardConfig {
    pub fn from_json_str(json: &str) -> GuardResult<Self> {
        let config: GuardConfig =
            serde_json::from_str(json).map_err(|e| GuardError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> GuardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GuardError::io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Reject catalogs on which the guard's own redirects would not settle.
    ///
    /// Anonymous users are sent to login, so login must be whitelisted.
    /// Signed-in users on login are sent to dashboard or redirect, so neither
    /// may be the login route.
    pub fn validate(&self) -> GuardResult<()> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::warn!(error = %err, "rejected guard configuration");
        }
        result
    }

    fn check(&self) -> GuardResult<()> {
        let login = &self.catalog.login;

        if !self.whitelist.allows(Some(login)) {
            return Err(GuardError::invalid_config(format!(
                "login route '{login}' must be whitelisted"
            )));
        }
        if self.catalog.dashboard == *login {
            return Err(GuardError::invalid_config(
                "dashboard route must differ from the login route",
            ));
        }
        if self.catalog.redirect == *login {
            return Err(GuardError::invalid_config(
                "redirect route must differ from the login route",
            ));
        }
        if self.redirect_query_key.is_empty() {
            return Err(GuardError::invalid_config("redirect query key is empty"));
        }
        if self.external_fallback_url.is_empty() {
            return Err(GuardError::invalid_config("external fallback url is empty"));
        }
        Ok(())
    }
}
