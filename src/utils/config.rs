/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env::{self, VarError};
use tracing::warn;

/// Keeps a configuration value only when it has content
///
/// Blank values, e.g. `POWERBI_BASE_URL=` in a `.env` file, count as unset.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads an environment variable
///
/// # Returns
/// The value, or `None` when the variable is unset, blank or not valid unicode
#[must_use]
pub fn get_env_or_none(env_var: &str) -> Option<String> {
    match env::var(env_var) {
        Ok(value) => non_empty(Some(value)),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            warn!("{} is not valid unicode, ignoring it", env_var);
            None
        }
    }
}

/// Reads an environment variable, falling back to `default` when unset or blank
#[must_use]
pub fn get_env_or_default(env_var: &str, default: &str) -> String {
    get_env_or_none(env_var).unwrap_or_else(|| default.to_string())
}
