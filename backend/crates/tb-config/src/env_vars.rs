//! Helpers for reading `TB_*` environment variables

use crate::{ConfigError, ConfigErrorResult};

use std::str::FromStr;

/// Read a variable that must be present and non-empty
pub(crate) fn required_var(
    name: &'static str,
    description: &'static str,
) -> ConfigErrorResult<String> {
    optional_var(name).ok_or(ConfigError::MissingVar { name, description })
}

/// Read a variable, treating empty values as unset
pub(crate) fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read and parse a variable, keeping `default` when unset
pub(crate) fn parsed_var<T>(name: &'static str, default: T) -> ConfigErrorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(name) {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            message: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Apply environment variable override for bool values (accepts "true"/"1")
pub(crate) fn apply_env_bool(name: &str, target: &mut bool) {
    if let Some(val) = optional_var(name) {
        *target = val == "true" || val == "1";
    }
}

/// Apply environment variable override for values whose parse cannot fail meaningfully
pub(crate) fn apply_env_parse<T: FromStr>(name: &str, target: &mut T) {
    if let Some(val) = optional_var(name)
        && let Ok(parsed) = val.parse()
    {
        *target = parsed;
    }
}
