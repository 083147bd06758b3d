use std::env::{var, VarError};

use super::EnvError;

pub fn get_env_var(key: &str) -> Result<String, EnvError> {
    var(key).map_err(|e| EnvError::EnvVar(e, key.to_owned()))
}

/// Falls back to `default` only when the variable is unset. A value that is
/// not valid unicode is still reported as an error.
pub fn get_env_var_or(key: &str, default: &str) -> Result<String, EnvError> {
    match get_env_var(key) {
        Err(EnvError::EnvVar(VarError::NotPresent, _)) => Ok(default.to_owned()),
        result => result,
    }
}
