/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets a required environment variable, failing when it is absent or empty
///
/// Credentials and tenant identifiers have no sensible defaults, so missing
/// values surface as configuration errors instead of placeholder strings.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// * `Ok(String)` - The trimmed value
/// * `Err(AppError)` - If the variable is unset or blank
pub fn get_env_required(env_var: &str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            Err(AppError::Config(format!("{env_var} must be set")))
        }
    }
}
