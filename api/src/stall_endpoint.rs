//! Static configuration for reaching the stall backend.

use std::env;

use thiserror::Error;

const URL_VAR: &str = "STALL_API_URL";
const TOKEN_VAR: &str = "STALL_AUTH_TOKEN";

/// An error raised when the environment is missing a required setting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Where and how to reach the stall backend.
///
/// Both values are environment-supplied and static for the lifetime of
/// the process. The token travels inside every request body, not as an
/// HTTP header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StallEndpoint {
    pub url: String,
    pub auth_token: String,
}

impl StallEndpoint {
    /// Reads the endpoint settings from the environment.
    ///
    /// # Environment Variables
    /// - `STALL_API_URL`: the single POST endpoint serving all methods.
    /// - `STALL_AUTH_TOKEN`: the static token carried in each request body.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var(URL_VAR).ok(), env::var(TOKEN_VAR).ok())
    }

    fn from_values(
        url: Option<String>,
        auth_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = url
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(URL_VAR))?;
        let auth_token = auth_token
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(TOKEN_VAR))?;

        Ok(Self { url, auth_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_values_required() {
        let ok = StallEndpoint::from_values(
            Some("http://localhost:9000/rpc".into()),
            Some("token".into()),
        );
        assert_eq!(
            ok.unwrap(),
            StallEndpoint {
                url: "http://localhost:9000/rpc".into(),
                auth_token: "token".into(),
            }
        );

        let missing_url = StallEndpoint::from_values(None, Some("token".into()));
        assert_eq!(missing_url.unwrap_err(), ConfigError::MissingVar(URL_VAR));

        let blank_token =
            StallEndpoint::from_values(Some("http://localhost:9000/rpc".into()), Some("".into()));
        assert_eq!(blank_token.unwrap_err(), ConfigError::MissingVar(TOKEN_VAR));
    }
}
