//! Client-facing settings resolved on the server at startup.

use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

const POLL_SECS_VAR: &str = "STALL_POLL_SECS";
const DEFAULT_POLL_SECS: u64 = 5;

/// Settings handed to the UI once per session.
///
/// In the future this may read from a settings file. For now it reads
/// from env vars with in-code defaults.
///
/// # Environment Variables
/// - `STALL_POLL_SECS`: seconds between totals polls. Defaults to 5.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ClientPrefs {
    poll_interval_secs: u64,
}

impl ClientPrefs {
    pub fn from_env() -> Self {
        Self {
            poll_interval_secs: parse_poll_secs(env::var(POLL_SECS_VAR).ok()),
        }
    }

    /// How long the totals poller waits between ticks.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for ClientPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Missing, unparseable, or zero values fall back to the default.
fn parse_poll_secs(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_POLL_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_secs_fall_back_to_default() {
        assert_eq!(parse_poll_secs(None), 5);
        assert_eq!(parse_poll_secs(Some("".into())), 5);
        assert_eq!(parse_poll_secs(Some("soon".into())), 5);
        assert_eq!(parse_poll_secs(Some("0".into())), 5);
    }

    #[test]
    fn explicit_poll_secs_win() {
        assert_eq!(parse_poll_secs(Some("2".into())), 2);
        assert_eq!(
            ClientPrefs {
                poll_interval_secs: 2
            }
            .poll_interval(),
            Duration::from_secs(2)
        );
    }
}
