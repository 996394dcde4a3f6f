use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_SESSION_FILE: &str = ".securebank_session";

/// How long each simulated back-end call takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub session_check: Duration,
    pub login: Duration,
    pub biometric_scan: Duration,
    pub biometric_handoff: Duration,
    pub transfer: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            session_check: Duration::from_millis(1000),
            login: Duration::from_millis(1000),
            biometric_scan: Duration::from_millis(1500),
            biometric_handoff: Duration::from_millis(500),
            transfer: Duration::from_millis(2000),
        }
    }
}

impl Delays {
    pub fn none() -> Self {
        Self {
            session_check: Duration::ZERO,
            login: Duration::ZERO,
            biometric_scan: Duration::ZERO,
            biometric_handoff: Duration::ZERO,
            transfer: Duration::ZERO,
        }
    }
}

/// Replays a CSV script of dashboard actions against the seeded bank
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "securebank_dashboard", version, about, long_about = None)]
pub struct Config {
    /// Script with one `action,target,value` row per user action
    pub events: PathBuf,

    /// File holding the signed-in flag between runs
    #[arg(
        long = "session",
        value_name = "PATH",
        env = "SECUREBANK_SESSION",
        default_value = DEFAULT_SESSION_FILE
    )]
    pub session_file: PathBuf,

    /// Skip the simulated back-end delays
    #[arg(long)]
    pub instant: bool,
}

impl Config {
    pub fn delays(&self) -> Delays {
        if self.instant {
            Delays::none()
        } else {
            Delays::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("securebank_dashboard").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&["events.csv"]).unwrap();
        assert_eq!(config.events, PathBuf::from("events.csv"));
        assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
        assert_eq!(config.delays(), Delays::default());
        assert_eq!(config.delays().transfer, Duration::from_secs(2));
    }

    #[test]
    fn flags_in_any_order() {
        let config = parse(&["--instant", "run.csv", "--session", "/tmp/s"]).unwrap();
        assert_eq!(config.events, PathBuf::from("run.csv"));
        assert_eq!(config.session_file, PathBuf::from("/tmp/s"));
        assert_eq!(config.delays(), Delays::none());
    }

    #[test]
    fn usage_errors() {
        let kind = |args: &[&str]| parse(args).unwrap_err().kind();
        assert_eq!(kind(&[]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["a.csv", "--session"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["a.csv", "--fast"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["a.csv", "b.csv"]), ErrorKind::UnknownArgument);
    }
}
