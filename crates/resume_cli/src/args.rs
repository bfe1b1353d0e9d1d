//! Command-line options.
//!
//! # Responsibility
//! - Parse flags and environment fallbacks into `CliOptions`.
//!
//! # Invariants
//! - Flags win over environment variables.
//! - Parsing never touches the terminal.

use resume_core::{default_log_level, SummaryStyle};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "RESUME_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "RESUME_LOG_DIR";

pub const USAGE: &str = "\
Usage: resume [OPTIONS]

Options:
  --style <simple|boxed>   Summary style (asked interactively when omitted)
  --max-width <columns>    Clamp the boxed summary to this display width
  --log-level <level>      trace|debug|info|warn|error
  --log-dir <path>         Absolute directory for log files (logging is off without it)
  -h, --help               Print help
  -V, --version            Print version";

/// What the process should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliOptions),
    Help,
    Version,
}

/// Resolved session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub style: Option<SummaryStyle>,
    pub max_width: Option<usize>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    UnknownFlag(String),
    MissingValue(&'static str),
    InvalidValue { flag: &'static str, value: String },
}

impl Display for ArgsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFlag(flag) => write!(f, "unknown option `{flag}`"),
            Self::MissingValue(flag) => write!(f, "option `{flag}` requires a value"),
            Self::InvalidValue { flag, value } => {
                write!(f, "invalid value `{value}` for option `{flag}`")
            }
        }
    }
}

impl Error for ArgsError {}

/// Parses `args` (without the program name).
///
/// `env` looks up fallback variables; pass `|key| std::env::var(key).ok()`.
pub fn parse_args<I, F>(args: I, env: F) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut style = None;
    let mut max_width = None;
    let mut log_level = None;
    let mut log_dir = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        // Accept both `--flag value` and `--flag=value`.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--style" => {
                let value = take_value(inline, &mut args, "--style")?;
                style = Some(value.parse::<SummaryStyle>().map_err(|_| {
                    ArgsError::InvalidValue {
                        flag: "--style",
                        value,
                    }
                })?);
            }
            "--max-width" => {
                let value = take_value(inline, &mut args, "--max-width")?;
                max_width = Some(value.trim().parse::<usize>().map_err(|_| {
                    ArgsError::InvalidValue {
                        flag: "--max-width",
                        value,
                    }
                })?);
            }
            "--log-level" => log_level = Some(take_value(inline, &mut args, "--log-level")?),
            "--log-dir" => log_dir = Some(take_value(inline, &mut args, "--log-dir")?),
            _ => return Err(ArgsError::UnknownFlag(flag)),
        }
    }

    Ok(Command::Run(CliOptions {
        style,
        max_width,
        log_level: log_level
            .or_else(|| env(ENV_LOG_LEVEL))
            .unwrap_or_else(|| default_log_level().to_string()),
        log_dir: log_dir.or_else(|| env(ENV_LOG_DIR)),
    }))
}

fn take_value(
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    inline
        .or_else(|| rest.next())
        .filter(|value| !value.trim().is_empty())
        .ok_or(ArgsError::MissingValue(flag))
}

#[cfg(test)]
mod tests {
    use super::{parse_args, ArgsError, CliOptions, Command, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use resume_core::{default_log_level, SummaryStyle};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_flags() {
        let command = parse_args(Vec::new(), no_env).unwrap();
        assert_eq!(
            command,
            Command::Run(CliOptions {
                style: None,
                max_width: None,
                log_level: default_log_level().to_string(),
                log_dir: None,
            })
        );
    }

    #[test]
    fn parses_separate_and_inline_values() {
        let command = parse_args(
            args(&["--style", "simple", "--max-width=100", "--log-dir", "/tmp/resume"]),
            no_env,
        )
        .unwrap();
        let Command::Run(options) = command else {
            panic!("expected run command");
        };
        assert_eq!(options.style, Some(SummaryStyle::Simple));
        assert_eq!(options.max_width, Some(100));
        assert_eq!(options.log_dir.as_deref(), Some("/tmp/resume"));
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            ENV_LOG_LEVEL => Some("warn".to_string()),
            ENV_LOG_DIR => Some("/var/log/resume".to_string()),
            _ => None,
        };
        let Command::Run(options) = parse_args(args(&["--log-level", "trace"]), env).unwrap()
        else {
            panic!("expected run command");
        };
        assert_eq!(options.log_level, "trace");
        assert_eq!(options.log_dir.as_deref(), Some("/var/log/resume"));
    }

    #[test]
    fn unknown_flag_before_help_is_an_error() {
        assert_eq!(
            parse_args(args(&["--bogus", "-h"]), no_env),
            Err(ArgsError::UnknownFlag("--bogus".to_string()))
        );
    }

    #[test]
    fn help_and_version_skip_later_flags() {
        assert_eq!(parse_args(args(&["--help", "--bogus"]), no_env), Ok(Command::Help));
        assert_eq!(parse_args(args(&["-V"]), no_env), Ok(Command::Version));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            parse_args(args(&["--style", "fancy"]), no_env),
            Err(ArgsError::InvalidValue {
                flag: "--style",
                value: "fancy".to_string()
            })
        );
        assert_eq!(
            parse_args(args(&["--max-width", "-3"]), no_env),
            Err(ArgsError::InvalidValue {
                flag: "--max-width",
                value: "-3".to_string()
            })
        );
        assert_eq!(
            parse_args(args(&["--log-dir"]), no_env),
            Err(ArgsError::MissingValue("--log-dir"))
        );
    }
}
