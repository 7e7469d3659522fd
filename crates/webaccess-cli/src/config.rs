//! Configuration parsed from environment variables.
//!
//! Every setting can be overridden on the command line. Environment variables
//! are prefixed with `WEBACCESS_`.

use std::env;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "WEBACCESS_LOG_LEVEL";
/// Environment variable holding the message language.
pub const LANG_VAR: &str = "WEBACCESS_LANG";

/// Log level matching the tracing crate levels.
///
/// Defaults to `Warn` so diagnostics stay out of the way of command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging.
    Trace,
    /// Debug-level information for development.
    Debug,
    /// Informational messages.
    Info,
    /// Potentially problematic situations.
    #[default]
    Warn,
    /// Failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Parse a language tag such as `fr` or `en-US`.
///
/// # Errors
///
/// Returns [`CliError::InvalidConfig`] when `value` is not a valid tag.
pub fn parse_language(value: &str) -> Result<LanguageIdentifier, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidConfig(format!("invalid language tag '{value}'")))
}

/// Configuration of the command line front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level for diagnostics on stderr.
    pub log_level: LogLevel,
    /// Language of user-facing messages; English when unset.
    pub language: Option<LanguageIdentifier>,
}

impl CliConfig {
    /// Load configuration from `WEBACCESS_LOG_LEVEL` and `WEBACCESS_LANG`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] if a variable holds an invalid
    /// value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of an
    /// environment variable when it is set.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let log_level = read(LOG_LEVEL_VAR)
            .map(|value| value.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();
        let language = read(LANG_VAR).as_deref().map(parse_language).transpose()?;
        Ok(Self {
            log_level,
            language,
        })
    }

    /// Apply command line overrides on top of the environment.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        language: Option<LanguageIdentifier>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(language) = language {
            self.language = Some(language);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use unic_langid::langid;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("Debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] raw: &str, #[case] expected: LogLevel) {
        assert_eq!(raw.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let error = "loud"
            .parse::<LogLevel>()
            .err()
            .unwrap_or_else(|| panic!("'loud' is not a log level"));
        assert!(error.to_string().contains("unknown log level"));
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = CliConfig::from_lookup(lookup(&[]))
            .unwrap_or_else(|error| panic!("empty environment is valid: {error}"));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level.as_filter_str(), "warn");
    }

    #[test]
    fn variables_are_read() {
        let config = CliConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "debug"), (LANG_VAR, "fr")]))
            .unwrap_or_else(|error| panic!("environment is valid: {error}"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.language, Some(langid!("fr")));
    }

    #[test]
    fn blank_variables_count_as_unset() {
        let config = CliConfig::from_lookup(lookup(&[(LANG_VAR, "  ")]))
            .unwrap_or_else(|error| panic!("blank language is valid: {error}"));
        assert_eq!(config.language, None);
    }

    #[test]
    fn invalid_language_is_rejected() {
        let result = CliConfig::from_lookup(lookup(&[(LANG_VAR, "not a tag!")]));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig::from_lookup(lookup(&[(LANG_VAR, "fr")]))
            .unwrap_or_else(|error| panic!("environment is valid: {error}"))
            .apply_overrides(Some(LogLevel::Error), Some(langid!("en-US")));
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.language, Some(langid!("en-US")));

        let config = CliConfig::default().apply_overrides(None, None);
        assert_eq!(config, CliConfig::default());
    }
}
