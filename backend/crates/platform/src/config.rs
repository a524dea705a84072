//! Environment Configuration
//!
//! Helpers for reading typed settings from process environment variables.
//! Blank values are treated the same as unset ones.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Read a variable, returning `None` when unset, blank, or not valid unicode
pub fn env_string(key: &str) -> Option<String> {
    normalize(std::env::var(key).ok())
}

/// Read a variable or fall back to `default`
pub fn env_or(key: &str, default: &str) -> String {
    env_string(key).unwrap_or_else(|| default.to_string())
}

/// Read and parse a variable; unset is `Ok(None)`, unparsable is an error
pub fn env_parse<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(key, env_string(key))
}

/// Parse an already-read raw value for `key`
pub fn parse_value<T>(key: &str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match normalize(raw) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
    }
}

fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::num::NonZeroUsize;

    #[test]
    fn test_parse_value_unset_and_blank() {
        let unset: Option<usize> = parse_value("MAX", None).unwrap();
        assert!(unset.is_none());

        let blank: Option<usize> = parse_value("MAX", Some("   ".into())).unwrap();
        assert!(blank.is_none());
    }

    #[test]
    fn test_parse_value_trims() {
        let parsed: Option<usize> = parse_value("MAX", Some(" 128 ".into())).unwrap();
        assert_eq!(parsed, Some(128));

        let addr: Option<SocketAddr> =
            parse_value("ADDR", Some("127.0.0.1:8080".into())).unwrap();
        assert_eq!(addr, Some(SocketAddr::from(([127, 0, 0, 1], 8080))));
    }

    #[test]
    fn test_parse_value_error_names_key() {
        let err = parse_value::<usize>("VERIFIER_MAX_SESSIONS", Some("lots".into())).unwrap_err();
        assert!(err.to_string().contains("VERIFIER_MAX_SESSIONS"));
    }

    #[test]
    fn test_parse_value_zero_rejected_for_non_zero() {
        let err = parse_value::<NonZeroUsize>("VERIFIER_MAX_SESSIONS", Some("0".into()))
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for VERIFIER_MAX_SESSIONS"));

        let parsed: Option<NonZeroUsize> =
            parse_value("VERIFIER_MAX_SESSIONS", Some("1".into())).unwrap();
        assert_eq!(parsed.map(NonZeroUsize::get), Some(1));
    }

    #[test]
    fn test_env_or_unset_uses_default() {
        assert_eq!(
            env_or("PLATFORM_TEST_SURELY_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
