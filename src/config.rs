use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_IDENTIFIER: &str = "dopg";
pub const IDENTIFIER_ENV: &str = "DUMMY_GATEWAY_IDENTIFIER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),

    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawGatewayConfig")]
pub struct GatewayConfig {
    pub identifier: String,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawGatewayConfig {
    identifier: String,
}

impl Default for RawGatewayConfig {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_IDENTIFIER.to_string(),
        }
    }
}

impl TryFrom<RawGatewayConfig> for GatewayConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGatewayConfig) -> Result<Self, Self::Error> {
        Self::validated(&raw.identifier, "identifier")
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_IDENTIFIER.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Read overrides from the process environment, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    // Deserialized and env-provided identifiers share one rule: trimmed and non-empty.
    fn validated(identifier: &str, source: &'static str) -> Result<Self, ConfigError> {
        match identifier.trim() {
            "" => Err(ConfigError::EmptyValue(source)),
            trimmed => Ok(Self::with_identifier(trimmed)),
        }
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        match lookup(IDENTIFIER_ENV) {
            Ok(value) => Self::validated(&value, IDENTIFIER_ENV),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(IDENTIFIER_ENV)),
        }
    }
}

#[cfg(test)]
mod gateway_config_tests {
    use super::*;
    use rstest::rstest;
    use std::env::VarError;
    use std::ffi::OsString;

    #[rstest]
    fn it_should_default_to_the_dummy_offsite_identifier() {
        assert_eq!(GatewayConfig::default().identifier, "dopg");
    }

    #[rstest]
    fn it_should_fall_back_to_defaults_when_unset() {
        let config = GatewayConfig::from_lookup(|_| Err(VarError::NotPresent)).unwrap();
        assert_eq!(config, GatewayConfig::default());
    }

    #[rstest]
    fn it_should_take_the_identifier_from_the_environment() {
        let config = GatewayConfig::from_lookup(|_| Ok(" sandbox ".to_string())).unwrap();
        assert_eq!(config.identifier, "sandbox");
    }

    #[rstest]
    fn it_should_reject_an_empty_identifier() {
        let result = GatewayConfig::from_lookup(|_| Ok("   ".to_string()));
        assert_eq!(result, Err(ConfigError::EmptyValue(IDENTIFIER_ENV)));
    }

    #[rstest]
    fn it_should_reject_an_identifier_that_is_not_unicode() {
        let result =
            GatewayConfig::from_lookup(|_| Err(VarError::NotUnicode(OsString::from("dopg"))));
        assert_eq!(result, Err(ConfigError::NotUnicode(IDENTIFIER_ENV)));
    }

    #[rstest]
    #[case(r#"{"identifier":""}"#)]
    #[case(r#"{"identifier":"   "}"#)]
    fn it_should_reject_an_empty_deserialized_identifier(#[case] json: &str) {
        let error = serde_json::from_str::<GatewayConfig>(json).unwrap_err();
        assert!(error.to_string().contains("identifier must not be empty"));
    }

    #[rstest]
    fn it_should_trim_a_deserialized_identifier() {
        let config: GatewayConfig = serde_json::from_str(r#"{"identifier":" sandbox "}"#).unwrap();
        assert_eq!(config.identifier, "sandbox");
    }

    #[rstest]
    fn it_should_deserialize_with_defaults_for_missing_fields() {
        let config: GatewayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.identifier, "dopg");
    }
}
