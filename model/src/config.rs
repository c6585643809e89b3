use crate::Result;
use serde::Deserialize;

/// Limits applied by [`Decoder`](crate::Decoder) to every inbound payload.
///
/// Loaded from `INTERACTION_*` environment variables, e.g.
/// `INTERACTION_MAX_PAYLOAD_SIZE=65536`. Unset variables fall back to the
/// defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct DecoderConfig {
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Levels of option nesting accepted, counting the top-level options as 1.
    /// A sub-command group holding a sub-command holding scalars is 3 levels.
    #[serde(default = "default_max_option_depth")]
    pub max_option_depth: usize,
}

impl DecoderConfig {
    pub const ENV_PREFIX: &'static str = "INTERACTION_";

    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I: IntoIterator<Item = (String, String)>>(vars: I) -> Result<Self> {
        envy::prefixed(Self::ENV_PREFIX)
            .from_iter(vars)
            .map_err(Into::into)
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_payload_size: default_max_payload_size(),
            max_option_depth: default_max_option_depth(),
        }
    }
}

fn default_max_payload_size() -> usize {
    256 * 1024
}

fn default_max_option_depth() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DecoderConfig::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(config.max_payload_size, 256 * 1024);
        assert_eq!(config.max_option_depth, 3);
    }

    #[test]
    fn test_prefixed_overrides() {
        let config = DecoderConfig::from_vars(vars(&[
            ("INTERACTION_MAX_PAYLOAD_SIZE", "1024"),
            ("INTERACTION_MAX_OPTION_DEPTH", "2"),
            ("MAX_OPTION_DEPTH", "9"),
        ]))
        .unwrap();

        assert_eq!(config.max_payload_size, 1024);
        assert_eq!(config.max_option_depth, 2);
    }

    #[test]
    fn test_invalid_value() {
        let res = DecoderConfig::from_vars(vars(&[("INTERACTION_MAX_OPTION_DEPTH", "deep")]));
        assert!(matches!(res, Err(crate::Error::ConfigError(_))));
    }
}
