use super::{ApplicationCommandOptionType, OptionValue};
use crate::config::DecoderConfig;
use crate::{Error, Result, Snowflake};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One node of the option tree sent with a command invocation.
///
/// Sub-commands and sub-command groups hold child `options` and no value;
/// every other type holds at most a value and no children. The typed
/// getters never fail: asking for a type the option was not declared as
/// returns that type's zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationCommandInteractionDataOption {
    pub name: Box<str>,
    pub r#type: ApplicationCommandOptionType,
    pub value: Option<OptionValue>,
    pub options: Vec<ApplicationCommandInteractionDataOption>,
    pub focused: bool,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawOption {
    name: Box<str>,
    r#type: u64,
    value: Option<Value>,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    options: Vec<RawOption>,
    #[serde(default)]
    focused: bool,
}

impl ApplicationCommandInteractionDataOption {
    /// `autocomplete` marks values as provisional: the platform does not
    /// validate them, so strings are accepted for every scalar type.
    pub(crate) fn decode_tree(
        raw: Vec<RawOption>,
        depth: usize,
        autocomplete: bool,
        config: &DecoderConfig,
    ) -> Result<Vec<Self>> {
        raw.into_iter()
            .map(|option| Self::decode(option, depth, autocomplete, config))
            .collect()
    }

    fn decode(
        raw: RawOption,
        depth: usize,
        autocomplete: bool,
        config: &DecoderConfig,
    ) -> Result<Self> {
        let kind = ApplicationCommandOptionType::try_from(raw.r#type)?;

        if depth > config.max_option_depth {
            return Err(Error::OptionTreeTooDeep {
                name: raw.name,
                limit: config.max_option_depth,
            });
        }

        let shape_mismatch = if kind.is_subcommand() {
            raw.value.is_some()
        } else {
            !raw.options.is_empty()
        };

        if shape_mismatch {
            return Err(Error::OptionShapeMismatch {
                name: raw.name,
                option_type: kind,
            });
        }

        let options = Self::decode_tree(raw.options, depth + 1, autocomplete, config)?;
        let provisional = autocomplete || raw.focused;
        let value = raw
            .value
            .map(|value| OptionValue::decode(&raw.name, kind, provisional, value))
            .transpose()?;

        Ok(Self {
            name: raw.name,
            r#type: kind,
            value,
            options,
            focused: raw.focused,
        })
    }

    pub fn is_subcommand(&self) -> bool {
        self.r#type.is_subcommand()
    }

    pub fn as_integer(&self) -> i64 {
        self.value_of(ApplicationCommandOptionType::Integer)
            .and_then(OptionValue::as_i64)
            .unwrap_or_default()
    }

    pub fn as_number(&self) -> f64 {
        self.value_of(ApplicationCommandOptionType::Number)
            .and_then(OptionValue::as_f64)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        self.value_of(ApplicationCommandOptionType::String)
            .and_then(OptionValue::as_str)
            .unwrap_or_default()
    }

    pub fn as_bool(&self) -> bool {
        self.value_of(ApplicationCommandOptionType::Boolean)
            .and_then(OptionValue::as_bool)
            .unwrap_or_default()
    }

    pub fn user_id(&self) -> Option<Snowflake> {
        self.reference_of(ApplicationCommandOptionType::User)
    }

    pub fn channel_id(&self) -> Option<Snowflake> {
        self.reference_of(ApplicationCommandOptionType::Channel)
    }

    pub fn role_id(&self) -> Option<Snowflake> {
        self.reference_of(ApplicationCommandOptionType::Role)
    }

    /// Either a user or a role id; which one is up to the resolver.
    pub fn mentionable_id(&self) -> Option<Snowflake> {
        self.reference_of(ApplicationCommandOptionType::Mentionable)
    }

    pub fn attachment_id(&self) -> Option<Snowflake> {
        self.reference_of(ApplicationCommandOptionType::Attachment)
    }

    /// The raw text of a focused option during autocomplete, whatever its
    /// declared type.
    pub fn autocomplete_input(&self) -> Option<&str> {
        if !self.focused {
            return None;
        }

        match &self.value {
            Some(OptionValue::String(s)) | Some(OptionValue::Partial(s)) => Some(s),
            _ => None,
        }
    }

    fn value_of(&self, kind: ApplicationCommandOptionType) -> Option<&OptionValue> {
        if self.r#type != kind {
            return None;
        }

        self.value.as_ref()
    }

    fn reference_of(&self, kind: ApplicationCommandOptionType) -> Option<Snowflake> {
        self.value_of(kind).and_then(OptionValue::as_snowflake)
    }
}

impl<'de> Deserialize<'de> for ApplicationCommandInteractionDataOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawOption::deserialize(deserializer)?;
        Self::decode(raw, 1, false, &DecoderConfig::default()).map_err(D::Error::custom)
    }
}
