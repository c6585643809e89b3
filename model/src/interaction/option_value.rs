use super::ApplicationCommandOptionType;
use crate::{util, Error, Result, Snowflake};
use serde_json::{Number, Value};

/// The scalar carried by a non sub-command option. Which variant is present
/// follows from the option's declared type, never from the JSON shape alone.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(Box<str>),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    /// Users, channels, roles, mentionables and attachments.
    Snowflake(Snowflake),
    /// Unvalidated text sent with an autocomplete request, e.g. what the user
    /// has typed so far. The platform sends it as a string whatever the
    /// declared type is, and not only for the focused option.
    Partial(Box<str>),
}

impl OptionValue {
    pub(crate) fn decode(
        name: &str,
        kind: ApplicationCommandOptionType,
        provisional: bool,
        raw: Value,
    ) -> Result<OptionValue> {
        use ApplicationCommandOptionType as Kind;

        let invalid = |raw: &Value| Error::InvalidOptionValue {
            name: Box::from(name),
            expected: kind,
            found: util::json_kind(raw),
        };

        match raw {
            Value::String(s) if kind == Kind::String => Ok(OptionValue::String(s.into_boxed_str())),
            Value::Number(n) if kind == Kind::Integer => Ok(OptionValue::Integer(truncate(&n))),
            Value::Number(n) if kind == Kind::Number => n
                .as_f64()
                .map(OptionValue::Number)
                .ok_or_else(|| invalid(&Value::Number(n))),
            Value::Bool(b) if kind == Kind::Boolean => Ok(OptionValue::Boolean(b)),
            Value::String(s) if kind.is_reference() => s
                .parse()
                .map(OptionValue::Snowflake)
                .map_err(|_| invalid(&Value::String(s))),
            Value::Number(n) if kind.is_reference() => n
                .as_u64()
                .map(|id| OptionValue::Snowflake(Snowflake(id)))
                .ok_or_else(|| invalid(&Value::Number(n))),
            Value::String(s) if provisional => Ok(OptionValue::Partial(s.into_boxed_str())),
            raw => Err(invalid(&raw)),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_snowflake(&self) -> Option<Snowflake> {
        match self {
            OptionValue::Snowflake(id) => Some(*id),
            _ => None,
        }
    }
}

// Integers arrive as general JSON numbers; anything fractional or out of
// range is truncated towards zero and saturated.
fn truncate(n: &Number) -> i64 {
    n.as_i64()
        .or_else(|| n.as_f64().map(|f| f as i64))
        .unwrap_or_default()
}
