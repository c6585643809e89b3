use super::{ComponentType, PartialEmoji};
use serde::Deserialize;

/// Any of the select menu components. `kind` tells string selects apart from
/// the user/role/mentionable/channel selects, whose values are ids.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectMenu {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub custom_id: Box<str>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    pub placeholder: Option<Box<str>>,
    /// 0-25
    #[serde(default = "one")]
    pub min_values: u8,
    /// 1-25
    #[serde(default = "one")]
    pub max_values: u8,
    #[serde(default)]
    pub disabled: bool,
    /// Selected values, only present when submitted.
    #[serde(default)]
    pub values: Vec<Box<str>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: Box<str>,
    pub value: Box<str>,
    pub description: Option<Box<str>>,
    pub emoji: Option<PartialEmoji>,
    #[serde(default)]
    pub default: bool,
}

fn one() -> u8 {
    1
}
