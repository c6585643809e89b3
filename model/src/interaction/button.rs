use super::PartialEmoji;
use crate::Snowflake;
use serde::Deserialize;
use serde_repr::Deserialize_repr;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: Option<Box<str>>,
    /// Absent on link and premium buttons.
    pub custom_id: Option<Box<str>>,
    pub style: ButtonStyle,
    pub emoji: Option<PartialEmoji>,
    pub sku_id: Option<Snowflake>,
    pub url: Option<Box<str>>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Deserialize_repr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
    Premium = 6,
}
