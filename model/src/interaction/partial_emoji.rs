use crate::Snowflake;
use serde::Deserialize;

/// Emoji attached to a button or select option. Unicode emojis only have a
/// name, custom emojis always have an id.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PartialEmoji {
    pub id: Option<Snowflake>,
    pub name: Option<Box<str>>,
    #[serde(default)]
    pub animated: bool,
}
