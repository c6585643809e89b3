use serde::Deserialize;

use crate::Snowflake;

/// The account behind an interaction. Only identity fields are decoded, the
/// rest of the profile belongs to whatever resolves users by id.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: Box<str>,
    pub global_name: Option<Box<str>>,
    pub avatar: Option<Box<str>>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}
