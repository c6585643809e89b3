use serde::Deserialize;

use crate::user::User;
use crate::{PermissionBitSet, Snowflake};
use chrono::{DateTime, Utc};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Member {
    pub user: Option<User>,
    pub nick: Option<Box<str>>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    pub joined_at: Option<DateTime<Utc>>,
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub pending: bool,
    /// Channel-level permissions, only sent on interaction members.
    pub permissions: Option<PermissionBitSet>,
}

impl Member {
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.roles.contains(&role_id)
    }
}
