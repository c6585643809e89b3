use crate::Permission;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fmt::Formatter;

/// Permission flags, sent on the wire as a decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionBitSet(pub u64);

impl PermissionBitSet {
    pub fn has_permission(&self, permission: Permission) -> bool {
        let perm = permission as u64;
        self.0 & perm == perm
    }

    /// Administrator grants every other permission.
    pub fn allows(&self, permission: Permission) -> bool {
        self.has_permission(Permission::Administrator) || self.has_permission(permission)
    }
}

impl<'de> Deserialize<'de> for PermissionBitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(PermissionBitSet(
            String::deserialize(deserializer)?
                .parse()
                .map_err(Error::custom)?,
        ))
    }
}

impl fmt::Display for PermissionBitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PermissionBitSet {
    fn from(bits: u64) -> Self {
        PermissionBitSet(bits)
    }
}
