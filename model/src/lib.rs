mod snowflake;
pub use snowflake::Snowflake;

mod permission;
pub use permission::Permission;

mod permission_bit_set;
pub use permission_bit_set::PermissionBitSet;

mod error;
pub use error::{Error, Result};

mod config;
pub use config::DecoderConfig;

mod decoder;
pub use decoder::Decoder;

pub mod guild;
pub mod interaction;
pub mod user;

mod util;
