use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ApplicationCommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

impl ApplicationCommandOptionType {
    /// Sub-commands and groups carry child options instead of a value.
    pub fn is_subcommand(self) -> bool {
        matches!(self, Self::SubCommand | Self::SubCommandGroup)
    }

    /// Kinds whose value is the id of an entity rather than an inline scalar.
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Self::User | Self::Channel | Self::Role | Self::Mentionable | Self::Attachment
        )
    }
}

impl TryFrom<u64> for ApplicationCommandOptionType {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::SubCommand,
            2 => Self::SubCommandGroup,
            3 => Self::String,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            8 => Self::Role,
            9 => Self::Mentionable,
            10 => Self::Number,
            11 => Self::Attachment,
            _ => return Err(Error::UnknownOptionType(value)),
        })
    }
}
