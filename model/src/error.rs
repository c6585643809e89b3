use crate::interaction::{ApplicationCommandOptionType, InteractionType};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error while decoding json payload: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("error while loading decoder config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("{0} type was not an integer")]
    MissingType(&'static str),

    #[error("invalid interaction type \"{0}\"")]
    UnknownInteractionType(u64),

    #[error("invalid application command option type \"{0}\"")]
    UnknownOptionType(u64),

    #[error("invalid component type \"{0}\"")]
    UnknownComponentType(u64),

    #[error("action rows cannot be nested inside action rows")]
    NestedActionRow,

    #[error("option \"{name}\" is nested deeper than {limit} levels")]
    OptionTreeTooDeep { name: Box<str>, limit: usize },

    #[error("option \"{name}\" of type {expected:?} has a {found} value")]
    InvalidOptionValue {
        name: Box<str>,
        expected: ApplicationCommandOptionType,
        found: &'static str,
    },

    #[error("option \"{name}\" of type {option_type:?} mixes a value with child options")]
    OptionShapeMismatch {
        name: Box<str>,
        option_type: ApplicationCommandOptionType,
    },

    #[error("interaction of type {0:?} is missing its data field")]
    MissingData(InteractionType),
}
