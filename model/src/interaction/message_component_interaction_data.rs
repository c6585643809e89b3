use crate::interaction::ComponentType;
use crate::Result;
use serde::Deserialize;

/// Payload of a button press or select menu submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageComponentInteractionData {
    pub custom_id: Box<str>,
    pub component_type: ComponentType,
    /// Chosen values; only select menus send any.
    pub values: Vec<Box<str>>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawMessageComponentInteractionData {
    custom_id: Box<str>,
    component_type: u64,
    #[serde(default)]
    values: Vec<Box<str>>,
}

impl MessageComponentInteractionData {
    pub(crate) fn decode(raw: RawMessageComponentInteractionData) -> Result<Self> {
        Ok(Self {
            custom_id: raw.custom_id,
            component_type: ComponentType::try_from(raw.component_type)?,
            values: raw.values,
        })
    }
}
