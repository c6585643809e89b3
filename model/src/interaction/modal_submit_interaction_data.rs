use crate::interaction::Component;
use crate::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSubmitInteractionData {
    pub custom_id: Box<str>,
    pub components: Vec<Component>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawModalSubmitInteractionData {
    custom_id: Box<str>,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    components: Vec<Value>,
}

impl ModalSubmitInteractionData {
    pub(crate) fn decode(raw: RawModalSubmitInteractionData) -> Result<Self> {
        Ok(Self {
            custom_id: raw.custom_id,
            components: Component::decode_list(raw.components)?,
        })
    }

    /// Finds the first leaf component with the given custom id, looking one
    /// level into action rows.
    pub fn find_component(&self, custom_id: &str) -> Option<&Component> {
        self.components.iter().find_map(|component| match component {
            Component::ActionRow(row) => row.find(custom_id),
            leaf if leaf.custom_id() == Some(custom_id) => Some(leaf),
            _ => None,
        })
    }

    /// The submitted text of a text input.
    pub fn text_value(&self, custom_id: &str) -> Option<&str> {
        match self.find_component(custom_id)? {
            Component::TextInput(input) => Some(&input.value),
            _ => None,
        }
    }
}
