use super::{ActionRow, Button, SelectMenu, TextInput};
use crate::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    SelectMenu(SelectMenu),
    TextInput(TextInput),
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "u64")]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    TextInput = 4,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
}

impl ComponentType {
    pub fn is_select_menu(self) -> bool {
        matches!(
            self,
            Self::StringSelect
                | Self::UserSelect
                | Self::RoleSelect
                | Self::MentionableSelect
                | Self::ChannelSelect
        )
    }
}

impl TryFrom<u64> for ComponentType {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Ok(match value {
            1 => Self::ActionRow,
            2 => Self::Button,
            3 => Self::StringSelect,
            4 => Self::TextInput,
            5 => Self::UserSelect,
            6 => Self::RoleSelect,
            7 => Self::MentionableSelect,
            8 => Self::ChannelSelect,
            _ => return Err(Error::UnknownComponentType(value)),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nesting {
    TopLevel,
    InActionRow,
}

#[derive(Deserialize)]
struct RawActionRow {
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    components: Vec<Value>,
}

impl Component {
    pub fn kind(&self) -> ComponentType {
        match self {
            Component::ActionRow(_) => ComponentType::ActionRow,
            Component::Button(_) => ComponentType::Button,
            Component::SelectMenu(menu) => menu.kind,
            Component::TextInput(_) => ComponentType::TextInput,
        }
    }

    /// `None` for action rows and for buttons without one (links).
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Component::ActionRow(_) => None,
            Component::Button(button) => button.custom_id.as_deref(),
            Component::SelectMenu(menu) => Some(&menu.custom_id),
            Component::TextInput(input) => Some(&input.custom_id),
        }
    }

    pub(crate) fn decode_list(raw: Vec<Value>) -> Result<Vec<Component>> {
        Self::decode_all(raw, Nesting::TopLevel)
    }

    fn decode_all(raw: Vec<Value>, nesting: Nesting) -> Result<Vec<Component>> {
        trace!(component_count = raw.len(), ?nesting, "decoding components");

        raw.into_iter()
            .map(|value| Self::decode(value, nesting))
            .collect()
    }

    fn decode(value: Value, nesting: Nesting) -> Result<Component> {
        let component_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or(Error::MissingType("component"))
            .and_then(ComponentType::try_from)?;

        let component = match component_type {
            ComponentType::ActionRow => {
                if nesting == Nesting::InActionRow {
                    return Err(Error::NestedActionRow);
                }

                let row: RawActionRow = serde_json::from_value(value)?;
                let components = Self::decode_all(row.components, Nesting::InActionRow)?;
                Component::ActionRow(ActionRow { components })
            }
            ComponentType::Button => Component::Button(serde_json::from_value(value)?),
            ComponentType::TextInput => Component::TextInput(serde_json::from_value(value)?),
            _ => Component::SelectMenu(serde_json::from_value::<SelectMenu>(value)?),
        };

        Ok(component)
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Component::decode(value, Nesting::TopLevel).map_err(D::Error::custom)
    }
}
