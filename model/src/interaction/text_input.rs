use serde::Deserialize;
use serde_repr::Deserialize_repr;

/// A modal text field. Submissions only carry `custom_id` and `value`, the
/// presentation fields are set when the component is sent back to us.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub custom_id: Box<str>,
    #[serde(default)]
    pub value: Box<str>,
    pub style: Option<TextStyleType>,
    pub label: Option<Box<str>>,
    pub placeholder: Option<Box<str>>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub required: Option<bool>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize_repr)]
#[repr(u8)]
pub enum TextStyleType {
    Short = 1,
    Paragraph = 2,
}
