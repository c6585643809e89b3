use crate::config::DecoderConfig;
use crate::guild::Member;
use crate::interaction::application_command_interaction_data::RawApplicationCommandInteractionData;
use crate::interaction::message_component_interaction_data::RawMessageComponentInteractionData;
use crate::interaction::modal_submit_interaction_data::RawModalSubmitInteractionData;
use crate::interaction::{
    ApplicationCommandInteractionData, MessageComponentInteractionData, ModalSubmitInteractionData,
};
use crate::user::User;
use crate::{Decoder, Error, PermissionBitSet, Result, Snowflake};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutoComplete = 4,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutoComplete,
            5 => Self::ModalSubmit,
            _ => return Err(Error::UnknownInteractionType(value)),
        })
    }
}

/// The type-dependent `data` of an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionData {
    Ping,
    ApplicationCommand(ApplicationCommandInteractionData),
    MessageComponent(MessageComponentInteractionData),
    ApplicationCommandAutoComplete(ApplicationCommandInteractionData),
    ModalSubmit(ModalSubmitInteractionData),
}

impl InteractionData {
    pub fn kind(&self) -> InteractionType {
        match self {
            InteractionData::Ping => InteractionType::Ping,
            InteractionData::ApplicationCommand(_) => InteractionType::ApplicationCommand,
            InteractionData::MessageComponent(_) => InteractionType::MessageComponent,
            InteractionData::ApplicationCommandAutoComplete(_) => {
                InteractionType::ApplicationCommandAutoComplete
            }
            InteractionData::ModalSubmit(_) => InteractionType::ModalSubmit,
        }
    }

    /// Command data of both invocations and autocomplete requests.
    pub fn as_application_command(&self) -> Option<&ApplicationCommandInteractionData> {
        match self {
            InteractionData::ApplicationCommand(data)
            | InteractionData::ApplicationCommandAutoComplete(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_message_component(&self) -> Option<&MessageComponentInteractionData> {
        match self {
            InteractionData::MessageComponent(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_modal_submit(&self) -> Option<&ModalSubmitInteractionData> {
        match self {
            InteractionData::ModalSubmit(data) => Some(data),
            _ => None,
        }
    }
}

/// An inbound interaction, decoded in full or not at all.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
    pub data: InteractionData,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    /// Present when invoked in a guild.
    pub member: Option<Member>,
    /// Present when invoked in a DM.
    pub user: Option<User>,
    pub token: Box<str>,
    pub version: u8,
    /// The message a component was attached to, left undecoded.
    pub message: Option<Box<RawValue>>,
    pub app_permissions: Option<PermissionBitSet>,
    pub locale: Option<Box<str>>,
    pub guild_locale: Option<Box<str>>,
}

/// Every field of the envelope that does not depend on `type`. `data` is
/// kept as raw JSON until the type has been read.
#[derive(Deserialize, Debug)]
pub(crate) struct InteractionEnvelope {
    id: Snowflake,
    application_id: Snowflake,
    r#type: u64,
    data: Option<Box<RawValue>>,
    guild_id: Option<Snowflake>,
    channel_id: Option<Snowflake>,
    member: Option<Member>,
    user: Option<User>,
    token: Box<str>,
    #[serde(default = "one")]
    version: u8,
    message: Option<Box<RawValue>>,
    app_permissions: Option<PermissionBitSet>,
    locale: Option<Box<str>>,
    guild_locale: Option<Box<str>>,
}

impl InteractionEnvelope {
    pub(crate) fn decode(self, config: &DecoderConfig) -> Result<Interaction> {
        let interaction_type = InteractionType::try_from(self.r#type)?;
        let raw = self.data.as_deref();

        // Each variant is built from `interaction_type`, so `data.kind()`
        // always agrees with the envelope.
        let data = match interaction_type {
            InteractionType::Ping => InteractionData::Ping,
            InteractionType::ApplicationCommand => InteractionData::ApplicationCommand(
                ApplicationCommandInteractionData::decode(
                    parse_data::<RawApplicationCommandInteractionData>(raw, interaction_type)?,
                    false,
                    config,
                )?,
            ),
            InteractionType::MessageComponent => InteractionData::MessageComponent(
                MessageComponentInteractionData::decode(parse_data::<
                    RawMessageComponentInteractionData,
                >(raw, interaction_type)?)?,
            ),
            InteractionType::ApplicationCommandAutoComplete => {
                InteractionData::ApplicationCommandAutoComplete(
                    ApplicationCommandInteractionData::decode(
                        parse_data::<RawApplicationCommandInteractionData>(raw, interaction_type)?,
                        true,
                        config,
                    )?,
                )
            }
            InteractionType::ModalSubmit => InteractionData::ModalSubmit(
                ModalSubmitInteractionData::decode(parse_data::<RawModalSubmitInteractionData>(
                    raw,
                    interaction_type,
                )?)?,
            ),
        };

        Ok(Interaction {
            id: self.id,
            application_id: self.application_id,
            r#type: interaction_type,
            data,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            member: self.member,
            user: self.user,
            token: self.token,
            version: self.version,
            message: self.message,
            app_permissions: self.app_permissions,
            locale: self.locale,
            guild_locale: self.guild_locale,
        })
    }
}

fn parse_data<T: DeserializeOwned>(
    raw: Option<&RawValue>,
    interaction_type: InteractionType,
) -> Result<T> {
    let raw = raw.ok_or(Error::MissingData(interaction_type))?;
    serde_json::from_str(raw.get()).map_err(Into::into)
}

fn one() -> u8 {
    1
}

impl Interaction {
    /// Decodes with the default [`DecoderConfig`].
    pub fn from_slice(payload: &[u8]) -> Result<Interaction> {
        Decoder::default().decode(payload)
    }

    pub fn kind(&self) -> InteractionType {
        self.r#type
    }

    /// The user who triggered the interaction, in guilds or DMs.
    pub fn invoker(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or(self.user.as_ref())
    }

    /// # Panics
    ///
    /// Panics unless this is a command or autocomplete interaction.
    pub fn application_command_data(&self) -> &ApplicationCommandInteractionData {
        match self.data.as_application_command() {
            Some(data) => data,
            None => self.wrong_kind("application command"),
        }
    }

    /// # Panics
    ///
    /// Panics unless this is a message component interaction.
    pub fn message_component_data(&self) -> &MessageComponentInteractionData {
        match self.data.as_message_component() {
            Some(data) => data,
            None => self.wrong_kind("message component"),
        }
    }

    /// # Panics
    ///
    /// Panics unless this is a modal submit interaction.
    pub fn modal_submit_data(&self) -> &ModalSubmitInteractionData {
        match self.data.as_modal_submit() {
            Some(data) => data,
            None => self.wrong_kind("modal submit"),
        }
    }

    fn wrong_kind(&self, requested: &str) -> ! {
        panic!(
            "requested {} data from interaction {} of type {:?}",
            requested, self.id, self.r#type
        )
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        InteractionEnvelope::deserialize(deserializer)?
            .decode(&DecoderConfig::default())
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{ApplicationCommandType, Component, ComponentType, OptionValue};
    use crate::Permission;
    use serde_json::{json, Value};

    fn envelope(interaction_type: u64, data: Value) -> Value {
        json!({
            "id": "1062103862431244320",
            "application_id": "1011450349438316595",
            "type": interaction_type,
            "data": data,
            "token": "aW50ZXJhY3Rpb24",
            "version": 1,
        })
    }

    fn decode(value: Value) -> Result<Interaction> {
        Interaction::from_slice(value.to_string().as_bytes())
    }

    #[test]
    fn test_ping() {
        let interaction = decode(json!({
            "id": "1",
            "application_id": "2",
            "type": 1,
            "token": "t",
        }))
        .unwrap();

        assert_eq!(interaction.kind(), InteractionType::Ping);
        assert_eq!(interaction.data, InteractionData::Ping);
        assert_eq!(interaction.version, 1);
        assert!(interaction.invoker().is_none());
    }

    #[test]
    fn test_command_invocation() {
        let mut value = envelope(
            2,
            json!({
                "id": "1",
                "name": "ping",
                "options": [{ "name": "n", "type": 4, "value": 42 }],
            }),
        );
        value["guild_id"] = json!("290926798626357999");
        value["channel_id"] = json!("645027906669510667");
        value["locale"] = json!("en-GB");
        value["guild_locale"] = json!("de");
        value["app_permissions"] = json!("2048");
        value["member"] = json!({
            "user": { "id": "53908232506183680", "username": "mason" },
            "roles": [],
            "joined_at": "2017-03-13T19:19:14.040000+00:00",
            "permissions": "8",
        });

        let interaction = decode(value).unwrap();

        assert_eq!(interaction.id, Snowflake(1062103862431244320));
        assert_eq!(interaction.application_id, Snowflake(1011450349438316595));
        assert_eq!(interaction.kind(), InteractionType::ApplicationCommand);
        assert_eq!(interaction.guild_id, Some(Snowflake(290926798626357999)));
        assert_eq!(interaction.channel_id, Some(Snowflake(645027906669510667)));
        assert_eq!(&*interaction.token, "aW50ZXJhY3Rpb24");
        assert_eq!(interaction.locale.as_deref(), Some("en-GB"));
        assert_eq!(interaction.guild_locale.as_deref(), Some("de"));
        assert!(interaction
            .app_permissions
            .unwrap()
            .has_permission(Permission::SendMessages));
        assert_eq!(interaction.invoker().unwrap().id, Snowflake(53908232506183680));

        let data = interaction.application_command_data();
        assert_eq!(&*data.name, "ping");
        assert_eq!(data.id, Snowflake(1));
        assert_eq!(data.r#type, ApplicationCommandType::ChatInput);
        assert_eq!(data.options[0].as_integer(), 42);
        assert_eq!(data.options[0].as_str(), "");
    }

    #[test]
    fn test_autocomplete() {
        let mut value = envelope(
            4,
            json!({
                "id": "7",
                "name": "search",
                "type": 1,
                "options": [
                    { "name": "query", "type": 3, "value": "rus", "focused": true },
                    { "name": "limit", "type": 4, "value": 5 },
                ],
            }),
        );
        value["user"] = json!({ "id": "80351110224678912", "username": "nelly" });

        let interaction = decode(value).unwrap();

        assert_eq!(interaction.kind(), InteractionType::ApplicationCommandAutoComplete);
        assert!(matches!(
            interaction.data,
            InteractionData::ApplicationCommandAutoComplete(_)
        ));
        assert_eq!(&*interaction.invoker().unwrap().username, "nelly");

        let data = interaction.application_command_data();
        let focused = data.focused_option().unwrap();
        assert_eq!(focused.autocomplete_input(), Some("rus"));
        assert_eq!(data.option("limit").unwrap().as_integer(), 5);
    }

    #[test]
    fn test_autocomplete_accepts_unvalidated_values() {
        let interaction = decode(envelope(
            4,
            json!({
                "id": "7",
                "name": "convert",
                "options": [
                    { "name": "amount", "type": 4, "value": "5" },
                    { "name": "rate", "type": 10, "value": "" },
                    { "name": "unit", "type": 3, "value": "k", "focused": true },
                ],
            }),
        ))
        .unwrap();

        let data = interaction.application_command_data();
        let amount = data.option("amount").unwrap();
        assert_eq!(amount.value, Some(OptionValue::Partial(Box::from("5"))));
        assert_eq!(amount.as_integer(), 0);
        assert_eq!(data.option("rate").unwrap().as_number(), 0.0);
        assert_eq!(data.focused_option().unwrap().autocomplete_input(), Some("k"));
    }

    #[test]
    fn test_command_still_rejects_mistyped_values() {
        let res = decode(envelope(
            2,
            json!({
                "id": "7",
                "name": "convert",
                "options": [{ "name": "amount", "type": 4, "value": "5" }],
            }),
        ));

        assert!(matches!(res, Err(Error::InvalidOptionValue { .. })));
    }

    #[test]
    fn test_message_component() {
        let mut value = envelope(
            3,
            json!({
                "custom_id": "colour",
                "component_type": 3,
                "values": ["red", "blue"],
            }),
        );
        value["message"] = json!({ "id": "1", "content": "pick one", "components": [] });

        let interaction = decode(value).unwrap();
        let data = interaction.message_component_data();

        assert_eq!(&*data.custom_id, "colour");
        assert_eq!(data.component_type, ComponentType::StringSelect);
        let values: Vec<&str> = data.values.iter().map(|v| &**v).collect();
        assert_eq!(values, ["red", "blue"]);

        let message: Value = serde_json::from_str(interaction.message.unwrap().get()).unwrap();
        assert_eq!(message["content"], "pick one");
    }

    #[test]
    fn test_button_component_has_no_values() {
        let interaction =
            decode(envelope(3, json!({ "custom_id": "close", "component_type": 2 }))).unwrap();
        let data = interaction.message_component_data();

        assert_eq!(data.component_type, ComponentType::Button);
        assert!(data.values.is_empty());
    }

    #[test]
    fn test_modal_submit() {
        let interaction = decode(envelope(
            5,
            json!({
                "custom_id": "signup",
                "components": [{
                    "type": 1,
                    "components": [{ "type": 4, "custom_id": "email", "value": "a@b.com" }],
                }],
            }),
        ))
        .unwrap();

        let data = interaction.modal_submit_data();
        assert_eq!(&*data.custom_id, "signup");

        match data.find_component("email") {
            Some(Component::TextInput(input)) => assert_eq!(&*input.value, "a@b.com"),
            other => panic!("unexpected lookup result: {:?}", other),
        }
        assert!(data.find_component("missing").is_none());
    }

    #[test]
    fn test_unknown_interaction_type() {
        let res = decode(envelope(9, json!({})));
        assert!(matches!(res, Err(Error::UnknownInteractionType(9))));
    }

    #[test]
    fn test_unknown_option_type_fails_envelope() {
        let res = decode(envelope(
            2,
            json!({
                "id": "1",
                "name": "ping",
                "options": [
                    { "name": "a", "type": 3, "value": "ok" },
                    { "name": "b", "type": 999, "value": 1 },
                ],
            }),
        ));

        assert!(matches!(res, Err(Error::UnknownOptionType(999))));
    }

    #[test]
    fn test_nested_row_fails_envelope() {
        let res = decode(envelope(
            5,
            json!({
                "custom_id": "m",
                "components": [{
                    "type": 1,
                    "components": [{ "type": 1, "components": [] }],
                }],
            }),
        ));

        assert!(matches!(res, Err(Error::NestedActionRow)));
    }

    #[test]
    fn test_missing_data() {
        let mut value = envelope(2, Value::Null);
        value.as_object_mut().unwrap().remove("data");

        assert!(matches!(
            decode(value),
            Err(Error::MissingData(InteractionType::ApplicationCommand))
        ));

        assert!(matches!(
            decode(envelope(5, Value::Null)),
            Err(Error::MissingData(InteractionType::ModalSubmit))
        ));
    }

    #[test]
    fn test_unknown_component_type_in_component_data() {
        let res = decode(envelope(3, json!({ "custom_id": "x", "component_type": 99 })));
        assert!(matches!(res, Err(Error::UnknownComponentType(99))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Interaction::from_slice(br#"{"id": "1", "type": 2"#),
            Err(Error::JsonError(_))
        ));
        assert!(matches!(
            decode(json!({ "id": "1", "application_id": "2", "token": "t" })),
            Err(Error::JsonError(_))
        ));
    }

    #[test]
    fn test_deserialize_impl() {
        let json = envelope(2, json!({ "id": "1", "name": "ping" })).to_string();

        let interaction: Interaction = serde_json::from_str(&json).unwrap();
        assert_eq!(&*interaction.application_command_data().name, "ping");

        let json = envelope(8, json!({})).to_string();
        let err = serde_json::from_str::<Interaction>(&json).unwrap_err();
        assert!(err.to_string().contains("invalid interaction type"));
    }

    #[test]
    #[should_panic(expected = "requested modal submit data")]
    fn test_wrong_payload_accessor_panics() {
        let interaction = decode(envelope(2, json!({ "id": "1", "name": "ping" }))).unwrap();
        interaction.modal_submit_data();
    }

    #[test]
    fn test_payload_casts_by_kind() {
        let interaction = decode(envelope(2, json!({ "id": "1", "name": "ping" }))).unwrap();

        assert!(interaction.data.as_application_command().is_some());
        assert!(interaction.data.as_message_component().is_none());
        assert!(interaction.data.as_modal_submit().is_none());
    }
}
