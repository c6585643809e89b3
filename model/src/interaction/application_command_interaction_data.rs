use crate::config::DecoderConfig;
use crate::interaction::application_command_interaction_data_option::RawOption;
use crate::interaction::{ApplicationCommandInteractionDataOption, ApplicationCommandType};
use crate::{Result, Snowflake};
use serde::Deserialize;

/// Payload of command invocations and of autocomplete requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationCommandInteractionData {
    pub id: Snowflake,
    pub name: Box<str>,
    pub r#type: ApplicationCommandType,
    /// The user or message a context menu command was used on.
    pub target_id: Option<Snowflake>,
    /// Set when the command is registered to a single guild.
    pub guild_id: Option<Snowflake>,
    pub options: Vec<ApplicationCommandInteractionDataOption>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawApplicationCommandInteractionData {
    id: Snowflake,
    name: Box<str>,
    #[serde(default)]
    r#type: ApplicationCommandType,
    target_id: Option<Snowflake>,
    guild_id: Option<Snowflake>,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    options: Vec<RawOption>,
}

impl ApplicationCommandInteractionData {
    pub(crate) fn decode(
        raw: RawApplicationCommandInteractionData,
        autocomplete: bool,
        config: &DecoderConfig,
    ) -> Result<Self> {
        Ok(Self {
            id: raw.id,
            name: raw.name,
            r#type: raw.r#type,
            target_id: raw.target_id,
            guild_id: raw.guild_id,
            options: ApplicationCommandInteractionDataOption::decode_tree(
                raw.options,
                1,
                autocomplete,
                config,
            )?,
        })
    }

    /// Names of the sub-command group and sub-command that were invoked, outermost first.
    pub fn subcommand_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut options = &self.options[..];

        while let [option] = options {
            if !option.is_subcommand() {
                break;
            }

            path.push(&*option.name);
            options = &option.options[..];
        }

        path
    }

    /// The arguments of the invoked (sub-)command, below any sub-command nodes.
    pub fn leaf_options(&self) -> &[ApplicationCommandInteractionDataOption] {
        let mut options = &self.options[..];

        while let [option] = options {
            if !option.is_subcommand() {
                break;
            }

            options = &option.options[..];
        }

        options
    }

    pub fn option(&self, name: &str) -> Option<&ApplicationCommandInteractionDataOption> {
        self.leaf_options()
            .iter()
            .find(|option| &*option.name == name)
    }

    /// The option being typed into during autocomplete.
    pub fn focused_option(&self) -> Option<&ApplicationCommandInteractionDataOption> {
        self.leaf_options().iter().find(|option| option.focused)
    }
}
