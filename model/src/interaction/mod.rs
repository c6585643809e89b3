mod interaction;
pub(crate) use interaction::InteractionEnvelope;
pub use interaction::{Interaction, InteractionData, InteractionType};

mod application_command_type;
pub use application_command_type::ApplicationCommandType;

mod application_command_option_type;
pub use application_command_option_type::ApplicationCommandOptionType;

mod option_value;
pub use option_value::OptionValue;

mod application_command_interaction_data;
pub use application_command_interaction_data::ApplicationCommandInteractionData;

mod application_command_interaction_data_option;
pub use application_command_interaction_data_option::ApplicationCommandInteractionDataOption;

mod message_component_interaction_data;
pub use message_component_interaction_data::MessageComponentInteractionData;

mod modal_submit_interaction_data;
pub use modal_submit_interaction_data::ModalSubmitInteractionData;

mod component;
pub use component::{Component, ComponentType};

mod action_row;
pub use action_row::ActionRow;

mod button;
pub use button::{Button, ButtonStyle};

mod select_menu;
pub use select_menu::{SelectMenu, SelectOption};

mod text_input;
pub use text_input::{TextInput, TextStyleType};

mod partial_emoji;
pub use partial_emoji::PartialEmoji;
