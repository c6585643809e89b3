use crate::config::DecoderConfig;
use crate::interaction::{Interaction, InteractionEnvelope};
use crate::{Error, Result};
use tracing::debug;

/// Entry point for turning raw interaction bodies into [`Interaction`]s.
///
/// Holds no state besides its limits, so one decoder can be shared between
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self> {
        DecoderConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    #[tracing::instrument(name = "decode_interaction", skip(self, payload), fields(payload_len = payload.len()))]
    pub fn decode(&self, payload: &[u8]) -> Result<Interaction> {
        let res = self.decode_inner(payload);

        match &res {
            Ok(interaction) => debug!(
                interaction_id = %interaction.id,
                interaction_type = ?interaction.r#type,
                "decoded interaction"
            ),
            Err(e) => debug!(error = %e, "rejected interaction payload"),
        }

        res
    }

    fn decode_inner(&self, payload: &[u8]) -> Result<Interaction> {
        if payload.len() > self.config.max_payload_size {
            return Err(Error::PayloadTooLarge {
                size: payload.len(),
                limit: self.config.max_payload_size,
            });
        }

        let envelope: InteractionEnvelope = serde_json::from_slice(payload)?;
        envelope.decode(&self.config)
    }
}
