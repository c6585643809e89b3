use super::Component;

/// Layout container for up to five leaf components. Rows never contain rows,
/// which the component decoder enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn find(&self, custom_id: &str) -> Option<&Component> {
        self.components
            .iter()
            .find(|component| component.custom_id() == Some(custom_id))
    }
}
