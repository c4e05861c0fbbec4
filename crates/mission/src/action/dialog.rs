/// Message shown when a dialog is created without one.
pub const DEFAULT_DIALOG_MESSAGE: &str = "Press 'q'";

/// Pauses the simulation and waits for the player to acknowledge a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogAction {
    message: String,
}

impl DialogAction {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self {
                message: DEFAULT_DIALOG_MESSAGE.to_owned(),
            };
        }
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_falls_back_to_prompt() {
        assert_eq!(DialogAction::new("").message(), DEFAULT_DIALOG_MESSAGE);
        assert_eq!(DialogAction::new("You Win!").message(), "You Win!");
    }
}
