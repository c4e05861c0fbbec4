//! Errors for mission construction.
//!
//! Only wiring mistakes are errors: attaching a child to something that is not
//! a group, building a cycle, naming an object that does not exist. Runtime
//! conditions (stale references, listeners without a capability, spawn
//! exhaustion) are never errors; they degrade to "nothing happened this tick"
//! and are logged.

use crate::action::ActionId;

/// Severity level of an error, used for categorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown volume name, child added to a timer
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: handle to a destroyed action passed back in
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MissionError {
    #[error("action {0} does not exist")]
    StaleAction(ActionId),

    #[error("action {0} is not a group")]
    NotAGroup(ActionId),

    #[error("action {0} is not a reset action")]
    NotAResetAction(ActionId),

    #[error("action {0} is not a spawn wave action")]
    NotAWaveAction(ActionId),

    #[error("action {0} is not a timer")]
    NotATimer(ActionId),

    #[error("action {child} already belongs to group {parent}")]
    AlreadyParented { child: ActionId, parent: ActionId },

    #[error("adding {child} to {group} would create a cycle")]
    Cycle { group: ActionId, child: ActionId },

    #[error("no trigger volume named '{0}'")]
    UnknownVolume(String),

    #[error("no spawn group named '{0}'")]
    UnknownSpawnGroup(String),
}

impl MissionError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StaleAction(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    /// Static identifier of the variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StaleAction(_) => "STALE_ACTION",
            Self::NotAGroup(_) => "NOT_A_GROUP",
            Self::NotAResetAction(_) => "NOT_A_RESET_ACTION",
            Self::NotAWaveAction(_) => "NOT_A_WAVE_ACTION",
            Self::NotATimer(_) => "NOT_A_TIMER",
            Self::AlreadyParented { .. } => "ALREADY_PARENTED",
            Self::Cycle { .. } => "CYCLE",
            Self::UnknownVolume(_) => "UNKNOWN_VOLUME",
            Self::UnknownSpawnGroup(_) => "UNKNOWN_SPAWN_GROUP",
        }
    }
}

pub type Result<T, E = MissionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn stale_handles_are_internal_errors() {
        let mut actions = Arena::new();
        let id = actions.insert(crate::action::ActionNode::new(
            "gone",
            crate::action::ActionKind::Basic,
        ));
        actions.remove(id);

        let err = MissionError::StaleAction(id);
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert_eq!(err.severity().as_str(), "internal");
        assert_eq!(err.error_code(), "STALE_ACTION");
    }

    #[test]
    fn wiring_mistakes_are_validation_errors() {
        let mut actions = Arena::new();
        let group = actions.insert(crate::action::ActionNode::new(
            "group",
            crate::action::ActionKind::Basic,
        ));

        let err = MissionError::NotAGroup(group);
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), format!("action {group} is not a group"));
    }
}
