//! Status carried by every mission action.

/// Lifecycle state of a mission action.
///
/// # Lifecycle
///
/// `None → (begin) → Pending → (complete) → Success | Fail`, and `reset`
/// returns any state to `None`:
/// - `None` only before the first begin or right after a reset
/// - `Pending` strictly between a begin and a terminal completion
/// - `Success` / `Fail` only after a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatus {
    /// Not started, or reset since it last ran.
    #[default]
    None,

    /// Started and waiting for its objective.
    Pending,

    /// The objective was met.
    Success,

    /// The objective was lost.
    Fail,
}

impl ActionStatus {
    /// Returns `true` if this status is `Pending`.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, ActionStatus::Pending)
    }

    /// Returns `true` for `Success` and `Fail`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ActionStatus::Success | ActionStatus::Fail)
    }

    /// Terminal status for a completion outcome.
    #[inline]
    pub fn from_outcome(success: bool) -> Self {
        if success {
            ActionStatus::Success
        } else {
            ActionStatus::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(ActionStatus::default(), ActionStatus::None);
    }

    #[test]
    fn terminal_states() {
        assert!(ActionStatus::Success.is_terminal());
        assert!(ActionStatus::Fail.is_terminal());
        assert!(!ActionStatus::Pending.is_terminal());
        assert!(!ActionStatus::None.is_terminal());
    }

    #[test]
    fn displays_like_mission_log() {
        assert_eq!(ActionStatus::Success.to_string(), "SUCCESS");
        assert_eq!(ActionStatus::from_outcome(false).to_string(), "FAIL");
    }
}
