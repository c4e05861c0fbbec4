//! Mission actions.
//!
//! An action is the atomic unit of a mission: a 4-state lifecycle
//! ([`ActionStatus`]) plus optional success/fail continuations. What an action
//! *does* is decided by its [`ActionKind`]; the lifecycle itself (begin, reset,
//! complete, per-tick update) is driven by [`Mission`](crate::Mission), which
//! owns every node and dispatches on the kind.
//!
//! # Kinds
//!
//! - [`ActionKind::Basic`]: completes successfully as soon as it begins
//! - [`ActionKind::Sequential`] / [`ActionKind::Parallel`]: composites over an [`ActionGroup`]
//! - [`ActionKind::Timer`]: succeeds after a countdown
//! - [`ActionKind::Zone`]: succeeds when a character of interest enters or leaves a volume
//! - [`ActionKind::SpawnWave`]: spawns enemies, succeeds on enough kills, fails on player death
//! - [`ActionKind::Reset`]: resets a list of actions, then succeeds
//! - [`ActionKind::Dialog`]: pauses the simulation until acknowledged

mod dialog;
mod reset;
mod timer;
mod wave;
mod zone;

pub use dialog::DialogAction;
pub use reset::ResetAction;
pub use timer::TimerAction;
pub use wave::SpawnWaveAction;
pub use zone::{ZoneAction, ZoneEdge};

use crate::arena::Handle;
use crate::composite::ActionGroup;
use crate::status::ActionStatus;
use crate::world::{CharacterId, CharacterView};

/// Handle to an action stored in a [`Mission`](crate::Mission).
pub type ActionId = Handle<ActionNode>;

/// Kind-specific state of an action.
#[derive(Debug, strum::IntoStaticStr)]
pub enum ActionKind {
    Basic,
    Sequential(ActionGroup),
    Parallel(ActionGroup),
    Timer(TimerAction),
    Zone(ZoneAction),
    SpawnWave(SpawnWaveAction),
    Reset(ResetAction),
    Dialog(DialogAction),
}

impl ActionKind {
    /// Child list for composite kinds.
    pub fn group(&self) -> Option<&ActionGroup> {
        match self {
            ActionKind::Sequential(group) | ActionKind::Parallel(group) => Some(group),
            _ => None,
        }
    }

    pub fn group_mut(&mut self) -> Option<&mut ActionGroup> {
        match self {
            ActionKind::Sequential(group) | ActionKind::Parallel(group) => Some(group),
            _ => None,
        }
    }

    /// Trigger-volume notification capability.
    pub fn as_zone_listener(&self) -> Option<&dyn ZoneListener> {
        match self {
            ActionKind::Zone(zone) => Some(zone),
            _ => None,
        }
    }

    /// Death notification capability.
    pub fn as_kill_observer(&mut self) -> Option<&mut dyn KillObserver> {
        match self {
            ActionKind::SpawnWave(wave) => Some(wave),
            _ => None,
        }
    }

    /// Short label for logs and snapshots.
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// One action in a mission: lifecycle state, links and kind.
#[derive(Debug)]
pub struct ActionNode {
    pub(crate) name: String,
    pub(crate) status: ActionStatus,
    pub(crate) on_success: Option<ActionId>,
    pub(crate) on_fail: Option<ActionId>,
    /// Group this action belongs to. Only parentless actions are ticked by
    /// the mission driver; children are ticked by their group.
    pub(crate) parent: Option<ActionId>,
    /// Set by the first begin. The driver leaves never-begun roots alone.
    pub(crate) armed: bool,
    pub(crate) kind: ActionKind,
}

impl ActionNode {
    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            status: ActionStatus::None,
            on_success: None,
            on_fail: None,
            parent: None,
            armed: false,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ActionStatus {
        self.status
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<ActionId> {
        self.parent
    }

    /// Continuation begun when this action completes with `success`.
    pub fn continuation(&self, success: bool) -> Option<ActionId> {
        if success { self.on_success } else { self.on_fail }
    }
}

/// Optional capability: reacting to trigger-volume crossings.
///
/// Each method returns `true` when the crossing meets the listener's
/// objective, in which case the mission completes it successfully.
pub trait ZoneListener {
    fn notify_on_enter(&self, _character: &CharacterView) -> bool {
        false
    }

    fn notify_on_exit(&self, _character: &CharacterView) -> bool {
        false
    }
}

/// Optional capability: reacting to character deaths.
pub trait KillObserver {
    /// Handles a death. Returns `Some(success)` when the observer should
    /// complete with that outcome.
    fn notify_on_killed(&mut self, victim: CharacterId, status: ActionStatus) -> Option<bool>;

    /// Action to begin once a single enemy remains, if any.
    fn notify_last_man_standing(&mut self) -> Option<ActionId> {
        None
    }
}
