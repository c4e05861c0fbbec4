//! Read-only view of mission state for logging and tooling.

use crate::action::ActionNode;
use crate::mission::Mission;
use crate::status::ActionStatus;
use crate::world::World;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActionSnapshot {
    pub id: u32,
    pub name: String,
    pub kind: &'static str,
    pub status: ActionStatus,
    pub parent: Option<u32>,
}

impl ActionSnapshot {
    fn capture(id: u32, node: &ActionNode) -> Self {
        Self {
            id,
            name: node.name().to_owned(),
            kind: node.kind().label(),
            status: node.status(),
            parent: node.parent().map(|parent| parent.index()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MissionSnapshot {
    pub elapsed_ms: u64,
    pub ticks: u64,
    pub paused: bool,
    pub dialog: Option<String>,
    pub actions: Vec<ActionSnapshot>,
}

impl<W: World> Mission<W> {
    /// Captures every action's status, in slot order.
    pub fn snapshot(&self) -> MissionSnapshot {
        MissionSnapshot {
            elapsed_ms: self.clock().elapsed_ms(),
            ticks: self.clock().ticks(),
            paused: self.clock().is_paused(),
            dialog: self.pending_dialog().map(str::to_owned),
            actions: self
                .actions()
                .map(|(id, node)| ActionSnapshot::capture(id.index(), node))
                .collect(),
        }
    }
}
