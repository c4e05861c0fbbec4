use super::ZoneListener;
use crate::trigger::VolumeId;
use crate::world::{CharacterView, Team};

/// Which crossing of the volume completes the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum ZoneEdge {
    Enter,
    Exit,
}

/// Succeeds when a character of `team` crosses `volume` in the `edge`
/// direction.
///
/// While pending the action sits in the volume's listener set. Many zone
/// actions may share one volume.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneAction {
    volume: VolumeId,
    edge: ZoneEdge,
    team: Team,
}

impl ZoneAction {
    pub fn new(volume: VolumeId, edge: ZoneEdge, team: Team) -> Self {
        Self { volume, edge, team }
    }

    /// Player-enters action, the common case.
    pub fn on_enter(volume: VolumeId) -> Self {
        Self::new(volume, ZoneEdge::Enter, Team::Ally)
    }

    /// Player-exits action.
    pub fn on_exit(volume: VolumeId) -> Self {
        Self::new(volume, ZoneEdge::Exit, Team::Ally)
    }

    pub fn volume(&self) -> VolumeId {
        self.volume
    }

    pub fn edge(&self) -> ZoneEdge {
        self.edge
    }

    pub fn team(&self) -> Team {
        self.team
    }
}

impl ZoneListener for ZoneAction {
    fn notify_on_enter(&self, character: &CharacterView) -> bool {
        self.edge == ZoneEdge::Enter && character.team == self.team
    }

    fn notify_on_exit(&self, character: &CharacterView) -> bool {
        self.edge == ZoneEdge::Exit && character.team == self.team
    }
}
