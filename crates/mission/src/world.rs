//! The world a mission runs in.
//!
//! Missions never reach for global game state. Everything they need from the
//! surrounding game (the character roster, spawning, death notifications) goes
//! through the [`World`] trait, implemented by the host game.
//! [`SimWorld`](crate::sim::SimWorld) is the reference implementation.

use std::fmt;

use crate::action::ActionId;
use crate::geometry::Vec2;

/// World-issued character identifier. Never reused, so a dead character's id
/// simply stops resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "char#{}", self.0)
    }
}

/// Allegiance used by zone actions to pick the characters they care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    #[default]
    None,
    Ally,
    Enemy,
}

/// Type tag handed to the spawn factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterKind {
    Player,
    Enemy,
}

/// Read-only view of a living character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterView {
    pub id: CharacterId,
    pub position: Vec2,
    pub radius: f32,
    pub team: Team,
}

/// Who gets told when a character dies.
///
/// Subscribers are mission-side handles. The world only stores and returns
/// them; the mission decides what each one does with the news.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KillSubscriber {
    /// A wave action, listening for the player's death.
    Action(ActionId),
    /// The wave spawner owned by this action, tracking one of its minions.
    Spawner(ActionId),
}

/// Services a mission consumes from the host game.
pub trait World {
    /// Every living character, in a stable order.
    fn characters(&self) -> Vec<CharacterView>;

    /// Looks up a living character.
    fn character(&self, id: CharacterId) -> Option<CharacterView>;

    /// The designated player character, if alive.
    fn player(&self) -> Option<CharacterId>;

    /// Creates a character at `position` and adds it to the roster.
    fn spawn(&mut self, kind: CharacterKind, position: Vec2) -> Option<CharacterId>;

    /// Adds a death listener. Adding the same subscriber twice is a no-op.
    fn subscribe_kill(&mut self, character: CharacterId, subscriber: KillSubscriber);

    /// Removes a death listener. Removing an absent subscriber is a no-op.
    fn unsubscribe_kill(&mut self, character: CharacterId, subscriber: KillSubscriber);

    /// Marks `character` dead, removes it from the roster and returns the
    /// listeners registered on it at the time of death.
    fn kill(&mut self, character: CharacterId) -> Vec<KillSubscriber>;
}
