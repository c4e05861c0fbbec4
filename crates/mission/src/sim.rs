//! Reference [`World`] implementation.
//!
//! `SimWorld` keeps a flat roster of characters with positions, radii and
//! death listeners. The headless driver and the integration tests run
//! missions against it; a real game would implement [`World`] on its own
//! scene instead.

use std::collections::BTreeMap;

use crate::geometry::Vec2;
use crate::world::{CharacterId, CharacterKind, CharacterView, KillSubscriber, Team, World};

#[derive(Clone, Debug)]
struct Character {
    kind: CharacterKind,
    position: Vec2,
    radius: f32,
    team: Team,
    death_listeners: Vec<KillSubscriber>,
}

impl Character {
    fn view(&self, id: CharacterId) -> CharacterView {
        CharacterView {
            id,
            position: self.position,
            radius: self.radius,
            team: self.team,
        }
    }
}

/// Flat character roster with a designated player.
#[derive(Clone, Debug)]
pub struct SimWorld {
    characters: BTreeMap<CharacterId, Character>,
    next_id: u64,
    player: Option<CharacterId>,
    player_radius: f32,
    enemy_radius: f32,
}

impl SimWorld {
    pub const DEFAULT_PLAYER_RADIUS: f32 = 20.0;
    pub const DEFAULT_ENEMY_RADIUS: f32 = 15.0;

    pub fn new() -> Self {
        Self::with_radii(Self::DEFAULT_PLAYER_RADIUS, Self::DEFAULT_ENEMY_RADIUS)
    }

    pub fn with_radii(player_radius: f32, enemy_radius: f32) -> Self {
        Self {
            characters: BTreeMap::new(),
            next_id: 1,
            player: None,
            player_radius,
            enemy_radius,
        }
    }

    /// Teleports a living character. Returns `false` for unknown ids.
    pub fn move_to(&mut self, id: CharacterId, position: Vec2) -> bool {
        match self.characters.get_mut(&id) {
            Some(character) => {
                character.position = position;
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self, id: CharacterId) -> bool {
        self.characters.contains_key(&id)
    }

    /// Living characters of the given kind, in spawn order.
    pub fn characters_of(&self, kind: CharacterKind) -> Vec<CharacterId> {
        self.characters
            .iter()
            .filter(|(_, character)| character.kind == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn death_listeners(&self, id: CharacterId) -> &[KillSubscriber] {
        self.characters
            .get(&id)
            .map(|character| character.death_listeners.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl World for SimWorld {
    fn characters(&self) -> Vec<CharacterView> {
        self.characters
            .iter()
            .map(|(id, character)| character.view(*id))
            .collect()
    }

    fn character(&self, id: CharacterId) -> Option<CharacterView> {
        self.characters.get(&id).map(|character| character.view(id))
    }

    fn player(&self) -> Option<CharacterId> {
        self.player.filter(|id| self.characters.contains_key(id))
    }

    fn spawn(&mut self, kind: CharacterKind, position: Vec2) -> Option<CharacterId> {
        let id = CharacterId(self.next_id);
        self.next_id += 1;

        let (radius, team) = match kind {
            CharacterKind::Player => (self.player_radius, Team::Ally),
            CharacterKind::Enemy => (self.enemy_radius, Team::Enemy),
        };
        self.characters.insert(
            id,
            Character {
                kind,
                position,
                radius,
                team,
                death_listeners: Vec::new(),
            },
        );
        if kind == CharacterKind::Player {
            self.player = Some(id);
        }

        tracing::debug!("spawned {} {} at {}", kind, id, position);
        Some(id)
    }

    fn subscribe_kill(&mut self, character: CharacterId, subscriber: KillSubscriber) {
        if let Some(character) = self.characters.get_mut(&character)
            && !character.death_listeners.contains(&subscriber)
        {
            character.death_listeners.push(subscriber);
        }
    }

    fn unsubscribe_kill(&mut self, character: CharacterId, subscriber: KillSubscriber) {
        if let Some(character) = self.characters.get_mut(&character) {
            character.death_listeners.retain(|s| *s != subscriber);
        }
    }

    fn kill(&mut self, character: CharacterId) -> Vec<KillSubscriber> {
        let Some(dead) = self.characters.remove(&character) else {
            return Vec::new();
        };
        if self.player == Some(character) {
            self.player = None;
        }
        tracing::debug!("{} {} killed", dead.kind, character);
        dead.death_listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn spawn_assigns_team_and_radius() {
        let mut world = SimWorld::new();
        let player = world.spawn(CharacterKind::Player, Vec2::new(1.0, 2.0)).unwrap();
        let enemy = world.spawn(CharacterKind::Enemy, Vec2::ZERO).unwrap();

        assert_eq!(world.player(), Some(player));
        assert_eq!(world.character(player).unwrap().team, Team::Ally);
        assert_eq!(world.character(enemy).unwrap().radius, SimWorld::DEFAULT_ENEMY_RADIUS);
        assert_eq!(world.characters().len(), 2);
    }

    #[test]
    fn kill_returns_listeners_and_removes_character() {
        let mut actions: Arena<crate::action::ActionNode> = Arena::new();
        let action = actions.insert(crate::action::ActionNode::new(
            "wave",
            crate::action::ActionKind::Basic,
        ));

        let mut world = SimWorld::new();
        let enemy = world.spawn(CharacterKind::Enemy, Vec2::ZERO).unwrap();
        world.subscribe_kill(enemy, KillSubscriber::Spawner(action));
        world.subscribe_kill(enemy, KillSubscriber::Spawner(action));

        assert_eq!(world.kill(enemy), vec![KillSubscriber::Spawner(action)]);
        assert!(!world.is_alive(enemy));
        assert!(world.kill(enemy).is_empty());
    }

    #[test]
    fn dead_player_is_not_reported() {
        let mut world = SimWorld::new();
        let player = world.spawn(CharacterKind::Player, Vec2::ZERO).unwrap();
        world.kill(player);
        assert_eq!(world.player(), None);
    }
}
