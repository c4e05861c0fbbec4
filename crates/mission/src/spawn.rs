//! Spawn placement and wave bookkeeping.
//!
//! A [`SpawnPointGroup`] is a pool of candidate positions. Picking draws points
//! uniformly at random without replacement and returns the first one no
//! living character crowds; a [`WaveSpawner`] uses it to place enemies and
//! tracks the ones still alive.

use crate::action::ActionId;
use crate::arena::Handle;
use crate::geometry::Vec2;
use crate::rng::PickRng;
use crate::world::{CharacterId, CharacterKind, CharacterView, KillSubscriber, World};

/// Handle to a spawn group stored in a [`Mission`](crate::Mission).
pub type SpawnGroupId = Handle<SpawnPointGroup>;

/// Named pool of spawn positions.
#[derive(Clone, Debug)]
pub struct SpawnPointGroup {
    name: String,
    points: Vec<Vec2>,
    // Candidate indices for the pick in progress. Empty between calls.
    scratch: Vec<usize>,
}

impl SpawnPointGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            scratch: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_point(&mut self, position: Vec2) {
        self.points.push(position);
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// A point is occupied when some character stands closer than
    /// `occupancy_scale × radius` to it (2× radius by default).
    pub fn is_occupied(point: Vec2, characters: &[CharacterView], occupancy_scale: f32) -> bool {
        characters
            .iter()
            .any(|character| point.distance(character.position) < character.radius * occupancy_scale)
    }

    /// Picks a random unoccupied point, or `None` when every point is taken.
    pub fn pick_random<R: PickRng + ?Sized>(
        &mut self,
        characters: &[CharacterView],
        rng: &mut R,
        occupancy_scale: f32,
    ) -> Option<Vec2> {
        self.scratch.clear();
        self.scratch.extend(0..self.points.len());

        while !self.scratch.is_empty() {
            let slot = rng.pick_index(self.scratch.len());
            let candidate = self.points[self.scratch.swap_remove(slot)];
            if !Self::is_occupied(candidate, characters, occupancy_scale) {
                self.scratch.clear();
                return Some(candidate);
            }
        }

        tracing::debug!("spawn group '{}': every point occupied", self.name);
        None
    }
}

/// Places the enemies of one wave and remembers which are still alive.
#[derive(Clone, Debug)]
pub struct WaveSpawner {
    parent_action: Option<ActionId>,
    spawn_points: SpawnGroupId,
    minions: Vec<CharacterId>,
}

impl WaveSpawner {
    pub fn new(spawn_points: SpawnGroupId) -> Self {
        Self {
            parent_action: None,
            spawn_points,
            minions: Vec::new(),
        }
    }

    pub fn parent_action(&self) -> Option<ActionId> {
        self.parent_action
    }

    pub(crate) fn set_parent_action(&mut self, parent: ActionId) {
        self.parent_action = Some(parent);
    }

    pub fn spawn_points(&self) -> SpawnGroupId {
        self.spawn_points
    }

    pub fn minions(&self) -> &[CharacterId] {
        &self.minions
    }

    pub fn minion_count(&self) -> usize {
        self.minions.len()
    }

    pub(crate) fn track(&mut self, minion: CharacterId) {
        if !self.minions.contains(&minion) {
            self.minions.push(minion);
        }
    }

    /// Tries `count` placements. An iteration that finds no free point places
    /// nothing, so fewer than `count` enemies may appear. Returns how many
    /// were placed by this call.
    pub fn spawn<W, R>(
        &mut self,
        count: usize,
        group: &mut SpawnPointGroup,
        world: &mut W,
        rng: &mut R,
        occupancy_scale: f32,
    ) -> usize
    where
        W: World + ?Sized,
        R: PickRng + ?Sized,
    {
        let mut placed = 0;
        for _ in 0..count {
            let characters = world.characters();
            let Some(point) = group.pick_random(&characters, rng, occupancy_scale) else {
                continue;
            };
            let Some(enemy) = world.spawn(CharacterKind::Enemy, point) else {
                continue;
            };

            self.track(enemy);
            if let Some(parent) = self.parent_action {
                world.subscribe_kill(enemy, KillSubscriber::Spawner(parent));
            }
            placed += 1;
        }

        if placed < count {
            tracing::debug!(
                "spawn group '{}': placed {} of {} requested",
                group.name(),
                placed,
                count
            );
        }
        placed
    }

    /// Forgets a dead minion. Returns the number still alive when `victim`
    /// belonged to this wave.
    pub fn notify_on_killed(&mut self, victim: CharacterId) -> Option<usize> {
        let index = self.minions.iter().position(|m| *m == victim)?;
        self.minions.remove(index);
        Some(self.minions.len())
    }

    /// Drops every death subscription this spawner holds.
    pub(crate) fn release<W: World + ?Sized>(&mut self, world: &mut W) {
        let Some(parent) = self.parent_action else {
            return;
        };
        for minion in &self.minions {
            world.unsubscribe_kill(*minion, KillSubscriber::Spawner(parent));
        }
    }
}
