use super::{ActionId, KillObserver};
use crate::spawn::WaveSpawner;
use crate::status::ActionStatus;
use crate::world::CharacterId;

/// Spawns a wave of enemies and waits for enough of them to die.
///
/// Succeeds after `kill_target` minion deaths (clamped to the number actually
/// placed), fails as soon as the player it watches dies.
#[derive(Debug)]
pub struct SpawnWaveAction {
    spawner: WaveSpawner,
    requested_count: usize,
    kill_target: usize,
    kills_remaining: usize,
    watched_player: Option<CharacterId>,
    last_stand_action: Option<ActionId>,
}

impl SpawnWaveAction {
    pub fn new(spawner: WaveSpawner, requested_count: usize, kill_target: usize) -> Self {
        Self {
            spawner,
            requested_count,
            kill_target,
            kills_remaining: 0,
            watched_player: None,
            last_stand_action: None,
        }
    }

    pub fn spawner(&self) -> &WaveSpawner {
        &self.spawner
    }

    pub(crate) fn spawner_mut(&mut self) -> &mut WaveSpawner {
        &mut self.spawner
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn kill_target(&self) -> usize {
        self.kill_target
    }

    pub fn kills_remaining(&self) -> usize {
        self.kills_remaining
    }

    pub fn watched_player(&self) -> Option<CharacterId> {
        self.watched_player
    }

    pub fn last_stand_action(&self) -> Option<ActionId> {
        self.last_stand_action
    }

    pub(crate) fn set_last_stand_action(&mut self, action: Option<ActionId>) {
        self.last_stand_action = action;
    }

    /// Adds this run's kill target to whatever a previous, unfinished run left
    /// over, then clamps to the minions currently alive.
    ///
    /// Only placed minions count: when spawn points ran out mid-wave the
    /// target shrinks with them.
    pub(crate) fn arm_kill_target(&mut self) {
        let wanted = self.kills_remaining + self.kill_target;
        self.kills_remaining = wanted.min(self.spawner.minion_count());
    }

    pub(crate) fn watch_player(&mut self, player: Option<CharacterId>) {
        self.watched_player = player;
    }

    /// Stops watching the player, returning who was watched.
    pub(crate) fn unwatch_player(&mut self) -> Option<CharacterId> {
        self.watched_player.take()
    }
}

impl KillObserver for SpawnWaveAction {
    fn notify_on_killed(&mut self, victim: CharacterId, status: ActionStatus) -> Option<bool> {
        if self.watched_player == Some(victim) {
            return Some(false);
        }
        // Minions of a finished wave may keep dying; only a pending wave counts them.
        if !status.is_pending() {
            return None;
        }

        self.kills_remaining = self.kills_remaining.saturating_sub(1);
        (self.kills_remaining == 0).then_some(true)
    }

    fn notify_last_man_standing(&mut self) -> Option<ActionId> {
        self.last_stand_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::spawn::SpawnPointGroup;

    fn wave(requested: usize, target: usize) -> SpawnWaveAction {
        let mut groups = Arena::new();
        let group = groups.insert(SpawnPointGroup::new("corners"));
        SpawnWaveAction::new(WaveSpawner::new(group), requested, target)
    }

    #[test]
    fn player_death_fails_even_before_any_kill() {
        let mut action = wave(3, 2);
        action.watch_player(Some(CharacterId(1)));
        assert_eq!(
            action.notify_on_killed(CharacterId(1), ActionStatus::Pending),
            Some(false)
        );
    }

    #[test]
    fn minion_deaths_ignored_once_finished() {
        let mut action = wave(3, 2);
        action.kills_remaining = 1;
        assert_eq!(
            action.notify_on_killed(CharacterId(9), ActionStatus::Success),
            None
        );
        assert_eq!(action.kills_remaining(), 1);
    }

    #[test]
    fn kill_target_clamps_to_placed_minions() {
        let mut action = wave(3, 5);
        action.spawner_mut().track(CharacterId(2));
        action.spawner_mut().track(CharacterId(3));
        action.arm_kill_target();
        assert_eq!(action.kills_remaining(), 2);
    }
}
