//! Shorthand constructors for mission content.
//!
//! Each `create_*` registers a new object with the mission and returns its
//! handle. Lookups by name resolve once, at creation time.

use crate::action::{
    ActionId, ActionKind, DialogAction, ResetAction, SpawnWaveAction, TimerAction, ZoneAction,
    ZoneEdge,
};
use crate::composite::ActionGroup;
use crate::error::{MissionError, Result};
use crate::geometry::{Bounds, Vec2};
use crate::mission::Mission;
use crate::spawn::{SpawnGroupId, SpawnPointGroup, WaveSpawner};
use crate::trigger::{TriggerVolume, VolumeId};
use crate::world::{Team, World};

impl<W: World> Mission<W> {
    /// Action that succeeds as soon as it begins.
    pub fn create_action(&mut self, name: impl Into<String>) -> ActionId {
        self.insert_action(name, ActionKind::Basic)
    }

    pub fn create_sequential(&mut self, name: impl Into<String>) -> ActionId {
        self.insert_action(name, ActionKind::Sequential(ActionGroup::new()))
    }

    pub fn create_parallel(&mut self, name: impl Into<String>) -> ActionId {
        self.insert_action(name, ActionKind::Parallel(ActionGroup::new()))
    }

    /// Action that succeeds `duration` seconds after it begins.
    pub fn create_timer(&mut self, name: impl Into<String>, duration: f32) -> ActionId {
        self.insert_action(name, ActionKind::Timer(TimerAction::new(duration)))
    }

    pub fn create_reset(&mut self, name: impl Into<String>) -> ActionId {
        self.insert_action(name, ActionKind::Reset(ResetAction::new()))
    }

    /// Dialog action. An empty message falls back to the default prompt.
    pub fn create_dialog(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> ActionId {
        self.insert_action(name, ActionKind::Dialog(DialogAction::new(message)))
    }

    pub fn create_trigger_volume(
        &mut self,
        name: impl Into<String>,
        top_left: Vec2,
        bottom_right: Vec2,
    ) -> VolumeId {
        self.insert_volume(TriggerVolume::new(
            name,
            Bounds::new(top_left, bottom_right),
        ))
    }

    pub fn create_zone_action(
        &mut self,
        name: impl Into<String>,
        volume: VolumeId,
        edge: ZoneEdge,
        team: Team,
    ) -> ActionId {
        self.insert_action(name, ActionKind::Zone(ZoneAction::new(volume, edge, team)))
    }

    /// Succeeds when an ally enters the volume named `volume`.
    pub fn create_enter_action(
        &mut self,
        name: impl Into<String>,
        volume: &str,
    ) -> Result<ActionId> {
        let volume = self
            .find_volume(volume)
            .ok_or_else(|| MissionError::UnknownVolume(volume.to_owned()))?;
        Ok(self.insert_action(name, ActionKind::Zone(ZoneAction::on_enter(volume))))
    }

    /// Succeeds when an ally leaves the volume named `volume`.
    pub fn create_exit_action(
        &mut self,
        name: impl Into<String>,
        volume: &str,
    ) -> Result<ActionId> {
        let volume = self
            .find_volume(volume)
            .ok_or_else(|| MissionError::UnknownVolume(volume.to_owned()))?;
        Ok(self.insert_action(name, ActionKind::Zone(ZoneAction::on_exit(volume))))
    }

    pub fn create_spawn_group(&mut self, name: impl Into<String>) -> SpawnGroupId {
        self.insert_spawn_group(SpawnPointGroup::new(name))
    }

    /// Returns `false` if the group no longer exists.
    pub fn add_spawn_point(&mut self, group: SpawnGroupId, position: Vec2) -> bool {
        match self.spawn_groups.get_mut(group) {
            Some(group) => {
                group.add_point(position);
                true
            }
            None => false,
        }
    }

    /// Wave that spawns `spawn_count` enemies from the group named
    /// `spawn_group` and succeeds after `kill_target` of them die.
    pub fn create_spawn_wave(
        &mut self,
        name: impl Into<String>,
        spawn_group: &str,
        spawn_count: usize,
        kill_target: usize,
    ) -> Result<ActionId> {
        let group = self
            .find_spawn_group(spawn_group)
            .ok_or_else(|| MissionError::UnknownSpawnGroup(spawn_group.to_owned()))?;
        let wave = SpawnWaveAction::new(WaveSpawner::new(group), spawn_count, kill_target);
        Ok(self.insert_action(name, ActionKind::SpawnWave(wave)))
    }
}
