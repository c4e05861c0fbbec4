//! The demo encounters and the scripted player that plays them.

use std::collections::VecDeque;

use anyhow::Result;
use mission::{
    ActionId, CharacterId, CharacterKind, Mission, MissionConfig, SimWorld, Vec2, World,
};

use crate::config::ScenarioKind;

const PLAYER_START: Vec2 = Vec2::new(320.0, 240.0);
const LEFT: Vec2 = Vec2::new(150.0, 150.0);
const CENTER: Vec2 = Vec2::new(320.0, 240.0);
const RIGHT: Vec2 = Vec2::new(490.0, 330.0);
const OPEN_FIELD: Vec2 = Vec2::new(320.0, 400.0);

/// Walks a route and shoots the oldest enemy on a fixed cadence.
pub struct Pilot {
    route: VecDeque<Vec2>,
    patrol: bool,
    speed: f32,
    attack_interval: f32,
    cooldown: f32,
}

impl Pilot {
    fn new(route: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            route: route.into_iter().collect(),
            patrol: false,
            speed: 200.0,
            attack_interval: 1.5,
            cooldown: 1.5,
        }
    }

    fn patrolling(mut self) -> Self {
        self.patrol = true;
        self
    }

    pub fn step(&mut self, mission: &mut Mission<SimWorld>, player: CharacterId, dt: f32) {
        let Some(me) = mission.world().character(player) else {
            return;
        };

        if let Some(target) = self.route.front().copied() {
            let offset = target - me.position;
            let distance = offset.length();
            let reach = self.speed * dt;
            let next = if distance <= reach {
                if let Some(reached) = self.route.pop_front()
                    && self.patrol
                {
                    self.route.push_back(reached);
                }
                target
            } else {
                let scale = reach / distance;
                Vec2::new(me.position.x + offset.x * scale, me.position.y + offset.y * scale)
            };
            mission.world_mut().move_to(player, next);
        }

        self.cooldown -= dt;
        if self.cooldown <= 0.0 {
            self.cooldown = self.attack_interval;
            if let Some(enemy) = mission.world().characters_of(CharacterKind::Enemy).first() {
                tracing::info!("player shoots {}", enemy);
                mission.kill_character(*enemy);
            }
        }
    }
}

/// A built encounter ready to run.
pub struct Encounter {
    pub mission: Mission<SimWorld>,
    pub player: CharacterId,
    pub root: ActionId,
    pub pilot: Pilot,
}

impl Encounter {
    /// The root finished and nothing is waiting on the player.
    pub fn is_finished(&self) -> bool {
        self.mission.status(self.root).is_terminal() && self.mission.pending_dialog().is_none()
    }
}

pub fn build(kind: ScenarioKind, config: MissionConfig) -> Result<Encounter> {
    let mut world = SimWorld::new();
    let player = world
        .spawn(CharacterKind::Player, PLAYER_START)
        .ok_or_else(|| anyhow::anyhow!("player could not be spawned"))?;
    let mut mission = Mission::new(world, config);
    create_test_objects(&mut mission);

    let (root, pilot) = match kind {
        ScenarioKind::TriggerTour => trigger_tour(&mut mission)?,
        ScenarioKind::TwoWaves => two_waves(&mut mission)?,
        ScenarioKind::LoopWaves => loop_waves(&mut mission)?,
    };
    mission.begin(root);

    Ok(Encounter {
        mission,
        player,
        root,
        pilot,
    })
}

fn create_test_objects(mission: &mut Mission<SimWorld>) {
    let corners = mission.create_spawn_group("CornerSpawns");
    for (x, y) in [(0.0, 0.0), (640.0, 0.0), (0.0, 480.0), (640.0, 480.0)] {
        mission.add_spawn_point(corners, Vec2::new(x, y));
    }

    let edges = mission.create_spawn_group("EdgeSpawns");
    for (x, y) in [(320.0, 0.0), (640.0, 240.0), (320.0, 480.0), (0.0, 240.0)] {
        mission.add_spawn_point(edges, Vec2::new(x, y));
    }

    mission.create_trigger_volume("TV_Left", Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
    mission.create_trigger_volume("TV_Center", Vec2::new(270.0, 190.0), Vec2::new(370.0, 290.0));
    mission.create_trigger_volume("TV_Right", Vec2::new(440.0, 280.0), Vec2::new(540.0, 380.0));
}

fn trigger_tour(mission: &mut Mission<SimWorld>) -> Result<(ActionId, Pilot)> {
    let encounter = mission.create_sequential("TestEncounter");

    let linear = mission.create_sequential("TestLinear");
    for step in [
        mission.create_exit_action("PlayerExitCenter", "TV_Center")?,
        mission.create_enter_action("PlayerEnterLeft", "TV_Left")?,
        mission.create_enter_action("PlayerEnterRight", "TV_Right")?,
    ] {
        mission.add_child(linear, step)?;
    }

    let parallel = mission.create_parallel("TestParallel");
    for step in [
        mission.create_enter_action("PlayerEnterCenter", "TV_Center")?,
        mission.create_exit_action("PlayerExitLeft", "TV_Left")?,
        mission.create_exit_action("PlayerExitRight", "TV_Right")?,
    ] {
        mission.add_child(parallel, step)?;
    }

    mission.add_child(encounter, linear)?;
    mission.add_child(encounter, parallel)?;

    let pilot = Pilot::new([LEFT, RIGHT, CENTER, LEFT, RIGHT, OPEN_FIELD]);
    Ok((encounter, pilot))
}

fn two_waves(mission: &mut Mission<SimWorld>) -> Result<(ActionId, Pilot)> {
    let encounter = mission.create_sequential("TestEncounter");

    let first_wave = mission.create_spawn_wave("FirstWave", "CornerSpawns", 3, 2)?;
    let second_wave = mission.create_spawn_wave("SecondWave", "EdgeSpawns", 3, 3)?;
    for step in [
        mission.create_exit_action("PlayerExitCenter", "TV_Center")?,
        mission.create_timer("TimerBegin", 5.0),
        first_wave,
        mission.create_dialog("DialogReady", "Get ready for wave 2!"),
        mission.create_timer("TimerSecondWave", 3.0),
        second_wave,
    ] {
        mission.add_child(encounter, step)?;
    }

    let win = mission.create_dialog("DialogWin", "You Win!");
    let lose = mission.create_dialog("DialogLose", "You Lose!");
    mission.set_success_action(second_wave, Some(win))?;
    mission.set_fail_action(first_wave, Some(lose))?;
    mission.set_fail_action(second_wave, Some(lose))?;

    Ok((encounter, Pilot::new([OPEN_FIELD])))
}

fn loop_waves(mission: &mut Mission<SimWorld>) -> Result<(ActionId, Pilot)> {
    let encounter = mission.create_sequential("TestEncounter");
    let start = mission.create_exit_action("MissionStart", "TV_Center")?;
    mission.add_child(encounter, start)?;

    let spawn_loop = mission.create_parallel("SpawnLoopTree");
    mission.add_child(encounter, spawn_loop)?;

    let wave_tree = mission.create_sequential("SpawnWaveTree");
    mission.add_child(spawn_loop, wave_tree)?;

    let wave = mission.create_spawn_wave("FirstWave", "CornerSpawns", 3, 3)?;
    mission.add_child(wave_tree, wave)?;
    let win = mission.create_dialog("DialogWin", "You Win!");
    let lose = mission.create_dialog("DialogLose", "You Lose!");
    mission.set_success_action(wave, Some(win))?;
    mission.set_fail_action(wave, Some(lose))?;

    let reset = mission.create_reset("ResetWave");
    mission.add_child(wave_tree, reset)?;
    mission.add_reset_target(reset, encounter)?;

    let timer = mission.create_timer("SpawnWaveTimer", 30.0);
    mission.add_child(spawn_loop, timer)?;
    mission.set_success_action(timer, Some(spawn_loop))?;

    // Keeps crossing the center so every restart gets its trigger.
    let pilot = Pilot::new([OPEN_FIELD, CENTER]).patrolling();
    Ok((encounter, pilot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission::ActionStatus;

    fn play(kind: ScenarioKind, ticks: u64) -> Encounter {
        let mut encounter = build(kind, MissionConfig::new().with_seed(11)).unwrap();
        for _ in 0..ticks {
            if encounter.mission.pending_dialog().is_some() {
                encounter.mission.acknowledge_dialog();
                continue;
            }
            encounter
                .pilot
                .step(&mut encounter.mission, encounter.player, 0.1);
            encounter.mission.tick(0.1);
            if encounter.is_finished() {
                break;
            }
        }
        encounter
    }

    #[test]
    fn trigger_tour_completes() {
        let encounter = play(ScenarioKind::TriggerTour, 2_000);
        assert_eq!(encounter.mission.status(encounter.root), ActionStatus::Success);
    }

    #[test]
    fn two_waves_are_won() {
        let encounter = play(ScenarioKind::TwoWaves, 3_000);
        assert_eq!(encounter.mission.status(encounter.root), ActionStatus::Success);
        let lose = encounter.mission.find_action("DialogLose").unwrap();
        assert_eq!(encounter.mission.status(lose), ActionStatus::None);
    }

    #[test]
    fn loop_waves_never_finish() {
        let encounter = play(ScenarioKind::LoopWaves, 1_500);
        assert!(!encounter.is_finished());
        assert!(!encounter.mission.status(encounter.root).is_terminal());
    }
}
