#![allow(dead_code)]

use mission::{CharacterId, CharacterKind, Mission, MissionConfig, SimWorld, Vec2, World};

pub const CENTER: Vec2 = Vec2::new(320.0, 240.0);
pub const LEFT: Vec2 = Vec2::new(150.0, 150.0);
pub const RIGHT: Vec2 = Vec2::new(490.0, 330.0);
pub const OPEN_FIELD: Vec2 = Vec2::new(320.0, 400.0);

/// Mission with the standard test layout: corner and edge spawn groups,
/// three trigger volumes and a player standing in the center one.
pub fn arena() -> (Mission<SimWorld>, CharacterId) {
    arena_with(MissionConfig::new().with_seed(7))
}

pub fn arena_with(config: MissionConfig) -> (Mission<SimWorld>, CharacterId) {
    let mut world = SimWorld::new();
    let player = world
        .spawn(CharacterKind::Player, CENTER)
        .expect("player spawns");
    let mut mission = Mission::new(world, config);

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

    (mission, player)
}

pub fn move_player(mission: &mut Mission<SimWorld>, player: CharacterId, to: Vec2) {
    assert!(mission.world_mut().move_to(player, to), "player is alive");
}

pub fn enemies(mission: &Mission<SimWorld>) -> Vec<CharacterId> {
    mission.world().characters_of(CharacterKind::Enemy)
}
