//! Tick-driven mission orchestration.
//!
//! A mission is a graph of actions. Each action runs a small lifecycle
//! (`None → Pending → Success | Fail`) and may name a follow-up action for
//! either outcome. Actions compose into sequential and parallel groups, react
//! to characters crossing trigger volumes, spawn enemy waves and count kills,
//! and can reset other actions to build loops.
//!
//! [`Mission`] owns all of it together with the host game behind the
//! [`World`] trait, and advances everything from a single per-frame
//! [`Mission::tick`]. [`sim::SimWorld`] is a self-contained world for
//! headless runs and tests.
pub mod action;
pub mod arena;
pub mod builder;
pub mod clock;
pub mod composite;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mission;
pub mod rng;
pub mod sim;
pub mod snapshot;
pub mod spawn;
pub mod status;
pub mod trigger;
pub mod world;

pub use action::{
    ActionId, ActionKind, ActionNode, DialogAction, KillObserver, ResetAction, SpawnWaveAction,
    TimerAction, ZoneAction, ZoneEdge, ZoneListener,
};
pub use arena::{Arena, Handle};
pub use clock::SimClock;
pub use composite::ActionGroup;
pub use config::MissionConfig;
pub use error::{ErrorSeverity, MissionError, Result};
pub use geometry::{Bounds, Vec2};
pub use mission::Mission;
pub use rng::{PickRng, SpawnRng};
pub use sim::SimWorld;
pub use snapshot::{ActionSnapshot, MissionSnapshot};
pub use spawn::{SpawnGroupId, SpawnPointGroup, WaveSpawner};
pub use status::ActionStatus;
pub use trigger::{TriggerVolume, VolumeId};
pub use world::{CharacterId, CharacterKind, CharacterView, KillSubscriber, Team, World};
