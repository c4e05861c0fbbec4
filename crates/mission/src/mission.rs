//! The mission driver.
//!
//! [`Mission`] owns every action, trigger volume and spawn group of one game
//! session, plus the [`World`] they act on. It is the single place where the
//! action lifecycle runs:
//!
//! - `begin` / `reset` / `complete` / `on_update` dispatch on [`ActionKind`]
//! - `tick` is the per-frame driver: trigger volumes first, then every root
//!   action that has been begun
//! - kill and dialog notifications arrive through `kill_character` and
//!   `acknowledge_dialog`
//!
//! All cross-object references are generation-checked handles. Nothing holds
//! a borrow across a call into another action, so an action may reset, begin
//! or destroy anything (itself included) from inside a notification.

use tracing::{debug, info, warn};

use crate::action::{ActionId, ActionKind, ActionNode, ZoneEdge};
use crate::arena::Arena;
use crate::clock::SimClock;
use crate::composite::{SequentialStep, aggregate, parallel_targets, sequential_step};
use crate::config::MissionConfig;
use crate::error::{MissionError, Result};
use crate::rng::SpawnRng;
use crate::spawn::{SpawnGroupId, SpawnPointGroup};
use crate::status::ActionStatus;
use crate::trigger::{TriggerVolume, VolumeId};
use crate::world::{CharacterId, CharacterView, KillSubscriber, World};

/// Follow-up work decided while the node being begun is borrowed.
enum Begun {
    Waiting,
    CompleteNow,
    Listen(VolumeId),
    SpawnWave,
    ResetTargets(Vec<ActionId>),
    Dialog(String),
    Sequential(Vec<ActionId>),
    Parallel(Vec<ActionId>),
}

/// Follow-up work decided while the node being updated is borrowed.
enum Updated {
    Idle,
    Expired,
    Sequential,
    Parallel,
}

/// Registrations an action holds outside its own node.
enum Held {
    Nothing,
    Listener(VolumeId),
    PlayerWatch(Option<CharacterId>),
    Dialog,
    Children(Vec<ActionId>),
}

/// One running mission and the world it plays out in.
pub struct Mission<W: World> {
    world: W,
    config: MissionConfig,
    pub(crate) actions: Arena<ActionNode>,
    pub(crate) volumes: Arena<TriggerVolume>,
    pub(crate) spawn_groups: Arena<SpawnPointGroup>,
    clock: SimClock,
    dialog: Option<ActionId>,
    rng: SpawnRng,
    chain_depth: usize,
}

impl<W: World> Mission<W> {
    pub fn new(world: W, config: MissionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SpawnRng::from_seed(seed),
            None => SpawnRng::from_entropy(),
        };
        Self {
            world,
            config,
            actions: Arena::new(),
            volumes: Arena::new(),
            spawn_groups: Arena::new(),
            clock: SimClock::new(),
            dialog: None,
            rng,
            chain_depth: 0,
        }
    }

    // ===== accessors =====

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn action(&self, id: ActionId) -> Option<&ActionNode> {
        self.actions.get(id)
    }

    /// Current status. Stale handles read as [`ActionStatus::None`].
    pub fn status(&self, id: ActionId) -> ActionStatus {
        self.actions
            .get(id)
            .map(ActionNode::status)
            .unwrap_or_default()
    }

    pub fn is_alive(&self, id: ActionId) -> bool {
        self.actions.contains(id)
    }

    pub fn volume(&self, id: VolumeId) -> Option<&TriggerVolume> {
        self.volumes.get(id)
    }

    pub fn spawn_group(&self, id: SpawnGroupId) -> Option<&SpawnPointGroup> {
        self.spawn_groups.get(id)
    }

    pub fn actions(&self) -> impl Iterator<Item = (ActionId, &ActionNode)> {
        self.actions.iter()
    }

    pub fn find_action(&self, name: &str) -> Option<ActionId> {
        self.actions
            .iter()
            .find(|(_, node)| node.name() == name)
            .map(|(id, _)| id)
    }

    pub fn find_volume(&self, name: &str) -> Option<VolumeId> {
        self.volumes
            .iter()
            .find(|(_, volume)| volume.name() == name)
            .map(|(id, _)| id)
    }

    pub fn find_spawn_group(&self, name: &str) -> Option<SpawnGroupId> {
        self.spawn_groups
            .iter()
            .find(|(_, group)| group.name() == name)
            .map(|(id, _)| id)
    }

    /// Message of the dialog awaiting acknowledgment.
    pub fn pending_dialog(&self) -> Option<&str> {
        let node = self.actions.get(self.dialog?)?;
        match &node.kind {
            ActionKind::Dialog(dialog) => Some(dialog.message()),
            _ => None,
        }
    }

    // ===== wiring =====

    /// Registers a new action with the driver.
    pub fn insert_action(&mut self, name: impl Into<String>, kind: ActionKind) -> ActionId {
        let id = self.actions.insert(ActionNode::new(name, kind));
        if let Some(node) = self.actions.get_mut(id)
            && let ActionKind::SpawnWave(wave) = &mut node.kind
        {
            wave.spawner_mut().set_parent_action(id);
        }
        id
    }

    pub fn insert_volume(&mut self, volume: TriggerVolume) -> VolumeId {
        self.volumes.insert(volume)
    }

    pub fn insert_spawn_group(&mut self, group: SpawnPointGroup) -> SpawnGroupId {
        self.spawn_groups.insert(group)
    }

    /// Action to begin when `id` succeeds. `None` clears it.
    pub fn set_success_action(&mut self, id: ActionId, target: Option<ActionId>) -> Result<()> {
        let node = self
            .actions
            .get_mut(id)
            .ok_or(MissionError::StaleAction(id))?;
        node.on_success = target;
        Ok(())
    }

    /// Action to begin when `id` fails. `None` clears it.
    pub fn set_fail_action(&mut self, id: ActionId, target: Option<ActionId>) -> Result<()> {
        let node = self
            .actions
            .get_mut(id)
            .ok_or(MissionError::StaleAction(id))?;
        node.on_fail = target;
        Ok(())
    }

    /// Appends `child` to a sequential or parallel group.
    ///
    /// Groups form a tree: a child has at most one parent and may not be an
    /// ancestor of the group.
    pub fn add_child(&mut self, group: ActionId, child: ActionId) -> Result<()> {
        let parent_node = self
            .actions
            .get(group)
            .ok_or(MissionError::StaleAction(group))?;
        if parent_node.kind.group().is_none() {
            return Err(MissionError::NotAGroup(group));
        }
        let child_node = self
            .actions
            .get(child)
            .ok_or(MissionError::StaleAction(child))?;
        if let Some(parent) = child_node.parent {
            return Err(MissionError::AlreadyParented { child, parent });
        }
        if group == child || self.is_ancestor(child, group) {
            return Err(MissionError::Cycle { group, child });
        }

        if let Some(members) = self
            .actions
            .get_mut(group)
            .and_then(|node| node.kind.group_mut())
        {
            members.push(child);
        }
        if let Some(node) = self.actions.get_mut(child) {
            node.parent = Some(group);
        }
        Ok(())
    }

    /// Detaches `child` from `group`. The child becomes a root again.
    pub fn remove_child(&mut self, group: ActionId, child: ActionId) -> Result<()> {
        let members = self
            .actions
            .get_mut(group)
            .ok_or(MissionError::StaleAction(group))?
            .kind
            .group_mut()
            .ok_or(MissionError::NotAGroup(group))?;
        members.remove(child);
        if let Some(node) = self.actions.get_mut(child)
            && node.parent == Some(group)
        {
            node.parent = None;
        }
        Ok(())
    }

    /// Adds `target` to the list a reset action resets.
    pub fn add_reset_target(&mut self, reset: ActionId, target: ActionId) -> Result<()> {
        let node = self
            .actions
            .get_mut(reset)
            .ok_or(MissionError::StaleAction(reset))?;
        match &mut node.kind {
            ActionKind::Reset(action) => {
                action.add_target(target);
                Ok(())
            }
            _ => Err(MissionError::NotAResetAction(reset)),
        }
    }

    /// Action a wave begins once a single one of its enemies is left.
    pub fn set_last_stand_action(&mut self, wave: ActionId, target: Option<ActionId>) -> Result<()> {
        let node = self
            .actions
            .get_mut(wave)
            .ok_or(MissionError::StaleAction(wave))?;
        match &mut node.kind {
            ActionKind::SpawnWave(action) => {
                action.set_last_stand_action(target);
                Ok(())
            }
            _ => Err(MissionError::NotAWaveAction(wave)),
        }
    }

    /// Gives a timer a new duration and rewinds it.
    ///
    /// A pending timer keeps counting down from the new duration.
    pub fn set_timer_duration(&mut self, timer: ActionId, duration: f32) -> Result<()> {
        let node = self
            .actions
            .get_mut(timer)
            .ok_or(MissionError::StaleAction(timer))?;
        match &mut node.kind {
            ActionKind::Timer(action) => {
                action.initialize(duration);
                Ok(())
            }
            _ => Err(MissionError::NotATimer(timer)),
        }
    }

    fn is_ancestor(&self, candidate: ActionId, of: ActionId) -> bool {
        let mut cursor = self.actions.get(of).and_then(ActionNode::parent);
        while let Some(id) = cursor {
            if id == candidate {
                return true;
            }
            cursor = self.actions.get(id).and_then(ActionNode::parent);
        }
        false
    }

    // ===== lifecycle =====

    /// Starts (or restarts) an action.
    ///
    /// Begin is re-entrant: beginning a pending action starts it over. Nested
    /// begins deeper than `max_chain_depth` are dropped with a warning.
    pub fn begin(&mut self, id: ActionId) {
        let Some(node) = self.actions.get(id) else {
            debug!("begin on stale action {:?}", id);
            return;
        };
        if self.chain_depth >= self.config.max_chain_depth {
            warn!(
                "MISSION [{}] {} BEGIN dropped: chain depth {} reached",
                id, node.name, self.config.max_chain_depth
            );
            return;
        }

        self.chain_depth += 1;
        self.begin_node(id);
        self.chain_depth -= 1;
    }

    fn begin_node(&mut self, id: ActionId) {
        let Some(node) = self.actions.get_mut(id) else {
            return;
        };
        node.status = ActionStatus::Pending;
        node.armed = true;
        info!("MISSION [{}] {} BEGIN", id, node.name);

        let begun = match &mut node.kind {
            ActionKind::Basic => Begun::CompleteNow,
            ActionKind::Timer(timer) => {
                timer.restart();
                Begun::Waiting
            }
            ActionKind::Zone(zone) => Begun::Listen(zone.volume()),
            ActionKind::SpawnWave(_) => Begun::SpawnWave,
            ActionKind::Reset(reset) => Begun::ResetTargets(reset.targets().to_vec()),
            ActionKind::Dialog(dialog) => Begun::Dialog(dialog.message().to_owned()),
            ActionKind::Sequential(group) => Begun::Sequential(group.children().to_vec()),
            ActionKind::Parallel(group) => Begun::Parallel(group.children().to_vec()),
        };

        match begun {
            Begun::Waiting => {}
            Begun::CompleteNow => self.complete(id, true),
            Begun::Listen(volume) => match self.volumes.get_mut(volume) {
                Some(volume) => volume.add_notify(id),
                None => debug!("MISSION [{}] trigger volume {:?} is gone", id, volume),
            },
            Begun::SpawnWave => self.begin_wave(id),
            Begun::ResetTargets(targets) => {
                for target in targets {
                    self.reset(target);
                }
                self.complete(id, true);
            }
            Begun::Dialog(message) => self.open_dialog(id, &message),
            Begun::Sequential(children) => {
                for child in &children {
                    self.reset(*child);
                }
                match children.first() {
                    Some(first) => self.begin(*first),
                    None => self.complete(id, true),
                }
            }
            Begun::Parallel(children) => {
                if children.is_empty() {
                    self.complete(id, true);
                }
                for child in children {
                    self.begin(child);
                }
            }
        }
    }

    fn begin_wave(&mut self, id: ActionId) {
        let player = self.world.player();
        let Some(node) = self.actions.get_mut(id) else {
            return;
        };
        let ActionKind::SpawnWave(wave) = &mut node.kind else {
            return;
        };

        let requested = wave.requested_count();
        let group_id = wave.spawner().spawn_points();
        match self.spawn_groups.get_mut(group_id) {
            Some(group) => {
                wave.spawner_mut().spawn(
                    requested,
                    group,
                    &mut self.world,
                    &mut self.rng,
                    self.config.occupancy_scale,
                );
            }
            None => debug!("MISSION [{}] spawn group {:?} is gone", id, group_id),
        }
        wave.arm_kill_target();

        if let Some(previous) = wave.unwatch_player() {
            self.world
                .unsubscribe_kill(previous, KillSubscriber::Action(id));
        }
        wave.watch_player(player);
        if let Some(player) = player {
            self.world.subscribe_kill(player, KillSubscriber::Action(id));
        }

        debug!(
            "MISSION [{}] wave up: {} alive, {} kills needed",
            id,
            wave.spawner().minion_count(),
            wave.kills_remaining()
        );
    }

    fn open_dialog(&mut self, id: ActionId, message: &str) {
        if let Some(previous) = self.dialog.replace(id)
            && previous != id
        {
            warn!(
                "MISSION [{}] dialog replaces unacknowledged dialog [{}]",
                id, previous
            );
        }
        self.clock.pause();
        info!("MISSION [{}] DIALOG \"{}\"", id, message);
    }

    /// Returns an action to `None`, releasing whatever it registered.
    /// Groups reset their whole subtree.
    pub fn reset(&mut self, id: ActionId) {
        let Some(node) = self.actions.get_mut(id) else {
            debug!("reset on stale action {:?}", id);
            return;
        };
        node.status = ActionStatus::None;

        let held = Self::held_by(&mut node.kind);
        if let Held::Children(children) = held {
            for child in children {
                self.reset(child);
            }
        } else {
            self.release(id, held);
        }
    }

    /// Finishes an action and begins its continuation for that outcome, if
    /// one is set and still alive, before returning.
    pub fn complete(&mut self, id: ActionId, success: bool) {
        let Some(node) = self.actions.get_mut(id) else {
            debug!("complete on stale action {:?}", id);
            return;
        };
        node.status = ActionStatus::from_outcome(success);
        info!("MISSION [{}] {} {}", id, node.name, node.status);

        let next = node.continuation(success);
        let held = Self::held_by(&mut node.kind);
        if !matches!(held, Held::Children(_)) {
            self.release(id, held);
        }

        if let Some(next) = next {
            if self.actions.contains(next) {
                self.begin(next);
            } else {
                debug!("MISSION [{}] continuation {:?} is gone", id, next);
            }
        }
    }

    fn held_by(kind: &mut ActionKind) -> Held {
        match kind {
            ActionKind::Zone(zone) => Held::Listener(zone.volume()),
            ActionKind::SpawnWave(wave) => Held::PlayerWatch(wave.unwatch_player()),
            ActionKind::Dialog(_) => Held::Dialog,
            ActionKind::Sequential(group) | ActionKind::Parallel(group) => {
                Held::Children(group.children().to_vec())
            }
            _ => Held::Nothing,
        }
    }

    fn release(&mut self, id: ActionId, held: Held) {
        match held {
            Held::Listener(volume) => {
                if let Some(volume) = self.volumes.get_mut(volume) {
                    volume.remove_notify(id);
                }
            }
            Held::PlayerWatch(Some(player)) => {
                self.world
                    .unsubscribe_kill(player, KillSubscriber::Action(id));
            }
            Held::Dialog => {
                if self.dialog == Some(id) {
                    self.dialog = None;
                    self.clock.unpause();
                }
            }
            Held::PlayerWatch(None) | Held::Nothing | Held::Children(_) => {}
        }
    }

    /// Per-tick progress. Only timers and groups do anything here.
    pub fn on_update(&mut self, id: ActionId, dt: f32) {
        let Some(node) = self.actions.get_mut(id) else {
            return;
        };
        let pending = node.status.is_pending();
        let updated = match &mut node.kind {
            ActionKind::Timer(timer) if pending => {
                if timer.advance(dt) {
                    Updated::Expired
                } else {
                    Updated::Idle
                }
            }
            ActionKind::Sequential(_) => Updated::Sequential,
            ActionKind::Parallel(_) => Updated::Parallel,
            _ => Updated::Idle,
        };

        match updated {
            Updated::Idle => {}
            Updated::Expired => self.complete(id, true),
            Updated::Sequential => self.update_sequential(id, dt),
            Updated::Parallel => self.update_parallel(id, dt),
        }
    }

    /// Recomputes a pending group's status from its children and returns it.
    ///
    /// A group that turns terminal goes through [`complete`](Self::complete),
    /// so its continuations fire. Groups that are not pending keep their
    /// status until the next [`begin`](Self::begin). Non-group actions just
    /// report their status.
    pub fn update_status(&mut self, id: ActionId) -> ActionStatus {
        let Some(node) = self.actions.get(id) else {
            return ActionStatus::None;
        };
        let current = node.status;
        let Some(group) = node.kind.group() else {
            return current;
        };
        if !current.is_pending() {
            return current;
        }

        let aggregated = aggregate(
            group
                .children()
                .iter()
                .filter_map(|child| self.actions.get(*child))
                .map(ActionNode::status),
        );
        if let Some(status) = aggregated
            && status.is_terminal()
        {
            self.complete(id, status == ActionStatus::Success);
        }
        self.status(id)
    }

    fn children_of(&self, id: ActionId) -> Vec<ActionId> {
        self.actions
            .get(id)
            .and_then(|node| node.kind.group())
            .map(|group| group.children().to_vec())
            .unwrap_or_default()
    }

    /// Refreshes a group before its update. A begun group that has since
    /// been reset starts over here; this is what keeps reset loops running.
    fn resume_group(&mut self, id: ActionId) -> bool {
        if self
            .actions
            .get(id)
            .is_some_and(|node| node.armed && node.status == ActionStatus::None)
        {
            debug!("MISSION [{}] restarting after reset", id);
            self.begin(id);
        }
        self.update_status(id).is_pending()
    }

    fn update_sequential(&mut self, id: ActionId, dt: f32) {
        if !self.resume_group(id) {
            return;
        }

        let children = self.children_of(id);
        let statuses: Vec<_> = children.iter().map(|child| self.status(*child)).collect();
        match sequential_step(&statuses) {
            SequentialStep::Update(index) => self.on_update(children[index], dt),
            SequentialStep::BeginAndUpdate(index) => {
                self.begin(children[index]);
                self.on_update(children[index], dt);
            }
            SequentialStep::Idle => {}
        }
    }

    fn update_parallel(&mut self, id: ActionId, dt: f32) {
        if !self.resume_group(id) {
            return;
        }

        let children = self.children_of(id);
        let statuses: Vec<_> = children.iter().map(|child| self.status(*child)).collect();
        for index in parallel_targets(&statuses) {
            let child = children[index];
            // A sibling may have reset or finished it earlier this tick.
            if self.status(child).is_pending() {
                self.on_update(child, dt);
            }
        }
    }

    // ===== driver =====

    /// Advances the whole mission by `dt` seconds.
    ///
    /// Does nothing while the clock is paused. Otherwise scans every trigger
    /// volume, then updates every begun root action in slot order.
    pub fn tick(&mut self, dt: f32) {
        if !self.clock.advance(dt) {
            return;
        }

        for volume in self.volumes.handles() {
            self.update_volume(volume);
        }

        let roots: Vec<ActionId> = self
            .actions
            .iter()
            .filter(|(_, node)| node.parent.is_none() && node.armed)
            .map(|(id, _)| id)
            .collect();
        for id in roots {
            // Destroyed or adopted by a group earlier this tick.
            if self
                .actions
                .get(id)
                .is_some_and(|node| node.parent.is_none())
            {
                self.on_update(id, dt);
            }
        }
    }

    fn update_volume(&mut self, id: VolumeId) {
        let Some(volume) = self.volumes.get(id) else {
            return;
        };
        if !volume.is_active() {
            return;
        }

        let world = &self.world;
        let departures = volume.departures(|character| world.character(character));
        for (character, view) in departures {
            let Some(volume) = self.volumes.get_mut(id) else {
                return;
            };
            if !volume.untrack(character) {
                continue;
            }
            match view {
                Some(view) => {
                    debug!("{} left volume '{}'", character, volume.name());
                    self.notify_zone(id, &view, ZoneEdge::Exit);
                }
                None => debug!("{} vanished from volume '{}'", character, volume.name()),
            }
        }

        let roster = self.world.characters();
        let arrivals = match self.volumes.get(id) {
            Some(volume) if volume.is_active() => volume.arrivals(&roster),
            _ => return,
        };
        for view in arrivals {
            let Some(volume) = self.volumes.get_mut(id) else {
                return;
            };
            if !volume.is_active() {
                return;
            }
            if !volume.track(view.id) {
                continue;
            }
            debug!("{} entered volume '{}'", view.id, volume.name());
            self.notify_zone(id, &view, ZoneEdge::Enter);
        }
    }

    fn notify_zone(&mut self, volume: VolumeId, character: &CharacterView, edge: ZoneEdge) {
        let listeners = match self.volumes.get(volume) {
            Some(volume) => volume.listeners().to_vec(),
            None => return,
        };

        for listener in listeners {
            // An earlier listener's completion may have unsubscribed this one.
            if !self
                .volumes
                .get(volume)
                .is_some_and(|v| v.has_listener(listener))
            {
                continue;
            }
            let Some(node) = self.actions.get(listener) else {
                if let Some(volume) = self.volumes.get_mut(volume) {
                    volume.remove_notify(listener);
                }
                continue;
            };
            let Some(zone) = node.kind.as_zone_listener() else {
                continue;
            };

            let matched = match edge {
                ZoneEdge::Enter => zone.notify_on_enter(character),
                ZoneEdge::Exit => zone.notify_on_exit(character),
            };
            if matched {
                self.complete(listener, true);
            }
        }
    }

    // ===== notifications =====

    /// Kills a character through the world and delivers the death to every
    /// listener it had.
    pub fn kill_character(&mut self, victim: CharacterId) {
        let subscribers = self.world.kill(victim);
        self.notify_killed(victim, &subscribers);
    }

    /// Delivers a death reported by the host game.
    pub fn notify_killed(&mut self, victim: CharacterId, subscribers: &[KillSubscriber]) {
        for subscriber in subscribers {
            match *subscriber {
                KillSubscriber::Spawner(owner) => self.notify_spawner(owner, victim),
                KillSubscriber::Action(action) => self.notify_observer(action, victim),
            }
        }
    }

    fn notify_spawner(&mut self, owner: ActionId, victim: CharacterId) {
        let Some(node) = self.actions.get_mut(owner) else {
            return;
        };
        let ActionKind::SpawnWave(wave) = &mut node.kind else {
            return;
        };
        let Some(remaining) = wave.spawner_mut().notify_on_killed(victim) else {
            return;
        };
        let Some(parent) = wave.spawner().parent_action() else {
            return;
        };

        self.notify_observer(parent, victim);

        if remaining == 1 {
            let last_stand = self
                .actions
                .get_mut(parent)
                .and_then(|node| node.kind.as_kill_observer())
                .and_then(|observer| observer.notify_last_man_standing());
            if let Some(action) = last_stand {
                debug!("MISSION [{}] last man standing", parent);
                self.begin(action);
            }
        }
    }

    fn notify_observer(&mut self, action: ActionId, victim: CharacterId) {
        let Some(node) = self.actions.get_mut(action) else {
            return;
        };
        let status = node.status;
        let Some(observer) = node.kind.as_kill_observer() else {
            return;
        };

        if let Some(success) = observer.notify_on_killed(victim, status) {
            self.complete(action, success);
        }
    }

    /// Acknowledges the pending dialog: clears the slot, unpauses the clock
    /// and completes the dialog successfully. Returns `false` when no dialog
    /// was waiting.
    pub fn acknowledge_dialog(&mut self) -> bool {
        let Some(id) = self.dialog.take() else {
            return false;
        };
        self.clock.unpause();
        if !self.actions.contains(id) {
            return false;
        }
        self.complete(id, true);
        true
    }

    // ===== teardown =====

    /// Destroys an action.
    ///
    /// Leaf actions are reset first so they drop their registrations; a wave
    /// additionally drops its minions' death subscriptions. Group membership
    /// is unlinked both ways, and the children of a destroyed group become
    /// roots. Other references to the action simply go stale.
    pub fn destroy_action(&mut self, id: ActionId) -> bool {
        let Some(node) = self.actions.get(id) else {
            return false;
        };
        if node.kind.group().is_none() {
            self.reset(id);
        }

        let Some(mut node) = self.actions.remove(id) else {
            return false;
        };
        if let ActionKind::SpawnWave(wave) = &mut node.kind {
            wave.spawner_mut().release(&mut self.world);
        }
        if let Some(parent) = node.parent
            && let Some(group) = self
                .actions
                .get_mut(parent)
                .and_then(|parent| parent.kind.group_mut())
        {
            group.remove(id);
        }
        if let Some(group) = node.kind.group() {
            for child in group.children() {
                if let Some(child) = self.actions.get_mut(*child) {
                    child.parent = None;
                }
            }
        }
        for (_, other) in self.actions.iter_mut() {
            if let ActionKind::Reset(reset) = &mut other.kind {
                reset.forget(id);
            }
        }

        debug!("MISSION [{}] {} destroyed", id, node.name);
        true
    }

    pub fn destroy_volume(&mut self, id: VolumeId) -> bool {
        self.volumes.remove(id).is_some()
    }

    pub fn destroy_spawn_group(&mut self, id: SpawnGroupId) -> bool {
        self.spawn_groups.remove(id).is_some()
    }
}
