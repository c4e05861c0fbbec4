//! Axis-aligned trigger volumes.
//!
//! A volume tracks which characters stand inside it and tells its listeners
//! about crossings. The per-tick scan lives in
//! [`Mission::tick`](crate::Mission::tick) because notifying listeners means
//! completing actions; this module owns the membership bookkeeping.

use crate::action::ActionId;
use crate::arena::Handle;
use crate::geometry::{Bounds, Vec2};
use crate::world::{CharacterId, CharacterView};

/// Handle to a trigger volume stored in a [`Mission`](crate::Mission).
pub type VolumeId = Handle<TriggerVolume>;

#[derive(Clone, Debug)]
pub struct TriggerVolume {
    name: String,
    bounds: Bounds,
    contained: Vec<CharacterId>,
    listeners: Vec<ActionId>,
}

impl TriggerVolume {
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            bounds,
            contained: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn contains_position(&self, position: Vec2) -> bool {
        self.bounds.contains(position)
    }

    /// Characters inside as of the last scan.
    pub fn contained(&self) -> &[CharacterId] {
        &self.contained
    }

    pub fn listeners(&self) -> &[ActionId] {
        &self.listeners
    }

    pub fn has_listener(&self, listener: ActionId) -> bool {
        self.listeners.contains(&listener)
    }

    /// Scans only run while somebody is listening.
    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn add_notify(&mut self, listener: ActionId) {
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
    }

    /// Removing an absent listener is a no-op. Once the last listener leaves,
    /// membership is forgotten so the next subscriber starts from scratch.
    pub fn remove_notify(&mut self, listener: ActionId) {
        self.listeners.retain(|l| *l != listener);
        if self.listeners.is_empty() {
            self.contained.clear();
        }
    }

    /// Tracked characters that are no longer inside. Characters that vanished
    /// from the world are reported with `None`.
    pub(crate) fn departures<F>(&self, lookup: F) -> Vec<(CharacterId, Option<CharacterView>)>
    where
        F: Fn(CharacterId) -> Option<CharacterView>,
    {
        self.contained
            .iter()
            .filter_map(|id| match lookup(*id) {
                Some(view) if self.contains_position(view.position) => None,
                view => Some((*id, view)),
            })
            .collect()
    }

    /// Characters from `roster` inside the bounds but not yet tracked.
    pub(crate) fn arrivals(&self, roster: &[CharacterView]) -> Vec<CharacterView> {
        roster
            .iter()
            .filter(|view| !self.contained.contains(&view.id) && self.contains_position(view.position))
            .copied()
            .collect()
    }

    pub(crate) fn track(&mut self, character: CharacterId) -> bool {
        if self.contained.contains(&character) {
            return false;
        }
        self.contained.push(character);
        true
    }

    pub(crate) fn untrack(&mut self, character: CharacterId) -> bool {
        let before = self.contained.len();
        self.contained.retain(|c| *c != character);
        self.contained.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, ActionNode};
    use crate::arena::Arena;
    use crate::world::Team;

    fn center() -> TriggerVolume {
        TriggerVolume::new(
            "TV_Center",
            Bounds::new(Vec2::new(270.0, 190.0), Vec2::new(370.0, 290.0)),
        )
    }

    fn view(id: u64, x: f32, y: f32) -> CharacterView {
        CharacterView {
            id: CharacterId(id),
            position: Vec2::new(x, y),
            radius: 20.0,
            team: Team::Ally,
        }
    }

    #[test]
    fn last_listener_leaving_clears_membership() {
        let mut actions = Arena::new();
        let a = actions.insert(ActionNode::new("a", ActionKind::Basic));
        let b = actions.insert(ActionNode::new("b", ActionKind::Basic));

        let mut volume = center();
        volume.add_notify(a);
        volume.add_notify(b);
        volume.add_notify(a);
        volume.track(CharacterId(1));
        assert_eq!(volume.listeners().len(), 2);

        volume.remove_notify(a);
        assert_eq!(volume.contained(), &[CharacterId(1)]);
        volume.remove_notify(b);
        volume.remove_notify(b);
        assert!(volume.contained().is_empty());
        assert!(!volume.is_active());
    }

    #[test]
    fn arrivals_skip_tracked_and_outside() {
        let mut volume = center();
        volume.track(CharacterId(1));
        let roster = [view(1, 320.0, 240.0), view(2, 300.0, 200.0), view(3, 0.0, 0.0)];

        let arrived: Vec<_> = volume.arrivals(&roster).iter().map(|v| v.id).collect();
        assert_eq!(arrived, vec![CharacterId(2)]);
    }

    #[test]
    fn departures_include_moved_and_vanished() {
        let mut volume = center();
        volume.track(CharacterId(1));
        volume.track(CharacterId(2));
        volume.track(CharacterId(3));

        let departed = volume.departures(|id| match id.0 {
            1 => Some(view(1, 320.0, 240.0)),
            2 => Some(view(2, 10.0, 10.0)),
            _ => None,
        });
        assert_eq!(departed.len(), 2);
        assert_eq!(departed[0].0, CharacterId(2));
        assert!(departed[0].1.is_some());
        assert_eq!(departed[1], (CharacterId(3), None));
    }
}
