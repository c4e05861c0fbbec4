use super::ActionId;

/// Resets every target, in order, then succeeds immediately.
///
/// Targets are not owned. A reset action may target a tree that contains it,
/// which is how looping missions are built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetAction {
    targets: Vec<ActionId>,
}

impl ResetAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_target(&mut self, target: ActionId) {
        self.targets.push(target);
    }

    pub fn targets(&self) -> &[ActionId] {
        &self.targets
    }

    pub(crate) fn forget(&mut self, target: ActionId) {
        self.targets.retain(|t| *t != target);
    }
}
