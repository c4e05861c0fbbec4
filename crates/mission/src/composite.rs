//! Composite actions.
//!
//! A composite owns an ordered list of child actions and derives its own
//! status from theirs. Two execution strategies are built on it:
//!
//! - **Sequential**: one child active per tick, in insertion order
//! - **Parallel**: every pending child is updated each tick
//!
//! The decisions (aggregate status, which child runs next) are pure functions
//! over child statuses; [`Mission`](crate::Mission) applies them.

use crate::action::ActionId;
use crate::status::ActionStatus;

/// Ordered child list of a composite action.
///
/// Insertion order is significant: it is the sequential run order and the
/// parallel update order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionGroup {
    children: Vec<ActionId>,
}

impl ActionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[ActionId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push(&mut self, child: ActionId) {
        self.children.push(child);
    }

    pub(crate) fn remove(&mut self, child: ActionId) {
        self.children.retain(|c| *c != child);
    }
}

/// Combines child statuses into the group status.
///
/// # Semantics
///
/// - Any `Fail` → `Fail`
/// - Otherwise any `Pending` or `None` → `Pending` (a child that has not
///   started yet is still owed work)
/// - Otherwise, with at least one `Success` → `Success`
///
/// Returns `None` for an empty group: with no children there is nothing to
/// aggregate and the group keeps whatever status it has.
pub fn aggregate<I>(statuses: I) -> Option<ActionStatus>
where
    I: IntoIterator<Item = ActionStatus>,
{
    let mut found_pending = false;
    let mut found_success = false;
    for status in statuses {
        match status {
            ActionStatus::Fail => return Some(ActionStatus::Fail),
            ActionStatus::Pending | ActionStatus::None => found_pending = true,
            ActionStatus::Success => found_success = true,
        }
    }

    if found_pending {
        Some(ActionStatus::Pending)
    } else if found_success {
        Some(ActionStatus::Success)
    } else {
        None
    }
}

/// What a sequential group does with its children this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequentialStep {
    /// Forward the tick to the pending child at this index.
    Update(usize),
    /// Begin the unstarted child at this index, then forward the tick to it.
    BeginAndUpdate(usize),
    /// Every child has finished.
    Idle,
}

/// Picks the single active child: the first one `Pending` or `None`,
/// skipping finished children.
pub fn sequential_step(statuses: &[ActionStatus]) -> SequentialStep {
    for (index, status) in statuses.iter().enumerate() {
        match status {
            ActionStatus::Pending => return SequentialStep::Update(index),
            ActionStatus::None => return SequentialStep::BeginAndUpdate(index),
            ActionStatus::Success | ActionStatus::Fail => continue,
        }
    }
    SequentialStep::Idle
}

/// Indices of the children a parallel group updates this tick.
pub fn parallel_targets(statuses: &[ActionStatus]) -> Vec<usize> {
    statuses
        .iter()
        .enumerate()
        .filter(|(_, status)| status.is_pending())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ActionStatus::{Fail, None as Idle, Pending, Success};

    #[test]
    fn any_fail_fails_the_group() {
        assert_eq!(aggregate([Success, Pending, Fail, Idle]), Some(Fail));
        assert_eq!(aggregate([Fail, Success]), Some(Fail));
    }

    #[test]
    fn unstarted_children_keep_group_pending() {
        assert_eq!(aggregate([Success, Idle]), Some(Pending));
        assert_eq!(aggregate([Idle, Idle]), Some(Pending));
    }

    #[test]
    fn all_success_succeeds() {
        assert_eq!(aggregate([Success, Success]), Some(Success));
    }

    #[test]
    fn empty_group_is_left_alone() {
        assert_eq!(aggregate([]), None);
    }

    #[test]
    fn sequential_runs_first_unfinished_child() {
        assert_eq!(sequential_step(&[Success, Pending, Idle]), SequentialStep::Update(1));
        assert_eq!(
            sequential_step(&[Success, Idle, Pending]),
            SequentialStep::BeginAndUpdate(1)
        );
        assert_eq!(sequential_step(&[Fail, Idle]), SequentialStep::BeginAndUpdate(1));
        assert_eq!(sequential_step(&[Success, Fail]), SequentialStep::Idle);
    }

    #[test]
    fn parallel_updates_only_pending_children() {
        assert_eq!(parallel_targets(&[Pending, Success, Idle, Pending]), vec![0, 3]);
    }
}
