//! Position insertion
//!
//! Computes the complete target ordering of a sibling group with one task
//! spliced in at a requested 1-based position. The result always carries
//! contiguous keys `1..=N`, however sparse the remote keys were.

use crate::scope::{same_scope, OrderableTask};
use serde::Serialize;

/// One entry of a reorder command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedItem {
    pub id: String,
    pub child_order: i64,
}

impl OrderedItem {
    pub fn new(id: impl Into<String>, child_order: i64) -> Self {
        Self {
            id: id.into(),
            child_order,
        }
    }
}

/// Splice `task` into `candidates` at `position` (1-based).
///
/// Candidates outside the task's scope and any stale copy of the task
/// itself are dropped. The rest are sorted by `(child_order, id)`.
/// Positions below 1 clamp to the front, positions past the end clamp to
/// the back.
pub fn insert_at_position(
    task: &OrderableTask,
    position: i64,
    candidates: &[OrderableTask],
) -> Vec<OrderedItem> {
    let mut remaining: Vec<&OrderableTask> = candidates
        .iter()
        .filter(|candidate| same_scope(task, candidate))
        .filter(|candidate| candidate.id != task.id)
        .collect();

    remaining.sort_by(|left, right| {
        left.child_order
            .cmp(&right.child_order)
            .then_with(|| left.id.cmp(&right.id))
    });

    let max_index = remaining.len() as i64;
    let insert_index = position.saturating_sub(1).clamp(0, max_index) as usize;
    remaining.insert(insert_index, task);

    remaining
        .iter()
        .enumerate()
        .map(|(index, item)| OrderedItem::new(item.id.clone(), index as i64 + 1))
        .collect()
}
