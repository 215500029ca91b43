//! Task positioning workflow: fetch siblings, compute the full ordering,
//! submit it as one atomic reorder.

use crate::api::TaskSource;
use crate::error::Result;
use crate::order::OrderIntent;
use crate::position::{insert_at_position, OrderedItem};
use crate::scope::{scope_key_of, OrderableTask};
use crate::sync::{SyncClient, SyncTransport};

/// Move `task` to `position` (1-based) among its siblings.
///
/// Returns the ordering that was applied.
pub async fn move_task_to_position<S, T>(
    source: &S,
    sync: &SyncClient<T>,
    token: &str,
    task: &OrderableTask,
    position: i64,
) -> Result<Vec<OrderedItem>>
where
    S: TaskSource,
    T: SyncTransport,
{
    let scope = scope_key_of(task);
    let candidates = source.get_tasks(&scope).await?;
    tracing::debug!(
        task_id = %task.id,
        scope = ?scope,
        candidates = candidates.len(),
        position,
        "Computing sibling order"
    );

    let ordered = insert_at_position(task, position, &candidates);
    sync.reorder_items(token, &ordered).await?;

    crate::log_task_operation!("reorder", task.id.as_str(), ordered.len());
    Ok(ordered)
}

pub async fn move_task_to_top<S, T>(
    source: &S,
    sync: &SyncClient<T>,
    token: &str,
    task: &OrderableTask,
) -> Result<Vec<OrderedItem>>
where
    S: TaskSource,
    T: SyncTransport,
{
    move_task_to_position(source, sync, token, task, 1).await
}

pub async fn apply_order_intent<S, T>(
    source: &S,
    sync: &SyncClient<T>,
    token: &str,
    task: &OrderableTask,
    intent: OrderIntent,
) -> Result<Vec<OrderedItem>>
where
    S: TaskSource,
    T: SyncTransport,
{
    match intent {
        OrderIntent::Top => move_task_to_top(source, sync, token, task).await,
        OrderIntent::AtPosition(n) => {
            let position = i64::try_from(n).unwrap_or(i64::MAX);
            move_task_to_position(source, sync, token, task, position).await
        },
    }
}
