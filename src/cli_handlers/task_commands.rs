use crate::api::{NewTask, RestClient, Task, TaskSource};
use crate::cli::{AddArgs, ReorderArgs};
use crate::config;
use crate::error::{Result, TodoistError};
use crate::order::{parse_order_intent, OrderIntent, OrderOptions};
use crate::ordering::apply_order_intent;
use crate::position::OrderedItem;
use crate::sync::{HttpTransport, SyncClient, SyncTransport};
use serde_json::json;

/// Create a task, then position it if an intent was given.
///
/// Without an intent the task keeps the position the API assigned and no
/// further requests are made.
pub async fn create_task<S, T>(
    source: &S,
    sync: &SyncClient<T>,
    token: &str,
    new_task: &NewTask,
    intent: Option<OrderIntent>,
) -> Result<(Task, Option<Vec<OrderedItem>>)>
where
    S: TaskSource,
    T: SyncTransport,
{
    let task = source.add_task(new_task).await?;
    crate::log_task_operation!("add", task.handle.id.as_str());

    let applied = match intent {
        Some(intent) => Some(apply_order_intent(source, sync, token, &task.handle, intent).await?),
        None => None,
    };
    Ok((task, applied))
}

/// Move an existing task according to `intent`
pub async fn reorder_task<S, T>(
    source: &S,
    sync: &SyncClient<T>,
    token: &str,
    task_id: &str,
    intent: OrderIntent,
) -> Result<(Task, Vec<OrderedItem>)>
where
    S: TaskSource,
    T: SyncTransport,
{
    let task = source.get_task(task_id).await?;
    let applied = apply_order_intent(source, sync, token, &task.handle, intent).await?;
    Ok((task, applied))
}

fn clients(token: &str) -> (RestClient, SyncClient<HttpTransport>) {
    let http = reqwest::Client::new();
    let source = RestClient::new(http.clone(), config::api_base_url(), token);
    let sync = SyncClient::new(HttpTransport::new(http), config::sync_endpoint());
    (source, sync)
}

/// Handle `todoist add`
pub async fn handle_add_command(args: AddArgs) -> Result<()> {
    // Usage errors must surface before any credential or network access
    let intent = parse_order_intent(&OrderOptions {
        top: args.top,
        order: args.order,
    })?;
    let token = config::require_token()?;
    let (source, sync) = clients(&token);

    let new_task = NewTask {
        content: args.content.join(" "),
        description: args.description,
        project_id: args.project_id,
        section_id: args.section_id,
        parent_id: args.parent,
        // The API counts 4 as most urgent
        priority: args.priority.map(|p| 5 - p),
        due_string: args.due,
        labels: args.labels,
    };

    let (task, _) = create_task(&source, &sync, &token, &new_task, intent).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("✓ Added: {}", task.content);
        println!("  ID: {}", task.handle.id);
    }
    Ok(())
}

/// Handle `todoist reorder`
pub async fn handle_reorder_command(args: ReorderArgs) -> Result<()> {
    let intent = parse_order_intent(&OrderOptions {
        top: args.top,
        order: args.order,
    })?
    .ok_or_else(|| {
        TodoistError::InvalidUsage(
            "Nothing to do: pass \"--top\" or \"--order <position>\".".to_string(),
        )
    })?;
    let token = config::require_token()?;
    let (source, sync) = clients(&token);

    let (task, applied) = reorder_task(&source, &sync, &token, &args.task_id, intent).await?;
    let position = applied
        .iter()
        .find(|item| item.id == task.handle.id)
        .map(|item| item.child_order)
        .unwrap_or(1);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "task_id": task.handle.id,
                "position": position,
                "order": applied,
            }))?
        );
    } else {
        println!(
            "✓ Moved: {} (position {} of {})",
            task.content,
            position,
            applied.len()
        );
    }
    Ok(())
}
