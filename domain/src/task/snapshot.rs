//! Task lists returned by the session sync agent.

use super::entities::Task;
use crate::util::json_candidates;
use serde_json::Value;

/// Decode the complete task list from a sync response.
///
/// Accepts a bare array of tasks or an object with a `tasks` array, either
/// as JSON or embedded in text. Returns `None` unless at least one entry
/// decodes, so an unhelpful reply never empties the board.
pub fn decode_task_list(response: &Value) -> Option<Vec<Task>> {
    match response {
        Value::String(text) => json_candidates(text).iter().find_map(from_json),
        other => from_json(other),
    }
}

fn from_json(json: &Value) -> Option<Vec<Task>> {
    let items = match json {
        Value::Array(items) => items,
        Value::Object(map) => map.get("tasks")?.as_array()?,
        _ => return None,
    };
    let tasks: Vec<Task> = items
        .iter()
        .filter_map(|item| serde_json::from_value::<Task>(item.clone()).ok())
        .filter(|task| task.validate().is_ok())
        .collect();
    if tasks.is_empty() { None } else { Some(tasks) }
}
