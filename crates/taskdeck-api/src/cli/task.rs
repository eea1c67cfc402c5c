//! Task lifecycle CLI commands: add, list, show, done, delete.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use taskdeck_core::repository::SortOrder;
use taskdeck_core::repository::task::TaskFilter;
use taskdeck_types::task::{CreateTaskRequest, Task, TaskId, UpdateTaskRequest};

use crate::state::AppState;

fn parse_id(raw: &str) -> Result<TaskId> {
    raw.parse()
        .map_err(|_| anyhow::anyhow!("'{raw}' is not a valid task id"))
}

/// Add a new task.
///
/// ```bash
/// tdeck add "Buy milk" --description "2 liters, whole"
/// ```
pub async fn add_task(
    state: &AppState,
    title: String,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let request = CreateTaskRequest {
        title,
        description,
        completed: None,
    };

    let task = state.task_service.create_task(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    println!();
    println!("  {} Task added", style("✓").green().bold());
    println!();
    println!("  {}  {}", style("Title:").bold(), style(&task.title).cyan());
    println!("  {}  {}", style("ID:").bold(), style(task.id.to_string()).dim());
    println!();
    Ok(())
}

/// List tasks in a table.
pub async fn list_tasks(
    state: &AppState,
    completed: Option<bool>,
    sort: &str,
    order: &str,
    limit: Option<i64>,
    json: bool,
) -> Result<()> {
    let sort_order = match order.to_lowercase().as_str() {
        "desc" => Some(SortOrder::Desc),
        _ => Some(SortOrder::Asc),
    };

    let filter = Some(TaskFilter {
        completed,
        sort_by: Some(sort.to_string()),
        sort_order,
        limit,
        offset: None,
    });

    let tasks = state.task_service.list_tasks(filter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!();
        println!("  No tasks. Add one with {}", style("tdeck add <title>").cyan());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["", "Title", "Description", "Created", "ID"]);

    for task in &tasks {
        table.add_row(vec![
            status_cell(task),
            Cell::new(&task.title),
            Cell::new(truncate(&task.description, 40)),
            Cell::new(task.created_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(task.id.to_string()).fg(Color::DarkGrey),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Show one task in full.
pub async fn show_task(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let task = state.task_service.get_task(&id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    println!();
    println!("  {}  {}", style("Title:").bold(), style(&task.title).cyan());
    if !task.description.is_empty() {
        println!("  {}  {}", style("Description:").bold(), task.description);
    }
    println!(
        "  {}  {}",
        style("Status:").bold(),
        if task.completed {
            style("completed").green()
        } else {
            style("pending").yellow()
        }
    );
    println!("  {}  {}", style("Created:").bold(), task.created_at.to_rfc3339());
    println!("  {}  {}", style("Updated:").bold(), task.updated_at.to_rfc3339());
    println!("  {}  {}", style("ID:").bold(), style(task.id.to_string()).dim());
    println!();
    Ok(())
}

/// Mark a task as completed.
pub async fn done_task(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let task = state
        .task_service
        .patch_task(
            &id,
            UpdateTaskRequest {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} marked as completed",
        style("✓").green().bold(),
        style(&task.title).cyan()
    );
    println!();
    Ok(())
}

/// Delete a task, confirming first unless forced.
pub async fn delete_task(state: &AppState, id: &str, force: bool, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let task = state.task_service.get_task(&id).await?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}'?", task.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Aborted.");
            return Ok(());
        }
    }

    state.task_service.delete_task(&id).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "deleted": true,
                "id": id.to_string(),
            }))?
        );
        return Ok(());
    }

    println!();
    println!("  {} Deleted '{}'", style("✓").green().bold(), task.title);
    println!();
    Ok(())
}

fn status_cell(task: &Task) -> Cell {
    if task.completed {
        Cell::new("✓").fg(Color::Green)
    } else {
        Cell::new("•").fg(Color::Yellow)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
