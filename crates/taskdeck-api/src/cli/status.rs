//! System status dashboard: data dir, database, task counts.

use anyhow::Result;
use console::style;

use taskdeck_core::repository::task::TaskFilter;

use crate::state::AppState;

pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let total = state.task_service.count_tasks().await?;
    let completed = state
        .task_service
        .list_tasks(Some(TaskFilter {
            completed: Some(true),
            ..Default::default()
        }))
        .await?
        .len() as i64;
    let pending = total - completed;

    let db_path = state.data_dir.join("taskdeck.db");

    if json {
        let out = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "database": db_path.display().to_string(),
            "tasks": { "total": total, "pending": pending, "completed": completed },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {} Taskdeck status", style("◆").cyan().bold());
    println!();
    println!("  {}  {}", style("Data dir:").bold(), state.data_dir.display());
    println!("  {}  {}", style("Database:").bold(), db_path.display());
    println!();
    println!(
        "  {}  {} total, {} pending, {} completed",
        style("Tasks:").bold(),
        total,
        style(pending).yellow(),
        style(completed).green()
    );
    println!();
    Ok(())
}
