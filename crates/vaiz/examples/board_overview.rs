//! Board overview example
//!
//! Lists every board in the space with its columns, then the open tasks on
//! the first board.
//!
//! ## Usage
//!
//! ```bash
//! export VAIZ_API_KEY=...
//! export VAIZ_SPACE_ID=...
//! RUST_LOG=vaiz=debug cargo run --example board_overview
//! ```

use vaiz::{Client, GetTasksRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;

    let boards = client.boards().get_boards().await?.boards;
    if boards.is_empty() {
        println!("No boards in space {}", client.space_id());
        return Ok(());
    }

    for board in &boards {
        let columns: Vec<_> = board.groups.iter().map(|g| g.name.as_str()).collect();
        println!("{} [{}]", board.name, columns.join(" | "));
    }

    let filter = GetTasksRequest::builder()
        .board(boards[0].id.clone())
        .completed(false)
        .build()?;
    let tasks = client.tasks().get_all_tasks(Some(&filter), 200).await?;

    println!("\n{} open tasks on {}:", tasks.len(), boards[0].name);
    for task in tasks {
        println!("  {} {}", task.hrid.as_deref().unwrap_or("-"), task.name);
    }

    Ok(())
}
