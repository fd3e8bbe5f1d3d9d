use anyhow::Result;

use crate::api::issues;
use crate::app::App;
use crate::commands::list::truncate;
use crate::models::{Issue, Status};

/// Kanban view: one column per status, filled from the single cached list.
pub fn run(app: &App, refresh: bool) -> Result<()> {
    if refresh {
        app.cache.invalidate(&["issues"])?;
    }

    let all: Vec<Issue> = app
        .cache
        .fetch(&["issues"], || Ok(issues::list(&app.http)?))?;

    for (index, status) in Status::ALL.iter().enumerate() {
        let column: Vec<&Issue> = all.iter().filter(|i| i.status == *status).collect();

        if index > 0 {
            println!();
        }
        println!("{} ({})", status, column.len());
        if column.is_empty() {
            println!("  (empty)");
            continue;
        }
        for issue in column {
            println!(
                "  #{:<5} {:<40} {}",
                issue.id,
                truncate(&issue.title, 40),
                truncate(&issue.user_name, 20)
            );
        }
    }

    Ok(())
}
