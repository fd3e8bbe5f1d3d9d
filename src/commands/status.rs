use anyhow::Result;

use crate::api::issues;
use crate::app::App;
use crate::models::Status;

/// Full status replacement; the only mutation an existing issue supports.
pub fn run(app: &App, id: i64, status: Status) -> Result<()> {
    let issue = issues::update_status(&app.http, id, status)?;

    // Invalidating the family covers both the list and this id's entry.
    app.cache.invalidate(&["issues"])?;

    println!("Issue #{} is now {}", issue.id, issue.status);
    Ok(())
}
