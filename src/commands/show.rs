use anyhow::Result;

use crate::api::issues;
use crate::app::App;
use crate::models::Issue;

pub fn run(app: &App, id: i64, refresh: bool) -> Result<()> {
    let id_key = id.to_string();
    if refresh {
        app.cache.invalidate(&["issues", &id_key])?;
    }

    let issue: Issue = app
        .cache
        .fetch(&["issues", &id_key], || Ok(issues::get(&app.http, id)?))?;

    println!("Issue #{}: {}", issue.id, issue.title);
    println!("Status: {}", issue.status);
    println!("Owner: {}", issue.user_name);
    println!("Created: {}", issue.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Updated: {}", issue.updated_at.format("%Y-%m-%d %H:%M:%S"));

    if !issue.description.is_empty() {
        println!("\nDescription:");
        for line in issue.description.lines() {
            println!("  {}", line);
        }
    }

    Ok(())
}
