use anyhow::{anyhow, Result};

use crate::api::issues;
use crate::app::App;
use crate::validate::validate_create_issue;

pub fn run(app: &App, title: &str, description: &str) -> Result<()> {
    let input = validate_create_issue(title, description).map_err(|errs| anyhow!("{}", errs))?;

    let issue = issues::create(&app.http, &input)?;

    // The list and every per-id entry are stale now.
    app.cache.invalidate(&["issues"])?;

    println!("Created issue #{}: {}", issue.id, issue.title);
    Ok(())
}
