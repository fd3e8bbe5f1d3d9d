use anyhow::Result;

use crate::api::issues;
use crate::app::App;
use crate::models::{Issue, Status};

pub fn run(app: &App, status: Option<Status>, refresh: bool) -> Result<()> {
    if refresh {
        app.cache.invalidate(&["issues"])?;
    }

    let all: Vec<Issue> = app
        .cache
        .fetch(&["issues"], || Ok(issues::list(&app.http)?))?;

    // Status filtering stays client-side; the server only has a full list.
    let issues: Vec<&Issue> = all
        .iter()
        .filter(|issue| status.map_or(true, |s| issue.status == s))
        .collect();

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    for issue in issues {
        let status_display = format!("[{}]", issue.status);
        let date = issue.created_at.format("%Y-%m-%d");
        println!(
            "#{:<5} {:13} {:<40} {:<20} {}",
            issue.id,
            status_display,
            truncate(&issue.title, 40),
            truncate(&issue.user_name, 20),
            date
        );
    }

    Ok(())
}

pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}
