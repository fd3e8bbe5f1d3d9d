use anyhow::{bail, Result};

use crate::api::admin;
use crate::app::App;
use crate::models::AdminStats;
use crate::permissions::{has_permission, PERM_ADMIN};

pub fn run(app: &App, refresh: bool) -> Result<()> {
    // Client-side gate only; the server checks the bit again.
    let user = match app.session.user() {
        Some(user) => user,
        None => bail!("Not logged in. Run 'taskboard login' first."),
    };
    if !has_permission(user.permissions, PERM_ADMIN) {
        bail!("Admin access required.");
    }

    if refresh {
        app.cache.invalidate(&["admin", "stats"])?;
    }

    let stats: AdminStats = app
        .cache
        .fetch(&["admin", "stats"], || Ok(admin::stats(&app.http)?))?;

    println!("Users:  {}", stats.total_users);
    println!("Issues: {}", stats.total_issues);
    for row in &stats.issues_by_status {
        println!("  {:<12} {}", row.status, row.count);
    }

    Ok(())
}
