use anyhow::{bail, Result};

use crate::app::App;
use crate::avatar::{avatar_color, avatar_color_code, initials};
use crate::permissions;

/// Profile view. Everything comes from the hydrated session; no request
/// is made.
pub fn run(app: &App) -> Result<()> {
    let user = match app.session.user() {
        Some(user) => user,
        None => bail!("Not logged in. Run 'taskboard login' first."),
    };

    let badge = initials(&user.name);
    println!(
        "\x1b[48;5;{}m\x1b[97m {} \x1b[0m {} <{}>",
        avatar_color_code(&user.name),
        badge,
        user.name,
        user.email
    );
    println!("Avatar: {} on {}", badge, avatar_color(&user.name));
    println!("Permissions: {}", permissions::describe(user.permissions));
    println!("Member since: {}", user.created_at.format("%Y-%m-%d"));
    Ok(())
}
