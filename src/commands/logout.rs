use anyhow::Result;

use crate::app::App;

pub fn run(app: &App) -> Result<()> {
    app.session.logout(&app.cache)?;
    println!("Logged out.");
    Ok(())
}
