use anyhow::Result;

use crate::api::admin;
use crate::app::App;

pub fn run(app: &App) -> Result<()> {
    let body = admin::health(&app.http)?;
    println!("{}: {}", app.http.base_url(), body.trim_end());
    Ok(())
}
