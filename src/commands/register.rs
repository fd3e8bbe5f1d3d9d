use anyhow::{anyhow, Result};

use crate::api::auth;
use crate::app::App;
use crate::validate::validate_register;

pub fn run(app: &App, email: &str, name: &str, password: &str) -> Result<()> {
    let input = validate_register(email, name, password).map_err(|errs| anyhow!("{}", errs))?;

    // Registration logs the new account straight in, like the web client.
    let resp = auth::register(&app.http, &input)?;
    app.session.login(&resp.token, &resp.user)?;

    println!("Welcome, {}! You are now logged in.", resp.user.name);
    Ok(())
}
