use anyhow::{anyhow, Result};

use crate::api::auth;
use crate::app::App;
use crate::validate::validate_login;

pub fn run(app: &App, email: &str, password: &str) -> Result<()> {
    // Field-level rejection happens locally; no request goes out.
    let input = validate_login(email, password).map_err(|errs| anyhow!("{}", errs))?;

    let resp = auth::login(&app.http, &input)?;
    app.session.login(&resp.token, &resp.user)?;

    println!("Logged in as {} <{}>", resp.user.name, resp.user.email);
    Ok(())
}
