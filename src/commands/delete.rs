use anyhow::Result;
use std::io::{self, Write};

use crate::api::issues;
use crate::app::App;

pub fn run(app: &App, id: i64, force: bool) -> Result<()> {
    if !force {
        // Fetch the title so the prompt names what is about to go.
        let issue = issues::get(&app.http, id)?;

        print!("Delete issue #{} \"{}\"? [y/N] ", id, issue.title);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let message = issues::delete(&app.http, id)?;
    app.cache.invalidate(&["issues"])?;

    println!("{}", message);
    Ok(())
}
