use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use taskboard::app::App;
use taskboard::commands;
use taskboard::models::Status;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A command-line client for the taskboard issue tracker")]
#[command(version)]
struct Cli {
    /// Base URL of the API server
    #[arg(
        long,
        global = true,
        env = "TASKBOARD_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Password (8+ chars with upper, lower, digit, special)
        #[arg(short, long)]
        password: String,
    },

    /// Log in with an existing account
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Log out and drop all cached data
    Logout,

    /// Show the logged-in profile
    Whoami,

    /// List issues
    List {
        /// Filter by status (incomplete, in-progress, complete)
        #[arg(short, long)]
        status: Option<String>,
        /// Refetch instead of using the cache
        #[arg(short, long)]
        refresh: bool,
    },

    /// Show issues grouped into status columns
    Board {
        /// Refetch instead of using the cache
        #[arg(short, long)]
        refresh: bool,
    },

    /// Show issue details
    Show {
        /// Issue ID
        id: i64,
        /// Refetch instead of using the cache
        #[arg(short, long)]
        refresh: bool,
    },

    /// Create a new issue
    Create {
        /// Issue title
        title: String,
        /// Issue description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Move an issue to a new status
    Status {
        /// Issue ID
        id: i64,
        /// New status (incomplete, in-progress, complete)
        status: String,
    },

    /// Delete an issue
    Delete {
        /// Issue ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show admin statistics
    Stats {
        /// Refetch instead of using the cache
        #[arg(short, long)]
        refresh: bool,
    },

    /// Check that the server is reachable
    Health,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_status(s: &str) -> Result<Status> {
    s.parse::<Status>().map_err(|msg| anyhow!(msg))
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let app = App::open(&cli.api_url)?;

    match cli.command {
        Commands::Register { email, name, password } => {
            commands::register::run(&app, &email, &name, &password)
        }

        Commands::Login { email, password } => commands::login::run(&app, &email, &password),

        Commands::Logout => commands::logout::run(&app),

        Commands::Whoami => commands::whoami::run(&app),

        Commands::List { status, refresh } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            commands::list::run(&app, status, refresh)
        }

        Commands::Board { refresh } => commands::board::run(&app, refresh),

        Commands::Show { id, refresh } => commands::show::run(&app, id, refresh),

        Commands::Create { title, description } => {
            commands::create::run(&app, &title, &description)
        }

        Commands::Status { id, status } => {
            let status = parse_status(&status)?;
            commands::status::run(&app, id, status)
        }

        Commands::Delete { id, force } => commands::delete::run(&app, id, force),

        Commands::Stats { refresh } => commands::stats::run(&app, refresh),

        Commands::Health => commands::health::run(&app),
    }
}
