//! EduLink CLI — school records from the terminal.
//!
//! Talks to a school's EduLink One API server through
//! `edulink_core::PortalClient`. `--demo <role>` swaps the live
//! transport for canned fixtures, which makes every command usable
//! offline.

use clap::{Parser, Subcommand};
use edulink_core::DemoRole;

use edulink_cli::commands;

/// EduLink portal CLI
#[derive(Parser)]
#[command(name = "edulink", version, about = "EduLink portal CLI — school records from the terminal")]
struct Cli {
    /// Demo mode: resolve canned fixtures for this synthetic role
    /// (parent, employee or learner) instead of calling the network
    #[arg(long)]
    demo: Option<String>,

    /// Fixture directory for demo mode
    #[arg(long, default_value = "fixtures")]
    fixtures: String,

    /// School API server URL (falls back to the saved session)
    #[arg(long, env = "EDULINK_URL")]
    url: Option<String>,

    /// Bearer token from a previous login (falls back to the saved session)
    #[arg(long, env = "EDULINK_TOKEN")]
    token: Option<String>,

    /// Learner id for per-learner views (falls back to the saved session)
    #[arg(long)]
    learner: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a school before logging in
    School {
        #[command(subcommand)]
        action: SchoolAction,
    },

    /// Sign in and save the session for later commands
    Login {
        /// Establishment id (from `school from-code`)
        #[arg(long)]
        school_id: u32,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Poll session status
    Status,

    /// Timetable for a day
    Timetable {
        /// YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Attendance record
    Attendance,

    /// Behaviour record
    Behaviour,

    /// Achievements, or the shared lookup tables
    Achievements {
        /// Fetch the achievement/behaviour lookup tables instead
        #[arg(long)]
        lookups: bool,
    },

    /// Clubs list, or one club's detail
    Clubs {
        /// Club id for the detail view
        #[arg(long)]
        id: Option<String>,
    },

    /// Homework listing
    Homework,

    /// Exam timetable and results
    Exams,

    /// School forms
    Forms,

    /// School-provided external links
    Links,

    /// Documents list, or one document download
    Documents {
        /// Document id for the download view
        #[arg(long)]
        id: Option<u32>,
    },

    /// Messaging inbox
    Messages {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Send a raw portal call by method name
    Call {
        /// API method name (e.g. "EduLink.Timetable")
        #[arg(long)]
        method: String,
        /// Params as a JSON string
        #[arg(long, default_value = "{}")]
        params: String,
    },

    /// List every registered API method
    Methods,
}

#[derive(Subcommand)]
enum SchoolAction {
    /// Look a school up by its code via the provisioning server
    FromCode { code: String },
    /// Fetch a school's details by establishment id
    Details {
        #[arg(long)]
        id: u32,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edulink_core=warn,edulink_cli=info".into()),
        )
        .init();

    let demo = match cli.demo.as_deref().map(str::parse::<DemoRole>).transpose() {
        Ok(role) => role,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = run(cli, demo).await;
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, demo: Option<DemoRole>) -> Result<(), String> {
    let client = commands::build_client(demo, &cli.fixtures)?;

    // Pre-auth commands resolve their URL directly; everything else
    // merges flags with the saved session.
    let pre_auth_url: Option<String> = match demo {
        Some(role) => Some(role.url()),
        None => cli.url.clone(),
    };
    let require_url =
        |url: Option<String>| url.ok_or_else(|| String::from("API URL is required; pass --url"));

    match cli.command {
        Commands::School { action } => match action {
            SchoolAction::FromCode { code } => commands::school::from_code(&client, &code).await,
            SchoolAction::Details { id } => {
                let url = require_url(pre_auth_url)?;
                commands::school::details(&client, &url, id).await
            }
        },

        Commands::Login {
            school_id,
            username,
            password,
        } => {
            let url = require_url(pre_auth_url)?;
            // Demo sessions are not worth persisting.
            commands::auth::login(&client, &url, school_id, &username, &password, demo.is_none())
                .await
        }

        Commands::Call { method, params } => commands::call::call(&client, &method, &params).await,

        Commands::Methods => commands::call::methods(&client),

        command => {
            let auth = commands::resolve_auth(demo, cli.url, cli.token, cli.learner)?;
            match command {
                Commands::Status => commands::auth::status(&client, &auth).await,
                Commands::Timetable { date } => {
                    commands::views::timetable(&client, &auth, date).await
                }
                Commands::Attendance => commands::views::attendance(&client, &auth).await,
                Commands::Behaviour => commands::views::behaviour(&client, &auth).await,
                Commands::Achievements { lookups } => {
                    commands::views::achievements(&client, &auth, lookups).await
                }
                Commands::Clubs { id } => commands::views::clubs(&client, &auth, id).await,
                Commands::Homework => commands::views::homework(&client, &auth).await,
                Commands::Exams => commands::views::exams(&client, &auth).await,
                Commands::Forms => commands::views::forms(&client, &auth).await,
                Commands::Links => commands::views::links(&client, &auth).await,
                Commands::Documents { id } => {
                    commands::views::documents(&client, &auth, id).await
                }
                Commands::Messages { page } => {
                    commands::views::messages(&client, &auth, page).await
                }
                // Handled above.
                Commands::School { .. }
                | Commands::Login { .. }
                | Commands::Call { .. }
                | Commands::Methods => unreachable!(),
            }
        }
    }
}
