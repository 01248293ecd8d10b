//! users — console client for the user-records service.
//!
//! # Examples
//!
//! ```bash
//! # List all users
//! users list
//!
//! # Create a user
//! users add "Ann" a@b.com
//!
//! # Update name and email
//! users update <uuid> "Ann Updated" ann@new.org
//!
//! # Delete with confirmation prompt (--yes to skip)
//! users delete <uuid>
//! ```

mod transport;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use users_core::{project, App, ConfirmDelete, FormMode, ListView, Transport, User, UserClient};
use uuid::Uuid;

use crate::transport::UreqTransport;

/// Used when neither `--server` nor `USERS_API_URL` is given.
const DEFAULT_SERVER: &str = "http://127.0.0.1:3000/api";

#[derive(Parser)]
#[command(name = "users", about = "Manage user records against the REST backend")]
struct Cli {
    /// Base URL of the backend API (overrides USERS_API_URL).
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and display all users.
    List,
    /// Create a new user.
    Add { name: String, email: String },
    /// Replace an existing user's name and email.
    Update { id: Uuid, name: String, email: String },
    /// Delete a user, asking for confirmation first.
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Probe the backend health endpoint and print its response.
    Health,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let base = cli
        .server
        .or_else(|| std::env::var("USERS_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let client = UserClient::new(&base);
    let mut app = App::new(client.clone(), UreqTransport::new());

    match cli.command {
        Commands::List => {
            app.start().await;
            if bail_on_error(&app) {
                return ExitCode::FAILURE;
            }
            render(&project(app.users()));
            ExitCode::SUCCESS
        }

        Commands::Add { name, email } => {
            app.form_mut().set_name(name);
            app.form_mut().set_email(email);
            if !app.submit_form().await {
                report_form_errors(&app);
                bail_on_error(&app);
                return ExitCode::FAILURE;
            }
            // The created record is the one just appended.
            if let Some(user) = app.users().last() {
                println!("created {} <{}> ({})", user.name, user.email, user.id);
            }
            ExitCode::SUCCESS
        }

        Commands::Update { id, name, email } => {
            app.refresh().await;
            if bail_on_error(&app) {
                return ExitCode::FAILURE;
            }
            app.edit_user(id);
            if !matches!(app.mode(), FormMode::Editing(_)) {
                eprintln!("no user with id {id}");
                return ExitCode::FAILURE;
            }
            app.form_mut().set_name(name);
            app.form_mut().set_email(email);
            if !app.submit_form().await {
                report_form_errors(&app);
                bail_on_error(&app);
                return ExitCode::FAILURE;
            }
            println!("updated {id}");
            ExitCode::SUCCESS
        }

        Commands::Delete { id, yes } => {
            app.refresh().await;
            if bail_on_error(&app) {
                return ExitCode::FAILURE;
            }
            if !app.users().iter().any(|u| u.id == id) {
                eprintln!("no user with id {id}");
                return ExitCode::FAILURE;
            }
            let before = app.users().len();
            app.delete_user(id, &StdinConfirm { assume_yes: yes }).await;
            if bail_on_error(&app) {
                return ExitCode::FAILURE;
            }
            if app.users().len() < before {
                println!("deleted {id}");
            } else {
                println!("kept {id}");
            }
            ExitCode::SUCCESS
        }

        Commands::Health => {
            let transport = UreqTransport::new();
            let result = match transport.execute(client.build_health_check()).await {
                Ok(response) => client.parse_health_check(response),
                Err(err) => Err(err.into()),
            };
            match result {
                Ok(body) => {
                    println!("{body}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("health check failed: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Print the coordinator's error message, if any.
fn bail_on_error<T: Transport>(app: &App<T>) -> bool {
    match app.error() {
        Some(message) => {
            eprintln!("{message}");
            true
        }
        None => false,
    }
}

fn report_form_errors<T: Transport>(app: &App<T>) {
    if let Some(message) = app.form().name_error_message() {
        eprintln!("name: {message}");
    }
    if let Some(message) = app.form().email_error_message() {
        eprintln!("email: {message}");
    }
}

fn render(view: &ListView) {
    match view {
        ListView::Empty => println!("No users found. Create your first user!"),
        ListView::Rows(rows) => {
            for row in rows {
                let created = row.created.as_deref().unwrap_or("-");
                println!("{}  {}  <{}>  {}", row.id, row.name, row.email, created);
            }
        }
    }
}

/// Terminal yes/no gate ahead of a delete.
struct StdinConfirm {
    assume_yes: bool,
}

impl ConfirmDelete for StdinConfirm {
    fn confirm(&self, user: &User) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("Are you sure you want to delete {} <{}>? [y/N] ", user.name, user.email);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
