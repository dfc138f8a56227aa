//! CLI administration tool for auth-api.
//!
//! Manages accounts directly against the PostgreSQL store without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register an account interactively
//! cargo run --bin admin -- account create
//!
//! # Check a password against the stored hash
//! cargo run --bin admin -- account verify a@x.com
//!
//! # Show an account
//! cargo run --bin admin -- account show a@x.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_USER`/`DB_PASSWORD`/`DB_NAME`, required): PostgreSQL connection
//! - `BCRYPT_COST`, `HASH_TIMEOUT_SECS`: same meaning as for the server

use auth_api::application::services::AccountService;
use auth_api::application::validation::RegistrationInput;
use auth_api::config::{self, Config};
use auth_api::domain::errors::{AuthenticationError, RegistrationError};
use auth_api::infrastructure::persistence::PgAccountRepository;
use auth_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing auth-api accounts.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Register a new account
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check a password against the stored hash
    Verify {
        /// Account email
        email: String,
    },

    /// Show account details
    Show {
        /// Account email
        email: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type PgAccountService = AccountService<PgAccountRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_USER, DB_PASSWORD and DB_NAME) must be set")?;

    let pool = connect_pool(&config, &database_url).await?;

    match cli.command {
        Commands::Account { action } => handle_account_action(action, &config, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(
    action: AccountAction,
    config: &Config,
    pool: &PgPool,
) -> Result<()> {
    let repo = Arc::new(PgAccountRepository::new(Arc::new(pool.clone())));
    let service = AccountService::new(repo, config.password_hasher());

    match action {
        AccountAction::Create { name, email, yes } => {
            create_account(&service, name, email, yes).await?
        }
        AccountAction::Verify { email } => verify_account(&service, &email).await?,
        AccountAction::Show { email } => show_account(&service, &email).await?,
    }

    Ok(())
}

/// Registers an account through the same flow as `POST /register`.
///
/// # Flow
///
/// 1. Prompt for name and email (or use provided)
/// 2. Prompt for password twice (hidden input)
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Validate, check for a taken email, hash, store
async fn create_account(
    service: &PgAccountService,
    name: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Name:  {}", name.cyan());
    println!("  Email: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let input = RegistrationInput {
        name,
        email,
        password,
    };

    match service.register(input).await {
        Ok(id) => {
            println!("{}", "✅ Account created successfully!".green().bold());
            println!("  ID: {}", id.to_string().bright_yellow());
            println!();
            Ok(())
        }
        Err(RegistrationError::InvalidInput(message)) => {
            println!("{} {}", "❌ Invalid input:".red(), message);
            Ok(())
        }
        Err(RegistrationError::EmailTaken) => {
            println!("{}", "❌ Email already exists".red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create account: {}", e)),
    }
}

/// Prompts for a password and checks it against the stored hash.
async fn verify_account(service: &PgAccountService, email: &str) -> Result<()> {
    println!("{}", "🔐 Verify Credentials".bright_blue().bold());
    println!();

    let password = Password::new().with_prompt("Password").interact()?;

    match service.authenticate(email, &password).await {
        Ok(account) => {
            println!("{}", "✅ Credentials are valid".green().bold());
            println!(
                "  Account: {} ({})",
                account.name.cyan(),
                account.id.to_string().bright_black()
            );
            Ok(())
        }
        Err(AuthenticationError::InvalidCredentials) => {
            println!("{}", "❌ Invalid email or password".red().bold());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Verification failed: {}", e)),
    }
}

/// Displays an account without its password hash.
async fn show_account(service: &PgAccountService, email: &str) -> Result<()> {
    let account = service
        .find_by_email(email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Account not found")?;

    println!("{}", "👤 Account".bright_blue().bold());
    println!();
    println!("  ID:      {}", account.id.to_string().bright_black());
    println!("  Name:    {}", account.name.cyan());
    println!("  Email:   {}", account.email.cyan());
    println!(
        "  Created: {}",
        account
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let accounts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Accounts: {}",
                accounts.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}
