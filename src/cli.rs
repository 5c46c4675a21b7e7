//! Command-line surface of the admin console

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "biblion",
    version,
    about = "Biblion library management admin console"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and persist the bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BIBLION_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "BIBLION_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Drop the persisted bearer token
    Logout,
    /// Author management
    Authors {
        #[command(subcommand)]
        command: AuthorCommand,
    },
    /// Publisher management
    Publishers {
        #[command(subcommand)]
        command: PublisherCommand,
    },
    /// Book management
    Books {
        #[command(subcommand)]
        command: BookCommand,
    },
}

#[derive(Subcommand)]
pub enum AuthorCommand {
    /// List authors
    List(ListArgs),
    /// Create an author
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename an author
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Delete an author
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum PublisherCommand {
    /// List publishers
    List(ListArgs),
    /// Create a publisher
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a publisher
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Delete a publisher
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum BookCommand {
    /// List books
    List(ListArgs),
    /// Create a book
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author_id: Option<i64>,
        #[arg(long)]
        publisher_id: Option<i64>,
    },
    /// Update a book
    Update {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author_id: Option<i64>,
        #[arg(long)]
        publisher_id: Option<i64>,
    },
    /// Delete a book
    Delete { id: i64 },
}

/// Shared filter and pagination arguments for list commands
#[derive(Args)]
pub struct ListArgs {
    /// Filter by name or title substring
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub page: i64,
    #[arg(long, default_value_t = 20)]
    pub limit: i64,
}
