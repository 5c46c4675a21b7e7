//! Biblion admin console
//!
//! Thin operator frontend over the resource clients: one subcommand, one
//! API call, results printed as JSON. The error-notification side effect
//! lands on stderr; the exit code reflects the call's outcome.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblion_client::{
    client::ApiClient,
    config::AppConfig,
    credentials::TokenFile,
    models::{
        author::AuthorQuery,
        book::{BookQuery, CreateBook, UpdateBook},
        publisher::PublisherQuery,
    },
    notify::StderrNotifier,
    services::Services,
};

use cli::{AuthorCommand, BookCommand, Cli, Command, PublisherCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblion_client={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let token_file = TokenFile::new(config.auth.token_path());

    let client = ApiClient::new(
        config.api.clone(),
        Arc::new(token_file.clone()),
        Arc::new(StderrNotifier),
    )?;
    let services = Services::new(client);

    run(cli.command, &services, &token_file).await
}

async fn run(command: Command, services: &Services, token_file: &TokenFile) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let session = services.auth.login(&email, &password).await?;
            token_file.store(&session.token)?;
            tracing::info!("token stored at {}", token_file.path().display());
            println!("logged in");
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let user = services.auth.register(&username, &email, &password).await?;
            print_json(&user)?;
        }
        Command::Logout => {
            token_file.clear()?;
            println!("logged out");
        }
        Command::Authors { command } => match command {
            AuthorCommand::List(args) => {
                let page = services
                    .authors
                    .list(&AuthorQuery {
                        name: args.name,
                        page: Some(args.page),
                        limit: Some(args.limit),
                    })
                    .await?;
                print_json(&page)?;
            }
            AuthorCommand::Create { name } => {
                print_json(&services.authors.create(&name).await?)?;
            }
            AuthorCommand::Update { id, name } => {
                print_json(&services.authors.update(id, &name).await?)?;
            }
            AuthorCommand::Delete { id } => {
                services.authors.delete(id).await?;
                println!("deleted author {id}");
            }
        },
        Command::Publishers { command } => match command {
            PublisherCommand::List(args) => {
                let page = services
                    .publishers
                    .list(&PublisherQuery {
                        name: args.name,
                        page: Some(args.page),
                        limit: Some(args.limit),
                    })
                    .await?;
                print_json(&page)?;
            }
            PublisherCommand::Create { name } => {
                print_json(&services.publishers.create(&name).await?)?;
            }
            PublisherCommand::Update { id, name } => {
                print_json(&services.publishers.update(id, &name).await?)?;
            }
            PublisherCommand::Delete { id } => {
                services.publishers.delete(id).await?;
                println!("deleted publisher {id}");
            }
        },
        Command::Books { command } => match command {
            BookCommand::List(args) => {
                let page = services
                    .books
                    .list(&BookQuery {
                        title: args.name,
                        page: Some(args.page),
                        limit: Some(args.limit),
                    })
                    .await?;
                print_json(&page)?;
            }
            BookCommand::Create {
                title,
                author_id,
                publisher_id,
            } => {
                let book = CreateBook {
                    title,
                    author_id,
                    publisher_id,
                };
                print_json(&services.books.create(&book).await?)?;
            }
            BookCommand::Update {
                id,
                title,
                author_id,
                publisher_id,
            } => {
                let book = UpdateBook {
                    title,
                    author_id,
                    publisher_id,
                };
                print_json(&services.books.update(id, &book).await?)?;
            }
            BookCommand::Delete { id } => {
                services.books.delete(id).await?;
                println!("deleted book {id}");
            }
        },
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
