use adapter::{database::connect_database_with, repository::event::EventRepositoryImpl};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        format_event_date,
    },
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::config::AppConfig;

/// Maintains the event catalog the dashboard shows.
#[derive(Parser)]
#[command(name = "manage-events")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add an event to the catalog.
    Create(CreateArgs),
    /// Print the catalog in storage order.
    List,
    /// Start accepting registrations.
    Open { event_id: EventId },
    /// Stop accepting registrations.
    Close { event_id: EventId },
    /// Assign the link registered users get for the event.
    SetUrl(SetUrlArgs),
}

#[derive(Args, Validate)]
struct CreateArgs {
    #[arg(long)]
    #[garde(length(min = 1))]
    name: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[arg(long, value_parser = parse_event_date)]
    #[garde(skip)]
    date: DateTime<Utc>,
    #[arg(long)]
    #[garde(skip)]
    open: bool,
    #[arg(long)]
    #[garde(url)]
    url: Option<String>,
}

#[derive(Args, Validate)]
struct SetUrlArgs {
    #[garde(skip)]
    event_id: EventId,
    #[garde(url)]
    url: String,
}

fn parse_event_date(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| format!("invalid date: {value}"));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid date `{value}`: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let app_config = AppConfig::new().context("database settings are read from the environment")?;
    let repo = EventRepositoryImpl::new(connect_database_with(&app_config.database));

    match cli.command {
        Command::Create(args) => {
            args.validate()?;
            let CreateArgs {
                name,
                date,
                open,
                url,
            } = args;
            let event_id = repo.create(CreateEvent::new(name, date, open, url)).await?;
            tracing::info!(%event_id, "event created");
            println!("{event_id}");
        }
        Command::List => {
            for event in repo.find_all().await? {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    event.event_id,
                    format_event_date(event.event_date),
                    if event.registrations_open { "open" } else { "closed" },
                    event.name,
                    event.event_url.unwrap_or_default(),
                );
            }
        }
        Command::Open { event_id } => set_registrations_open(&repo, event_id, true).await?,
        Command::Close { event_id } => set_registrations_open(&repo, event_id, false).await?,
        Command::SetUrl(args) => {
            args.validate()?;
            repo.update(UpdateEvent {
                event_id: args.event_id,
                registrations_open: None,
                event_url: Some(args.url),
            })
            .await?;
            tracing::info!(event_id = %args.event_id, "event url assigned");
        }
    }

    Ok(())
}

async fn set_registrations_open(
    repo: &EventRepositoryImpl,
    event_id: EventId,
    registrations_open: bool,
) -> Result<()> {
    repo.update(UpdateEvent {
        event_id,
        registrations_open: Some(registrations_open),
        event_url: None,
    })
    .await?;
    tracing::info!(%event_id, registrations_open, "registrations updated");
    Ok(())
}
