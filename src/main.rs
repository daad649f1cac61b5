mod client;
mod config;
mod confirm;
mod i18n;
mod reading_cache;
mod session;
mod sync;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    client::{errors::ApiError, models::Reading, BackendClient},
    config::Config,
    confirm::DeleteConfirmation,
    i18n::Translator,
    reading_cache::ReadingCache,
    session::Session,
    sync::SyncController,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (ignore error if file absent — env vars may be set externally)
    let _ = dotenvy::dotenv();

    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let t = Translator::new(config.language);

    let session = Session::new();
    let cache = ReadingCache::new();
    let controller = SyncController::new(BackendClient::new(&config), session.clone(), cache);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("list");

    // Registration happens before any session exists.
    if command == "register" {
        return match controller.register(&config.email, &config.password).await {
            Ok(()) => {
                println!("{}", t.translate("registrationSuccess"));
                Ok(())
            }
            Err(err) => bail!("{}", describe(&err, &t, "registrationFailed", "genericError")),
        };
    }

    if let Err(err) = controller.login(&config.email, &config.password).await {
        bail!("{}", describe(&err, &t, "loginFailed", "genericError"));
    }

    let outcome = match command {
        "list" => list(&controller, &t).await,
        "add" => add(&controller, &t, &args[1..]).await,
        "delete" => delete(&controller, &t, &args[1..]).await,
        other => bail!("unknown command: {other} (expected list | add | delete | register)"),
    };

    // A rejected token forces a return to the unauthenticated state.
    if outcome.is_err() && !session.is_valid().await {
        info!("Session invalidated; log in again");
    }

    outcome
}

async fn list(controller: &SyncController, t: &Translator) -> Result<()> {
    match controller.fetch_all().await {
        Ok(readings) => {
            print_table(&readings, t);
            Ok(())
        }
        Err(err) => bail!("{}", describe(&err, t, "fetchReadingsFailed", "fetchError")),
    }
}

async fn add(controller: &SyncController, t: &Translator, args: &[String]) -> Result<()> {
    let (systolic, diastolic) = match args {
        [sys, dia, ..] => (
            sys.parse::<i32>().context("systolic must be an integer")?,
            dia.parse::<i32>().context("diastolic must be an integer")?,
        ),
        _ => bail!("usage: add <systolic> <diastolic> [date]"),
    };
    let date = match args.get(2) {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .context("date must be YYYY-MM-DD")?,
        None => Local::now().date_naive(),
    };

    match controller.add_reading(systolic, diastolic, date).await {
        Ok(_) => {
            // Refresh isn't needed: the confirmed record is already merged.
            print_table(&controller.current_view().await, t);
            Ok(())
        }
        Err(err) => bail!("{}", describe(&err, t, "addReadingFailed", "genericError")),
    }
}

async fn delete(controller: &SyncController, t: &Translator, args: &[String]) -> Result<()> {
    let id = match args.first() {
        Some(raw) => raw.parse::<i64>().context("reading id must be an integer")?,
        None => bail!("usage: delete <id>"),
    };

    let mut gate = DeleteConfirmation::new();
    gate.request(id);

    println!(
        "{} [{}: y / {}: n]",
        t.translate("deleteConfirmTitle"),
        t.translate("confirm"),
        t.translate("cancel")
    );
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;

    if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        gate.cancel();
        println!("{}", t.translate("cancel"));
        return Ok(());
    }

    match controller.confirm_delete(&mut gate).await {
        Ok(Some(_)) => {
            println!("{}", t.translate("deleteSuccess"));
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(err) => bail!("{}", describe(&err, t, "deleteFailed", "deleteError")),
    }
}

fn print_table(readings: &[Reading], t: &Translator) {
    println!("{}", t.translate("dashboardTitle"));

    if readings.is_empty() {
        println!("{}", t.translate("noReadings"));
        return;
    }

    println!(
        "{:>6}  {:<12} {:>10} {:>10}",
        "id",
        t.translate("date"),
        t.translate("systolic"),
        t.translate("diastolic")
    );
    for r in readings {
        println!(
            "{:>6}  {:<12} {:>10} {:>10}",
            r.id,
            r.date.format("%Y-%m-%d"),
            r.systolic,
            r.diastolic
        );
    }
}

/// Maps an API failure to the string the user should see: the server's own
/// message when it sent one, else the operation's fallback key.
fn describe(err: &ApiError, t: &Translator, rejected_key: &str, network_key: &str) -> String {
    match err {
        ApiError::Unauthenticated => t.translate("loginFailed").to_owned(),
        ApiError::Rejected {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Rejected { .. } => t.translate(rejected_key).to_owned(),
        ApiError::Network(_) | ApiError::Decode(_) => t.translate(network_key).to_owned(),
    }
}
