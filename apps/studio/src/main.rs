use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    NavigationController, ProfileEditor, ProfileStore, SubmissionClient, SubmissionState,
    PROFILE_SLOT_KEY, SNAPSHOT_FILE_NAME,
};
use shared::{
    content::{youtube_embed_url, CREW_MEMBERS, UPDATE_HISTORY},
    protocol::ContactFields,
};
use storage::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod journey;
mod validate;

use config::{load_settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(about = "Local studio for the KabutCraft portfolio")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the saved profile and the gallery it renders.
    Show,
    /// Edit profile fields and save them to this device.
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// Comma-separated video ids, e.g. "Q_j1aCXi12Q, dQw4w9WgXcQ".
        #[arg(long)]
        videos: Option<String>,
    },
    /// Erase the saved profile and restore the defaults. Cannot be undone.
    Reset {
        /// Confirm that the saved profile should be erased.
        #[arg(long)]
        yes: bool,
    },
    /// Write a backup file of the saved profile.
    Export {
        #[arg(long, default_value = SNAPSHOT_FILE_NAME)]
        out: PathBuf,
    },
    /// Load a backup file and save it as the profile.
    Import { file: PathBuf },
    /// Send a message through the contact form.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Walk the page/modal controller through a list of steps.
    Pages {
        /// Page labels, `open:<modal>`, `close`, `handoff`, `crew:on`, `crew:off`.
        #[arg(long = "step")]
        steps: Vec<String>,
    },
    /// Print the changelog.
    History,
    /// Print the crew roster.
    Crew,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings = load_settings(&args.config)?;

    match args.command {
        Command::Show => {
            let storage = open_storage(&settings.database_url).await?;
            let saved_at = storage.slot_updated_at(PROFILE_SLOT_KEY).await?;
            let record = ProfileStore::new(storage).load().await;
            println!("{} | {}", record.owner_name, record.role);
            match saved_at {
                Some(at) => println!("saved {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
                None => println!("not saved on this device (defaults)"),
            }
            for (index, video_id) in record.visible_videos().enumerate() {
                println!("  Project #{}: {}", index + 1, youtube_embed_url(video_id));
            }
        }
        Command::Edit { name, role, videos } => {
            let store = ProfileStore::new(open_storage(&settings.database_url).await?);
            let mut editor = ProfileEditor::new(store.load().await);
            if let Some(name) = name {
                editor.set_owner_name(name);
            }
            if let Some(role) = role {
                editor.set_role(role);
            }
            if let Some(videos) = videos {
                editor.set_video_list_text(&videos);
            }
            if !editor.is_dirty() {
                println!("nothing changed");
                return Ok(());
            }
            store.save(editor.record()).await?;
            editor.mark_saved();
            println!("saved on this device: {}", editor.video_list_text());
        }
        Command::Reset { yes } => {
            ensure_reset_confirmed(yes)?;
            let store = ProfileStore::new(open_storage(&settings.database_url).await?);
            let record = store.reset().await?;
            println!("profile reset to {}", record.owner_name);
        }
        Command::Export { out } => {
            let store = ProfileStore::new(open_storage(&settings.database_url).await?);
            let snapshot = store.export_snapshot(&store.load().await)?;
            tokio::fs::write(&out, snapshot)
                .await
                .with_context(|| format!("failed to write backup '{}'", out.display()))?;
            println!("backup written to {}", out.display());
        }
        Command::Import { file } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read backup '{}'", file.display()))?;
            let store = ProfileStore::new(open_storage(&settings.database_url).await?);
            let mut editor = ProfileEditor::new(store.load().await);
            editor.adopt(store.import_snapshot(&bytes)?);
            store.save(editor.record()).await?;
            editor.mark_saved();
            println!("imported profile for {}", editor.record().owner_name);
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let fields = ContactFields::new(name, email, subject, message);
            if let Err(reason) = validate::validate_contact(&fields) {
                bail!("contact form incomplete: {reason}");
            }
            let client = SubmissionClient::new(settings.contact_endpoint_url()?)
                .with_sent_reset_delay(settings.sent_reset_delay());
            match client.submit(&fields).await? {
                SubmissionState::Sent => println!("message sent"),
                SubmissionState::Failed(reason) => bail!("message not sent: {reason}"),
                other => bail!("unexpected submission state {other:?}"),
            }
        }
        Command::Pages { steps } => {
            let steps = if steps.is_empty() {
                journey::DEFAULT_JOURNEY
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            } else {
                steps
            };
            let mut nav = NavigationController::new();
            print_navigation("start", &nav);
            for step in &steps {
                let action = journey::parse_step(step).map_err(anyhow::Error::msg)?;
                if let Err(error) = nav.dispatch(action) {
                    println!("{step:>20}  refused: {error}");
                    continue;
                }
                print_navigation(step, &nav);
            }
        }
        Command::History => {
            for entry in UPDATE_HISTORY {
                println!(
                    "{:<8} {:<14} {:<8} {}",
                    entry.version,
                    entry.date,
                    format!("{:?}", entry.kind),
                    entry.description
                );
            }
        }
        Command::Crew => {
            for member in CREW_MEMBERS {
                println!("{:<18} {}", member.name, member.role);
            }
        }
    }

    Ok(())
}

fn ensure_reset_confirmed(yes: bool) -> Result<()> {
    if !yes {
        bail!("reset erases the profile saved on this device; re-run with --yes to confirm");
    }
    Ok(())
}

async fn open_storage(database_url: &str) -> Result<Storage> {
    let storage = Storage::new(database_url).await?;
    storage.health_check().await?;
    info!(%database_url, "profile storage ready");
    Ok(storage)
}

fn print_navigation(step: &str, nav: &NavigationController) {
    let state = nav.state();
    println!(
        "{step:>20}  page={:<8} modal={:<14} crew_overlay={}",
        state.page.label(),
        state.modal.map_or("none", |m| m.label()),
        nav.crew_overlay_visible()
    );
}
