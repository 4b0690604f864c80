mod cli;
mod config;
mod model;
mod storage;
mod store;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignores if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::from_default_env().add_directive("skylist=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let dir = cli.dir;

    match cli.command {
        Commands::Create {
            name,
            mood,
            description,
        } => {
            cli::commands::playlist::create(&name, mood, description, &dir).await?;
        }
        Commands::List { mood } => {
            cli::commands::playlist::list(mood.as_deref(), &dir).await?;
        }
        Commands::Show { playlist_id } => {
            cli::commands::playlist::show(&playlist_id, &dir).await?;
        }
        Commands::Edit {
            playlist_id,
            name,
            mood,
            description,
        } => {
            cli::commands::playlist::edit(&playlist_id, name, mood, description, &dir).await?;
        }
        Commands::Delete { playlist_id } => {
            cli::commands::playlist::delete(&playlist_id, &dir).await?;
        }
        Commands::AddTrack {
            playlist_id,
            name,
            artist,
            album,
            duration,
            source,
            uri,
        } => {
            cli::commands::track::add(
                &playlist_id,
                &name,
                artist,
                album,
                duration,
                source,
                &uri,
                &dir,
            )
            .await?;
        }
        Commands::UpdateTrack {
            playlist_id,
            track_id,
            name,
            artist,
            album,
            duration,
            source,
            uri,
        } => {
            cli::commands::track::update(
                &playlist_id,
                &track_id,
                name,
                artist,
                album,
                duration,
                source,
                uri,
                &dir,
            )
            .await?;
        }
        Commands::RemoveTrack {
            playlist_id,
            track_id,
        } => {
            cli::commands::track::remove(&playlist_id, &track_id, &dir).await?;
        }
        Commands::Favorite { name, artist } => {
            cli::commands::track::favorite(&name, artist.as_deref(), &dir).await?;
        }
        Commands::Favorites => {
            cli::commands::track::favorites(&dir).await?;
        }
        Commands::Share { playlist_id } => {
            cli::commands::share::share(&playlist_id, &dir).await?;
        }
        Commands::Import { share_id } => {
            cli::commands::share::import(&share_id, &dir).await?;
        }
        Commands::Shared { share_id } => {
            cli::commands::share::show(&share_id, &dir).await?;
        }
        Commands::ForgetShared { share_id } => {
            cli::commands::share::forget(&share_id, &dir).await?;
        }
        Commands::Refresh => {
            cli::commands::misc::refresh(&dir).await?;
        }
        Commands::Status => {
            cli::commands::misc::status(&dir).await?;
        }
        Commands::PurgeRemote => {
            cli::commands::misc::purge_remote(&dir).await?;
        }
    }

    Ok(())
}
