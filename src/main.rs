mod config;
mod logging;
mod ports;
mod services;
mod spotify_rs;
mod youtube_rs;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context, eyre::eyre};

use crate::{
    config::Config,
    logging::setup_logging,
    services::transfer::{TransferRequest, TransferService},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The config file to use
    #[arg(short, long, env = "INSTRUMENTAL_PORTER_CONFIG")]
    config: Option<PathBuf>,

    /// Console log level (default: info)
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: log::LevelFilter,

    /// File log level (default: debug)
    #[arg(long, default_value = "debug", global = true)]
    log_file_level: log::LevelFilter,

    /// Path to log file
    #[arg(long, env = "INSTRUMENTAL_PORTER_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a private YouTube playlist of instrumental versions of a
    /// Spotify playlist's tracks
    Transfer {
        /// The Spotify playlist to read tracks from
        #[arg(short, long, env = "SPOTIFY_PLAYLIST_ID")]
        playlist_id: Option<String>,

        /// Title for the new YouTube playlist
        #[arg(short, long)]
        title: String,

        /// Description for the new YouTube playlist
        #[arg(short, long, default_value = "")]
        description: String,

        /// OAuth access token for the Spotify Web API
        #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
        spotify_token: Option<String>,

        /// OAuth access token for the YouTube Data API
        #[arg(long, env = "YOUTUBE_ACCESS_TOKEN", hide_env_values = true)]
        youtube_token: Option<String>,

        /// Print the transfer report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_logging(args.log_level, args.log_file.clone(), args.log_file_level)?;

    log::debug!("Instrumental porter starting");

    let config = {
        if let Some(config) = &args.config {
            Config::from_file(config)
        } else {
            Config::load()
        }
    }
    .with_context(|| "Failed to load instrumental-porter config")?;

    match args.command {
        Commands::Transfer {
            playlist_id,
            title,
            description,
            spotify_token,
            youtube_token,
            json,
        } => {
            let playlist_id = playlist_id
                .or_else(|| config.playlist_id.clone())
                .ok_or_else(|| {
                    eyre!("A Spotify playlist ID is required (--playlist-id or config file)")
                })?;
            let spotify_token = spotify_token
                .or_else(|| config.spotify_access_token())
                .ok_or_else(|| {
                    eyre!("A Spotify access token is required (--spotify-token or config file)")
                })?;
            let youtube_token = youtube_token
                .or_else(|| config.youtube_access_token())
                .ok_or_else(|| {
                    eyre!("A YouTube access token is required (--youtube-token or config file)")
                })?;

            let service = TransferService::new(
                spotify_rs::client::SpotifyClient::new(spotify_token),
                youtube_rs::client::YoutubeClient::new(youtube_token),
            );
            let request = TransferRequest {
                playlist_id,
                title,
                description,
            };

            log::debug!("Starting transfer of playlist: {}", request.playlist_id);
            let report = service
                .run(&request)
                .await
                .wrap_err("Transfer failed")?;

            let summary = report.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("\nYouTube playlist creation complete!");
                println!("Playlist ID: {}", report.destination_playlist_id);
                println!(
                    "Added {} of {} tracks ({} not found, {} skipped, {} failed)",
                    summary.added_videos,
                    summary.total_tracks,
                    summary.not_found,
                    report.skipped_count(),
                    report.failed_count()
                );
                if !summary.errors.is_empty() {
                    println!("\nThe following errors occurred during processing:");
                    for error in &summary.errors {
                        println!("- {}", error);
                    }
                }
            }
        }
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                log::debug!("Creating default config");
                Config::create_default()?;
                log::info!("Default config created successfully");
            }
            ConfigCommands::Path => match Config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
    }

    Ok(())
}
