pub mod fetch;
pub mod matcher;
pub mod playlist;
pub mod report;

pub use report::{TrackError, TrackOutcome, TransferReport, TransferSummary};

use crate::ports::spotify::{FetchError, SpotifyClient, SpotifyPlaylistItem};
use crate::ports::youtube::{CreateError, YoutubeClient};

/// What a caller asks for: which playlist to read and what to create.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub playlist_id: String,
    pub title: String,
    pub description: String,
}

/// Errors that invalidate the whole run. Per-track failures never surface
/// here; they are downgraded to `Failed` outcomes in the report.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Failed to fetch source playlist: {0}")]
    Fetch(#[from] FetchError),
    #[error("Failed to create destination playlist: {0}")]
    Create(#[from] CreateError),
}

/// Runs a whole transfer: fetch the source playlist once, create the
/// destination playlist once, then process the tracks strictly in source
/// order.
pub struct TransferService<S, Y> {
    spotify: S,
    youtube: Y,
}

impl<S: SpotifyClient, Y: YoutubeClient> TransferService<S, Y> {
    pub fn new(spotify: S, youtube: Y) -> Self {
        Self { spotify, youtube }
    }

    pub async fn run(&self, request: &TransferRequest) -> Result<TransferReport, TransferError> {
        let items = fetch::fetch_all_playlist_items(&self.spotify, &request.playlist_id).await?;
        log::info!("Found {} tracks in playlist {}", items.len(), request.playlist_id);

        // The destination playlist is only created once the source playlist
        // is known to be readable.
        let destination_id =
            playlist::create_destination_playlist(&self.youtube, &request.title, &request.description)
                .await?;

        let mut report = TransferReport::new(destination_id.clone());
        let total = items.len();
        for (index, item) in items.iter().enumerate() {
            let outcome = self
                .process_item(&destination_id, index + 1, total, item)
                .await;
            report.record(outcome);
        }

        log::info!(
            "Transfer complete: {} added, {} not found, {} skipped, {} failed",
            report.added_count(),
            report.not_found_count(),
            report.skipped_count(),
            report.failed_count()
        );
        Ok(report)
    }

    /// Process one playlist entry. Remote failures are downgraded to a
    /// `Failed` outcome so one bad track never aborts the batch.
    async fn process_item(
        &self,
        destination_id: &str,
        position: usize,
        total: usize,
        item: &SpotifyPlaylistItem,
    ) -> TrackOutcome {
        let Some(track) = &item.track else {
            log::warn!("({}/{}) Skipping entry with no track information", position, total);
            return TrackOutcome::Skipped {
                reason: "missing track data".to_string(),
            };
        };

        let label = format!("'{}' by '{}'", track.title, track.artists.join(", "));
        log::info!("({}/{}) Searching instrumental for: {}", position, total, label);

        let video_id =
            match matcher::find_instrumental(&self.youtube, &track.title, &track.artists).await {
                Ok(Some(video_id)) => video_id,
                Ok(None) => {
                    log::info!("({}/{}) Instrumental not found for: {}", position, total, label);
                    return TrackOutcome::NotFound;
                }
                Err(error) => {
                    log::error!("({}/{}) Search failed for {}: {}", position, total, label, error);
                    return TrackOutcome::Failed {
                        track: label,
                        error: error.into(),
                    };
                }
            };

        match playlist::add_video(&self.youtube, destination_id, &video_id).await {
            Ok(()) => TrackOutcome::Added { video_id },
            Err(error) => {
                log::error!(
                    "({}/{}) Failed to add video for {}: {}",
                    position,
                    total,
                    label,
                    error
                );
                TrackOutcome::Failed {
                    track: label,
                    error: error.into(),
                }
            }
        }
    }
}
