use serde::Serialize;

use crate::ports::youtube::{AddError, SearchError};

/// Per-track failure. Unlike fetch or playlist-creation failures these never
/// abort the run; they are recorded in the report and the next track is
/// processed.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("Video search failed: {0}")]
    Search(#[from] SearchError),
    #[error("Failed to add video to playlist: {0}")]
    Add(#[from] AddError),
}

/// What happened to a single source playlist entry during a transfer run.
#[derive(Debug)]
pub enum TrackOutcome {
    /// A matching video was found and appended to the destination playlist.
    Added { video_id: String },
    /// Neither search query turned up a video that looks instrumental.
    NotFound,
    /// The source entry carried no track payload, so no lookup was attempted.
    Skipped { reason: String },
    /// A remote call failed for this track; the run carried on with the rest.
    /// `track` is a display label identifying the track in error listings.
    Failed { track: String, error: TrackError },
}

/// Final account of a transfer run: one outcome per source playlist entry,
/// in source order.
#[derive(Debug)]
pub struct TransferReport {
    pub destination_playlist_id: String,
    pub outcomes: Vec<TrackOutcome>,
}

impl TransferReport {
    pub fn new(destination_playlist_id: String) -> Self {
        Self {
            destination_playlist_id,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: TrackOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total_tracks(&self) -> usize {
        self.outcomes.len()
    }

    pub fn added_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, TrackOutcome::Added { .. }))
            .count()
    }

    pub fn not_found_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, TrackOutcome::NotFound))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, TrackOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, TrackOutcome::Failed { .. }))
            .count()
    }

    /// One human-readable line per `Failed` outcome, in track order.
    pub fn error_messages(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                TrackOutcome::Failed { track, error } => {
                    Some(format!("Error processing {}: {}", track, error))
                }
                _ => None,
            })
            .collect()
    }

    pub fn summary(&self) -> TransferSummary {
        TransferSummary {
            total_tracks: self.total_tracks(),
            added_videos: self.added_count(),
            not_found: self.not_found_count(),
            errors: self.error_messages(),
        }
    }
}

/// Flat summary handed back to callers and printed by the CLI.
#[derive(Debug, Serialize)]
pub struct TransferSummary {
    pub total_tracks: usize,
    pub added_videos: usize,
    pub not_found: usize,
    pub errors: Vec<String>,
}
