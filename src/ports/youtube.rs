/// Decoupled representation of a YouTube search hit from the API.
#[derive(Debug, Clone)]
pub struct YoutubeApiVideo {
    pub id: String,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to send video search request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("Video search failed with status {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to parse video search response: {message}")]
    FailedToParseResponse { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("Failed to send playlist creation request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("Playlist creation failed with status {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to parse playlist creation response: {message}")]
    FailedToParseResponse { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AddError {
    #[error("Failed to send playlist item request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("Adding video {video_id} failed with status {status}: {body}")]
    BadStatus {
        video_id: String,
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Port trait wrapping the YouTube Data API capabilities used by business
/// logic.
///
/// Implementations live in `youtube_rs::client` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait YoutubeClient: Send + Sync {
    /// Search for videos, restricted to one video category.
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
        category_id: &str,
    ) -> Result<Vec<YoutubeApiVideo>, SearchError>;

    /// Create a playlist and return its id.
    async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy_status: &str,
    ) -> Result<String, CreateError>;

    /// Append one video to an existing playlist.
    async fn add_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<(), AddError>;
}
