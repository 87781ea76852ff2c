/// Decoupled representation of a Spotify track from the API.
#[derive(Debug, Clone)]
pub struct SpotifyApiTrack {
    pub title: String,
    pub artists: Vec<String>,
}

/// One entry of a Spotify playlist. Spotify keeps entries whose track payload
/// is gone (removed from the catalog, region-blocked), so `track` can be
/// `None`; such entries stay in the list and callers decide what to do with
/// them.
#[derive(Debug, Clone)]
pub struct SpotifyPlaylistItem {
    pub track: Option<SpotifyApiTrack>,
}

/// One page of playlist entries plus the opaque token for the next page, if
/// the service reported one.
#[derive(Debug, Clone)]
pub struct SpotifyPlaylistPage {
    pub items: Vec<SpotifyPlaylistItem>,
    pub next_page_token: Option<String>,
}

/// A playlist page that doesn't have the expected structure.
#[derive(Debug, thiserror::Error)]
#[error("Malformed {context} response: {message}")]
pub struct FormatError {
    pub context: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to send playlist items request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("Playlist items request failed with status {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Playlist {playlist_id} exceeded the limit of {limit} pages")]
    PageLimitExceeded { playlist_id: String, limit: usize },
}

/// Port trait wrapping the Spotify API capabilities used by business logic.
///
/// Implementations live in `spotify_rs::client` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SpotifyClient: Send + Sync {
    /// Fetch one page of playlist entries. `page_token` is `None` for the
    /// first page; later pages pass the token returned with the previous one.
    async fn playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<SpotifyPlaylistPage, FetchError>;
}
