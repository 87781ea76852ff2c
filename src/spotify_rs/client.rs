use std::time::Duration;

use crate::ports::spotify::{FetchError, FormatError, SpotifyPlaylistPage};
use crate::spotify_rs::types::PlaylistTracksPage;

const SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com/v1";
const PAGE_SIZE: u32 = 100;

/// Spotify API client
pub struct SpotifyClient {
    access_token: String,
    client: reqwest::Client,
}

impl SpotifyClient {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl crate::ports::spotify::SpotifyClient for SpotifyClient {
    async fn playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<SpotifyPlaylistPage, FetchError> {
        // Spotify pages with full continuation URLs; they double as our
        // opaque page tokens.
        let url = match page_token {
            Some(next) => next,
            None => format!(
                "{}/playlists/{}/tracks?limit={}",
                SPOTIFY_API_BASE_URL, playlist_id, PAGE_SIZE
            ),
        };

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(FetchError::FailedToSendRequest)?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus {
                status: response.status(),
                body: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to get error text".to_string()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(FetchError::FailedToSendRequest)?;
        let page: PlaylistTracksPage = serde_json::from_str(&body).map_err(|error| FormatError {
            context: "playlist tracks",
            message: error.to_string(),
        })?;

        Ok(page.into())
    }
}
