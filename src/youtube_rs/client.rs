use std::time::Duration;

use serde_json::json;

use crate::ports::youtube::{AddError, CreateError, SearchError, YoutubeApiVideo};
use crate::youtube_rs::types::{PlaylistInsertResponse, SearchListResponse};

const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API client
pub struct YoutubeClient {
    access_token: String,
    client: reqwest::Client,
}

impl YoutubeClient {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl crate::ports::youtube::YoutubeClient for YoutubeClient {
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
        category_id: &str,
    ) -> Result<Vec<YoutubeApiVideo>, SearchError> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(format!("{}/search", YOUTUBE_API_BASE_URL))
            .query(&[
                ("part", "snippet"),
                ("maxResults", max_results.as_str()),
                ("q", query),
                ("type", "video"),
                ("videoCategoryId", category_id),
            ])
            .bearer_auth(&self.access_token)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(SearchError::FailedToSendRequest)?;

        if !response.status().is_success() {
            return Err(SearchError::BadStatus {
                status: response.status(),
                body: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to get error text".to_string()),
            });
        }

        let results: SearchListResponse = response
            .json()
            .await
            .map_err(|error| SearchError::FailedToParseResponse {
                message: error.to_string(),
            })?;

        Ok(results.into_videos())
    }

    async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy_status: &str,
    ) -> Result<String, CreateError> {
        let body = json!({
            "snippet": {"title": title, "description": description},
            "status": {"privacyStatus": privacy_status},
        });

        let response = self
            .client
            .post(format!("{}/playlists", YOUTUBE_API_BASE_URL))
            .query(&[("part", "snippet,status")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(CreateError::FailedToSendRequest)?;

        if !response.status().is_success() {
            return Err(CreateError::BadStatus {
                status: response.status(),
                body: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to get error text".to_string()),
            });
        }

        let playlist: PlaylistInsertResponse =
            response
                .json()
                .await
                .map_err(|error| CreateError::FailedToParseResponse {
                    message: error.to_string(),
                })?;

        Ok(playlist.id)
    }

    async fn add_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<(), AddError> {
        let body = json!({
            "snippet": {
                "playlistId": playlist_id,
                "resourceId": {"kind": "youtube#video", "videoId": video_id},
            }
        });

        let response = self
            .client
            .post(format!("{}/playlistItems", YOUTUBE_API_BASE_URL))
            .query(&[("part", "snippet")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(AddError::FailedToSendRequest)?;

        if !response.status().is_success() {
            return Err(AddError::BadStatus {
                video_id: video_id.to_string(),
                status: response.status(),
                body: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to get error text".to_string()),
            });
        }

        Ok(())
    }
}
