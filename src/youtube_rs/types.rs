use serde::Deserialize;

use crate::ports::youtube::YoutubeApiVideo;

/// Response body of the `search.list` endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: SearchResultSnippet,
}

/// `search.list` ids are polymorphic; `videoId` is only present on video
/// hits.
#[derive(Debug, Deserialize)]
pub struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResultSnippet {
    pub title: String,
}

impl SearchListResponse {
    /// Flatten into the port shape, dropping hits that are not videos.
    pub fn into_videos(self) -> Vec<YoutubeApiVideo> {
        self.items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|id| YoutubeApiVideo {
                    id,
                    title: item.snippet.title,
                })
            })
            .collect()
    }
}

/// Response body of the `playlists.insert` endpoint.
#[derive(Debug, Deserialize)]
pub struct PlaylistInsertResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "items": [
                {"id": {"videoId": "v1"}, "snippet": {"title": "Song A (Instrumental)"}},
                {"id": {"channelId": "c1"}, "snippet": {"title": "Artist X - Topic"}},
                {"id": {"videoId": "v2"}, "snippet": {"title": "Song A Karaoke"}}
            ]
        }"#;

        let videos = serde_json::from_str::<SearchListResponse>(body)
            .unwrap()
            .into_videos();

        // The channel hit has no videoId and is dropped.
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "v1");
        assert_eq!(videos[0].title, "Song A (Instrumental)");
        assert_eq!(videos[1].id, "v2");
    }

    #[test]
    fn test_parse_empty_search_response() {
        let videos = serde_json::from_str::<SearchListResponse>("{}")
            .unwrap()
            .into_videos();
        assert!(videos.is_empty());
    }

    #[test]
    fn test_parse_playlist_insert_response() {
        let response: PlaylistInsertResponse =
            serde_json::from_str(r#"{"id": "PL123", "kind": "youtube#playlist"}"#).unwrap();
        assert_eq!(response.id, "PL123");
    }
}
