use crate::ports::spotify::{FetchError, SpotifyClient, SpotifyPlaylistItem};

/// Upper bound on page requests for a single playlist. Spotify caps
/// playlists at 10,000 entries (100 per page), so a well-behaved service
/// never gets near this; it only trips on a remote that keeps handing out
/// next-page tokens.
pub const MAX_PAGES: usize = 10_000;

/// Fetch every entry of a playlist, following pagination until the service
/// stops returning a next-page token.
///
/// Entries without a track payload are kept, so the result has one entry per
/// playlist position.
pub async fn fetch_all_playlist_items<C: SpotifyClient>(
    client: &C,
    playlist_id: &str,
) -> Result<Vec<SpotifyPlaylistItem>, FetchError> {
    let mut items = Vec::new();
    let mut page_token: Option<String> = None;

    for page_number in 0..MAX_PAGES {
        let page = client.playlist_items(playlist_id, page_token).await?;
        log::debug!(
            "Fetched page {} of playlist {} ({} items)",
            page_number + 1,
            playlist_id,
            page.items.len()
        );
        items.extend(page.items);
        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => return Ok(items),
        }
    }

    Err(FetchError::PageLimitExceeded {
        playlist_id: playlist_id.to_string(),
        limit: MAX_PAGES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::spotify::{MockSpotifyClient, SpotifyApiTrack, SpotifyPlaylistPage};
    use mockall::Sequence;

    fn track_item(title: &str) -> SpotifyPlaylistItem {
        SpotifyPlaylistItem {
            track: Some(SpotifyApiTrack {
                title: title.to_string(),
                artists: vec!["Artist X".to_string()],
            }),
        }
    }

    fn page(items: Vec<SpotifyPlaylistItem>, next: Option<&str>) -> SpotifyPlaylistPage {
        SpotifyPlaylistPage {
            items,
            next_page_token: next.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_single_page_returns_its_items() {
        let mut client = MockSpotifyClient::new();
        client
            .expect_playlist_items()
            .withf(|playlist_id, page_token| playlist_id == "pl1" && page_token.is_none())
            .times(1)
            .returning(|_, _| Ok(page(vec![track_item("Song A"), track_item("Song B")], None)));

        let items = fetch_all_playlist_items(&client, "pl1").await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].track.as_ref().unwrap().title, "Song A");
        assert_eq!(items[1].track.as_ref().unwrap().title, "Song B");
    }

    #[tokio::test]
    async fn test_two_pages_concatenated_in_order() {
        let mut client = MockSpotifyClient::new();
        let mut seq = Sequence::new();
        client
            .expect_playlist_items()
            .withf(|_, page_token| page_token.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page(vec![track_item("Song A")], Some("page2"))));
        client
            .expect_playlist_items()
            .withf(|_, page_token| page_token.as_deref() == Some("page2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page(vec![track_item("Song B"), track_item("Song C")], None)));

        let items = fetch_all_playlist_items(&client, "pl1").await.unwrap();

        let titles: Vec<_> = items
            .iter()
            .map(|item| item.track.as_ref().unwrap().title.as_str())
            .collect();
        assert_eq!(titles, vec!["Song A", "Song B", "Song C"]);
    }

    #[tokio::test]
    async fn test_entries_without_track_payload_are_kept() {
        let mut client = MockSpotifyClient::new();
        client.expect_playlist_items().times(1).returning(|_, _| {
            Ok(page(
                vec![
                    track_item("Song A"),
                    SpotifyPlaylistItem { track: None },
                    track_item("Song B"),
                ],
                None,
            ))
        });

        let items = fetch_all_playlist_items(&client, "pl1").await.unwrap();

        assert_eq!(items.len(), 3);
        assert!(items[1].track.is_none());
    }

    #[tokio::test]
    async fn test_remote_error_propagates() {
        let mut client = MockSpotifyClient::new();
        client.expect_playlist_items().times(1).returning(|_, _| {
            Err(FetchError::BadStatus {
                status: reqwest::StatusCode::NOT_FOUND,
                body: "playlist not found".to_string(),
            })
        });

        let result = fetch_all_playlist_items(&client, "missing").await;

        assert!(matches!(result, Err(FetchError::BadStatus { .. })));
    }

    #[tokio::test]
    async fn test_page_limit_stops_a_runaway_remote() {
        let mut client = MockSpotifyClient::new();
        // A misbehaving service that never stops reporting a next page.
        client
            .expect_playlist_items()
            .times(MAX_PAGES)
            .returning(|_, _| Ok(page(vec![track_item("Song A")], Some("again"))));

        let result = fetch_all_playlist_items(&client, "pl1").await;

        assert!(matches!(
            result,
            Err(FetchError::PageLimitExceeded { limit: MAX_PAGES, .. })
        ));
    }
}
