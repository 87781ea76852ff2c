use crate::ports::youtube::{SearchError, YoutubeClient};

/// How many results to pull per query; only the top few are worth scanning.
const SEARCH_RESULT_LIMIT: u32 = 5;
/// YouTube's video category id for Music.
const MUSIC_CATEGORY_ID: &str = "10";
/// Query qualifiers in priority order; doubles as the set of title keywords
/// accepted as a match.
const QUALIFIERS: [&str; 2] = ["instrumental", "karaoke"];

/// Build both search queries for a track, in priority order. Artist names
/// are joined with `", "` preserving their source order.
pub fn build_queries(title: &str, artist_names: &[String]) -> [String; 2] {
    let artists = artist_names.join(", ");
    QUALIFIERS.map(|qualifier| format!("{} {} {}", title, artists, qualifier))
}

fn looks_instrumental(video_title: &str) -> bool {
    let lowered = video_title.to_lowercase();
    QUALIFIERS.iter().any(|keyword| lowered.contains(keyword))
}

/// Search YouTube for an instrumental (or karaoke) version of a track and
/// return the video id of the best candidate.
///
/// The "instrumental" query is tried before the "karaoke" one; within a
/// result list the first title containing either keyword wins. `Ok(None)`
/// means the searches succeeded but nothing looked instrumental; that is
/// the common case, not an error.
pub async fn find_instrumental<C: YoutubeClient>(
    client: &C,
    title: &str,
    artist_names: &[String],
) -> Result<Option<String>, SearchError> {
    for query in build_queries(title, artist_names) {
        let results = client
            .search_videos(&query, SEARCH_RESULT_LIMIT, MUSIC_CATEGORY_ID)
            .await?;
        if let Some(video) = results.into_iter().find(|video| looks_instrumental(&video.title)) {
            log::debug!("Query '{}' matched video {} ('{}')", query, video.id, video.title);
            return Ok(Some(video.id));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::youtube::{MockYoutubeClient, YoutubeApiVideo};

    fn video(id: &str, title: &str) -> YoutubeApiVideo {
        YoutubeApiVideo {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    fn artists(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_build_queries_order_and_format() {
        let queries = build_queries("Song A", &artists(&["Artist X", "Artist Y"]));
        assert_eq!(queries[0], "Song A Artist X, Artist Y instrumental");
        assert_eq!(queries[1], "Song A Artist X, Artist Y karaoke");
    }

    #[tokio::test]
    async fn test_instrumental_query_takes_precedence() {
        let mut client = MockYoutubeClient::new();
        client
            .expect_search_videos()
            .withf(|query, _, _| query.ends_with("instrumental"))
            .times(1)
            .returning(|_, _, _| Ok(vec![video("v1", "Song A (Instrumental)")]));
        // Both queries would match, but the karaoke one must never be issued.
        client
            .expect_search_videos()
            .withf(|query, _, _| query.ends_with("karaoke"))
            .times(0);

        let found = find_instrumental(&client, "Song A", &artists(&["Artist X"]))
            .await
            .unwrap();

        assert_eq!(found.as_deref(), Some("v1"));
    }

    #[tokio::test]
    async fn test_skips_results_without_keyword_in_title() {
        let mut client = MockYoutubeClient::new();
        client
            .expect_search_videos()
            .withf(|query, _, _| query.ends_with("instrumental"))
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    video("v1", "Song A (Official Video)"),
                    video("v2", "Song A [Instrumental]"),
                ])
            });

        let found = find_instrumental(&client, "Song A", &artists(&["Artist X"]))
            .await
            .unwrap();

        assert_eq!(found.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_falls_back_to_karaoke_query() {
        let mut client = MockYoutubeClient::new();
        client
            .expect_search_videos()
            .withf(|query, _, _| query.ends_with("instrumental"))
            .times(1)
            .returning(|_, _, _| Ok(vec![video("v1", "Song A (Official Video)")]));
        client
            .expect_search_videos()
            .withf(|query, _, _| query.ends_with("karaoke"))
            .times(1)
            .returning(|_, _, _| Ok(vec![video("v2", "Song A KARAOKE version")]));

        let found = find_instrumental(&client, "Song A", &artists(&["Artist X"]))
            .await
            .unwrap();

        // Title matching is case-insensitive.
        assert_eq!(found.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_no_keyword_anywhere_is_not_an_error() {
        let mut client = MockYoutubeClient::new();
        client
            .expect_search_videos()
            .times(2)
            .returning(|_, _, _| {
                Ok(vec![
                    video("v1", "Song A (Official Video)"),
                    video("v2", "Song A live at the arena"),
                ])
            });

        let found = find_instrumental(&client, "Song A", &artists(&["Artist X"]))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_searches_restricted_to_music_category() {
        let mut client = MockYoutubeClient::new();
        client
            .expect_search_videos()
            .withf(|_, max_results, category_id| *max_results == 5 && category_id == "10")
            .times(2)
            .returning(|_, _, _| Ok(vec![]));

        let found = find_instrumental(&client, "Song A", &artists(&["Artist X"]))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_search_error_propagates() {
        let mut client = MockYoutubeClient::new();
        client.expect_search_videos().times(1).returning(|_, _, _| {
            Err(SearchError::BadStatus {
                status: reqwest::StatusCode::FORBIDDEN,
                body: "quota exceeded".to_string(),
            })
        });

        let result = find_instrumental(&client, "Song A", &artists(&["Artist X"])).await;

        assert!(matches!(result, Err(SearchError::BadStatus { .. })));
    }
}
