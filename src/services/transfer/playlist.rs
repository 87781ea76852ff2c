use crate::ports::youtube::{AddError, CreateError, YoutubeClient};

/// Destination playlists are always created private; a transfer never
/// publishes anything.
const PRIVACY_STATUS: &str = "private";

/// Create the destination playlist for a transfer run and return its id.
pub async fn create_destination_playlist<C: YoutubeClient>(
    client: &C,
    title: &str,
    description: &str,
) -> Result<String, CreateError> {
    let playlist_id = client
        .create_playlist(title, description, PRIVACY_STATUS)
        .await?;
    log::info!("Created YouTube playlist with ID: {}", playlist_id);
    Ok(playlist_id)
}

/// Append one matched video to the destination playlist.
pub async fn add_video<C: YoutubeClient>(
    client: &C,
    playlist_id: &str,
    video_id: &str,
) -> Result<(), AddError> {
    client.add_playlist_item(playlist_id, video_id).await?;
    log::debug!("Added video {} to playlist {}", video_id, playlist_id);
    Ok(())
}
