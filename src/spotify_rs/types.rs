use serde::Deserialize;

use crate::ports::spotify::{SpotifyApiTrack, SpotifyPlaylistItem, SpotifyPlaylistPage};

/// One page of the `GET /v1/playlists/{id}/tracks` endpoint.
#[derive(Debug, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistTrackEntry>,
    pub next: Option<String>,
}

/// Playlist entry wrapper; `track` is null for removed or unavailable tracks.
#[derive(Debug, Deserialize)]
pub struct PlaylistTrackEntry {
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

impl From<PlaylistTracksPage> for SpotifyPlaylistPage {
    fn from(page: PlaylistTracksPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            next_page_token: page.next,
        }
    }
}

impl From<PlaylistTrackEntry> for SpotifyPlaylistItem {
    fn from(entry: PlaylistTrackEntry) -> Self {
        Self {
            track: entry.track.map(|track| SpotifyApiTrack {
                title: track.name,
                artists: track.artists.into_iter().map(|artist| artist.name).collect(),
            }),
        }
    }
}
