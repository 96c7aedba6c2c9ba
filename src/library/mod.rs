//! In-memory playlist store
//!
//! Holds the session's playlists and applies the user's CRUD intents. All
//! operations are synchronous and immediately consistent; nothing here
//! touches disk.

use crate::catalog::{FolderColor, FolderIcon, Playlist};
use rand::RngCore;

/// Identifier source for new playlists, injected so tests stay
/// deterministic. Uniqueness within the running session is all that is
/// required.
pub trait IdGen: Send {
    fn next_id(&mut self) -> String;
}

/// Default generator: 8 random bytes, hex-encoded.
pub struct RandomIds;

impl IdGen for RandomIds {
    fn next_id(&mut self) -> String {
        let mut bytes = [0u8; 8];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

pub struct PlaylistStore {
    playlists: Vec<Playlist>,
    ids: Box<dyn IdGen>,
}

impl PlaylistStore {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self::with_ids(playlists, Box::new(RandomIds))
    }

    pub fn with_ids(playlists: Vec<Playlist>, ids: Box<dyn IdGen>) -> Self {
        Self { playlists, ids }
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn get(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn total_songs(&self) -> usize {
        self.playlists.iter().map(|p| p.song_count).sum()
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.playlists.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }

    /// Create an empty playlist. The name must be non-empty after trimming;
    /// on failure nothing is mutated.
    pub fn create(
        &mut self,
        name: &str,
        icon: FolderIcon,
        color: FolderColor,
    ) -> anyhow::Result<String> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("playlist name cannot be empty");
        }
        let id = self.fresh_id();
        self.playlists
            .push(Playlist::new(id.clone(), name, icon, color, Vec::new()));
        Ok(id)
    }

    /// Update a playlist's name, icon and color. Same name validation as
    /// [`create`](Self::create).
    pub fn edit(
        &mut self,
        id: &str,
        name: &str,
        icon: FolderIcon,
        color: FolderColor,
    ) -> anyhow::Result<()> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("playlist name cannot be empty");
        }
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| anyhow::anyhow!("no such playlist: {id}"))?;
        playlist.name = name.to_string();
        playlist.icon = icon;
        playlist.color = color;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Option<Playlist> {
        let idx = self.playlists.iter().position(|p| p.id == id)?;
        Some(self.playlists.remove(idx))
    }

    /// Remove one song from a playlist, recomputing its count.
    pub fn remove_song(&mut self, playlist_id: &str, song_id: &str) -> anyhow::Result<()> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| anyhow::anyhow!("no such playlist: {playlist_id}"))?;
        let before = playlist.songs.len();
        playlist.songs.retain(|s| s.id != song_id);
        if playlist.songs.len() == before {
            anyhow::bail!("song {song_id} is not in playlist {playlist_id}");
        }
        playlist.song_count = playlist.songs.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    /// Deterministic id source; can be primed with duplicates to exercise
    /// the collision check.
    struct SeqIds {
        queue: Vec<String>,
        counter: usize,
    }

    impl SeqIds {
        fn new(primed: &[&str]) -> Self {
            Self {
                queue: primed.iter().rev().map(|s| s.to_string()).collect(),
                counter: 0,
            }
        }
    }

    impl IdGen for SeqIds {
        fn next_id(&mut self) -> String {
            if let Some(id) = self.queue.pop() {
                return id;
            }
            self.counter += 1;
            format!("gen{}", self.counter)
        }
    }

    fn store() -> PlaylistStore {
        PlaylistStore::with_ids(catalog::seed(), Box::new(SeqIds::new(&[])))
    }

    #[test]
    fn test_create_trims_name() {
        let mut store = store();
        let id = store.create("  Late Nights  ", FolderIcon::Moon, FolderColor::Blue);
        let id = id.expect("create should succeed");
        assert_eq!(store.get(&id).map(|p| p.name.as_str()), Some("Late Nights"));
        assert_eq!(store.get(&id).map(|p| p.song_count), Some(0));
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut store = store();
        let before = store.len();
        assert!(store.create("   ", FolderIcon::Heart, FolderColor::Pink).is_err());
        assert!(store.create("", FolderIcon::Heart, FolderColor::Pink).is_err());
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_create_skips_colliding_ids() {
        // First two generated ids collide with seed playlists
        let ids = SeqIds::new(&["p1", "p2", "unique"]);
        let mut store = PlaylistStore::with_ids(catalog::seed(), Box::new(ids));
        let id = store
            .create("Fresh", FolderIcon::Sun, FolderColor::Amber)
            .expect("create should succeed");
        assert_eq!(id, "unique");
    }

    #[test]
    fn test_edit_updates_fields() {
        let mut store = store();
        store
            .edit("p1", "Renamed", FolderIcon::Cloud, FolderColor::Violet)
            .expect("edit should succeed");
        let p = store.get("p1").expect("p1 exists");
        assert_eq!(p.name, "Renamed");
        assert_eq!(p.icon, FolderIcon::Cloud);
        assert_eq!(p.color, FolderColor::Violet);
    }

    #[test]
    fn test_edit_unknown_playlist() {
        let mut store = store();
        assert!(store
            .edit("nope", "Name", FolderIcon::Heart, FolderColor::Pink)
            .is_err());
    }

    #[test]
    fn test_delete() {
        let mut store = store();
        let before = store.len();
        assert!(store.delete("p3").is_some());
        assert_eq!(store.len(), before - 1);
        assert!(store.get("p3").is_none());
        assert!(store.delete("p3").is_none());
    }

    #[test]
    fn test_remove_song_recounts() {
        let mut store = store();
        let before = store.get("p1").map(|p| p.song_count).expect("p1 exists");
        store.remove_song("p1", "2").expect("song 2 is in p1");
        let p = store.get("p1").expect("p1 exists");
        assert_eq!(p.song_count, before - 1);
        assert_eq!(p.song_count, p.songs.len());
        assert!(!p.songs.iter().any(|s| s.id == "2"));
    }

    #[test]
    fn test_remove_song_missing() {
        let mut store = store();
        assert!(store.remove_song("p1", "zzz").is_err());
        assert!(store.remove_song("zzz", "1").is_err());
    }
}
