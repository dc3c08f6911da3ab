//! Song store - merged, title-sorted song collection with id lookups

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::core::sorting::{Collator, PtBrCollator};
use crate::db::LocalPersistence;
use crate::error::{KaraokeError, Result};
use crate::models::{Song, SongDocument};

/// Merge embedded and local songs by id and sort them by title
///
/// Embedded songs are taken first; a repeated embedded id keeps the first
/// occurrence. Local songs then replace embedded ones in place or are
/// appended. The sort is stable, so equal titles keep merge order.
pub fn merge_songs(embedded: &[Song], local: &[Song], collator: &dyn Collator) -> Vec<Song> {
    let mut merged: Vec<Song> = Vec::with_capacity(embedded.len() + local.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for song in embedded {
        if positions.contains_key(&song.id) {
            warn!("Duplicate embedded song id '{}', keeping the first one", song.id);
            continue;
        }
        positions.insert(song.id.clone(), merged.len());
        merged.push(song.clone());
    }

    for song in local {
        match positions.get(&song.id) {
            Some(&pos) => {
                debug!("Local song '{}' overrides an existing entry", song.id);
                merged[pos] = song.clone();
            }
            None => {
                positions.insert(song.id.clone(), merged.len());
                merged.push(song.clone());
            }
        }
    }

    merged.sort_by(|a, b| collator.compare(&a.title, &b.title));
    merged
}

/// In-memory store for the song collection
pub struct SongStore {
    /// Songs shipped with the application
    embedded: Vec<Song>,
    /// Merged collection sorted by title
    songs: Vec<Song>,
    /// Position of each id in `songs`
    index: HashMap<String, usize>,
    collator: Arc<dyn Collator>,
}

impl Default for SongStore {
    fn default() -> Self {
        Self::new(Arc::new(PtBrCollator))
    }
}

impl SongStore {
    pub fn new(collator: Arc<dyn Collator>) -> Self {
        Self {
            embedded: Vec::new(),
            songs: Vec::new(),
            index: HashMap::new(),
            collator,
        }
    }

    /// Replace the embedded set and rebuild from it plus the local songs
    pub fn load(&mut self, embedded: Vec<Song>, persistence: &LocalPersistence) -> &[Song] {
        self.embedded = embedded;
        self.reload(persistence)
    }

    /// Rebuild the merged collection
    ///
    /// Corrupt local data is logged and treated as "no local songs"; the
    /// embedded songs always load.
    pub fn reload(&mut self, persistence: &LocalPersistence) -> &[Song] {
        let local = match persistence.local_songs() {
            Ok(local) => local,
            Err(e) => {
                error!("Failed to load local songs: {}", e);
                Vec::new()
            }
        };

        self.songs = merge_songs(&self.embedded, &local, self.collator.as_ref());
        self.index = self
            .songs
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();

        info!(
            "Loaded {} songs ({} embedded, {} local)",
            self.songs.len(),
            self.embedded.len(),
            local.len()
        );
        &self.songs
    }

    /// Add or replace a local song, persist it, and reload the collection
    pub fn upsert_local(&mut self, song: Song, persistence: &mut LocalPersistence) -> Result<()> {
        let mut local = match persistence.local_songs() {
            Ok(local) => local,
            Err(e) => {
                warn!("Discarding unreadable local songs before saving: {}", e);
                Vec::new()
            }
        };

        match local.iter_mut().find(|s| s.id == song.id) {
            Some(existing) => *existing = song,
            None => local.push(song),
        }

        persistence.set_local_songs(&local)?;
        self.reload(persistence);
        Ok(())
    }

    /// All songs in title order
    pub fn all(&self) -> &[Song] {
        &self.songs
    }

    pub fn count(&self) -> usize {
        self.songs.len()
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.index.get(id).map(|&i| &self.songs[i])
    }

    pub fn find(&self, id: &str) -> Result<&Song> {
        self.get(id).ok_or_else(|| KaraokeError::NotFound(id.to_string()))
    }

    /// Previous and next songs in title order
    pub fn neighbors(&self, id: &str) -> (Option<&Song>, Option<&Song>) {
        match self.index.get(id) {
            Some(&i) => {
                let prev = i.checked_sub(1).and_then(|p| self.songs.get(p));
                (prev, self.songs.get(i + 1))
            }
            None => (None, None),
        }
    }

    /// Songs grouped by exact artist name, artists in collated order
    pub fn group_by_artist(&self) -> Vec<(&str, Vec<&Song>)> {
        let mut groups: Vec<(&str, Vec<&Song>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for song in &self.songs {
            let artist = song.artist.as_str();
            match positions.get(artist) {
                Some(&pos) => groups[pos].1.push(song),
                None => {
                    positions.insert(artist, groups.len());
                    groups.push((artist, vec![song]));
                }
            }
        }

        groups.sort_by(|a, b| self.collator.compare(a.0, b.0));
        groups
    }

    /// Case-insensitive substring search on title or artist
    ///
    /// A blank query yields no results rather than the whole collection.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Song> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.songs
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&term) || s.artist.to_lowercase().contains(&term)
            })
            .take(limit)
            .collect()
    }

    /// Snapshot of the full collection for export
    pub fn document(&self) -> SongDocument {
        SongDocument {
            songs: self.songs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sorting::CodepointCollator;
    use crate::db::{MemoryStore, SONGS_KEY};
    use std::collections::HashSet;

    fn song(id: &str, title: &str, artist: &str) -> Song {
        Song {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            lyrics: format!("letra de {}", title),
            language: "pt-BR".to_string(),
            tags: vec![],
        }
    }

    fn loaded(embedded: Vec<Song>, persistence: &LocalPersistence) -> SongStore {
        let mut store = SongStore::default();
        store.load(embedded, persistence);
        store
    }

    fn ids(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_merge_union_and_local_wins() {
        let embedded = vec![song("a", "Alfa", "X"), song("b", "Beta", "Y")];
        let local = vec![song("b", "Beta (local)", "Y"), song("c", "Gama", "Z")];
        let merged = merge_songs(&embedded, &local, &PtBrCollator);

        let got: HashSet<&str> = ids(&merged).into_iter().collect();
        assert_eq!(got, HashSet::from(["a", "b", "c"]));
        let b = merged.iter().find(|s| s.id == "b").unwrap();
        assert_eq!(b.title, "Beta (local)");
    }

    #[test]
    fn test_merge_first_embedded_duplicate_wins() {
        let embedded = vec![song("a", "Primeira", "X"), song("a", "Segunda", "X")];
        let merged = merge_songs(&embedded, &[], &PtBrCollator);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "Primeira");
    }

    #[test]
    fn test_sorted_by_collated_title() {
        let embedded = vec![
            song("z", "Zum", "X"),
            song("e", "Égua", "X"),
            song("a", "arara", "X"),
            song("b", "Banana", "X"),
        ];
        let merged = merge_songs(&embedded, &[], &PtBrCollator);
        assert_eq!(ids(&merged), vec!["a", "b", "e", "z"]);

        let raw = merge_songs(&embedded, &[], &CodepointCollator);
        assert_eq!(ids(&raw), vec!["b", "z", "a", "e"]);
    }

    #[test]
    fn test_corrupt_local_keeps_embedded() {
        let persistence = LocalPersistence::new(MemoryStore::new().with(SONGS_KEY, "[{]"));
        let store = loaded(vec![song("a", "Alfa", "X")], &persistence);
        assert_eq!(ids(store.all()), vec!["a"]);
    }

    #[test]
    fn test_find_and_not_found() {
        let persistence = LocalPersistence::new(MemoryStore::new());
        let store = loaded(vec![song("a", "Alfa", "X")], &persistence);
        assert_eq!(store.find("a").unwrap().title, "Alfa");
        assert!(matches!(store.find("nope"), Err(KaraokeError::NotFound(_))));
    }

    #[test]
    fn test_neighbors() {
        let persistence = LocalPersistence::new(MemoryStore::new());
        let store = loaded(
            vec![song("c", "C", "X"), song("a", "A", "X"), song("b", "B", "X")],
            &persistence,
        );

        let (prev, next) = store.neighbors("b");
        assert_eq!(prev.map(|s| s.id.as_str()), Some("a"));
        assert_eq!(next.map(|s| s.id.as_str()), Some("c"));

        let (prev, next) = store.neighbors("a");
        assert!(prev.is_none());
        assert_eq!(next.map(|s| s.id.as_str()), Some("b"));

        let (prev, next) = store.neighbors("c");
        assert_eq!(prev.map(|s| s.id.as_str()), Some("b"));
        assert!(next.is_none());

        assert_eq!(store.neighbors("missing"), (None, None));
    }

    #[test]
    fn test_group_by_artist() {
        let persistence = LocalPersistence::new(MemoryStore::new());
        let store = loaded(
            vec![
                song("1", "Bola", "Toquinho"),
                song("2", "Aquarela", "Toquinho"),
                song("3", "Chão", "Ávila"),
                song("4", "Dia", "toquinho"),
            ],
            &persistence,
        );

        let groups = store.group_by_artist();
        let artists: Vec<&str> = groups.iter().map(|(a, _)| *a).collect();
        assert_eq!(artists, vec!["Ávila", "toquinho", "Toquinho"]);

        let toquinho = &groups[2].1;
        let titles: Vec<&str> = toquinho.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Aquarela", "Bola"]);
    }

    #[test]
    fn test_search() {
        let persistence = LocalPersistence::new(MemoryStore::new());
        let store = loaded(vec![song("aquarela", "Aquarela", "Toquinho")], &persistence);

        assert_eq!(store.search("aqua", 10).len(), 1);
        assert_eq!(store.search("ToQuInHo", 10).len(), 1);
        assert_eq!(store.search("  toq ", 10).len(), 1);
        assert!(store.search("", 10).is_empty());
        assert!(store.search("   ", 10).is_empty());
        assert!(store.search("samba", 10).is_empty());
    }

    #[test]
    fn test_search_limit_keeps_store_order() {
        let persistence = LocalPersistence::new(MemoryStore::new());
        let embedded: Vec<Song> = (0..15)
            .map(|i| song(&format!("s{:02}", i), &format!("Canção {:02}", i), "Vários"))
            .collect();
        let store = loaded(embedded, &persistence);

        let found = store.search("canção", 10);
        assert_eq!(found.len(), 10);
        assert_eq!(found[0].id, "s00");
        assert_eq!(found[9].id, "s09");
    }

    #[test]
    fn test_upsert_local_twice_no_duplicate() {
        let mut persistence = LocalPersistence::new(MemoryStore::new());
        let mut store = loaded(vec![song("a", "Alfa", "X")], &persistence);

        let first = Song::from_form("Teste", "Fulano", "L1", "pt-BR");
        store.upsert_local(first, &mut persistence).unwrap();
        let second = Song::from_form("Teste", "Fulano", "L2", "pt-BR");
        store.upsert_local(second, &mut persistence).unwrap();

        let matching: Vec<&Song> = store.all().iter().filter(|s| s.id == "teste-fulano").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].lyrics, "L2");
        assert_eq!(persistence.local_songs().unwrap().len(), 1);
        assert_eq!(ids(store.all()), vec!["a", "teste-fulano"]);
    }

    #[test]
    fn test_upsert_keeps_sort_order() {
        let mut persistence = LocalPersistence::new(MemoryStore::new());
        let mut store = loaded(
            vec![song("a", "Amor", "X"), song("z", "Zebra", "X")],
            &persistence,
        );
        store
            .upsert_local(Song::from_form("Meio", "Y", "L", "pt-BR"), &mut persistence)
            .unwrap();
        assert_eq!(ids(store.all()), vec!["a", "meio-y", "z"]);
        assert_eq!(store.neighbors("meio-y").1.map(|s| s.id.as_str()), Some("z"));
    }

    #[test]
    fn test_failed_save_is_not_shown_after_reload() {
        use crate::db::FileStore;
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let mut persistence = LocalPersistence::new(FileStore::open(&path).unwrap());
        let mut store = loaded(vec![song("a", "Alfa", "X")], &persistence);

        fs::create_dir_all(path.join("x")).unwrap();
        let result = store.upsert_local(song("teste-fulano", "Teste", "Fulano"), &mut persistence);
        assert!(result.is_err());

        store.reload(&persistence);
        assert!(store.get("teste-fulano").is_none());
        assert_eq!(store.count(), 1);
    }
}
