//! Export of the merged collection as a downloadable file

use crate::error::Result;
use crate::stores::SongStore;

/// Name of the downloaded file
pub const EXPORT_FILE_NAME: &str = "karaoke-acervo.json";

/// A file ready to hand to the host's download mechanism
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Pretty-printed `{ "songs": [...] }` of every song in the store
pub fn export_collection(store: &SongStore) -> Result<ExportFile> {
    let body = serde_json::to_vec_pretty(&store.document())?;
    Ok(ExportFile {
        file_name: EXPORT_FILE_NAME,
        content_type: "application/json",
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{LocalPersistence, MemoryStore};
    use crate::models::{Song, SongDocument};

    #[test]
    fn test_export_contains_merged_collection() {
        let mut persistence = LocalPersistence::new(MemoryStore::new());
        let mut store = SongStore::default();
        store.load(
            vec![Song::from_form("Embutida", "A", "l", "pt-BR")],
            &persistence,
        );
        store
            .upsert_local(Song::from_form("Local", "B", "l", "pt-BR"), &mut persistence)
            .unwrap();

        let file = export_collection(&store).unwrap();
        assert_eq!(file.file_name, "karaoke-acervo.json");

        let text = String::from_utf8(file.body).unwrap();
        assert!(text.starts_with("{\n  \"songs\": ["));
        let document: SongDocument = serde_json::from_str(&text).unwrap();
        let ids: Vec<&str> = document.songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["embutida-a", "local-b"]);
    }
}
