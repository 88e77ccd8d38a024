//! In-memory album catalog
//!
//! The catalog is an ordered, append-only sequence of albums. All access goes
//! through one `RwLock`, so readers always see a complete snapshot and
//! concurrent inserts are serialised.

use tokio::sync::RwLock;

use crate::types::Album;
use crate::{Error, Result};

/// Albums every freshly started service is populated with, in order
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}

/// Ordered collection of albums shared between request handlers
#[derive(Debug, Default)]
pub struct Catalog {
    albums: RwLock<Vec<Album>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the seed albums
    pub fn seeded() -> Self {
        Self::from_albums(seed_albums())
    }

    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Snapshot of every album in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Find the first album whose id matches exactly
    pub async fn get(&self, id: &str) -> Result<Album> {
        let albums = self.albums.read().await;
        albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Append an album to the end of the catalog
    ///
    /// Duplicate ids are accepted; returns `true` when the id was already
    /// present so callers can report it.
    pub async fn insert(&self, album: Album) -> bool {
        let mut albums = self.albums.write().await;
        let duplicate = albums.iter().any(|existing| existing.id == album.id);
        albums.push(album);
        duplicate
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_catalog_order() {
        let catalog = Catalog::seeded();
        let ids: Vec<String> = catalog.list().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty().await);
        assert_eq!(catalog.len().await, 0);
    }

    #[tokio::test]
    async fn test_get_is_exact_match() {
        let catalog = Catalog::from_albums(vec![Album::new("abc", "T", "A", 1.0)]);

        assert!(catalog.get("abc").await.is_ok());
        assert_eq!(
            catalog.get("ABC").await,
            Err(Error::NotFound("ABC".to_string()))
        );
        assert!(catalog.get(" abc").await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_ids_first_match_wins() {
        let catalog = Catalog::new();
        assert!(!catalog.insert(Album::new("7", "First", "A", 1.0)).await);
        assert!(catalog.insert(Album::new("7", "Second", "B", 2.0)).await);

        assert_eq!(catalog.len().await, 2);
        assert_eq!(catalog.get("7").await.unwrap().title, "First");
    }

    #[tokio::test]
    async fn test_insert_appends_in_order() {
        let catalog = Catalog::seeded();
        catalog.insert(Album::new("4", "X", "Y", 9.99)).await;
        catalog.insert(Album::new("5", "Z", "W", 0.0)).await;

        let albums = catalog.list().await;
        assert_eq!(albums.len(), 5);
        assert_eq!(&albums[..3], &seed_albums()[..]);
        assert_eq!(albums[3].id, "4");
        assert_eq!(albums[4].id, "5");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_not_lost() {
        let catalog = Arc::new(Catalog::new());

        let mut handles = Vec::new();
        for i in 0..64 {
            let catalog = catalog.clone();
            handles.push(tokio::spawn(async move {
                catalog
                    .insert(Album::new(i.to_string(), "T", "A", i as f64))
                    .await
            }));
        }
        for handle in handles {
            assert!(!handle.await.unwrap());
        }

        let mut ids: Vec<u32> = catalog
            .list()
            .await
            .into_iter()
            .map(|a| a.id.parse().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..64).collect::<Vec<_>>());
    }
}
