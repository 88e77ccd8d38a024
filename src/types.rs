//! Core types for the album catalog

use serde::{Deserialize, Serialize};

/// Album identifier, assigned by the client on creation
pub type AlbumId = String;

/// A single catalog record
///
/// Every field is required on input. No content checks are applied: an empty
/// id or a negative price is stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}
