//! Album catalog - a small HTTP service over an in-memory list of albums
//!
//! The service exposes:
//! - `GET /albums` to list every album in insertion order
//! - `GET /albums/:id` to fetch the first album with a given id
//! - `POST /albums` to append a new album
//! - `GET /health` for liveness checks

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
