//! DexPaprika API gateway module.
//!
//! Contains the HTTP client for the remote DexPaprika REST API.

pub mod client;

pub use client::{DexPaprikaClient, API_BASE_URL};
