//! Data models shared by the analyzer, the store and the surfaces.

pub mod analysis;
pub mod config;
