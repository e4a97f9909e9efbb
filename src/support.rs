//! Collaborators layered on top of the stemming algorithms.

pub mod cache;
pub mod diacritics;
pub mod ignore;

pub use cache::StemCache;
pub use diacritics::remove_diacritics;
pub use ignore::IgnoreList;
