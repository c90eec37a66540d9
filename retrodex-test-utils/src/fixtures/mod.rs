//! Test fixture modules for database and HTTP mock creation.
//!
//! - `pokemon` - Catalog records, source API documents and Resource API pages

pub mod pokemon;
