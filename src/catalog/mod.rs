//! Catalog record types.
//!
//! [`Book`] is the catalog entry; it composes [`MediaDetails`], the shared
//! page-count and price capability every catalog item carries, instead of
//! inheriting from a base record type.

mod book;
mod media;

pub use book::Book;
pub use media::MediaDetails;
