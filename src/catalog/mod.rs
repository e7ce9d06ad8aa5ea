//! Lodging catalogs consumed by the planners.
//!
//! The catalog is an external collaborator: loading and refreshing data is
//! out of scope here. [`LodgingCatalog`] is the only contract the planners
//! depend on; [`InMemoryCatalog`] is a ready-made implementation.

mod memory;
mod types;

pub use memory::InMemoryCatalog;
pub use types::LodgingCatalog;
