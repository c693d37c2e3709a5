//! Orthologous group levels from the eggNOG levels table.
//!
//! A levels table lists every group once, together with the taxa (organisms)
//! that belong to it. The question this crate answers is which group is the
//! smallest one still containing a given set of taxa.

pub mod cache;
pub mod catalog;
pub mod error;
pub mod finder;
pub mod level;

pub use cache::CatalogCache;
pub use catalog::{LevelCatalog, LevelKey, SizeMismatch};
pub use error::{ArgumentError, LevelError, Result};
pub use finder::{find_level, find_level_in, smallest_group};
pub use level::{Level, TaxonId};
