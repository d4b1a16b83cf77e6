//! Destination catalog: slug keys, the slug index and the sources it is built from.

pub mod builder;
pub mod index;
pub mod slug;
pub mod source;

pub use builder::build_catalog_index;
pub use index::CatalogIndex;
pub use slug::SlugKey;
pub use source::{CatalogSource, HttpCatalogSource};
