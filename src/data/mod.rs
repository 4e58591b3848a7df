pub mod ideologies;

pub use ideologies::{load_default_catalog, CatalogError, IdeologyCatalog, IdeologyEntry};
