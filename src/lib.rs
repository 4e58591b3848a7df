// Re-export core modules for use by the binary or other consumers
pub mod cli;
pub mod data;
pub mod registry;
pub mod session;

pub use crate::data::{CatalogError, IdeologyEntry};
pub use crate::registry::{IdeologyRegistry, RegistryError};
pub use crate::session::{is_affirmative, parse_selection, Session, SessionEnd, SessionError};
