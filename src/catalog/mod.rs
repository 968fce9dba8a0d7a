pub mod loader;
pub mod store;
pub mod types;

pub use loader::{CatalogFileError, load_catalog_file};
pub use store::PromptCatalog;
pub use types::{Difficulty, Prompt, PromptId};
