pub mod loader;

pub use loader::{CatalogueLoader, CatalogueLoaderError};
