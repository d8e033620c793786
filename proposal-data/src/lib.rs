pub mod loader;

pub use loader::{PanelCatalogLoader, PanelCatalogLoaderError, default_catalog};
