use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::catalog::LevelCatalog;
use crate::error::Result;

/// Keeps the last loaded catalog around for callers that run many lookups.
///
/// The snapshot is never refreshed on its own: a changed levels file is only picked
/// up after [`CatalogCache::invalidate`] or when a different path is requested.
#[derive(Debug, Default)]
pub struct CatalogCache {
    snapshot: Option<(PathBuf, Arc<LevelCatalog>)>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, path: &Path) -> Result<Arc<LevelCatalog>> {
        if let Some((cached, catalog)) = &self.snapshot {
            if cached == path {
                return Ok(Arc::clone(catalog));
            }
        }

        debug!("Loading levels snapshot from {}", path.display());
        let catalog = Arc::new(LevelCatalog::load(path)?);
        self.snapshot = Some((path.to_path_buf(), Arc::clone(&catalog)));
        Ok(catalog)
    }

    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }
}
