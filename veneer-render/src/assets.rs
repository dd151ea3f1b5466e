//! Bundled-asset collaborator
//!
//! The gateway can take its templates from any named-asset source instead
//! of the filesystem: embedded assets, an archive, a test fixture map.

use std::collections::HashMap;
use std::io;

/// A source of named, bundled assets.
pub trait AssetSource: Send + Sync {
    /// Enumerate the available asset names.
    fn names(&self) -> Vec<String>;

    /// Fetch the contents of a named asset.
    fn get(&self, name: &str) -> io::Result<Vec<u8>>;
}

impl AssetSource for HashMap<String, Vec<u8>> {
    fn names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> io::Result<Vec<u8>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such asset: {name}")))
    }
}
