use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::Context;

/// A pending asset request. Resolves exactly once, or the sender is dropped.
pub type Fetch = Receiver<anyhow::Result<Vec<u8>>>;

/// Where the sequencer gets its vector asset from.
pub trait AssetSource {
    /// Issues a single request for `path`. No retry, no timeout.
    fn request(&self, path: &str) -> Fetch;
}

/// Reads assets below a root directory on a background thread.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            log::warn!("Asset root {:?} doesn't exist.", root);
        }
        Self { root }
    }
}

impl AssetSource for DirSource {
    fn request(&self, path: &str) -> Fetch {
        let (tx, rx) = mpsc::channel();
        let full_path = self.root.join(path);

        thread::spawn(move || {
            log::debug!("Loading asset: {:?}", full_path);
            let result = fs::read(&full_path)
                .with_context(|| format!("Failed to read asset: {:?}", full_path));
            // 接收端已丢弃时无需处理
            let _ = tx.send(result);
        });

        rx
    }
}

/// In-memory assets; requests resolve before `request` returns.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&mut self, path: &str, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.to_string(), bytes.into());
    }
}

impl AssetSource for MemorySource {
    fn request(&self, path: &str) -> Fetch {
        let (tx, rx) = mpsc::channel();
        let result = self
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("asset not found: {}", path));
        let _ = tx.send(result);
        rx
    }
}
