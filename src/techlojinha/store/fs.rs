use super::DataStore;
use crate::error::{Result, StockError};
use crate::model::Inventory;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(StockError::Io)
            }
            _ => Ok(()),
        }
    }
}

/// Pretty JSON with four-space indentation. serde_json leaves non-ASCII
/// characters unescaped, so accented category names stay readable on disk.
pub fn to_json(inventory: &Inventory) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    inventory
        .serialize(&mut ser)
        .map_err(StockError::Serialization)?;
    String::from_utf8(buf).map_err(|e| StockError::Store(e.to_string()))
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Inventory>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(StockError::Io)?;
        let inventory: Inventory =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        debug!(
            path = %self.path.display(),
            categories = inventory.len(),
            "inventory loaded"
        );
        Ok(Some(inventory))
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.ensure_parent()?;
        let content = to_json(inventory)?;
        fs::write(&self.path, content).map_err(StockError::Io)?;
        debug!(
            path = %self.path.display(),
            categories = inventory.len(),
            "inventory saved"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
