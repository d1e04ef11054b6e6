//! byow-save: save-file transport for world snapshots
//!
//! A save file is the snapshot JSON and nothing else. Raw bytes can be stored
//! and fetched verbatim for transports that already hold an encoded snapshot.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use byow_core::{Snapshot, WorldError};

/// File name used under the data directory
pub const SAVE_FILE_NAME: &str = "save-file.json";

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Save file is empty")]
    Empty,

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] WorldError),
}

/// Write `bytes` to `path` unchanged, creating parent directories.
pub fn save_snapshot_bytes(bytes: &[u8], path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    create_parent(path)?;
    fs::write(path, bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Encode a snapshot as indented JSON and write it to `path`
pub fn save_snapshot(snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    create_parent(path)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.flush()?;
    log::debug!(
        "saved {}x{} world (seed {}) to {}",
        snapshot.width,
        snapshot.height,
        snapshot.seed,
        path.display()
    );
    Ok(())
}

/// Read a save file verbatim
pub fn load_snapshot_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, SaveError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SaveError::NotFound,
        _ => SaveError::Io(err),
    })?;
    if bytes.is_empty() {
        return Err(SaveError::Empty);
    }
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Read and parse a saved snapshot
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SaveError> {
    let bytes = load_snapshot_bytes(path)?;
    Ok(Snapshot::from_slice(&bytes)?)
}

/// Check if a save file exists
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// `<data_local_dir>/byow/save-file.json`, or `./save-file.json` when the
/// platform has no data directory
pub fn default_save_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(mut path) => {
            path.push("byow");
            path.push(SAVE_FILE_NAME);
            path
        }
        None => PathBuf::from(SAVE_FILE_NAME),
    }
}

fn create_parent(path: &Path) -> Result<(), SaveError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
