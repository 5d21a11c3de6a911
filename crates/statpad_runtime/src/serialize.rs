//! Catalog snapshots in `MessagePack`.
//!
//! A snapshot is the whole catalog; there is no incremental format.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use statpad_foundation::{Error, ErrorContext, ErrorKind, Result};
use statpad_storage::Catalog;
use tracing::info;

/// Serializes a catalog to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(catalog: &Catalog) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(catalog)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a catalog from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a catalog snapshot.
pub fn from_bytes(bytes: &[u8]) -> Result<Catalog> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

fn io_error(path: &Path, action: &str, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!("failed to {action} '{}': {e}", path.display())))
        .with_context(ErrorContext::new().with_path(path.display().to_string()))
}

/// Saves a catalog snapshot, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(catalog)?;
    let file = File::create(path).map_err(|e| io_error(path, "create", &e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error(path, "write to", &e))?;
    writer.flush().map_err(|e| io_error(path, "flush", &e))?;

    info!(path = %path.display(), bytes = bytes.len(), "catalog saved");
    Ok(())
}

/// Loads a catalog snapshot.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a snapshot.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, "open", &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error(path, "read", &e))?;

    let catalog = from_bytes(&bytes)?;
    info!(
        path = %path.display(),
        teams = catalog.team_count(),
        players = catalog.player_count(),
        games = catalog.game_count(),
        "catalog loaded"
    );
    Ok(catalog)
}
