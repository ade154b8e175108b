//! File helpers shared by every on-disk document of a board.
//!
//! Consultants live in JSON, everything else in YAML. Both go through
//! [`load`] and [`save`], so a blank file reads like a missing one and every
//! write replaces the target atomically.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialization used for a board document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    fn decode<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        Ok(match self {
            Format::Json => serde_json::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
        })
    }

    fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        Ok(match self {
            Format::Json => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                out
            }
            Format::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

/// Parse the document at `path`. `None` when the file is absent or holds only
/// whitespace.
pub fn load<T: DeserializeOwned>(path: &Path, format: Format) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    format.decode(&content).map(Some)
}

/// Serialize `value` and atomically replace the document at `path`.
pub fn save<T: Serialize + ?Sized>(path: &Path, format: Format, value: &T) -> Result<()> {
    let content = format.encode(value)?;
    atomic_write(path, content.as_bytes())
}

/// Write through a tempfile in the target directory, then rename over `path`.
/// Readers see either the old document or the new one.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Seed a file unless something is already there. Returns true if written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}
