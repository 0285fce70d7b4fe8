//! Program file format
//!
//! Plain text, one `<number> <statement>` per line. Files need not be sorted;
//! loading re-sorts by line number. A file without a single program line is
//! not a program and is handed back as opaque display text.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::ProgramStore;
use crate::util::i18n::{t_cur, MSG};

/// Program file I/O errors
#[derive(Debug, Error)]
pub enum FileError {
    /// Reading the file failed
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the file failed
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of inspecting file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    /// At least one line had the program-line shape
    Program(ProgramStore),
    /// Nothing matched; the content is shown as-is
    Opaque(String),
}

/// Classify already-read content as a program or opaque text
pub fn interpret(content: &str) -> Loaded {
    let (store, matched) = ProgramStore::from_content(content);
    if matched == 0 {
        Loaded::Opaque(content.to_string())
    } else {
        Loaded::Program(store)
    }
}

/// Read `path` and interpret its content
pub fn load(path: &Path) -> Result<Loaded, FileError> {
    let content = fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let path_str = path.display().to_string();
    info!("{}", t_cur(MSG::FileRead, &[&path_str]));
    Ok(interpret(&content))
}

/// Write `store` to `path`, one newline-terminated line per entry
pub fn save(
    store: &ProgramStore,
    path: &Path,
) -> Result<(), FileError> {
    let mut content = String::new();
    for line in store.serialize() {
        content.push_str(&line);
        content.push('\n');
    }
    fs::write(path, content).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let path_str = path.display().to_string();
    let count = store.len().to_string();
    info!("{}", t_cur(MSG::FileWritten, &[&path_str, &count]));
    Ok(())
}
