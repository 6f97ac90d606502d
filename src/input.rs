use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("file is empty: {0}")]
    EmptyFile(PathBuf),
}

/// Reads a text file, rejecting empty or whitespace-only content.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(content)
}
