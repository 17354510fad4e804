use std::path::{Path, PathBuf};

pub mod reader;

pub use reader::read_lines;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} not found.", .0.display())]
    NotFound(PathBuf),
    #[error("{} is not a file.", .0.display())]
    NotAFile(PathBuf),
}

impl InputError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Checks every path independently and returns one error per failing check.
pub fn check_paths(paths: &[&Path]) -> Vec<InputError> {
    let mut errors = Vec::new();
    for &path in paths {
        if !path.exists() {
            errors.push(InputError::NotFound(path.to_path_buf()));
        } else if !path.is_file() {
            errors.push(InputError::NotAFile(path.to_path_buf()));
        }
    }
    errors
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
