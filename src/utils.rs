use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy a file or directory recursively
pub fn copy_recursively(source: &Path, destination: &Path) -> Result<()> {
    if source.is_dir() {
        if !destination.exists() {
            fs::create_dir_all(destination)?;
        }

        for entry in fs::read_dir(source)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let src_path = entry.path();
            let dst_path = destination.join(entry.file_name());

            if file_type.is_dir() {
                copy_recursively(&src_path, &dst_path)?;
            } else {
                fs::copy(&src_path, &dst_path)?;
            }
        }
    } else {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, destination)?;
    }

    Ok(())
}

/// Copy the contents of `source` (not the directory itself) into `destination`
pub fn copy_dir_contents(source: &Path, destination: &Path) -> Result<()> {
    ensure_dir(destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        copy_recursively(&entry.path(), &destination.join(entry.file_name()))?;
    }
    Ok(())
}

/// Resolve the project root from the given path or the current directory
pub fn find_project_root(path: Option<&Path>) -> Result<PathBuf> {
    let base_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if !base_path.is_dir() {
        return Err(Error::ProjectNotFound(base_path.display().to_string()));
    }

    Ok(base_path.canonicalize()?)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Final path component as a string, used as the project name
pub fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().to_string())
}
