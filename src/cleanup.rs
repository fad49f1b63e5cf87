use crate::manifest::Manifest;
use crate::result::Result;
use std::fs;
use std::path::Path;

/// Remove the staging directory and archive left by a previous run.
/// Failures are only reported.
pub fn remove_previous(manifest: &Manifest) -> Result<()> {
    if manifest.staging_dir.exists()
        && let Err(e) = fs::remove_dir_all(&manifest.staging_dir)
    {
        warn_removal(&manifest.staging_dir, &e)?;
    }

    if manifest.archive_path.exists()
        && let Err(e) = fs::remove_file(&manifest.archive_path)
    {
        warn_removal(&manifest.archive_path, &e)?;
    }

    Ok(())
}

/// Delete the staging directory once the archive is written
pub fn remove_staging(manifest: &Manifest) -> Result<()> {
    fs::remove_dir_all(&manifest.staging_dir)?;
    Ok(())
}

fn warn_removal(path: &Path, e: &std::io::Error) -> Result<()> {
    cliclack::log::warning(format!("Could not remove {}: {}", path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Manifest) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap().join("site");
        fs::create_dir_all(&root).unwrap();
        let manifest = Manifest::load(&Context::new(root, false)).unwrap();
        (tmp, manifest)
    }

    #[test]
    fn test_removes_previous_outputs() {
        let (_tmp, manifest) = setup();
        fs::create_dir_all(manifest.staging_dir.join("old")).unwrap();
        fs::write(manifest.staging_dir.join("old/index.html"), "").unwrap();
        fs::write(&manifest.archive_path, "stale").unwrap();

        remove_previous(&manifest).unwrap();

        assert!(!manifest.staging_dir.exists());
        assert!(!manifest.archive_path.exists());
    }

    #[test]
    fn test_nothing_to_remove_is_fine() {
        let (_tmp, manifest) = setup();
        remove_previous(&manifest).unwrap();
        assert!(!manifest.output_folder.exists());
    }

    #[test]
    fn test_remove_staging_keeps_archive() {
        let (_tmp, manifest) = setup();
        fs::create_dir_all(&manifest.staging_dir).unwrap();
        fs::write(&manifest.archive_path, "zip").unwrap();

        remove_staging(&manifest).unwrap();

        assert!(!manifest.staging_dir.exists());
        assert!(manifest.archive_path.exists());
    }
}
