use crate::error::Error;
use crate::result::Result;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const HOMEPAGE_KEY: &str = "homepage";

/// Temporarily rewrites the `homepage` field of a build configuration
/// document and puts the original bytes back when released.
///
/// Call [`HomepageGuard::restore`] on every normal and error path so a failed
/// restore is reported. If the guard is dropped without it (a panic in the
/// protected block), `Drop` writes the original back on a best-effort basis.
pub struct HomepageGuard {
    path: PathBuf,
    original: String,
    restored: bool,
}

impl HomepageGuard {
    /// Capture the document verbatim, then overwrite it with `homepage` set
    pub fn apply(path: &Path, homepage: &str) -> Result<Self> {
        let original = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut document: Value =
            serde_json::from_str(&original).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let fields = document.as_object_mut().ok_or_else(|| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: "expected a JSON object at the top level".to_string(),
        })?;
        fields.insert(HOMEPAGE_KEY.to_string(), Value::String(homepage.to_string()));

        let mut updated = serde_json::to_string_pretty(&document)?;
        updated.push('\n');

        // From here on the file may have been touched, so the guard owns it.
        let guard = Self {
            path: path.to_path_buf(),
            original,
            restored: false,
        };
        fs::write(&guard.path, updated)?;

        Ok(guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the captured original back
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        fs::write(&self.path, &self.original)?;
        Ok(())
    }
}

impl Drop for HomepageGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = fs::write(&self.path, &self.original) {
            eprintln!("Error: failed to restore {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ORIGINAL: &str = "{\"name\":\"app\",   \"homepage\": \"/old/\",\n\t\"private\": true}";

    fn read_homepage(path: &Path) -> String {
        let doc: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        doc[HOMEPAGE_KEY].as_str().unwrap().to_string()
    }

    #[test]
    fn test_apply_sets_homepage_and_keeps_other_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("package.json");
        fs::write(&path, ORIGINAL).unwrap();

        let guard = HomepageGuard::apply(&path, "./").unwrap();

        assert_eq!(read_homepage(&path), "./");
        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["name"], "app");
        assert_eq!(doc["private"], true);

        guard.restore().unwrap();
    }

    #[test]
    fn test_restore_is_byte_exact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("package.json");
        fs::write(&path, ORIGINAL).unwrap();

        let guard = HomepageGuard::apply(&path, "./").unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), ORIGINAL);
        guard.restore().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), ORIGINAL);
    }

    #[test]
    fn test_drop_restores_when_not_released() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("package.json");
        fs::write(&path, ORIGINAL).unwrap();

        {
            let _guard = HomepageGuard::apply(&path, "./").unwrap();
            assert_eq!(read_homepage(&path), "./");
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), ORIGINAL);
    }

    #[test]
    fn test_homepage_added_when_absent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("package.json");
        fs::write(&path, r#"{"name": "app"}"#).unwrap();

        let guard = HomepageGuard::apply(&path, ".").unwrap();
        assert_eq!(read_homepage(&path), ".");
        guard.restore().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"name": "app"}"#);
    }

    #[test]
    fn test_missing_document_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = HomepageGuard::apply(&tmp.path().join("package.json"), "./");
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_malformed_document_is_parse_error_and_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("package.json");
        fs::write(&path, "{ \"homepage\": ").unwrap();

        let result = HomepageGuard::apply(&path, "./");

        assert!(matches!(result, Err(Error::ConfigParse { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ \"homepage\": ");
    }

    #[test]
    fn test_non_object_document_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("package.json");
        fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            HomepageGuard::apply(&path, "./"),
            Err(Error::ConfigParse { .. })
        ));
    }
}
