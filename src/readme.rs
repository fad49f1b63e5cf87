use crate::result::Result;
use std::fs;
use std::path::Path;

pub const README_FILE: &str = "README.txt";

const README_TEXT: &str = "\
Website package
===============

This archive contains a ready-to-serve copy of the website.

Usage
-----
1. Extract the archive into an empty directory.
2. Open index.html in a browser, or upload the extracted files to any
   static web host (web server document root, object storage bucket, CDN).
3. Keep the directory structure intact: pages reference their assets
   with relative paths.

No build step or runtime dependencies are required.
";

/// Write the usage instructions into the staging directory
pub fn write(staging_dir: &Path) -> Result<()> {
    fs::write(staging_dir.join(README_FILE), README_TEXT)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_fixed_text() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path()).unwrap();

        let text = fs::read_to_string(tmp.path().join(README_FILE)).unwrap();
        assert_eq!(text, README_TEXT);
        assert!(text.contains("index.html"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(README_FILE), "project readme").unwrap();

        write(tmp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join(README_FILE)).unwrap(),
            README_TEXT
        );
    }
}
