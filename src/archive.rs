use crate::error::Error;
use crate::result::Result;
use crate::utils;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Highest deflate level
const COMPRESSION_LEVEL: i64 = 9;

/// A finished archive on disk
#[derive(Debug, Clone)]
pub struct ArchiveInfo {
    pub path: PathBuf,
    pub entries: usize,
    pub size: u64,
}

impl ArchiveInfo {
    /// Size in MiB with two decimals
    pub fn size_mib(&self) -> String {
        format!("{:.2}", self.size as f64 / (1024.0 * 1024.0))
    }
}

/// Zip the contents of `source_dir` into `output_path`.
///
/// Entry names are relative to `source_dir`. Files that vanish while the
/// archive is written are reported and skipped; every other error aborts.
/// Returns once the archive has been finished and synced to disk.
pub fn create_zip(source_dir: &Path, output_path: &Path) -> Result<ArchiveInfo> {
    if !source_dir.is_dir() {
        return Err(Error::custom(format!(
            "Nothing to archive: {} is not a directory",
            source_dir.display()
        )));
    }
    if let Some(parent) = output_path.parent() {
        utils::ensure_dir(parent)?;
    }

    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    let file_options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .unix_permissions(0o644);
    let dir_options = file_options.unix_permissions(0o755);

    let mut entries = 0;
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.io_error().is_some_and(is_not_found) => {
                cliclack::log::warning(format!("Skipping vanished entry: {}", e))?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let path = entry.path();
        let name = entry_name(path.strip_prefix(source_dir).unwrap_or(path));
        if name.is_empty() {
            continue;
        }

        if entry.file_type().is_dir() {
            zip.add_directory(name, dir_options)?;
            entries += 1;
            continue;
        }

        let mut source = match File::open(path) {
            Ok(source) => source,
            Err(e) if is_not_found(&e) => {
                cliclack::log::warning(format!("Skipping vanished file {}: {}", name, e))?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        zip.start_file(name, file_options)?;
        io::copy(&mut source, &mut zip)?;
        entries += 1;
    }

    let mut file = zip.finish()?;
    file.flush()?;
    file.sync_all()?;
    let size = file.metadata()?.len();

    Ok(ArchiveInfo {
        path: output_path.to_path_buf(),
        entries,
        size,
    })
}

fn is_not_found(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::NotFound
}

/// `/`-separated archive path
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
