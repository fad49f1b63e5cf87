use crate::context::Context;
use crate::manifest::{MANIFEST_FILE, Manifest};
use crate::result::Result;
use crate::utils;
use std::fs;

/// Copy every top-level entry of the project root into the staging
/// directory. Only the packaging manifest itself is left out; version
/// control and dependency directories are copied like anything else.
pub fn produce(ctx: &Context, manifest: &Manifest) -> Result<()> {
    cliclack::log::step("Copying project files")?;
    utils::ensure_dir(&manifest.staging_dir)?;

    let mut copied = 0usize;
    for entry in fs::read_dir(&ctx.base_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name == MANIFEST_FILE {
            continue;
        }

        let dest_path = manifest.staging_dir.join(&name);
        if ctx.verbose {
            cliclack::log::info(format!(
                "Copying {} to {}",
                entry.path().display(),
                dest_path.display()
            ))?;
        }
        utils::copy_recursively(&entry.path(), &dest_path)?;
        copied += 1;
    }

    cliclack::log::info(format!("Copied {} entries", copied))?;
    Ok(())
}
