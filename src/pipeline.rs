use crate::archive::{self, ArchiveInfo};
use crate::cleanup;
use crate::cmd::CommandRunner;
use crate::context::Context;
use crate::detect;
use crate::manifest::Manifest;
use crate::readme;
use crate::result::Result;
use crate::strategy;
use std::fs;

/// Package the project into `manifest.archive_path`.
///
/// Steps run strictly in order and the first error ends the run. On failure
/// the staging directory is left in place for inspection.
pub fn run(ctx: &Context, manifest: &Manifest, runner: &dyn CommandRunner) -> Result<ArchiveInfo> {
    cleanup::remove_previous(manifest)?;

    fs::create_dir_all(&manifest.staging_dir)?;
    if ctx.verbose {
        cliclack::log::info(format!(
            "Packaging {} as {} in {}",
            manifest.name,
            manifest.filename,
            manifest.output_folder.display()
        ))?;
    }

    let kind = detect::detect(&ctx.base_dir);
    cliclack::log::step(format!("Detected {} project", kind))?;

    strategy::produce(ctx, manifest, kind, runner)?;

    readme::write(&manifest.staging_dir)?;

    cliclack::log::step("Creating zip archive")?;
    let info = archive::create_zip(&manifest.staging_dir, &manifest.archive_path)?;
    cliclack::log::info(format!("Archived {} entries", info.entries))?;

    cleanup::remove_staging(manifest)?;

    Ok(info)
}
