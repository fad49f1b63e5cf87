use crate::cmd::CommandRunner;
use crate::context::Context;
use crate::detect;
use crate::error::Error;
use crate::homepage::HomepageGuard;
use crate::manifest::Manifest;
use crate::result::Result;
use crate::utils;
use std::path::PathBuf;

/// Build the project with a relative `homepage` and copy the build output
/// into the staging directory. `package.json` is restored on every path.
pub fn produce(ctx: &Context, manifest: &Manifest, runner: &dyn CommandRunner) -> Result<()> {
    if ctx.no_build {
        cliclack::log::remark("Skipping build command (--no-build)")?;
        return collect(ctx, manifest);
    }

    let config_path = ctx.base_dir.join(detect::CONFIG_FILE);
    let guard = HomepageGuard::apply(&config_path, &manifest.homepage)?;
    if ctx.verbose {
        cliclack::log::info(format!(
            "Set homepage to {:?} in {}",
            manifest.homepage,
            guard.path().display()
        ))?;
    }

    let result = build(ctx, manifest, runner).and_then(|_| collect(ctx, manifest));
    let restored = guard.restore();

    match (result, restored) {
        (Err(cause), Err(restore)) => {
            return Err(Error::ConfigNotRestored {
                path: config_path,
                restore: Box::new(restore),
                cause: Box::new(cause),
            });
        }
        (Err(cause), Ok(())) => return Err(cause),
        (Ok(()), restored) => restored?,
    }
    if ctx.verbose {
        cliclack::log::info(format!("Restored {}", config_path.display()))?;
    }
    Ok(())
}

fn build(ctx: &Context, manifest: &Manifest, runner: &dyn CommandRunner) -> Result<()> {
    cliclack::log::step(format!("Running {}", manifest.build_command))?;

    let output = runner
        .run(&manifest.build_command, &ctx.base_dir)
        .map_err(|e| Error::BuildFailure(format!("{}: {}", manifest.build_command, e)))?;

    if !output.success() {
        let code = output
            .code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        return Err(Error::BuildFailure(format!(
            "{} failed with exit code {}: {}",
            manifest.build_command,
            code,
            output.output.trim_end()
        )));
    }

    if !output.output.trim().is_empty() {
        cliclack::log::remark(output.output.trim_end())?;
    }

    Ok(())
}

/// First existing candidate wins
pub fn find_artifact_dir(ctx: &Context, manifest: &Manifest) -> Option<PathBuf> {
    manifest
        .artifact_dirs
        .iter()
        .map(|dir| ctx.base_dir.join(dir))
        .find(|path| path.is_dir())
}

fn collect(ctx: &Context, manifest: &Manifest) -> Result<()> {
    let artifact_dir = find_artifact_dir(ctx, manifest)
        .ok_or_else(|| Error::MissingArtifact(manifest.artifact_dirs.join(", ")))?;

    cliclack::log::step(format!("Copying build output from {}", artifact_dir.display()))?;
    if ctx.verbose {
        cliclack::log::info(format!(
            "Copying {} to {}",
            artifact_dir.display(),
            manifest.staging_dir.display()
        ))?;
    }

    utils::copy_dir_contents(&artifact_dir, &manifest.staging_dir)
}
