pub mod framework;
pub mod static_copy;

use crate::cmd::CommandRunner;
use crate::context::Context;
use crate::detect::ProjectKind;
use crate::manifest::Manifest;
use crate::result::Result;

/// Fill the staging directory using the strategy for `kind`
pub fn produce(
    ctx: &Context,
    manifest: &Manifest,
    kind: ProjectKind,
    runner: &dyn CommandRunner,
) -> Result<()> {
    match kind {
        ProjectKind::Framework => framework::produce(ctx, manifest, runner),
        ProjectKind::Static => static_copy::produce(ctx, manifest),
    }
}
