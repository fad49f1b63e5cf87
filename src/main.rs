mod archive;
mod args;
mod cleanup;
mod cmd;
mod context;
mod detect;
mod error;
mod homepage;
mod manifest;
mod pipeline;
mod readme;
mod result;
mod strategy;
mod tpl;
mod utils;

use args::Args;
use cmd::SystemRunner;
use context::Context;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        no_build,
        path,
    } = Args::parse();

    // Resolve the project root
    let base_dir = utils::find_project_root(path.as_deref())?;

    // Create context
    let ctx = Context::new(base_dir, verbose).with_no_build(no_build);

    cliclack::intro("sitepack")?;

    // Load manifest
    let manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading manifest...");
        match Manifest::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!("Packaging {}", m.title));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    let runner = SystemRunner::new(verbose);
    let archive = pipeline::run(&ctx, &manifest, &runner)?;

    cliclack::outro(format!(
        "Archive created: {} ({} MB)",
        archive.path.display(),
        archive.size_mib()
    ))?;
    Ok(())
}
