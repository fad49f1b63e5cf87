use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the sitepack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Skip the build command (package an existing build output)
    pub no_build: bool,

    /// Project root to package
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("sitepack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package a web project's build output into a zip archive")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Project root to package (defaults to the current directory)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .arg(
                Arg::new("no-build")
                    .long("no-build")
                    .action(ArgAction::SetTrue)
                    .help("Skip the build command (use an existing build output)")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            no_build: matches.get_flag("no-build"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}
