use std::path::PathBuf;

/// Run-wide settings passed to every packaging step
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show every copy and command)
    pub verbose: bool,

    /// Skip the build command for framework projects
    pub no_build: bool,

    /// Project root being packaged
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            no_build: false,
            base_dir,
        }
    }

    pub fn with_no_build(mut self, no_build: bool) -> Self {
        self.no_build = no_build;
        self
    }
}
