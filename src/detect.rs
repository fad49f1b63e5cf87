use std::fmt;
use std::path::Path;

/// Build configuration document of a framework project
pub const CONFIG_FILE: &str = "package.json";

/// Source directory of a framework project
pub const SOURCE_DIR: &str = "src";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// Needs a build step before it can be served
    Framework,
    /// Files are served as committed
    Static,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Framework => "framework",
            ProjectKind::Static => "static",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify the project: both `package.json` and `src/` must be present
/// for a framework project, anything else is static
pub fn detect(base_dir: &Path) -> ProjectKind {
    if base_dir.join(CONFIG_FILE).is_file() && base_dir.join(SOURCE_DIR).is_dir() {
        ProjectKind::Framework
    } else {
        ProjectKind::Static
    }
}
