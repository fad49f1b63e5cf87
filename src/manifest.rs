use crate::context::Context;
use crate::detect;
use crate::error::Error;
use crate::result::Result;
use crate::tpl::Tpl;
use crate::utils;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Name of the optional packaging manifest in the project root
pub const MANIFEST_FILE: &str = "sitepack.toml";

const DEFAULT_FILENAME: &str = "$NAME";
const DEFAULT_OUTPUT_FOLDER: &str = "sitepack-output";
const DEFAULT_BUILD: &str = "npm run build";
const DEFAULT_ARTIFACTS: [&str; 2] = ["dist", "build"];
const DEFAULT_HOMEPAGE: &str = "./";
const DEFAULT_VERSION: &str = "0.0.0";

/// Raw contents of `sitepack.toml`
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct SitepackConfig {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(rename = "output-folder", default)]
    pub output_folder: Option<String>,

    #[serde(default)]
    pub build: Option<String>,

    #[serde(default)]
    pub artifacts: Option<Vec<String>>,

    #[serde(default)]
    pub homepage: Option<String>,
}

/// Resolved packaging settings for a single run
#[derive(Debug, Clone)]
pub struct Manifest {
    pub name: String,
    pub title: String,
    pub filename: String,
    pub build_command: String,
    pub artifact_dirs: Vec<String>,
    pub homepage: String,
    pub output_folder: PathBuf,
    pub staging_dir: PathBuf,
    pub archive_path: PathBuf,
}

impl Manifest {
    /// Load `sitepack.toml` from the project root, or use defaults when absent
    pub fn load(ctx: &Context) -> Result<Self> {
        let manifest_path = ctx.base_dir.join(MANIFEST_FILE);
        let config = if manifest_path.is_file() {
            let content = fs::read_to_string(&manifest_path)?;
            toml::from_str(&content)?
        } else {
            SitepackConfig::default()
        };

        Self::from_config(ctx, config)
    }

    pub fn from_config(ctx: &Context, config: SitepackConfig) -> Result<Self> {
        let name = utils::dir_name(&ctx.base_dir).ok_or_else(|| {
            Error::ProjectNotFound(format!(
                "{} has no directory name",
                ctx.base_dir.display()
            ))
        })?;
        let parent = ctx.base_dir.parent().ok_or_else(|| {
            Error::InvalidManifest(format!(
                "{} has no parent directory to hold the output",
                ctx.base_dir.display()
            ))
        })?;

        let mut tpl = Tpl::new();
        tpl.register("NAME", &name);
        tpl.register("VERSION", project_version(&ctx.base_dir));

        let title = tpl.parse_or(config.title.as_deref(), &name);

        let filename = tpl.parse_or(config.filename.as_deref(), DEFAULT_FILENAME);
        if filename.trim().is_empty() || filename.contains(['/', '\\']) {
            return Err(Error::InvalidManifest(format!(
                "filename must be a plain file name, got {:?}",
                filename
            )));
        }

        let output_folder = normalize(
            &parent.join(tpl.parse_or(config.output_folder.as_deref(), DEFAULT_OUTPUT_FOLDER)),
        );
        if output_folder.starts_with(&ctx.base_dir) {
            return Err(Error::InvalidManifest(format!(
                "output-folder {} must be outside the project root",
                output_folder.display()
            )));
        }

        let build_command = tpl.parse_or(config.build.as_deref(), DEFAULT_BUILD);
        if build_command.split_whitespace().next().is_none() {
            return Err(Error::InvalidManifest("build command is empty".to_string()));
        }

        let artifact_dirs = match config.artifacts {
            Some(dirs) => dirs.iter().map(|d| tpl.parse(d)).collect::<Vec<_>>(),
            None => DEFAULT_ARTIFACTS.iter().map(|d| d.to_string()).collect(),
        };
        if artifact_dirs.is_empty() {
            return Err(Error::InvalidManifest(
                "artifacts must list at least one directory".to_string(),
            ));
        }

        let homepage = tpl.parse_or(config.homepage.as_deref(), DEFAULT_HOMEPAGE);

        let staging_dir = output_folder.join(&filename);
        let archive_path = output_folder.join(format!("{}.zip", filename));

        Ok(Manifest {
            name,
            title,
            filename,
            build_command,
            artifact_dirs,
            homepage,
            output_folder,
            staging_dir,
            archive_path,
        })
    }
}

/// `version` from package.json, if it can be read; malformed documents are
/// reported later by the framework build
fn project_version(base_dir: &Path) -> String {
    fs::read_to_string(base_dir.join(detect::CONFIG_FILE))
        .ok()
        .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok())
        .and_then(|doc| doc.get("version")?.as_str().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// Lexically resolve `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }
    result
}
