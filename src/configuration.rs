use config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tunedex.yaml";

/// Prefix for environment overrides, e.g. `TUNEDEX_LIBRARY_ROOT`.
pub const ENV_PREFIX: &str = "TUNEDEX";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub library_root: PathBuf,
    pub output_dir: PathBuf,
    /// Keep at most one artist per starting letter and write `_small` files.
    pub alphabetical: bool,
    /// Only log errors.
    pub silent: bool,
    /// Drop the first `1/denom` of the shuffled artists from the compact manifest.
    pub denom: Option<NonZeroUsize>,
}

/// Values given on the command line. They win over every other source.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub library_root: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub alphabetical: bool,
    pub silent: bool,
    pub denom: Option<u32>,
}

/// Where the two manifests of a run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub full: PathBuf,
    pub compact: PathBuf,
}

/// Resolves settings from defaults, the YAML config file, `TUNEDEX_*`
/// environment variables and finally the command line.
///
/// The default config file is optional; one named with `--config` must exist.
pub fn get_configuration(cli: &CliOverrides) -> Result<Settings, ConfigError> {
    let file = match &cli.config_file {
        Some(path) => File::from(path.as_path()).required(true),
        None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false),
    };

    let settings = config::Config::builder()
        .set_default("library_root", ".")?
        .set_default("output_dir", ".")?
        .set_default("alphabetical", false)?
        .set_default("silent", false)?
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .set_override_option("library_root", cli.library_root.as_deref().map(path_value))?
        .set_override_option("output_dir", cli.output_dir.as_deref().map(path_value))?
        .set_override_option("alphabetical", cli.alphabetical.then_some(true))?
        .set_override_option("silent", cli.silent.then_some(true))?
        .set_override_option("denom", cli.denom.map(i64::from))?
        .build()?;

    settings.try_deserialize::<Settings>()
}

impl Settings {
    /// Base name shared by both manifests.
    pub fn manifest_name(&self) -> &'static str {
        if self.alphabetical {
            "manifest_small"
        } else {
            "manifest"
        }
    }

    pub fn output_paths(&self) -> OutputPaths {
        let name = self.manifest_name();
        OutputPaths {
            full: self.output_dir.join(format!("{}.json", name)),
            compact: self.output_dir.join(format!("{}_compact.json", name)),
        }
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
