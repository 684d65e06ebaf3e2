//! Configuration Resolution
//!
//! CLI引数とデフォルト値から変換設定を解決する

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::application::dto::conversion_config::ConversionConfig;
use crate::domain::entities::jpeg_quality::JpegQuality;

/// Default input location, relative to the user's home directory.
pub const DEFAULT_INPUT_SUBPATH: [&str; 2] = ["Downloads", "twitter_media_harvest"];

/// Name of the output folder created inside the input directory by default.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "output";

/// Raw, unvalidated settings as they arrive from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Option<String>,
    pub output: Option<String>,
    pub quality: u8,
    pub dry_run: bool,
}

impl Config {
    /// Resolve into an immutable `ConversionConfig`, using the current user's home directory
    /// for the default input.
    pub fn resolve(&self) -> Result<ConversionConfig> {
        self.resolve_with_home(dirs::home_dir())
    }

    /// Same as [`Config::resolve`] with an explicit home directory.
    ///
    /// The home directory is only required when no input directory was given.
    pub fn resolve_with_home(&self, home: Option<PathBuf>) -> Result<ConversionConfig> {
        let input_dir = match &self.input {
            Some(raw) => expand_path(raw),
            None => {
                let home = home.context("Failed to get user home directory")?;
                default_input_dir(&home)
            }
        };

        let output_dir = match &self.output {
            Some(raw) => expand_path(raw),
            None => default_output_dir(&input_dir),
        };

        let quality = JpegQuality::new(self.quality)?;

        Ok(ConversionConfig::new(
            input_dir,
            output_dir,
            quality,
            self.dry_run,
        ))
    }
}

/// `<home>/Downloads/twitter_media_harvest`
pub fn default_input_dir(home: &Path) -> PathBuf {
    DEFAULT_INPUT_SUBPATH
        .iter()
        .fold(home.to_path_buf(), |dir, part| dir.join(part))
}

/// `<input>/output`
pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    input_dir.join(DEFAULT_OUTPUT_DIR_NAME)
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}
