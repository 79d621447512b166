use std::fs::File;
use std::io::{ BufReader, ErrorKind };
use std::path::{ Path, PathBuf };

use serde::Deserialize;
use tracing::{ debug, info };

use crate::errors::AppError;
use crate::password::CharacterClasses;

/// Form defaults read from `generator.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub length: Option<usize>,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        let classes = CharacterClasses::reset_defaults();
        Self {
            length: None,
            lowercase: classes.lowercase,
            uppercase: classes.uppercase,
            numbers: classes.numbers,
            symbols: classes.symbols,
        }
    }
}

impl Config {
    const DIR_NAME: &str = "oktopass";
    const FILE_NAME: &str = "generator.json";

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::DIR_NAME).join(Self::FILE_NAME))
    }

    /// Loads the config at `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| AppError::Config { path: path.to_path_buf(), source })?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn classes(&self) -> CharacterClasses {
        CharacterClasses {
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }

    pub fn length_input(&self) -> String {
        self.length.map(|l| l.to_string()).unwrap_or_default()
    }
}
