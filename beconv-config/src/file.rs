use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "beconv.toml";

/// A parsed beconv.toml and where it was read from.
#[derive(Debug)]
pub struct BeconvToml {
    path: PathBuf,
    config: Config,
}

impl BeconvToml {
    /// Open and parse a beconv.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, config })
    }

    /// Open `dir/beconv.toml` if it exists.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::open(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[convert]\nsuffix = \"Dto\"\n").unwrap();

        let file = BeconvToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.into_config().suffix, "Dto");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = BeconvToml::open(temp.path().join("nope.toml")).unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert!(BeconvToml::discover(temp.path()).unwrap().is_none());

        fs::write(temp.path().join(CONFIG_FILE_NAME), "[convert]\nmarker = \"Api\"\n").unwrap();
        let config = BeconvToml::discover(temp.path())
            .unwrap()
            .expect("config file")
            .into_config();

        assert_eq!(config.marker, "Api");
    }
}
