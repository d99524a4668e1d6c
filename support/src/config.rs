use std::fs::File;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Everything that can go wrong loading one of the flat JSON configs. Mirrors
/// the original's `Config(path)` constructor, which throws when the file is
/// missing and lets the JSON parser raise on malformed content.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {path}")]
    NotFound { path: String },

    #[error("failed to read config file {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Reads a JSON document at `path` and deserializes it into `T`. Both the
/// server's and client's config structs go through this one function, the way
/// the original's `server::Config` and `client::Config` constructors share
/// the same `boost::property_tree` read even though their field sets differ.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_reader(file).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Deserialize)]
    struct Sample {
        port: u16,
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_json::<Sample>(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn valid_json_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"port": 55555}}"#).unwrap();

        let config: Sample = load_json(&path).unwrap();
        assert_eq!(config.port, 55555);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = File::create(&path).unwrap();
        write!(file, "not json").unwrap();

        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
