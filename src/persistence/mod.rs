use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::Deserialize;

use crate::core::SearchError;

const APP_NAME: &str = "ankisearch";

pub fn get_app_config_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(config_dir) => config_dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn get_config_file_path(filename: &str) -> PathBuf {
    get_app_config_dir().join(filename)
}

/// Read `path` as JSON. A missing file is not an error and yields `T::default()`.
pub fn load_json<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T, SearchError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> T {
    match load_json::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Sample = load_json(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_json::<Sample>(&path), Err(SearchError::Json(_))));
        assert_eq!(load_json_or_default::<Sample>(&path), Sample::default());
    }

    #[test]
    fn test_config_path_is_namespaced() {
        let path = get_config_file_path("settings.json");
        assert!(path.ends_with("ankisearch/settings.json"));
    }
}
