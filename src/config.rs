use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Loads a workload config from a JSON file, or its defaults when no file
/// is given. Fields missing from the file keep their default values.
pub fn load_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = match path {
        Some(path) => path,
        None => return Ok(T::default()),
    };

    let content = fs::read_to_string(path)
        .map_err(|e| (format!("couldn't read config {}", path.display()), e))?;

    Ok(serde_json::from_str(&content)
        .map_err(|e| (format!("malformed config {}", path.display()), e))?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::workload::mutilate::MutilateConfig;
    use crate::workload::specjbb::SpecjbbConfig;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_defaults_without_file() -> Result<()> {
        let config: SpecjbbConfig = load_config(None)?;
        assert_eq!(config, SpecjbbConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let path = fixture("mutilate.json");
        let config: MutilateConfig = load_config(Some(path.as_path()))?;

        assert_eq!(config.path_to_binary, "/opt/mutilate/mutilate");
        assert_eq!(config.tuning_time, Duration::from_secs(30));
        assert_eq!(config.key_size, MutilateConfig::default().key_size);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let path = fixture("no-such-config.json");
        let err = load_config::<MutilateConfig>(Some(path.as_path())).unwrap_err();
        assert!(err.message().starts_with("couldn't read config "));
    }

    #[test]
    fn test_malformed_file() {
        let path = fixture("mutilate.stdout");
        let err = load_config::<MutilateConfig>(Some(path.as_path())).unwrap_err();
        assert!(err.message().starts_with("malformed config "));
    }
}
