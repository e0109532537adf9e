use crate::name::FqName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scan parameters a host pins down once per generator pairing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    /// Root namespace the generator emits hints under
    pub package: Option<FqName>,
    /// Generating annotation to re-check on resolved references
    pub annotation: Option<FqName>,
    /// Target scope identity
    pub scope: Option<FqName>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("hintscan.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ScanConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ScanConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ScanConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
