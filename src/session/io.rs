use std::fs;
use std::path::Path;

use crate::model::PipelineSettings;

use super::Result;

pub fn load_settings(path: impl AsRef<Path>) -> Result<PipelineSettings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let settings = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<PipelineSettings>(&raw)?
    } else {
        serde_json::from_str::<PipelineSettings>(&raw)?
    };
    Ok(settings)
}

pub fn save_settings(path: impl AsRef<Path>, settings: &PipelineSettings) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let serialized = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::to_string(settings)?
    } else {
        serde_json::to_string_pretty(settings)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
