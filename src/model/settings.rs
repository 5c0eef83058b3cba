use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StoreError;

pub const DEFAULT_RADIANCE_PATH: &str = "/usr/local/radiance/bin/";
pub const DEFAULT_HDRGEN_PATH: &str = "/usr/local/bin/";
pub const DEFAULT_OUTPUT_PATH: &str = "/home/hdri-app/";
pub const DEFAULT_TEMP_PATH: &str = "/tmp/";

/// Filesystem roots for the external tools; images land under `temp_path`, not `output_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineSettings {
    pub radiance_path: String,
    pub hdrgen_path: String,
    pub output_path: String,
    pub temp_path: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            radiance_path: DEFAULT_RADIANCE_PATH.to_string(),
            hdrgen_path: DEFAULT_HDRGEN_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            temp_path: DEFAULT_TEMP_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    RadiancePath,
    HdrgenPath,
    OutputPath,
    TempPath,
}

impl FromStr for SettingsField {
    type Err = StoreError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "radiancePath" => Ok(SettingsField::RadiancePath),
            "hdrgenPath" => Ok(SettingsField::HdrgenPath),
            "outputPath" => Ok(SettingsField::OutputPath),
            "tempPath" => Ok(SettingsField::TempPath),
            other => Err(StoreError::UnknownSettingsField(other.to_string())),
        }
    }
}

impl PipelineSettings {
    pub fn get(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::RadiancePath => &self.radiance_path,
            SettingsField::HdrgenPath => &self.hdrgen_path,
            SettingsField::OutputPath => &self.output_path,
            SettingsField::TempPath => &self.temp_path,
        }
    }

    pub fn set(&mut self, field: SettingsField, value: impl Into<String>) {
        let slot = match field {
            SettingsField::RadiancePath => &mut self.radiance_path,
            SettingsField::HdrgenPath => &mut self.hdrgen_path,
            SettingsField::OutputPath => &mut self.output_path,
            SettingsField::TempPath => &mut self.temp_path,
        };
        *slot = value.into();
    }

    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> super::Result<()> {
        self.set(name.parse::<SettingsField>()?, value);
        Ok(())
    }
}
