use serde::{Deserialize, Serialize};

/// Serializes to the flat camelCase key set the external pipeline expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptor {
    pub radiance_path: String,
    pub hdrgen_path: String,
    pub output_path: String,
    pub temp_path: String,
    pub input_images: Vec<String>,
    pub response_function: String,
    pub fisheye_correction_cal: String,
    pub vignetting_correction_cal: String,
    pub photometric_adjustment_cal: String,
    pub neutral_density_cal: String,
    pub diameter: String,
    pub xleft: String,
    pub ydown: String,
    pub xdim: String,
    pub ydim: String,
    pub vertical_angle: String,
    pub horizontal_angle: String,
}
