use crate::model::{ArtifactKind, ArtifactSet, InputCollection, PipelineSettings, ViewSettings};

use super::JobDescriptor;

/// Unset slots become empty strings; empty `xres`/`yres` fall back to `target_res`.
pub fn assemble(
    inputs: &InputCollection,
    artifacts: &ArtifactSet,
    view: &ViewSettings,
    settings: &PipelineSettings,
) -> JobDescriptor {
    JobDescriptor {
        radiance_path: settings.radiance_path.clone(),
        hdrgen_path: settings.hdrgen_path.clone(),
        output_path: settings.output_path.clone(),
        temp_path: settings.temp_path.clone(),
        input_images: inputs
            .device_paths()
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect(),
        response_function: slot_value(artifacts, ArtifactKind::Response),
        fisheye_correction_cal: slot_value(artifacts, ArtifactKind::Fisheye),
        vignetting_correction_cal: slot_value(artifacts, ArtifactKind::Vignetting),
        photometric_adjustment_cal: slot_value(artifacts, ArtifactKind::CalibrationFactor),
        neutral_density_cal: slot_value(artifacts, ArtifactKind::NeutralDensity),
        diameter: view.diameter.clone(),
        xleft: view.xleft.clone(),
        ydown: view.ydown.clone(),
        xdim: dimension_or_target(&view.xres, &view.target_res),
        ydim: dimension_or_target(&view.yres, &view.target_res),
        vertical_angle: view.vv.clone(),
        horizontal_angle: view.vh.clone(),
    }
}

fn slot_value(artifacts: &ArtifactSet, kind: ArtifactKind) -> String {
    artifacts
        .slot(kind)
        .path()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn dimension_or_target(explicit: &str, target: &str) -> String {
    if explicit.is_empty() {
        target.to_string()
    } else {
        explicit.to_string()
    }
}
