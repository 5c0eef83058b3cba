use std::path::{Path, PathBuf};

use super::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Response,
    Fisheye,
    Vignetting,
    NeutralDensity,
    CalibrationFactor,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Response,
        ArtifactKind::Fisheye,
        ArtifactKind::Vignetting,
        ArtifactKind::NeutralDensity,
        ArtifactKind::CalibrationFactor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Response => "response function",
            ArtifactKind::Fisheye => "fisheye correction",
            ArtifactKind::Vignetting => "vignetting correction",
            ArtifactKind::NeutralDensity => "neutral density correction",
            ArtifactKind::CalibrationFactor => "calibration factor correction",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSlot {
    path: Option<PathBuf>,
}

impl ArtifactSlot {
    pub fn select(&mut self, selection: &Selection) {
        if let Some(path) = selection.first_path() {
            self.path = Some(path.to_path_buf());
        }
    }

    pub fn clear(&mut self) {
        self.path = None;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSet {
    response: ArtifactSlot,
    fisheye: ArtifactSlot,
    vignetting: ArtifactSlot,
    neutral_density: ArtifactSlot,
    calibration_factor: ArtifactSlot,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, kind: ArtifactKind) -> &ArtifactSlot {
        match kind {
            ArtifactKind::Response => &self.response,
            ArtifactKind::Fisheye => &self.fisheye,
            ArtifactKind::Vignetting => &self.vignetting,
            ArtifactKind::NeutralDensity => &self.neutral_density,
            ArtifactKind::CalibrationFactor => &self.calibration_factor,
        }
    }

    pub fn slot_mut(&mut self, kind: ArtifactKind) -> &mut ArtifactSlot {
        match kind {
            ArtifactKind::Response => &mut self.response,
            ArtifactKind::Fisheye => &mut self.fisheye,
            ArtifactKind::Vignetting => &mut self.vignetting,
            ArtifactKind::NeutralDensity => &mut self.neutral_density,
            ArtifactKind::CalibrationFactor => &mut self.calibration_factor,
        }
    }

    pub fn select(&mut self, kind: ArtifactKind, selection: &Selection) {
        self.slot_mut(kind).select(selection);
    }

    pub fn clear(&mut self, kind: ArtifactKind) {
        self.slot_mut(kind).clear();
    }
}
