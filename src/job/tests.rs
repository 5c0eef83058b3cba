use std::path::PathBuf;

use serde_json::Value;

use crate::model::{
    ArtifactKind, ArtifactSet, InputCollection, PipelineSettings, Selection, ViewSettings,
};

use super::{JobDescriptor, assemble};

const WIRE_KEYS: [&str; 17] = [
    "radiancePath",
    "hdrgenPath",
    "outputPath",
    "tempPath",
    "inputImages",
    "responseFunction",
    "fisheyeCorrectionCal",
    "vignettingCorrectionCal",
    "photometricAdjustmentCal",
    "neutralDensityCal",
    "diameter",
    "xleft",
    "ydown",
    "xdim",
    "ydim",
    "verticalAngle",
    "horizontalAngle",
];

fn empty_state() -> (
    InputCollection,
    ArtifactSet,
    ViewSettings,
    PipelineSettings,
) {
    (
        InputCollection::new(),
        ArtifactSet::new(),
        ViewSettings::default(),
        PipelineSettings::default(),
    )
}

#[test]
fn descriptor_always_carries_every_wire_key() {
    let (inputs, artifacts, view, settings) = empty_state();
    let descriptor = assemble(&inputs, &artifacts, &view, &settings);
    let value = serde_json::to_value(&descriptor).expect("serialize descriptor");
    let object = value.as_object().expect("flat object");

    assert_eq!(object.len(), WIRE_KEYS.len());
    for key in WIRE_KEYS {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object["responseFunction"], Value::String(String::new()));
    assert_eq!(
        object["vignettingCorrectionCal"],
        Value::String(String::new())
    );
    assert_eq!(object["inputImages"], Value::Array(Vec::new()));
}

#[test]
fn target_res_seeds_output_dimensions() {
    let (inputs, artifacts, view, settings) = empty_state();
    let descriptor = assemble(&inputs, &artifacts, &view, &settings);
    assert_eq!(descriptor.xdim, "1000");
    assert_eq!(descriptor.ydim, "1000");
}

#[test]
fn explicit_resolution_overrides_target() {
    let (inputs, artifacts, mut view, settings) = empty_state();
    view.xres = "2048".to_string();
    let descriptor = assemble(&inputs, &artifacts, &view, &settings);
    assert_eq!(descriptor.xdim, "2048");
    assert_eq!(descriptor.ydim, "1000");
}

#[test]
fn end_to_end_descriptor_matches_selected_state() {
    let (mut inputs, mut artifacts, mut view, settings) = empty_state();
    inputs.add_many(&Selection::Multiple(vec![
        PathBuf::from("/captures/e1.jpg"),
        PathBuf::from("/captures/e2.jpg"),
    ]));
    artifacts.select(
        ArtifactKind::Response,
        &Selection::Single("/cal/camera.rsp".into()),
    );
    artifacts.select(
        ArtifactKind::Fisheye,
        &Selection::Single("/cal/fisheye.cal".into()),
    );
    view.diameter = "1460".into();
    view.xleft = "750".into();
    view.ydown = "730".into();
    view.vv = "180".into();
    view.vh = "180".into();

    let descriptor = assemble(&inputs, &artifacts, &view, &settings);
    assert_eq!(
        descriptor.input_images,
        ["/captures/e1.jpg", "/captures/e2.jpg"]
    );
    assert_eq!(descriptor.response_function, "/cal/camera.rsp");
    assert_eq!(descriptor.fisheye_correction_cal, "/cal/fisheye.cal");
    assert_eq!(descriptor.vignetting_correction_cal, "");
    assert_eq!(descriptor.photometric_adjustment_cal, "");
    assert_eq!(descriptor.neutral_density_cal, "");
    assert_eq!(descriptor.radiance_path, "/usr/local/radiance/bin/");
    assert_eq!(descriptor.xdim, "1000");
    assert_eq!(descriptor.ydim, "1000");
    assert_eq!(descriptor.vertical_angle, "180");
    descriptor.validate().expect("numeric fields all parse");
}

#[test]
fn validation_lists_every_offending_field() {
    let (inputs, artifacts, mut view, settings) = empty_state();
    view.diameter = "wide".into();
    view.vv = "180".into();

    let descriptor = assemble(&inputs, &artifacts, &view, &settings);
    let error = descriptor.validate().expect_err("non-numeric fields");
    let fields = error
        .fields
        .iter()
        .map(|invalid| invalid.field)
        .collect::<Vec<_>>();
    assert_eq!(fields, ["diameter", "xleft", "ydown", "horizontalAngle"]);
    assert_eq!(error.fields[0].value, "wide");

    let message = error.to_string();
    assert!(message.contains("diameter"));
    assert!(message.contains("horizontalAngle"));
}

#[test]
fn descriptor_roundtrips_through_json() {
    let (mut inputs, artifacts, view, settings) = empty_state();
    inputs.add_many(&Selection::Single(PathBuf::from("/captures/e1.jpg")));
    let descriptor = assemble(&inputs, &artifacts, &view, &settings);
    let serialized = serde_json::to_string_pretty(&descriptor).expect("serialize descriptor");
    let restored: JobDescriptor = serde_json::from_str(&serialized).expect("deserialize descriptor");
    assert_eq!(restored, descriptor);
}
