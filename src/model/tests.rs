use std::path::{Path, PathBuf};

use super::{
    ArtifactKind, ArtifactSet, InputCollection, PipelineSettings, Selection, SettingsField,
    StoreError, ViewField, ViewSettings, display_handle, resolve_selection,
};

fn multi(paths: &[&str]) -> Selection {
    Selection::Multiple(paths.iter().map(PathBuf::from).collect())
}

#[test]
fn parallel_sequences_stay_aligned() {
    let mut inputs = InputCollection::new();
    inputs.add_many(&multi(&[
        "/captures/a.jpg",
        "/captures/b.jpg",
        "/captures/c.jpg",
    ]));
    assert!(inputs.is_aligned());
    assert_eq!(inputs.len(), 3);

    inputs.add_many(&Selection::Single(PathBuf::from("/captures/d.jpg")));
    assert!(inputs.is_aligned());
    assert_eq!(inputs.len(), 4);

    inputs.remove_at(1).expect("index in range");
    assert!(inputs.is_aligned());
    assert_eq!(inputs.names(), &["a.jpg", "c.jpg", "d.jpg"]);
    assert_eq!(
        inputs.display_handles()[0],
        "asset://localhost/%2Fcaptures%2Fa.jpg"
    );
}

#[test]
fn addition_preserves_selection_order() {
    let mut inputs = InputCollection::new();
    inputs.add_many(&multi(&["/e/a.jpg", "/e/b.jpg", "/e/c.jpg"]));
    inputs.add_many(&multi(&["/e/d.jpg"]));
    let device_paths = inputs
        .device_paths()
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(device_paths, ["/e/a.jpg", "/e/b.jpg", "/e/c.jpg", "/e/d.jpg"]);
}

#[test]
fn readding_a_path_duplicates_it() {
    let mut inputs = InputCollection::new();
    inputs.add_many(&multi(&["/e/a.jpg"]));
    inputs.add_many(&multi(&["/e/a.jpg"]));
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs.device_paths()[0], inputs.device_paths()[1]);
}

#[test]
fn out_of_range_removal_is_rejected() {
    let mut inputs = InputCollection::new();
    inputs.add_many(&multi(&["/e/a.jpg"]));
    let error = inputs.remove_at(5).expect_err("index out of range");
    assert_eq!(error, StoreError::IndexOutOfBounds { index: 5, len: 1 });
    assert_eq!(inputs.len(), 1);
}

#[test]
fn cancelled_selection_adds_nothing() {
    let mut inputs = InputCollection::new();
    inputs.add_many(&multi(&["/e/a.jpg"]));
    let before = inputs.clone();
    inputs.add_many(&Selection::Cancelled);
    assert_eq!(inputs, before);
}

#[test]
fn slot_replaces_on_new_selection() {
    let mut artifacts = ArtifactSet::new();
    artifacts.select(
        ArtifactKind::Response,
        &Selection::Single("/cal/a.rsp".into()),
    );
    artifacts.select(
        ArtifactKind::Response,
        &Selection::Single("/cal/b.rsp".into()),
    );
    assert_eq!(
        artifacts.slot(ArtifactKind::Response).path(),
        Some(Path::new("/cal/b.rsp"))
    );

    artifacts.clear(ArtifactKind::Response);
    assert!(artifacts.slot(ArtifactKind::Response).is_empty());
}

#[test]
fn slot_keeps_first_of_many() {
    let mut artifacts = ArtifactSet::new();
    artifacts.select(
        ArtifactKind::Fisheye,
        &multi(&["/cal/x.cal", "/cal/y.cal", "/cal/z.cal"]),
    );
    assert_eq!(
        artifacts.slot(ArtifactKind::Fisheye).path(),
        Some(Path::new("/cal/x.cal"))
    );
}

#[test]
fn cancelled_selection_leaves_slot_untouched() {
    let mut artifacts = ArtifactSet::new();
    artifacts.select(
        ArtifactKind::Vignetting,
        &Selection::Single("/cal/v.cal".into()),
    );
    let before = artifacts.clone();
    artifacts.select(ArtifactKind::Vignetting, &Selection::Cancelled);
    assert_eq!(artifacts, before);
}

#[test]
fn first_path_follows_single_slot_policy() {
    assert_eq!(Selection::Cancelled.first_path(), None);
    assert_eq!(
        Selection::Single(PathBuf::from("/a.cal")).first_path(),
        Some(Path::new("/a.cal"))
    );
    assert_eq!(
        multi(&["/a.cal", "/b.cal"]).first_path(),
        Some(Path::new("/a.cal"))
    );
}

#[test]
fn selection_length_counts_paths() {
    assert!(Selection::Cancelled.is_empty());
    assert_eq!(Selection::Single(PathBuf::from("/a.jpg")).len(), 1);
    assert_eq!(multi(&["/a.jpg", "/b.jpg"]).len(), 2);
}

#[test]
fn resolver_maps_every_entry() {
    let resolved = resolve_selection(&multi(&["/captures/a b.jpg", "/captures/c.jpg"]));
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].device_path, PathBuf::from("/captures/a b.jpg"));
    assert_eq!(
        resolved[0].display_handle,
        "asset://localhost/%2Fcaptures%2Fa%20b.jpg"
    );
    assert_eq!(
        resolved[1].display_handle,
        "asset://localhost/%2Fcaptures%2Fc.jpg"
    );
    assert!(resolve_selection(&Selection::Cancelled).is_empty());
}

#[test]
fn display_handles_percent_encode_reserved_characters() {
    assert_eq!(
        display_handle(Path::new("/captures/über+light #2.jpg")),
        "asset://localhost/%2Fcaptures%2F%C3%BCber%2Blight%20%232.jpg"
    );
    assert_eq!(
        display_handle(Path::new("/captures/50%&q=?.jpg")),
        "asset://localhost/%2Fcaptures%2F50%25%26q%3D%3F.jpg"
    );
    assert_eq!(
        display_handle(Path::new(r"shots\a.jpg")),
        "asset://localhost/shots%5Ca.jpg"
    );
}

#[test]
fn view_fields_set_by_documented_name() {
    let mut view = ViewSettings::default();
    assert_eq!(view.target_res, "1000");

    view.set_named("diameter", "1460").expect("known field");
    view.set_named("targetRes", "1200").expect("known field");
    assert_eq!(view.get(ViewField::Diameter), "1460");
    assert_eq!(view.get(ViewField::TargetRes), "1200");

    let error = view.set_named("bogus", "1").expect_err("unknown field");
    assert_eq!(error, StoreError::UnknownViewField("bogus".to_string()));
}

#[test]
fn settings_defaults_and_named_edits() {
    let mut settings = PipelineSettings::default();
    assert_eq!(settings.radiance_path, "/usr/local/radiance/bin/");
    assert_eq!(settings.hdrgen_path, "/usr/local/bin/");
    assert_eq!(settings.output_path, "/home/hdri-app/");
    assert_eq!(settings.temp_path, "/tmp/");

    settings
        .set_named("hdrgenPath", "/opt/hdrgen/bin/")
        .expect("known field");
    assert_eq!(settings.get(SettingsField::HdrgenPath), "/opt/hdrgen/bin/");
    assert!(settings.set_named("nope", "x").is_err());
}
