use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::dialog::{FilePicker, NativePicker, PickRequest};
use crate::dispatch::{Dispatcher, RadiancePipeline};
use crate::model::{ArtifactKind, PipelineSettings, Selection, ViewSettings};
use crate::session::{Session, load_settings, save_settings};

use super::types::{Cli, Commands, SettingsArgs, ViewArgs};

pub async fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            images,
            input_dirs,
            response,
            fisheye,
            vignetting,
            neutral_density,
            calibration_factor,
            view,
            settings,
            dry_run,
        } => {
            let mut session = session_with_settings(&settings)?;
            *session.view_mut() = view_settings(&view);
            session.add_inputs(&selection_from(images));
            session.add_inputs(&selection_from(input_dirs));
            apply_artifact(&mut session, ArtifactKind::Response, response);
            apply_artifact(&mut session, ArtifactKind::Fisheye, fisheye);
            apply_artifact(&mut session, ArtifactKind::Vignetting, vignetting);
            apply_artifact(&mut session, ArtifactKind::NeutralDensity, neutral_density);
            apply_artifact(
                &mut session,
                ArtifactKind::CalibrationFactor,
                calibration_factor,
            );
            finish(session, dry_run).await
        }
        Commands::Pick {
            view,
            settings,
            dry_run,
        } => {
            let mut session = session_with_settings(&settings)?;
            *session.view_mut() = view_settings(&view);

            let picker = NativePicker::new();
            info!("select exposure images (cancel to skip)");
            session.add_inputs(&picker.pick(&PickRequest::exposure_images()));
            info!("select capture directories for batch processing (cancel to skip)");
            session.add_inputs(&picker.pick(&PickRequest::batch_directories()));
            for kind in ArtifactKind::ALL {
                info!("select {} file (cancel to skip)", kind.label());
                let selection = picker.pick(&PickRequest::calibration_file());
                if selection.is_cancelled() {
                    info!("{} slot left empty", kind.label());
                } else {
                    session.select_artifact(kind, &selection);
                }
            }
            finish(session, dry_run).await
        }
        Commands::InitSettings { path } => {
            save_settings(&path, &PipelineSettings::default())
                .map_err(|error| error.to_string())?;
            println!("wrote default settings to {}", path.display());
            Ok(())
        }
    }
}

fn session_with_settings(args: &SettingsArgs) -> Result<Session, String> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path).map_err(|error| error.to_string())?,
        None => PipelineSettings::default(),
    };
    if let Some(radiance_path) = &args.radiance_path {
        settings.radiance_path = radiance_path.clone();
    }
    if let Some(hdrgen_path) = &args.hdrgen_path {
        settings.hdrgen_path = hdrgen_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        settings.output_path = output_path.clone();
    }
    if let Some(temp_path) = &args.temp_path {
        settings.temp_path = temp_path.clone();
    }
    Ok(Session::with_settings(settings))
}

fn view_settings(args: &ViewArgs) -> ViewSettings {
    ViewSettings {
        xres: args.xres.clone(),
        yres: args.yres.clone(),
        diameter: args.diameter.clone(),
        xleft: args.xleft.clone(),
        ydown: args.ydown.clone(),
        vv: args.vv.clone(),
        vh: args.vh.clone(),
        target_res: args.target_res.clone(),
    }
}

fn selection_from(paths: Vec<PathBuf>) -> Selection {
    if paths.is_empty() {
        Selection::Cancelled
    } else {
        Selection::Multiple(paths)
    }
}

fn apply_artifact(session: &mut Session, kind: ArtifactKind, path: Option<PathBuf>) {
    if let Some(path) = path {
        session.select_artifact(kind, &Selection::Single(path));
    }
}

async fn finish(session: Session, dry_run: bool) -> Result<(), String> {
    if dry_run {
        let descriptor = session.assemble();
        println!(
            "{}",
            serde_json::to_string_pretty(&descriptor).map_err(|error| error.to_string())?
        );
        return Ok(());
    }
    let dispatcher = Dispatcher::new(Arc::new(RadiancePipeline::new()));
    let payload = session
        .generate(&dispatcher)
        .await
        .map_err(|error| error.to_string())?;
    println!("{payload}");
    Ok(())
}
