use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;
use tracing::debug;

use crate::job::JobDescriptor;

use super::{DispatchError, PipelineInvoker, Result};

const MERGED_IMAGE: &str = "output1.hdr";
const NULLIFIED_IMAGE: &str = "output2.hdr";
const CROPPED_IMAGE: &str = "output3.hdr";
const RESIZED_IMAGE: &str = "output4.hdr";

/// Runs the four hdrgen/Radiance stages for one descriptor, stopping at the first failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadiancePipeline;

impl RadiancePipeline {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineInvoker for RadiancePipeline {
    async fn submit(&self, job: &JobDescriptor) -> Result<String> {
        let final_output = stage_file(job, RESIZED_IMAGE);
        for stage in stages(job) {
            run_stage(&stage).await?;
        }
        Ok(final_output.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Stage {
    pub(crate) name: &'static str,
    pub(crate) program: PathBuf,
    pub(crate) args: Vec<String>,
    pub(crate) stdout_to: Option<PathBuf>,
}

pub(crate) fn stages(job: &JobDescriptor) -> Vec<Stage> {
    let merged = stage_file(job, MERGED_IMAGE);
    let nullified = stage_file(job, NULLIFIED_IMAGE);
    let cropped = stage_file(job, CROPPED_IMAGE);
    let resized = stage_file(job, RESIZED_IMAGE);

    let mut merge_args = job.input_images.clone();
    merge_args.extend(["-o".to_string(), path_arg(&merged)]);
    if !job.response_function.is_empty() {
        merge_args.extend(["-r".to_string(), job.response_function.clone()]);
    }
    merge_args.extend(["-a", "-e", "-f", "-g"].map(String::from));

    vec![
        Stage {
            name: "merge exposures",
            program: tool_path(&job.hdrgen_path, "hdrgen"),
            args: merge_args,
            stdout_to: None,
        },
        Stage {
            name: "nullify exposure value",
            program: tool_path(&job.radiance_path, "ra_xyze"),
            args: vec!["-r".into(), "-o".into(), path_arg(&merged)],
            stdout_to: Some(nullified.clone()),
        },
        Stage {
            name: "crop",
            program: tool_path(&job.radiance_path, "pcompos"),
            args: vec![
                "-x".into(),
                job.diameter.clone(),
                "-y".into(),
                job.diameter.clone(),
                path_arg(&nullified),
                format!("-{}", job.xleft),
                format!("-{}", job.ydown),
            ],
            stdout_to: Some(cropped.clone()),
        },
        Stage {
            name: "resize",
            program: tool_path(&job.radiance_path, "pfilt"),
            args: vec![
                "-x".into(),
                job.xdim.clone(),
                "-y".into(),
                job.ydim.clone(),
                path_arg(&cropped),
            ],
            stdout_to: Some(resized),
        },
    ]
}

fn stage_file(job: &JobDescriptor, file: &str) -> PathBuf {
    Path::new(&job.temp_path).join(file)
}

fn tool_path(root: &str, tool: &str) -> PathBuf {
    Path::new(root).join(tool)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

async fn run_stage(stage: &Stage) -> Result<()> {
    debug!(
        "running {} stage: {} {}",
        stage.name,
        stage.program.display(),
        stage.args.join(" ")
    );
    let output = Command::new(&stage.program)
        .args(&stage.args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| DispatchError::Launch {
            program: stage.program.to_string_lossy().into_owned(),
            source,
        })?;
    if !output.status.success() {
        let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if detail.is_empty() {
            detail = output.status.to_string();
        }
        return Err(DispatchError::Stage {
            stage: stage.name,
            detail,
        });
    }
    if let Some(target) = &stage.stdout_to {
        fs::write(target, &output.stdout).await?;
    }
    Ok(())
}
