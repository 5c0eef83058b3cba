use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "hdrcal",
    version,
    about = "HDR image generation job configuration and dispatch"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Builds one generation job from flags and dispatches it.
    Run {
        /// Exposure image to merge, in capture order. Repeatable.
        #[arg(long = "image")]
        images: Vec<PathBuf>,
        /// Capture directory for batch processing. Repeatable.
        #[arg(long = "input-dir")]
        input_dirs: Vec<PathBuf>,
        /// Camera response function file.
        #[arg(long)]
        response: Option<PathBuf>,
        /// Fisheye correction calibration file.
        #[arg(long)]
        fisheye: Option<PathBuf>,
        /// Vignetting correction calibration file.
        #[arg(long)]
        vignetting: Option<PathBuf>,
        /// Neutral density correction calibration file.
        #[arg(long)]
        neutral_density: Option<PathBuf>,
        /// Calibration factor correction file.
        #[arg(long)]
        calibration_factor: Option<PathBuf>,
        #[command(flatten)]
        view: ViewArgs,
        #[command(flatten)]
        settings: SettingsArgs,
        /// Print the assembled job instead of dispatching it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Selects inputs through native file dialogs, then dispatches.
    Pick {
        #[command(flatten)]
        view: ViewArgs,
        #[command(flatten)]
        settings: SettingsArgs,
        /// Print the assembled job instead of dispatching it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Writes the default pipeline settings file (YAML or JSON by extension).
    InitSettings { path: PathBuf },
}

#[derive(Debug, Args)]
pub(super) struct ViewArgs {
    /// Fisheye view diameter in pixels.
    #[arg(long, default_value = "")]
    pub(super) diameter: String,
    /// X of the lower-left corner of the circumscribed square, in pixels.
    #[arg(long, default_value = "")]
    pub(super) xleft: String,
    /// Y of the lower-left corner of the circumscribed square, in pixels.
    #[arg(long, default_value = "")]
    pub(super) ydown: String,
    /// Vertical view angle in degrees.
    #[arg(long, default_value = "")]
    pub(super) vv: String,
    /// Horizontal view angle in degrees.
    #[arg(long, default_value = "")]
    pub(super) vh: String,
    /// Output resolution used when --xres/--yres are not given.
    #[arg(long, default_value = "1000")]
    pub(super) target_res: String,
    /// Explicit output width in pixels.
    #[arg(long, default_value = "")]
    pub(super) xres: String,
    /// Explicit output height in pixels.
    #[arg(long, default_value = "")]
    pub(super) yres: String,
}

#[derive(Debug, Args)]
pub(super) struct SettingsArgs {
    /// Settings file (YAML or JSON); the flags below override its values.
    #[arg(long)]
    pub(super) settings: Option<PathBuf>,
    /// Directory holding the Radiance binaries.
    #[arg(long)]
    pub(super) radiance_path: Option<String>,
    /// Directory holding the hdrgen binary.
    #[arg(long)]
    pub(super) hdrgen_path: Option<String>,
    /// Destination directory for generated images.
    #[arg(long)]
    pub(super) output_path: Option<String>,
    /// Scratch directory for intermediate images.
    #[arg(long)]
    pub(super) temp_path: Option<String>,
}
