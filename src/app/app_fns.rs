use std::{
    error::Error,
    io::BufWriter,
    path::{Path, PathBuf},
    process::Command,
};

use rayon::prelude::*;
use serde::Serialize;

use super::app_cfg::AppCfg;
use crate::{
    app::*,
    library::{
        check_line_geometry, compose, composite_dimensions_of, line_offsets, CompositeCfg, RgbImgBuf,
    },
};

const PREVIEW_FILE_NAME: &str = "hline_concat_preview.png";

#[derive(Debug, Clone, Serialize)]
pub struct CompositeSummary<'a> {
    pub inputs: &'a [PathBuf],
    pub output: Option<&'a Path>,
    pub width: u32,
    pub height: u32,
    pub line_interval: u32,
    pub line_offsets: Vec<u32>,
}

pub fn run_app() -> i32 {
    //Parse arguments and bail early if there is an error.
    let cfg = match parse_args() {
        Ok(cfg) => {
            configure_logs(cfg.output_cfg.verbosity);
            cfg
        }
        Err(fatal) => {
            //The logger is configured from the parsed arguments, so if parsing failed it has to be
            //started here before the error can be reported.
            configure_logs(ReportVerbosity::Verbose);
            print_fatal_err(&fatal, ReportVerbosity::Verbose);
            return 1;
        }
    };

    match run_app_inner(&cfg) {
        Ok(()) => 0,
        Err(fatal_error) => {
            print_fatal_err(&fatal_error, cfg.output_cfg.verbosity);
            1
        }
    }
}

pub(super) fn run_app_inner(cfg: &AppCfg) -> Result<(), AppError> {
    let image_paths = &cfg.input_cfg.image_paths;
    let composite_cfg = &cfg.composite_cfg;
    let output_cfg = &cfg.output_cfg;

    if image_paths.len() == 1 && composite_cfg.interval > 0 {
        warn!("--interval is only used when two images are given. Ignoring it.");
    }

    if output_cfg.output_path.is_none() && !output_cfg.show && !output_cfg.json_output {
        warn!("Writing is disabled and --show was not given. The composite will be discarded.");
    }

    //Check the line geometry from the image headers alone, so that a bad combination of
    //--number and --line-width is reported before any image is decoded or written.
    let (width, height) = probe_composite_dimensions(image_paths, composite_cfg)?;
    let line_interval = check_line_geometry(height, composite_cfg)?;
    debug!(
        "Composite will be {}x{}, lines every {} pixels",
        width, height, line_interval
    );

    let images = load_images(image_paths)?;
    let composite = compose(&images, composite_cfg)?;

    if let Some(output_path) = &output_cfg.output_path {
        info!("Writing composite to {}", output_path.display());
        composite
            .save(output_path)
            .map_err(|e| AppError::WriteOutput(output_path.clone(), e))?;
    }

    if output_cfg.json_output {
        let summary = CompositeSummary {
            inputs: image_paths,
            output: output_cfg.output_path.as_deref(),
            width: composite.width(),
            height: composite.height(),
            line_interval,
            line_offsets: line_offsets(composite.height(), composite_cfg)?,
        };
        print_summary(&summary)?;
    }

    if output_cfg.show {
        show_image(&composite)?;
    }

    Ok(())
}

pub fn probe_composite_dimensions(
    image_paths: &[PathBuf],
    composite_cfg: &CompositeCfg,
) -> Result<(u32, u32), AppError> {
    let dimensions = image_paths
        .iter()
        .map(|path| {
            image::image_dimensions(path).map_err(|e| AppError::InputProbe(path.clone(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let dimensions = composite_dimensions_of(dimensions, composite_cfg.interval)?;
    Ok(dimensions)
}

//Decoding large camera frames is slow, so decode both at once.
pub fn load_images(image_paths: &[PathBuf]) -> Result<Vec<RgbImgBuf>, AppError> {
    image_paths
        .par_iter()
        .map(|path| {
            trace!("Decoding {}", path.display());
            image::open(path)
                .map(|img| img.into_rgb8())
                .map_err(|e| AppError::InputDecode(path.clone(), e))
        })
        .collect()
}

fn print_summary(summary: &CompositeSummary) -> Result<(), AppError> {
    let stdout = BufWriter::new(std::io::stdout());
    serde_json::to_writer_pretty(stdout, summary)?;
    println!();
    Ok(())
}

//Save a png copy to the temp dir and hand it to whatever the desktop uses to open images.
fn show_image(composite: &RgbImgBuf) -> Result<(), AppError> {
    let preview_path = std::env::temp_dir().join(PREVIEW_FILE_NAME);
    composite
        .save(&preview_path)
        .map_err(|e| AppError::WriteOutput(preview_path.clone(), e))?;

    info!("Opening {}", preview_path.display());

    let status = viewer_command(&preview_path)
        .status()
        .map_err(|e| AppError::ShowImage(e.to_string()))?;

    if !status.success() {
        return Err(AppError::ShowImage(format!("image viewer exited with {}", status)));
    }

    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(&["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

fn print_fatal_err(fatal_err: &AppError, verbosity: ReportVerbosity) {
    error!(target: "app-errorlog", "{}", fatal_err);

    if verbosity == ReportVerbosity::Verbose {
        let mut source: Option<&(dyn Error + 'static)> = fatal_err.source();
        while let Some(e) = source {
            error!(target: "app-errorlog", "    caused by: {}", e);
            source = e.source();
        }
    }

    if fatal_err.is_input_error() {
        error!(target: "app-errorlog", "Check the paths given to --file.");
    }
}

pub fn configure_logs(verbosity: ReportVerbosity) {
    use simplelog::*;

    let mut cfg = simplelog::ConfigBuilder::new();

    let min_loglevel = match verbosity {
        ReportVerbosity::Quiet => LevelFilter::Warn,
        ReportVerbosity::Default => LevelFilter::Info,
        ReportVerbosity::Verbose => LevelFilter::Trace,
    };

    TermLogger::init(
        min_loglevel,
        cfg.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("TermLogger failed to initialize");
}
