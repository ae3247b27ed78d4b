//! CLI command handlers.
//!
//! The headless drive is the same core loop the TUI runs, minus the
//! cooperative wait: play, then tick / capture / record for a fixed number
//! of cycles. Printing is kept out of [`drive_headless`] so the loop is
//! testable.

use std::path::Path;
use std::process::ExitCode;

use crate::config::SimConfig;
use crate::controller::AnimationController;
use crate::error::TransitResult;
use crate::frame::FrameSnapshot;

use super::output::{
    print_frame_header, print_frame_row, print_help, print_run_summary, print_validation_ok,
    print_version,
};
use super::{Args, Command};

/// Embedded default configuration, used when no path is given.
const DEFAULT_CONFIG_YAML: &str = include_str!("../../configs/earth_venus.yaml");

/// A contiguous stretch of simulated time with the transit flag raised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitWindow {
    /// Effective time at which the flag came up (days).
    pub start_days: f64,
    /// Effective time of the last flagged frame (days).
    pub end_days: f64,
}

/// Result of a headless drive.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Every captured frame, one per tick.
    pub frames: Vec<FrameSnapshot>,
    /// Transit windows observed during the run.
    pub windows: Vec<TransitWindow>,
    /// Final simulated time (days).
    pub final_time_days: f64,
}

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            ticks,
            speed_override,
        } => run_animation(config_path.as_deref(), ticks, speed_override),
        Command::Validate { config_path } => validate_config(&config_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Drive the animation for a fixed number of ticks and collect the frames.
///
/// Builds the session exactly as the TUI does: bodies and controller from
/// the configuration, `play()`, then one tick and one frame capture per
/// cycle.
///
/// # Errors
///
/// Returns a configuration error if the configuration is invalid.
pub fn drive_headless(config: &SimConfig, ticks: u64) -> TransitResult<RunReport> {
    let (earth, venus) = config.build_bodies()?;
    let mut controller = AnimationController::with_time_step(config.animation.time_step_days)?;
    let speed = config.animation.speed_multiplier;

    controller.play();

    let mut frames = Vec::with_capacity(ticks as usize);
    let mut windows: Vec<TransitWindow> = Vec::new();
    let mut open: Option<TransitWindow> = None;

    for _ in 0..ticks {
        controller.tick();
        let frame = FrameSnapshot::capture(&earth, &venus, &controller, speed);

        if frame.transiting {
            let t = frame.effective_time_days;
            open = Some(open.map_or(
                TransitWindow {
                    start_days: t,
                    end_days: t,
                },
                |w| TransitWindow {
                    start_days: w.start_days,
                    end_days: t,
                },
            ));
        } else if let Some(w) = open.take() {
            windows.push(w);
        }

        frames.push(frame);
    }

    if let Some(w) = open {
        windows.push(w);
    }

    Ok(RunReport {
        final_time_days: controller.time_days(),
        frames,
        windows,
    })
}

/// Run the animation headlessly and print a frame table plus summary.
#[must_use]
fn run_animation(config_path: Option<&Path>, ticks: u64, speed_override: Option<f64>) -> ExitCode {
    let loaded = match config_path {
        Some(path) => SimConfig::load(path),
        None => SimConfig::from_yaml(DEFAULT_CONFIG_YAML),
    };

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(speed) = speed_override {
        config.animation.speed_multiplier = speed;
        if let Err(e) = config.ensure_valid() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let report = match drive_headless(&config, ticks) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Keep the table readable for long runs.
    let stride = report.frames.len().div_ceil(24).max(1);

    print_frame_header();
    for frame in report.frames.iter().step_by(stride) {
        print_frame_row(frame);
    }
    print_run_summary(&report, config.animation.speed_multiplier);

    ExitCode::SUCCESS
}

/// Load and validate a configuration file, reporting the outcome.
#[must_use]
fn validate_config(path: &Path) -> ExitCode {
    match SimConfig::load(path) {
        Ok(config) => {
            print_validation_ok(path, &config);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
