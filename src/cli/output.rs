//! CLI output formatting.

use std::path::Path;

use crate::config::SimConfig;
use crate::frame::FrameSnapshot;

use super::commands::RunReport;

/// Print version information.
pub fn print_version() {
    let hash = option_env!("GIT_HASH").unwrap_or("unknown");
    println!("venus-transit {} ({hash})", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"venus-transit - animated Earth/Venus orbital model with transit detection

USAGE:
    venus-transit <COMMAND> [OPTIONS]

COMMANDS:
    run [config.yaml]           Drive the animation headlessly and print frames
        --ticks <N>             Number of ticks to advance (default: 60)
        --speed <X>             Speed multiplier override (0.5 - 2.0)

    validate <config.yaml>      Load a configuration and report validation results

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    venus-transit run
    venus-transit run configs/earth_venus.yaml --ticks 200
    venus-transit run --speed 2.0
    venus-transit validate configs/earth_venus.yaml

For the interactive view, build with the `tui` feature and run `transit-tui`.
"
    );
}

/// Print the frame table header.
pub fn print_frame_header() {
    println!(
        "{:>10}  {:>20}  {:>20}  {:>9}  {}",
        "time (d)", "earth (AU)", "venus (AU)", "sep (AU)", "transit"
    );
}

/// Print one frame as a table row.
pub fn print_frame_row(frame: &FrameSnapshot) {
    println!(
        "{:>10.1}  ({:>8.3}, {:>8.3})  ({:>8.3}, {:>8.3})  {:>9.4}  {}",
        frame.time_days,
        frame.earth.x,
        frame.earth.y,
        frame.venus.x,
        frame.venus.y,
        frame.separation_au(),
        if frame.transiting { "YES" } else { "-" }
    );
}

/// Print the run summary: tick count, final time, transit windows.
pub fn print_run_summary(report: &RunReport, speed_multiplier: f64) {
    println!();
    println!(
        "{} ticks, final simulated time {:.1} days (speed x{speed_multiplier})",
        report.frames.len(),
        report.final_time_days
    );

    if report.windows.is_empty() {
        println!("No transit observed.");
    } else {
        for window in &report.windows {
            println!(
                "Transit from {:.1} to {:.1} effective days",
                window.start_days, window.end_days
            );
        }
    }
}

/// Print a successful validation report.
pub fn print_validation_ok(path: &Path, config: &SimConfig) {
    println!("{} is valid", path.display());
    println!(
        "  earth: {} AU, {} days",
        config.bodies.earth.radius_au, config.bodies.earth.period_days
    );
    println!(
        "  venus: {} AU, {} days",
        config.bodies.venus.radius_au, config.bodies.venus.period_days
    );
    println!(
        "  step {} days, tick {} ms, speed x{}",
        config.animation.time_step_days,
        config.animation.tick_interval_ms,
        config.animation.speed_multiplier
    );
}
