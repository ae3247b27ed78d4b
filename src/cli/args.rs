//! CLI argument parsing.
//!
//! Hand-rolled parser that accepts any iterator of strings, so the full
//! parse table is testable without touching `std::env`.

use std::path::PathBuf;

/// Default number of ticks for a headless run.
pub const DEFAULT_RUN_TICKS: u64 = 60;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Drive the animation headlessly and print frames.
    Run {
        /// Optional path to a configuration YAML file.
        config_path: Option<PathBuf>,
        /// Number of ticks to advance.
        ticks: u64,
        /// Optional speed multiplier override.
        speed_override: Option<f64>,
    },
    /// Load and validate a configuration file.
    Validate {
        /// Path to the configuration YAML file.
        config_path: PathBuf,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "validate" => Self::parse_validate_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        let mut config_path = None;
        let mut ticks = DEFAULT_RUN_TICKS;
        let mut speed_override = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--ticks" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            ticks = n;
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--speed" => {
                    if i + 1 < args.len() {
                        if let Ok(s) = args[i + 1].parse() {
                            speed_override = Some(s);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                other if !other.starts_with("--") && config_path.is_none() => {
                    config_path = Some(PathBuf::from(other));
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Run {
            config_path,
            ticks,
            speed_override,
        }
    }

    /// Parse the 'validate' command arguments.
    fn parse_validate_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'validate' command requires a configuration path");
            return Command::Help;
        }

        Command::Validate {
            config_path: PathBuf::from(&args[2]),
        }
    }
}
