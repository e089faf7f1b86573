#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args by hand. Environment variables with the `CEDAR_DEMO_*`
//! prefix set defaults that explicit flags override.

use std::env;
use std::process;
use std::time::Duration;

use cedar::CenterRounding;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Cedar demo: a background box and a centered menu panel

USAGE:
    cedar-demo [OPTIONS]

OPTIONS:
    --inline             Draw on the main screen instead of the alternate screen
    --center=MODE        Centering rounding: 'nearest' (default) or 'truncate'
    --poll-ms=N          Input poll interval in milliseconds (default: 50)
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    c / Tab         Cycle the menu color
    q / Q / Esc     Quit

ENVIRONMENT VARIABLES:
    CEDAR_DEMO_INLINE         Override --inline (1|true)
    CEDAR_DEMO_CENTER         Override --center
    CEDAR_DEMO_POLL_MS        Override --poll-ms
    CEDAR_LOG                 Log filter (default: info)
    CEDAR_LOG_FILE            Log file (default: cedar-demo.log)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Stay on the main screen.
    pub inline: bool,
    pub center: CenterRounding,
    /// How long to wait for input between frames.
    pub poll: Duration,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            inline: false,
            center: CenterRounding::Nearest,
            poll: Duration::from_millis(50),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments and environment, exiting on `--help`,
    /// `--version` or a bad argument.
    pub fn parse() -> Self {
        let args = env::args().skip(1);
        match Self::parse_from(args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("cedar-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with environment lookups through `var`.
    pub fn parse_from<I, F>(args: I, var: F) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment defaults first
        if let Some(val) = var("CEDAR_DEMO_INLINE") {
            opts.inline = matches!(val.as_str(), "1" | "true" | "yes");
        }
        if let Some(val) = var("CEDAR_DEMO_CENTER")
            && let Some(center) = parse_center(&val)
        {
            opts.center = center;
        }
        if let Some(val) = var("CEDAR_DEMO_POLL_MS")
            && let Ok(ms) = val.parse()
        {
            opts.poll = Duration::from_millis(ms);
        }

        // Flags override env vars
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--inline" => opts.inline = true,
                other => {
                    if let Some(val) = other.strip_prefix("--center=") {
                        opts.center = parse_center(val)
                            .ok_or_else(|| format!("Invalid --center value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--poll-ms=") {
                        let ms = val
                            .parse()
                            .map_err(|_| format!("Invalid --poll-ms value: {val}"))?;
                        opts.poll = Duration::from_millis(ms);
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

fn parse_center(val: &str) -> Option<CenterRounding> {
    match val {
        "nearest" | "round" => Some(CenterRounding::Nearest),
        "truncate" | "floor" => Some(CenterRounding::Truncate),
        _ => None,
    }
}
