//! Build script for washer-firmware
//!
//! - Validates machine.toml at compile time
//! - Generates the timing constants the firmware includes

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use washer_core::config::{ConfigError, CycleTimings};

/// Layout of machine.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MachineToml {
    #[serde(default)]
    timings: CycleTimings,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=machine.toml");

    let timings = load_timings(Path::new("machine.toml"));
    write_timings(&timings);

    println!("cargo:warning=machine.toml validated successfully");
}

/// Read, parse and validate machine.toml
fn load_timings(path: &Path) -> CycleTimings {
    if !path.exists() {
        fail(
            "machine.toml not found!",
            &[
                "The firmware requires a machine.toml configuration file.",
                "Please create one in the washer-firmware directory.",
            ],
        );
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read machine.toml", &[&e.to_string()]),
    };

    let machine: MachineToml = match toml::from_str(&content) {
        Ok(machine) => machine,
        Err(e) => {
            let message = e.to_string();
            let lines: Vec<&str> = message.lines().collect();
            fail("Invalid machine.toml", &lines)
        }
    };

    if let Err(e) = machine.timings.validate() {
        fail("Invalid [timings] in machine.toml", &[describe(e)]);
    }

    machine.timings
}

fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::ZeroRotateDuration => "rotate_ms must be greater than 0",
        ConfigError::ZeroSpinDuration => "spin_ms must be greater than 0",
        ConfigError::ZeroPollInterval => "poll_interval_ms must be greater than 0",
        ConfigError::PollSlowerThanCycle => {
            "poll_interval_ms must be shorter than rotate_ms and spin_ms"
        }
    }
}

/// Write OUT_DIR/timings.rs
fn write_timings(timings: &CycleTimings) {
    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => fail("OUT_DIR is not set", &[&e.to_string()]),
    };

    let source = format!(
        "/// Length of each rotation phase (ms)\n\
         pub const ROTATE_MS: u32 = {};\n\
         /// Length of the spin-dry phase (ms)\n\
         pub const SPIN_MS: u32 = {};\n\
         /// Period of the input poll loop (ms)\n\
         pub const POLL_INTERVAL_MS: u32 = {};\n",
        timings.rotate_ms, timings.spin_ms, timings.poll_interval_ms
    );

    if let Err(e) = fs::write(out_dir.join("timings.rs"), source) {
        fail("Failed to write timings.rs", &[&e.to_string()]);
    }
}

/// Abort the build with a boxed diagnostic
fn fail(title: &str, details: &[&str]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(details)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
