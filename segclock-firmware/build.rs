//! Build script for segclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml and generates the timing constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Shortest refresh period: one lit tick per digit
const MIN_REFRESH_PERIOD: i64 = 4;

/// Longest period the RP2040 watchdog can load
const MAX_WATCHDOG_MS: i64 = 8300;

/// Timing values read from clock.toml
struct Timing {
    tick_period_us: i64,
    refresh_period: i64,
    sample_interval: i64,
    long_press_ms: i64,
    loop_period_ms: i64,
    show_seconds: i64,
    scroll_speed: i64,
    watchdog_timeout_ms: i64,
}

fn main() {
    setup_linker();
    let timing = validate_config();
    generate_constants(&timing);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate clock.toml at compile time
fn validate_config() -> Timing {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a clock.toml timing configuration.        ║\n\
            ║  Please create one in the segclock-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in clock.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let mut get = |section: &str, key: &str| -> i64 {
        match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Integer(v)) => *v,
            Some(_) => {
                errors.push(format!("[{}] {} must be an integer", section, key));
                0
            }
            None => {
                errors.push(format!("[{}] {} is missing", section, key));
                0
            }
        }
    };

    let timing = Timing {
        tick_period_us: get("display", "tick_period_us"),
        refresh_period: get("display", "refresh_period"),
        sample_interval: get("buttons", "sample_interval"),
        long_press_ms: get("buttons", "long_press_ms"),
        loop_period_ms: get("clock", "loop_period_ms"),
        show_seconds: get("clock", "show_seconds"),
        scroll_speed: get("clock", "scroll_speed"),
        watchdog_timeout_ms: get("watchdog", "timeout_ms"),
    };

    if errors.is_empty() {
        validate_timing(&timing, &mut errors);
    }

    if !errors.is_empty() {
        let error_lines: Vec<String> = errors
            .iter()
            .map(|e| format!("║  - {:<62} ║", e))
            .collect();
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid timing in clock.toml                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            error_lines.join("\n")
        );
    }

    println!("cargo:warning=clock.toml validated successfully");
    timing
}

/// Range checks; derived values must fit the core's field widths
fn validate_timing(t: &Timing, errors: &mut Vec<String>) {
    if !(50..=1000).contains(&t.tick_period_us) {
        errors.push(format!(
            "tick_period_us {} outside 50-1000",
            t.tick_period_us
        ));
    }
    if !(MIN_REFRESH_PERIOD..=255).contains(&t.refresh_period) {
        errors.push(format!(
            "refresh_period {} outside {}-255",
            t.refresh_period, MIN_REFRESH_PERIOD
        ));
    }
    if !(1..=255).contains(&t.sample_interval) {
        errors.push(format!(
            "sample_interval {} outside 1-255",
            t.sample_interval
        ));
    }
    if !(10..=1000).contains(&t.loop_period_ms) {
        errors.push(format!(
            "loop_period_ms {} outside 10-1000",
            t.loop_period_ms
        ));
    }
    if !(1..=255).contains(&t.scroll_speed) {
        errors.push(format!("scroll_speed {} outside 1-255", t.scroll_speed));
    }
    if t.watchdog_timeout_ms <= t.loop_period_ms || t.watchdog_timeout_ms > MAX_WATCHDOG_MS {
        errors.push(format!(
            "watchdog timeout_ms {} must be > loop period, <= {}",
            t.watchdog_timeout_ms, MAX_WATCHDOG_MS
        ));
    }
    if !errors.is_empty() {
        return;
    }

    let samples = long_press_samples(t);
    if !(1..=255).contains(&samples) {
        errors.push(format!(
            "long_press_ms {} gives {} samples, need 1-255",
            t.long_press_ms, samples
        ));
    }
    let iterations = show_iterations(t);
    if !(1..=u16::MAX as i64).contains(&iterations) {
        errors.push(format!(
            "show_seconds {} gives {} iterations, need 1-65535",
            t.show_seconds, iterations
        ));
    }
}

fn long_press_samples(t: &Timing) -> i64 {
    t.long_press_ms * 1000 / (t.tick_period_us * t.sample_interval)
}

fn show_iterations(t: &Timing) -> i64 {
    t.show_seconds * 1000 / t.loop_period_ms
}

/// Write the validated values as Rust constants into OUT_DIR
fn generate_constants(t: &Timing) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("clock_config.rs")).unwrap();

    writeln!(f, "/// Generated from clock.toml").unwrap();
    writeln!(f, "pub const TICK_PERIOD_US: u64 = {};", t.tick_period_us).unwrap();
    writeln!(f, "pub const REFRESH_PERIOD: u8 = {};", t.refresh_period).unwrap();
    writeln!(f, "pub const SAMPLE_INTERVAL: u8 = {};", t.sample_interval).unwrap();
    writeln!(
        f,
        "pub const LONG_PRESS_SAMPLES: u8 = {};",
        long_press_samples(t)
    )
    .unwrap();
    writeln!(f, "pub const LOOP_PERIOD_MS: u64 = {};", t.loop_period_ms).unwrap();
    writeln!(f, "pub const SHOW_ITERATIONS: u16 = {};", show_iterations(t)).unwrap();
    writeln!(f, "pub const SCROLL_SPEED: u8 = {};", t.scroll_speed).unwrap();
    writeln!(
        f,
        "pub const WATCHDOG_TIMEOUT_MS: u64 = {};",
        t.watchdog_timeout_ms
    )
    .unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
