//! Build script for stratum-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates board.toml at compile time
//! - Emits the validated values as constants into OUT_DIR

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Baud rates the UART driver accepts
const SUPPORTED_BAUD_RATES: [i64; 4] = [9600, 19200, 38400, 115200];

/// Values read from board.toml
struct BoardConfig {
    heartbeat_period: u32,
    cycle_delay_ms: u32,
    console_baud_rate: u32,
}

fn main() {
    setup_linker();
    let config = validate_config();
    write_constants(&config);
}

/// Linker scripts; memory.x comes from embassy-stm32's `memory-x` feature
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() -> BoardConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the stratum-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();

    let heartbeat_period = positive(&config, "app", "heartbeat_period", &mut errors);
    let cycle_delay_ms = positive(&config, "app", "cycle_delay_ms", &mut errors);
    let console_baud_rate = positive(&config, "console", "baud_rate", &mut errors);

    if console_baud_rate != 0 && !SUPPORTED_BAUD_RATES.contains(&i64::from(console_baud_rate)) {
        errors.push(format!(
            "[console] baud_rate must be one of {:?}",
            SUPPORTED_BAUD_RATES
        ));
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board.toml                                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");

    BoardConfig {
        heartbeat_period,
        cycle_delay_ms,
        console_baud_rate,
    }
}

/// Read `[section] key` as an integer in 1..=u32::MAX
///
/// Problems are collected in `errors` and 0 is returned in their place.
fn positive(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> u32 {
    let table = match config.get(section) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return 0;
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return 0;
        }
    };

    match table.get(key) {
        Some(toml::Value::Integer(v)) if *v > 0 && *v <= i64::from(u32::MAX) => *v as u32,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be 1-{}", section, key, u32::MAX));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
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

/// Write board_config.rs for `include!` from main.rs
fn write_constants(config: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "/// Main loop iterations between heartbeat toggles\n\
         pub const HEARTBEAT_PERIOD: u32 = {};\n\
         /// Delay between main loop iterations (ms)\n\
         pub const CYCLE_DELAY_MS: u32 = {};\n\
         /// Console UART baud rate\n\
         pub const CONSOLE_BAUD_RATE: u32 = {};\n",
        config.heartbeat_period, config.cycle_delay_ms, config.console_baud_rate
    );
    fs::write(out_dir.join("board_config.rs"), source).unwrap();
}
