//! Build script for nucleon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates atom.toml and compiles it into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use nucleon_core::{AppConfig, Size};

/// The attached SSD1306 module
const PANEL: Size = Size::new(128, 64);

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths and scripts
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
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate atom.toml
fn load_config() -> AppConfig {
    println!("cargo:rerun-if-changed=atom.toml");

    let config_path = Path::new("atom.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: atom.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires an atom.toml configuration file.          ║\n\
            ║  Please create one in the nucleon-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read atom.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: AppConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid atom.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate(PANEL) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in atom.toml                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            e.message()
        );
    }

    println!("cargo:warning=atom.toml validated successfully");
    config
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

/// Emit the validated configuration as a Rust constant
fn write_config(config: &AppConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let display = &config.display;
    let scene = &config.scene;

    let source = format!(
        "/// Configuration compiled from atom.toml\n\
         pub const APP_CONFIG: AppConfig = AppConfig {{\n\
         \x20   display: DisplayConfig {{\n\
         \x20       i2c_address: {:#04x},\n\
         \x20       i2c_frequency_hz: {},\n\
         \x20   }},\n\
         \x20   scene: SceneConfig {{\n\
         \x20       width: {},\n\
         \x20       height: {},\n\
         \x20       nucleus_radius: {},\n\
         \x20       nucleus_offset: {},\n\
         \x20       orbit_radius: {},\n\
         \x20       electron_radius: {},\n\
         \x20       frames_per_revolution: {},\n\
         \x20       frame_delay_ms: {},\n\
         \x20   }},\n\
         }};\n",
        display.i2c_address,
        display.i2c_frequency_hz,
        scene.width,
        scene.height,
        scene.nucleus_radius,
        scene.nucleus_offset,
        scene.orbit_radius,
        scene.electron_radius,
        scene.frames_per_revolution,
        scene.frame_delay_ms,
    );

    fs::write(out_dir.join("app_config.rs"), source).unwrap();
}
