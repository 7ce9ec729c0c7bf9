//! # fusion-locate
//!
//! Finds a local Autodesk Fusion 360 installation and prints the facet
//! configuration an IDE uses to run and debug Fusion 360 Python scripts.
//!
//! ## Usage
//!
//! ```bash
//! # Search the current user's home directory for the running OS
//! fusion-locate
//!
//! # Search a mounted Windows profile from another machine
//! fusion-locate --home /mnt/c/Users/me --platform "Windows 10"
//!
//! # Machine-readable output
//! fusion-locate --json
//! ```

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use fusion_locate::{
    FacetConfiguration,
    config::{FileConfig, LogConfig, init_logging},
    facet::FACET_NAME,
    output::JsonOutput,
};
use std::io::IsTerminal;
use std::process::exit;

/// Entry point for the fusion-locate application.
///
/// Errors from [`inner_main`] are printed to stderr and turn into exit code 1.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors for an unsupported platform, a missing home directory,
/// config subcommand failures, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let log_config =
        LogConfig::from_verbosity(args.verbosity()).with_ansi(std::io::stderr().is_terminal());
    if let Err(err) = init_logging(&log_config) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = args.layer_over(load_config(json_mode));

    let home = file_config
        .resolve_home()
        .context("Pass --home to choose where to search")?;
    let host_os = file_config.host_os();

    let configuration = FacetConfiguration::detect(&file_config)
        .context("Failed to build the default facet configuration")?;

    if json_mode {
        let output = JsonOutput::new(host_os, &home, configuration);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &configuration.fusion_path {
        Some(path) => {
            println!("{} {}", "✅ Found Fusion 360:".green(), path.display());
        }
        None => {
            println!(
                "{} {} (searched under {})",
                "⚠️  Fusion 360 not found for".yellow(),
                host_os,
                home.display()
            );
            println!("   {FACET_NAME} will start without an executable path.");
        }
    }

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# fusion-locate configuration
# All values are optional. Uncomment and change as needed.

# Home directory to search under (defaults to the current user's home)
# home = "~"

# Platform to search for: anything containing "Windows" or "Mac"
# (defaults to the running OS)
# platform = "Windows 10"

[windows]
# relative_root = "AppData/Local/Autodesk/webdeploy/production"
# executable_name = "Fusion360.exe"

[macos]
# relative_root = "Library/Application Support/Autodesk/webdeploy/production"
# executable_name = "Autodesk Fusion 360.app"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration file contents.
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| format!("\"{v}\""))
    }
    fn show_path(val: Option<&std::path::Path>, default: &str) -> String {
        val.map_or_else(
            || format!("{default}  (default)"),
            |p| format!("\"{}\"", p.display()),
        )
    }

    format!(
        "\
home     = {home}
platform = {platform}

[windows]
relative_root   = {win_root}
executable_name = {win_exe}

[macos]
relative_root   = {mac_root}
executable_name = {mac_exe}",
        home = show_path(config.home.as_deref(), "(user home)"),
        platform = show_str(config.platform.as_deref(), "(running OS)"),
        win_root = show_path(
            config.windows.relative_root.as_deref(),
            "\"AppData/Local/Autodesk/webdeploy/production\""
        ),
        win_exe = show_str(
            config.windows.executable_name.as_deref(),
            "\"Fusion360.exe\""
        ),
        mac_root = show_path(
            config.macos.relative_root.as_deref(),
            "\"Library/Application Support/Autodesk/webdeploy/production\""
        ),
        mac_exe = show_str(
            config.macos.executable_name.as_deref(),
            "\"Autodesk Fusion 360.app\""
        ),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory {}", parent.display())
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
