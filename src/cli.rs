//! Command-line interface definition and argument parsing.
//!
//! [`Cli::layer_over`] writes the flags into a loaded [`FileConfig`], so
//! config-file values act as defaults that CLI arguments can override and the
//! library resolves everything else.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use fusion_locate::config::file::FileConfig;

/// Top-level subcommands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub(crate) enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "fusion-locate")]
#[command(
    about = "Locate a local Autodesk Fusion 360 installation and print the IDE facet configuration"
)]
#[command(version)]
pub(crate) struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub(crate) subcommand: Option<Commands>,

    /// Home directory to search under
    ///
    /// Defaults to the config file `home` value, then the current user's
    /// home directory.
    #[arg(long)]
    home: Option<PathBuf>,

    /// Platform identifier to search for (e.g. "Windows 10", "Mac OS X")
    ///
    /// Defaults to the config file `platform` value, then the running OS.
    #[arg(long)]
    platform: Option<String>,

    /// Output the result as a single JSON object
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    #[must_use]
    pub(crate) const fn json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub(crate) const fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Apply `--home` and `--platform` on top of the config file values.
    ///
    /// Priority: CLI argument > config file > built-in default. Resolving the
    /// final home directory and OS is left to [`FileConfig::resolve_home`]
    /// and [`FileConfig::host_os`].
    #[must_use]
    pub(crate) fn layer_over(&self, mut config: FileConfig) -> FileConfig {
        if let Some(home) = &self.home {
            config.home = Some(home.clone());
        }
        if let Some(platform) = &self.platform {
            config.platform = Some(platform.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_locate::HostOs;

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["fusion-locate"]);
        let config = args.layer_over(FileConfig::default());

        assert!(!args.json());
        assert_eq!(args.verbosity(), 0);
        assert!(config.home.is_none());
        assert!(config.platform.is_none());
        assert_eq!(config.host_os(), HostOs::current());
        assert!(args.subcommand.is_none());
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = Cli::parse_from([
            "fusion-locate",
            "--home",
            "/tmp/cli-home",
            "--platform",
            "Windows 10",
        ]);
        let config = args.layer_over(FileConfig {
            home: Some(PathBuf::from("/tmp/config-home")),
            platform: Some("Mac OS X".to_string()),
            ..FileConfig::default()
        });

        assert_eq!(config.resolve_home().unwrap(), PathBuf::from("/tmp/cli-home"));
        assert_eq!(config.host_os(), HostOs::Windows);
    }

    #[test]
    fn test_config_used_when_cli_absent() {
        let args = Cli::parse_from(["fusion-locate"]);
        let config = args.layer_over(FileConfig {
            home: Some(PathBuf::from("/tmp/config-home")),
            platform: Some("Mac OS X".to_string()),
            ..FileConfig::default()
        });

        assert_eq!(
            config.resolve_home().unwrap(),
            PathBuf::from("/tmp/config-home")
        );
        assert_eq!(config.host_os(), HostOs::MacOs);
    }

    #[test]
    fn test_layering_keeps_policy_overrides() {
        let args = Cli::parse_from(["fusion-locate", "--platform", "Windows 10"]);
        let mut file_config = FileConfig::default();
        file_config.windows.executable_name = Some("Fusion.exe".to_string());

        let config = args.layer_over(file_config);

        assert_eq!(
            config
                .override_for(&config.host_os())
                .and_then(|o| o.executable_name.as_deref()),
            Some("Fusion.exe")
        );
    }

    #[test]
    fn test_unsupported_platform_flag() {
        let args = Cli::parse_from(["fusion-locate", "--platform", "Linux"]);
        assert_eq!(
            args.layer_over(FileConfig::default()).host_os(),
            HostOs::Unsupported("Linux".to_string())
        );
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Cli::parse_from(["fusion-locate", "-vv", "--json"]);
        assert_eq!(args.verbosity(), 2);
        assert!(args.json());
    }

    #[test]
    fn test_config_subcommands() {
        let args = Cli::parse_from(["fusion-locate", "config", "path"]);
        assert!(matches!(
            args.subcommand,
            Some(Commands::Config {
                command: ConfigCommand::Path
            })
        ));

        let args = Cli::parse_from(["fusion-locate", "config", "init"]);
        assert!(matches!(
            args.subcommand,
            Some(Commands::Config {
                command: ConfigCommand::Init
            })
        ));
    }
}
