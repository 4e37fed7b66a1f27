use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rcp-attach - attach your own Java agent to an Eclipse RCP desktop application
#[derive(Parser, Debug)]
#[command(
    name = "rcp-attach",
    author,
    version = get_version_string(),
    about = "Locate Eclipse RCP installations and attach a Java agent",
    long_about = "rcp-attach finds an Eclipse RCP based application on macOS, Windows or Linux, reports its product metadata and plugins, and adds or removes a Java agent in its launch configuration."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Product profile (TOML) overriding launcher and bundle names
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub profile: Option<PathBuf>,

    /// Treat the installation as belonging to another platform
    #[arg(
        long,
        global = true,
        hide = true,
        value_parser = ["macos", "windows", "linux"]
    )]
    pub platform: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the installation root, product metadata and watched plugins
    #[command(alias = "info")]
    Inspect {
        #[arg(
            short = 'p',
            long,
            value_hint = clap::ValueHint::AnyPath,
            help = "Installation directory, launcher or .app bundle"
        )]
        path: Option<String>,

        #[arg(index = 1, value_hint = clap::ValueHint::AnyPath)]
        positional_path: Option<String>,
    },

    /// List versioned plugin archives
    #[command(alias = "ls")]
    Plugins {
        #[arg(
            short = 'p',
            long,
            value_hint = clap::ValueHint::AnyPath,
            help = "Installation directory, launcher or .app bundle"
        )]
        path: Option<String>,

        #[arg(index = 1, value_hint = clap::ValueHint::AnyPath)]
        positional_path: Option<String>,
    },

    /// Deploy an agent jar and load it from the launch config
    Attach {
        #[arg(
            short = 'p',
            long,
            value_hint = clap::ValueHint::AnyPath,
            help = "Installation directory, launcher or .app bundle"
        )]
        path: Option<String>,

        #[arg(index = 1, value_hint = clap::ValueHint::AnyPath)]
        positional_path: Option<String>,

        /// Agent jar to deploy
        #[arg(short = 'a', long, value_hint = clap::ValueHint::FilePath)]
        agent: PathBuf,

        /// Extra JVM flag placed after the agent (repeatable)
        #[arg(long = "vm-arg", allow_hyphen_values = true)]
        vm_args: Vec<String>,

        /// Start the application afterwards
        #[arg(short = 'l', long)]
        launch: bool,
    },

    /// Remove a previously attached agent
    Detach {
        #[arg(
            short = 'p',
            long,
            value_hint = clap::ValueHint::AnyPath,
            help = "Installation directory, launcher or .app bundle"
        )]
        path: Option<String>,

        #[arg(index = 1, value_hint = clap::ValueHint::AnyPath)]
        positional_path: Option<String>,

        /// File name of the deployed agent jar
        #[arg(short = 'a', long)]
        agent: String,
    },
}

fn get_version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn get_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_args() {
        let args = Args::try_parse_from([
            "rcp-attach",
            "attach",
            "/opt/dbeaver",
            "--agent",
            "agent.jar",
            "--vm-arg",
            "-Dtrace=on",
            "--launch",
            "--debug",
        ])
        .unwrap();

        assert!(args.debug);
        match args.command {
            Commands::Attach {
                positional_path,
                agent,
                vm_args,
                launch,
                ..
            } => {
                assert_eq!(positional_path.as_deref(), Some("/opt/dbeaver"));
                assert_eq!(agent, PathBuf::from("agent.jar"));
                assert_eq!(vm_args, vec!["-Dtrace=on".to_string()]);
                assert!(launch);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_platform_values_checked() {
        assert!(Args::try_parse_from(["rcp-attach", "--platform", "beos", "inspect"]).is_err());
        let args =
            Args::try_parse_from(["rcp-attach", "inspect", "--platform", "macos"]).unwrap();
        assert_eq!(args.platform.as_deref(), Some("macos"));
    }

    #[test]
    fn test_attach_requires_agent() {
        assert!(Args::try_parse_from(["rcp-attach", "attach", "/opt/dbeaver"]).is_err());
    }
}
