mod agent;
mod cli;
mod commands;
mod config;
mod debug;
mod error;
mod install;
mod launch_config;
mod platform;
mod steps;
mod ui;
mod utils;

use cli::{get_args, Args, Commands};
use commands::AttachOptions;
use config::Profile;
use debug::{enable_debug, is_debug_enabled};
use error::{AttachError, Result};
use platform::{Layout, Platform};
use std::error::Error;
use utils::PathResolver;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("\n🔥 rcp-attach encountered an unexpected error:");
        eprintln!("{panic_info}");
        eprintln!("\n💡 This is likely a bug. Include your command and this message when reporting it.");
    }));

    let args = get_args();

    if args.debug {
        enable_debug();
    }

    if let Err(e) = run(args) {
        let mut error_source: &dyn Error = &e;
        eprintln!("❌ {error_source}");

        while let Some(source) = error_source.source() {
            eprintln!("   Caused by: {source}");
            error_source = source;
        }

        for suggestion in e.suggestions() {
            eprintln!("💡 {suggestion}");
        }

        if is_debug_enabled() {
            eprintln!("\n{e:#?}");
        }

        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let profile = Profile::load(args.profile.as_deref())?;
    let platform = match args.platform.as_deref() {
        Some(name) => name.parse::<Platform>()?,
        None => Platform::current(),
    };
    let layout = Layout::new(platform, &profile);
    crate::debug_println!("Using {platform} layout: {layout:?}");

    match args.command {
        Commands::Inspect {
            path,
            positional_path,
        } => {
            let raw = input_path(positional_path, path)?;
            commands::handle_inspect_command(&raw, &layout)
        }

        Commands::Plugins {
            path,
            positional_path,
        } => {
            let raw = input_path(positional_path, path)?;
            commands::handle_plugins_command(&raw, &layout)
        }

        Commands::Attach {
            path,
            positional_path,
            agent,
            vm_args,
            launch,
        } => {
            let raw = input_path(positional_path, path)?;
            let opts = AttachOptions {
                agent: &agent,
                vm_args: &vm_args,
                launch,
            };
            commands::handle_attach_command(&raw, &layout, &opts)
        }

        Commands::Detach {
            path,
            positional_path,
            agent,
        } => {
            let raw = input_path(positional_path, path)?;
            let jar_name = PathResolver::get_filename(std::path::Path::new(&agent))?;
            commands::handle_detach_command(&raw, &layout, &jar_name)
        }
    }
}

fn input_path(positional: Option<String>, flag: Option<String>) -> Result<String> {
    PathResolver::path_or_prompt(PathResolver::resolve_input_path(positional, flag))
        .map_err(|e| match e {
            AttachError::Io(io) => AttachError::add_context("Failed to read installation path", io),
            other => other,
        })
}
