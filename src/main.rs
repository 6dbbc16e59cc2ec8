mod runtime;
mod view;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use fastfm::cli::{BrowseArgs, CliArgs, CliCommand, ConfigAction};
use fastfm::config::AppConfig;
use fastfm::fs::{self, FileEntry};
use fastfm::keymap::{unknown_entries, BindingTable};

use runtime::App;

fn main() -> Result<()> {
    let (command, config_path) = CliArgs::parse().into_command();
    fastfm::tracing::init();

    match command {
        CliCommand::Browse(args) => browse(args, config_path),

        CliCommand::Search {
            keyword,
            root,
            json,
        } => {
            let root = root.unwrap_or_else(fs::default_search_root);
            let results = fs::search(&root, &keyword)?;
            print_entries(&results, json)
        }

        CliCommand::Ls { path, json, all } => {
            let config = load_config(config_path.as_deref());
            let mut options = config.ui.list_options();
            options.show_hidden |= all;
            let entries = fs::list_directory(&path, &options)?;
            print_entries(&entries, json)
        }

        CliCommand::Drives { json } => {
            let drives = fs::list_drives();
            if json {
                println!("{}", serde_json::to_string_pretty(&drives)?);
            } else {
                for drive in drives {
                    println!("{}\t{}", drive.label, drive.path.display());
                }
            }
            Ok(())
        }

        CliCommand::Copy { sources, target } => {
            let outcome = fs::copy_files(&sources, &target);
            println!("{} items copied", outcome);
            if !outcome.all_succeeded() {
                bail!("{} item(s) could not be copied", outcome.failed_count());
            }
            Ok(())
        }

        CliCommand::Move { sources, target } => {
            let outcome = fs::move_files(&sources, &target);
            println!("{} items moved", outcome);
            if !outcome.all_succeeded() {
                bail!("{} item(s) could not be moved", outcome.failed_count());
            }
            Ok(())
        }

        CliCommand::Touch { path } => Ok(fs::create_file(&path)?),
        CliCommand::Mkdir { path } => Ok(fs::create_directory(&path)?),
        CliCommand::Open { path } => Ok(fs::open_path(&path)?),

        CliCommand::Preview { path } => {
            print!("{}", fs::preview_file(&path)?);
            Ok(())
        }

        CliCommand::Config { action } => config_command(action, config_path),
    }
}

fn browse(args: BrowseArgs, config_path: Option<PathBuf>) -> Result<()> {
    if let Some(path) = &args.path {
        if !path.is_dir() {
            bail!("{} is not a directory", path.display());
        }
    }
    let config = load_config(config_path.as_deref());
    let search_root = args.search_root.unwrap_or_else(fs::default_search_root);

    App::new(config, config_path, search_root).run(args.path)
}

fn load_config(path: Option<&Path>) -> AppConfig {
    match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.or_else(fastfm::config_paths::config_file)
        .context("No configuration directory available")
}

fn config_command(action: ConfigAction, config_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_config_path(config_path)?;
    match action {
        ConfigAction::Path => println!("{}", path.display()),

        ConfigAction::Show => {
            let config = AppConfig::load_from(&path);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }

        ConfigAction::Reset => {
            AppConfig::reset(&path)?;
            println!("Reset {}", path.display());
        }

        ConfigAction::Check => {
            let config = AppConfig::read_from(&path)?;
            let table = BindingTable::build(&config.keyboard);
            let mut problems = 0;

            for binding in table.malformed() {
                problems += 1;
                let reason = binding.error().map(|e| e.to_string()).unwrap_or_default();
                println!(
                    "malformed: {} = \"{}\" ({})",
                    binding.action.qualified_name(),
                    binding.spec,
                    reason
                );
            }
            for entry in unknown_entries(&config.keyboard) {
                problems += 1;
                println!("unknown: {}", entry);
            }
            for (a, b) in table.conflicts() {
                println!(
                    "shared chord: {} and {} ({})",
                    a.qualified_name(),
                    b.qualified_name(),
                    table.display_for(a).unwrap_or_default()
                );
            }

            if problems > 0 {
                bail!("{} problem(s) in {}", problems, path.display());
            }
            println!("{} is valid", path.display());
        }
    }
    Ok(())
}

fn print_entries(entries: &[FileEntry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }
    for entry in entries {
        let suffix = if entry.is_dir() { "/" } else { "" };
        println!("{}{}", entry.path.display(), suffix);
    }
    Ok(())
}
