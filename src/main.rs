use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_distinct::distinct_colors;
use crate::cmd_generate::generate_palette;
use crate::cmd_list::list_strategies;
use crate::cmd_manual::manual_palette;
use crate::cmd_sort::sort_colors;
use crate::commands::{Cli, Commands};

mod cmd_distinct;
mod cmd_generate;
mod cmd_list;
mod cmd_manual;
mod cmd_sort;
mod commands;
mod common;
mod preview;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let default_filter = if cli.debug { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

	let result: Result<Option<PathBuf>> = match &cli.command {
		Some(Commands::Generate(args)) => generate_palette(args),
		Some(Commands::Manual(args)) => manual_palette(args),
		Some(Commands::List(args)) => list_strategies(args).map(|_| None),
		Some(Commands::Distinct(args)) => distinct_colors(args).map(|_| None),
		Some(Commands::Sort(args)) => sort_colors(args).map(|_| None),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(Some(output)) => {
			match fs::metadata(&output) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Output file size: {size}");
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Ok(None) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
