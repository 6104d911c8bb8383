use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_info::cls_info;
use crate::cmd_new::cls_new;
use crate::commands::{Cli, Commands};

mod cmd_info;
mod cmd_new;
mod commands;
mod palettes;

fn main() -> ExitCode {
	let cli = Cli::parse();
	let output: &PathBuf;

	let result = match &cli.command {
		Some(Commands::New(args)) => {
			output = &args.output;
			cls_new(args)
		}
		Some(Commands::Info(args)) => {
			return match cls_info(args) {
				Ok(_) => ExitCode::SUCCESS,
				Err(e) => {
					eprintln!("execution failed: {e}");
					ExitCode::FAILURE
				}
			};
		}
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			match fs::metadata(output) {
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
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
