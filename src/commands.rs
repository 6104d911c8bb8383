use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use crate::palettes::BuiltInPalette;

const BUILD_DATE: &str = env!("BUILD_DATE");
const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const CLAP_VERSION: &str = formatcp!("{PKG_VERSION} [{BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Creates and inspects Clip Studio Paint color sets")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints the contents of a .cls file")]
	Info(InfoArgs),
	#[command(about = "Writes a .cls file built from colors, a hex list, a JSON document, or a preset")]
	New(NewArgs),
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct InfoArgs {
	#[arg(help = "The .cls file to inspect.")]
	pub input: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct NewArgs {
	#[arg(help = "The output file.")]
	pub output: PathBuf,

	#[arg(short, long, help = "The color set name. Defaults to the output file stem.")]
	pub name: Option<String>,

	#[arg(short, long = "color", help = "A color in #RRGGBB or #RRGGBBAA notation. Can be passed multiple times.")]
	pub colors: Vec<String>,

	#[arg(long = "hex", group = "source", help = "Reads colors from a hex list file, one color per line.")]
	pub hex_file: Option<PathBuf>,

	#[arg(long = "json", group = "source", help = "Reads colors from a JSON document or a JSON array of hex strings.")]
	pub json_file: Option<PathBuf>,

	#[arg(short, long, value_enum, group = "source", help = "Starts from a built-in palette.")]
	pub preset: Option<BuiltInPalette>,
}
