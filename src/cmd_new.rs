use anyhow::Result;

use cls_rs::palettes::palette::{Color, Palette};

use crate::commands::NewArgs;
use crate::palettes::get_builtin_palette;

pub(crate) fn cls_new(args: &NewArgs) -> Result<()> {
	let mut pal = if let Some(preset) = &args.preset {
		get_builtin_palette(preset)
	} else if let Some(hex_file) = &args.hex_file {
		Palette::from_hex_file(hex_file)?
	} else if let Some(json_file) = &args.json_file {
		Palette::from_json_file(json_file)?
	} else {
		Palette::default()
	};

	for c in &args.colors {
		pal.push_color(Color::from_hex_str(c)?);
	}

	if let Some(name) = &args.name {
		pal.rename(name);
	} else if pal.name.is_empty() {
		// CSP displays the embedded name, not the file name, so don't leave it blank
		let stem = args.output.file_stem().and_then(|s| s.to_str()).unwrap_or("Custom Palette");
		pal.rename(stem);
	}

	if pal.is_empty() {
		eprintln!("NOTE: The color set has no colors. The file will be valid, but CSP needs at least one color for a useful import.");
	}

	pal.write_cls_file(&args.output)?;
	println!("Saved {} colors to {}", pal.len(), args.output.display());

	Ok(())
}
