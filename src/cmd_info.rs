use std::fs;

use anyhow::Result;
use colored::Colorize;
use humansize::DECIMAL;

use cls_rs::palettes::palette::Palette;

use crate::commands::InfoArgs;

pub(crate) fn cls_info(args: &InfoArgs) -> Result<()> {
	let size = fs::metadata(&args.input)?.len();
	let pal = Palette::from_cls_file(&args.input)?;

	let name = if pal.name.is_empty() {
		"(unnamed)".italic().to_string()
	} else {
		pal.name.bold().to_string()
	};
	println!("{name}: {} colors, {}", pal.len(), humansize::format_size(size, DECIMAL));

	for (i, color) in pal.colors.iter().enumerate() {
		let swatch = "    ".on_truecolor(color.r, color.g, color.b);
		print!("{:>4}. {swatch} {color} RGB({:3}, {:3}, {:3})", i + 1, color.r, color.g, color.b);
		if !color.is_opaque() {
			print!(" {}", "(transparent)".dimmed());
		}
		println!();
	}

	Ok(())
}
