use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::palettes::palette::{Color, Palette, PaletteError};

impl Color {
	/// Parses "#RRGGBB", "#RRGGBBAA", or the same with a "0x" prefix or no prefix at all.
	/// Six-digit values are fully opaque.
	pub fn from_hex_str(s: &str) -> Result<Color, PaletteError> {
		let trimmed = s.trim();
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix('#').unwrap_or(stripped);

		if !stripped.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(PaletteError::InvalidHexColor {
				msg: format!("\"{trimmed}\" is not a hexadecimal color value"),
			});
		}

		let pair = |i: usize| {
			u8::from_str_radix(&stripped[i..i + 2], 16)
				.map_err(|_| PaletteError::InvalidHexColor {
					msg: format!("\"{trimmed}\" is not a hexadecimal color value"),
				})
		};

		match stripped.len() {
			6 => Ok(Color { r: pair(0)?, g: pair(2)?, b: pair(4)?, a: 0xFF }),
			8 => Ok(Color { r: pair(0)?, g: pair(2)?, b: pair(4)?, a: pair(6)? }),
			n => Err(PaletteError::InvalidHexColor {
				msg: format!("\"{trimmed}\" has {n} hex digits, expected 6 or 8"),
			}),
		}
	}
}

impl Palette {
	fn from_hex_internal<R: Read + BufRead>(reader: R) -> Result<Palette, PaletteError> {
		let mut pal = Palette::default();

		for (i, line) in reader.lines().enumerate() {
			let trimmed_line = line?.trim().to_owned();
			if trimmed_line.is_empty() || trimmed_line.starts_with("//") {
				continue;
			}

			let color = Color::from_hex_str(&trimmed_line)
				.map_err(|_| PaletteError::InvalidTextLine { line: i + 1, msg: "Not a hexadecimal color value".to_string() })?;

			pal.push_color(color);
		}

		Ok(pal)
	}

	pub fn from_hex_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_hex_internal(reader)
	}

	pub fn from_hex_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_hex_internal(reader)
	}
}
