use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::palettes::palette::{Color, Palette, PaletteError};

/// Either a full document with a name or a bare array of hex strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPalette {
	Document { name: Option<String>, colors: Vec<String> },
	List(Vec<String>),
}

impl Palette {
	fn from_json_internal<R: Read + BufRead>(reader: R) -> Result<Palette, PaletteError> {
		let parsed: JsonPalette = serde_json::from_reader(reader)
			.map_err(|_| PaletteError::InvalidFile)?;

		let (name, entries) = match parsed {
			JsonPalette::Document { name, colors } => (name.unwrap_or_default(), colors),
			JsonPalette::List(colors) => (String::new(), colors),
		};

		let colors = entries.iter().enumerate().map(|(i, c)| {
			Color::from_hex_str(c).map_err(|_| PaletteError::InvalidJsonEntry {
				index: i,
				msg: format!("\"{}\" is not a valid hexadecimal color value", c.trim()),
			})
		}).collect::<Result<Vec<Color>, PaletteError>>()?;

		let mut pal = Palette::from(colors);
		pal.rename(name);
		Ok(pal)
	}

	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_json_internal(reader)
	}

	pub fn from_json_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_json_internal(reader)
	}
}
