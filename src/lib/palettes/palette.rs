use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl From<[u8; 4]> for Color {
	fn from(v: [u8; 4]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
			a: v[3],
		}
	}
}

impl From<u32> for Color {
	/// Interprets the value as 0xRRGGBB, fully opaque.
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
			a: 0xFF,
		}
	}
}

impl Color {
	/// Builds a color from untrusted integers.
	/// Values outside 0..=255 are an error, never clamped.
	pub fn from_rgba_checked(r: i64, g: i64, b: i64, a: i64) -> Result<Self, PaletteError> {
		for (channel, value) in [('r', r), ('g', g), ('b', b), ('a', a)] {
			if !(0..=255).contains(&value) {
				return Err(PaletteError::ChannelOutOfRange { channel, value });
			}
		}

		Ok(Self { r: r as u8, g: g as u8, b: b as u8, a: a as u8 })
	}

	pub fn is_opaque(&self) -> bool {
		// Clip Studio Paint treats any nonzero alpha as fully opaque
		self.a != 0
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;

		if self.a == 0xFF {
			write!(f, "#{rgb:06X}")
		} else {
			write!(f, "#{rgb:06X}{:02X}", self.a)
		}
	}
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Palette {
	pub name: String,
	pub colors: Vec<Color>,
}

impl Palette {
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self { name: name.into(), colors: Vec::new() }
	}

	pub fn push_color(&mut self, c: Color) {
		self.colors.push(c);
	}

	pub fn rename<S: Into<String>>(&mut self, name: S) {
		self.name = name.into();
	}

	pub fn clear(&mut self) {
		self.colors.clear();
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

impl From<Vec<Color>> for Palette {
	fn from(v: Vec<Color>) -> Self {
		let mut pal = Palette::default();
		for c in v {
			pal.push_color(c);
		}
		pal
	}
}

#[derive(Debug)]
pub enum PaletteError {
	ChannelOutOfRange { channel: char, value: i64 },
	InvalidHexColor { msg: String },
	InvalidTextLine { line: usize, msg: String },
	InvalidJsonEntry { index: usize, msg: String },
	InvalidFile,
	NameTooLong { len: usize },
	BadSignature { found: [u8; 4] },
	UnsupportedVersion { version: u16 },
	TruncatedHeader { position: usize, msg: String },
	MisalignedColorTable { position: usize, msg: String },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::ChannelOutOfRange { channel, value } => write!(f, "Channel '{channel}' value {value} is outside the range 0-255"),
			PaletteError::InvalidHexColor { msg } => write!(f, "Invalid hex color: {msg}"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::InvalidJsonEntry { index, msg } => write!(f, "Invalid JSON array item at index {index}: {msg}"),
			PaletteError::InvalidFile => write!(f, "Invalid file"),
			PaletteError::NameTooLong { len } => write!(f, "The palette name is {len} bytes long, which exceeds the format's 65535-byte limit"),
			PaletteError::BadSignature { found } => write!(f, "Invalid signature {found:02X?}, expected \"SLCC\""),
			PaletteError::UnsupportedVersion { version } => write!(f, "Unsupported version {version:#06X}"),
			PaletteError::TruncatedHeader { position, msg } => write!(f, "Truncated or inconsistent header at byte {position:#X}: {msg}"),
			PaletteError::MisalignedColorTable { position, msg } => write!(f, "Misaligned color table at byte {position:#X}: {msg}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
