use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::palettes::palette::{Color, Palette, PaletteError};

// https://github.com/Equbuxu/CLSEncoderDecoder

const CLS_MAGIC: [u8; 4] = *b"SLCC";
const CLS_VERSION: u16 = 256;
const CLS_CHANNELS: u32 = 4;

/// Fixed prefix: magic + version + name region length.
const FIXED_HEADER_SIZE: usize = 10;
/// Each color is stored as a 12-byte block: u32 payload length, 4 RGBA bytes, u32 zero.
const COLOR_BLOCK_SIZE: usize = 12;
const COLOR_PAYLOAD_LEN: u32 = 8;

fn read_u16(cur: &mut Cursor<&[u8]>) -> Result<u16, PaletteError> {
	let position = cur.position() as usize;
	cur.read_u16::<LittleEndian>()
		.map_err(|_| PaletteError::TruncatedHeader { position, msg: "unexpected end of data".to_string() })
}

fn read_u32(cur: &mut Cursor<&[u8]>) -> Result<u32, PaletteError> {
	let position = cur.position() as usize;
	cur.read_u32::<LittleEndian>()
		.map_err(|_| PaletteError::TruncatedHeader { position, msg: "unexpected end of data".to_string() })
}

fn read_vec(cur: &mut Cursor<&[u8]>, len: usize) -> Result<Vec<u8>, PaletteError> {
	let position = cur.position() as usize;
	let mut buf = vec![0_u8; len];
	cur.read_exact(&mut buf)
		.map_err(|_| PaletteError::TruncatedHeader { position, msg: "unexpected end of data".to_string() })?;
	Ok(buf)
}

impl Palette {
	/// Serializes the palette into the .cls container layout.
	///
	/// The name is written twice: a legacy single-byte-per-character region
	/// in which non-ASCII characters become '?', and the authoritative
	/// length-prefixed UTF-8 region. Clip Studio Paint reads the latter.
	pub fn to_cls_bytes(&self) -> Result<Vec<u8>, PaletteError> {
		let utf8_name = self.name.as_bytes();
		if utf8_name.len() > u16::MAX as usize {
			return Err(PaletteError::NameTooLong { len: utf8_name.len() });
		}

		let ascii_name = self.name.chars()
			.map(|c| if c.is_ascii() { c as u8 } else { b'?' })
			.collect::<Vec<u8>>();

		let header_length = 2 + ascii_name.len() + 4 + 2 + utf8_name.len();

		let mut buf: Vec<u8> = Vec::with_capacity(FIXED_HEADER_SIZE + header_length + 12 + self.colors.len() * COLOR_BLOCK_SIZE);
		buf.extend_from_slice(&CLS_MAGIC);
		buf.extend_from_slice(&CLS_VERSION.to_le_bytes());

		buf.extend_from_slice(&(header_length as u32).to_le_bytes());
		buf.extend_from_slice(&(ascii_name.len() as u16).to_le_bytes());
		buf.extend_from_slice(&ascii_name);
		buf.extend_from_slice(&0_u32.to_le_bytes());
		buf.extend_from_slice(&(utf8_name.len() as u16).to_le_bytes());
		buf.extend_from_slice(utf8_name);

		buf.extend_from_slice(&CLS_CHANNELS.to_le_bytes());
		buf.extend_from_slice(&(self.colors.len() as u32).to_le_bytes());
		buf.extend_from_slice(&((self.colors.len() * COLOR_BLOCK_SIZE) as u32).to_le_bytes());

		for c in &self.colors {
			buf.extend_from_slice(&COLOR_PAYLOAD_LEN.to_le_bytes());
			// alpha is written verbatim, CSP itself only distinguishes zero from nonzero
			buf.extend_from_slice(&[c.r, c.g, c.b, c.a]);
			buf.extend_from_slice(&0_u32.to_le_bytes());
		}

		Ok(buf)
	}

	/// Parses a .cls container. Fails atomically; no partially filled palettes.
	pub fn from_cls_bytes(bytes: &[u8]) -> Result<Palette, PaletteError> {
		if bytes.len() < FIXED_HEADER_SIZE {
			return Err(PaletteError::TruncatedHeader {
				position: 0,
				msg: format!("{} bytes can't hold the {FIXED_HEADER_SIZE}-byte fixed header", bytes.len()),
			});
		}

		let mut cur = Cursor::new(bytes);

		let mut magic = [0_u8; 4];
		cur.read_exact(&mut magic)?;
		if magic != CLS_MAGIC {
			return Err(PaletteError::BadSignature { found: magic });
		}

		let version = read_u16(&mut cur)?;
		if version != CLS_VERSION {
			return Err(PaletteError::UnsupportedVersion { version });
		}

		let header_length = read_u32(&mut cur)? as usize;
		if FIXED_HEADER_SIZE + header_length > bytes.len() {
			return Err(PaletteError::TruncatedHeader {
				position: FIXED_HEADER_SIZE - 4,
				msg: format!("declared name region length {header_length} exceeds the remaining {} bytes", bytes.len() - FIXED_HEADER_SIZE),
			});
		}

		let ascii_len = read_u16(&mut cur)? as usize;
		if 2 + ascii_len + 4 + 2 > header_length {
			return Err(PaletteError::TruncatedHeader {
				position: cur.position() as usize - 2,
				msg: format!("legacy name length {ascii_len} is inconsistent with the name region length {header_length}"),
			});
		}
		let ascii_name = read_vec(&mut cur, ascii_len)?;

		let _ = read_u32(&mut cur)?; // zero padding

		let utf8_len = read_u16(&mut cur)? as usize;
		if 2 + ascii_len + 4 + 2 + utf8_len != header_length {
			return Err(PaletteError::TruncatedHeader {
				position: cur.position() as usize - 2,
				msg: format!("name regions ({ascii_len} + {utf8_len} bytes) don't add up to the declared length {header_length}"),
			});
		}
		let utf8_name = read_vec(&mut cur, utf8_len)?;

		// the UTF-8 region is authoritative, the legacy region only matters
		// when the UTF-8 region is absent or holds invalid data
		let name = match String::from_utf8(utf8_name) {
			Ok(name) if !name.is_empty() => name,
			_ => String::from_utf8_lossy(&ascii_name).into_owned(),
		};

		let channels = read_u32(&mut cur)?;
		if channels != CLS_CHANNELS {
			return Err(PaletteError::MisalignedColorTable {
				position: cur.position() as usize - 4,
				msg: format!("unsupported channel count {channels}"),
			});
		}

		let color_count = read_u32(&mut cur)? as usize;
		let data_len = read_u32(&mut cur)? as usize;

		let table_start = cur.position() as usize;
		let remaining = bytes.len() - table_start;
		if remaining != data_len || data_len != color_count * COLOR_BLOCK_SIZE {
			return Err(PaletteError::MisalignedColorTable {
				position: table_start,
				msg: format!("{remaining} trailing bytes don't form {color_count} whole {COLOR_BLOCK_SIZE}-byte color records"),
			});
		}

		let mut pal = Palette::new(name);

		let mut rgba = [0_u8; 4];
		for _ in 0..color_count {
			let block_len = read_u32(&mut cur)?;
			if block_len != COLOR_PAYLOAD_LEN {
				return Err(PaletteError::MisalignedColorTable {
					position: cur.position() as usize - 4,
					msg: format!("color record declares a {block_len}-byte payload, expected {COLOR_PAYLOAD_LEN}"),
				});
			}

			cur.read_exact(&mut rgba)?;
			pal.push_color(Color::from(rgba));

			let _ = read_u32(&mut cur)?; // trailing zero
		}

		Ok(pal)
	}

	pub fn from_cls_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let bytes = fs::read(path)?;
		Self::from_cls_bytes(&bytes)
	}

	pub fn write_cls_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		let bytes = self.to_cls_bytes()?;
		fs::write(path, bytes)?;
		Ok(())
	}
}
