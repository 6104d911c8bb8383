use cls_rs::palettes::palette::{Color, Palette, PaletteError};

#[test]
fn color_hex_parsing() {
	assert_eq!(Color::from_hex_str("#FF0000").unwrap(), Color { r: 255, g: 0, b: 0, a: 255 });
	assert_eq!(Color::from_hex_str("ff7f00").unwrap(), Color { r: 255, g: 127, b: 0, a: 255 });
	assert_eq!(Color::from_hex_str("0x1E3D54").unwrap().to_string(), "#1E3D54");
	assert_eq!(Color::from_hex_str("#FF000080").unwrap().a, 0x80);
	assert_eq!(Color::from_hex_str("  #E2EDF5  ").unwrap().to_string(), "#E2EDF5");
}

#[test]
fn color_hex_parsing_rejects_garbage() {
	assert!(matches!(Color::from_hex_str("#XYZXYZ"), Err(PaletteError::InvalidHexColor { .. })));
	assert!(matches!(Color::from_hex_str("#12345"), Err(PaletteError::InvalidHexColor { .. })));
	assert!(matches!(Color::from_hex_str(""), Err(PaletteError::InvalidHexColor { .. })));
	assert!(matches!(Color::from_hex_str("#ffffａａ"), Err(PaletteError::InvalidHexColor { .. })));
}

#[test]
fn color_channel_bounds() {
	assert!(Color::from_rgba_checked(255, 0, 0, 255).is_ok());

	match Color::from_rgba_checked(256, 0, 0, 255) {
		Err(PaletteError::ChannelOutOfRange { channel: 'r', value: 256 }) => {}
		other => panic!("expected ChannelOutOfRange, got {other:?}"),
	}
	match Color::from_rgba_checked(0, -1, 0, 255) {
		Err(PaletteError::ChannelOutOfRange { channel: 'g', value: -1 }) => {}
		other => panic!("expected ChannelOutOfRange, got {other:?}"),
	}
	assert!(Color::from_rgba_checked(0, 0, 0, 1000).is_err());
}

#[test]
fn palette_builder() {
	let mut pal = Palette::new("Work In Progress");
	assert!(pal.is_empty());

	pal.push_color(Color::from(0xFF0000));
	pal.push_color(Color::from_hex_str("#00FF00").unwrap());
	assert_eq!(pal.len(), 2);

	pal.rename("Done");
	assert_eq!(pal.name, "Done");

	pal.clear();
	assert!(pal.is_empty());
	assert_eq!(pal.name, "Done");
}

#[test]
fn palette_from_hex_string() {
	let pal = Palette::from_hex_string("// comment\n#1E3D54\n\n0xFF7F00\nE2EDF5\n").unwrap();

	assert_eq!(pal.len(), 3);
	assert_eq!(pal.colors[0].to_string(), "#1E3D54");
	assert_eq!(pal.colors[2].to_string(), "#E2EDF5");
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 2, msg: \"Not a hexadecimal color value\" }")]
fn palette_from_broken_hex_string() {
	Palette::from_hex_string("#1E3D54\nnot a color\n").unwrap();
}

#[test]
fn palette_from_json_document() {
	let pal = Palette::from_json_string(r##"{"name": "Pastel Dreams", "colors": ["#FFB3BA", "#FFDFBA", "#FFFFBA"]}"##).unwrap();

	assert_eq!(pal.name, "Pastel Dreams");
	assert_eq!(pal.len(), 3);
	assert_eq!(pal.colors[0].to_string(), "#FFB3BA");
}

#[test]
fn palette_from_json_array() {
	let pal = Palette::from_json_string(r##"["#1E3D54", "0xFF7F00"]"##).unwrap();

	assert_eq!(pal.name, "");
	assert_eq!(pal.len(), 2);
}

#[test]
#[should_panic(expected = "InvalidJsonEntry { index: 1, msg: \"\\\"not a color\\\" is not a valid hexadecimal color value\" }")]
fn palette_from_broken_json() {
	Palette::from_json_string(r##"["#1E3D54", "not a color"]"##).unwrap();
}

#[test]
fn color_display() {
	assert_eq!(Color { r: 30, g: 61, b: 84, a: 255 }.to_string(), "#1E3D54");
	assert_eq!(Color { r: 30, g: 61, b: 84, a: 128 }.to_string(), "#1E3D5480");
}
