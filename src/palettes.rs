use cls_rs::palettes::palette::{Color, Palette};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum BuiltInPalette {
	Rainbow,
	Pastel,
	Grayscale,
}

fn named_palette(name: &str, colors: &[u32]) -> Palette {
	let mut pal = Palette::new(name);
	for &c in colors {
		pal.push_color(Color::from(c));
	}
	pal
}

pub(crate) fn get_builtin_palette(preset: &BuiltInPalette) -> Palette {
	match preset {
		BuiltInPalette::Rainbow => named_palette("Rainbow", &[
			0xFF0000, 0xFF7F00, 0xFFFF00, 0x00FF00, 0x0000FF, 0x4B0082, 0x9400D3,
		]),
		BuiltInPalette::Pastel => named_palette("Pastel Dreams", &[
			0xFFB3BA, 0xFFDFBA, 0xFFFFBA, 0xBAFFC9, 0xBAE1FF,
		]),
		BuiltInPalette::Grayscale => {
			let mut pal = Palette::new("Grayscale");
			for v in (0_u16..256).step_by(32) {
				let v = v as u8;
				pal.push_color(Color { r: v, g: v, b: v, a: 0xFF });
			}
			pal
		}
	}
}
