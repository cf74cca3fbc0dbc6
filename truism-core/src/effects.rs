//! Colour math for the quote screen: touch tint, CRT flicker, scan lines.
//!
//! Colours are packed `0xRRGGBB` integers, as the display expects them.

/// Packs 8-bit channels into `0xRRGGBB`.
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
	(u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Splits `0xRRGGBB` into its channels.
pub fn unpack_rgb(color: u32) -> (u8, u8, u8) {
	(((color >> 16) & 0xFF) as u8, ((color >> 8) & 0xFF) as u8, (color & 0xFF) as u8)
}

/// Converts HSV to RGB, every channel in `[0, 1]`.
///
/// The hue is in degrees and wraps around 360; saturation and value are
/// clamped to `[0, 1]`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
	let h = h.rem_euclid(360.0) / 360.0;
	let s = s.clamp(0.0, 1.0);
	let v = v.clamp(0.0, 1.0);

	if s == 0.0 {
		return (v, v, v);
	}

	let sector = (h * 6.0).floor();
	let f = h * 6.0 - sector;
	let p = v * (1.0 - s);
	let q = v * (1.0 - s * f);
	let t = v * (1.0 - s * (1.0 - f));

	match (sector as i32).rem_euclid(6) {
		0 => (v, t, p),
		1 => (q, v, p),
		2 => (p, v, t),
		3 => (p, q, v),
		4 => (t, p, v),
		_ => (v, p, q),
	}
}

/// Tint for a touch at horizontal position `x` on a panel `width` wide.
///
/// The x position sweeps the hue wheel (`x / width * 360`) at full
/// saturation and brightness.
pub fn touch_color(x: f32, width: u32) -> u32 {
	let hue = if width == 0 { 0.0 } else { x / width as f32 * 360.0 };
	let (r, g, b) = hsv_to_rgb(hue, 1.0, 1.0);
	pack_rgb(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
}

/// Applies the CRT look to `color` at time `t` (seconds).
///
/// - a slow red/blue colour bleed, `sin(2t) * 0.1`
/// - a phosphor glow pulsing between 70% and 100%, `0.85 + 0.15 * sin(3t)`
///
/// Channels saturate at 255.
pub fn crt_effect(color: u32, t: f32) -> u32 {
	let shift = (t * 2.0).sin() * 0.1;
	let (r, g, b) = unpack_rgb(color);
	let (mut r, g, mut b) = (f32::from(r), f32::from(g), f32::from(b));

	if shift > 0.0 {
		r = (r * (1.0 + shift)).trunc();
		b = (b * (1.0 - shift * 0.5)).trunc();
	} else {
		b = (b * (1.0 - shift)).trunc();
		r = (r * (1.0 + shift * 0.5)).trunc();
	}

	let glow = 0.85 + 0.15 * (t * 3.0).sin();
	pack_rgb(channel(r * glow), channel(g * glow), channel(b * glow))
}

/// Vertical position of scan line `index` out of `count` at time `t`.
///
/// Lines are spread evenly over the height and scroll down at `speed`
/// pixels per second, wrapping at the bottom.
pub fn scan_line_y(index: usize, count: usize, height: u32, t: f32, speed: f32) -> u32 {
	if height == 0 || count == 0 {
		return 0;
	}
	let offset = (index as u32 * (height / count as u32)) as f32;
	(t * speed + offset).rem_euclid(height as f32) as u32
}

fn unit_to_byte(value: f32) -> u8 {
	(value * 255.0) as u8
}

fn channel(value: f32) -> u8 {
	value.clamp(0.0, 255.0) as u8
}
