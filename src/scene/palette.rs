//! Brand colours and the pre-formatted canvas styles shared by every frame.

use std::collections::HashMap;

/// An 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	/// Colour from a `0xRRGGBB` literal.
	pub const fn hex(value: u32) -> Self {
		Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
	}

	/// Colour from unit-range channels, clamped.
	pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
		let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
		Self(to_byte(r), to_byte(g), to_byte(b))
	}

	/// CSS `rgba(...)` string with `alpha` clamped to `[0, 1]`.
	pub fn rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {:.3})", self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
	}
}

/// Brand red.
pub const RED: Rgb = Rgb::hex(0xE60012);
/// Lighter brand red.
pub const LIGHT_RED: Rgb = Rgb::hex(0xFF3344);
/// Darker brand red.
pub const DARK_RED: Rgb = Rgb::hex(0xB8000F);
/// White.
pub const WHITE: Rgb = Rgb::hex(0xFFFFFF);
/// Tower mast red.
pub const TOWER_RED: Rgb = Rgb::hex(0xEE0033);
/// Tower platform grey.
pub const PLATFORM_GREY: Rgb = Rgb::hex(0x444444);
/// Globe wireframe red.
pub const GLOBE_RED: Rgb = Rgb::hex(0xB91C1C);
/// Floating sphere indigo.
pub const INDIGO: Rgb = Rgb::hex(0x4338CA);
/// Page background.
pub const BACKGROUND: Rgb = Rgb::hex(0x050505);
/// Black.
pub const BLACK: Rgb = Rgb::hex(0x000000);

/// Every distinct stroke/fill used by the renderer.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualVariant {
	Background,
	GlobeWire,
	GlobeCore,
	Arc,
	ArcHighlight,
	TowerRed,
	TowerWhite,
	TowerPlatform,
	Wave,
	Signal,
	BrainLink,
	CoreInner,
	CoreGlow,
	RingInner,
	RingMiddle,
	RingOuter,
	BeamRed,
	BeamWhite,
	SatelliteWhite,
	SatelliteLightRed,
	SatelliteRed,
	SatelliteDarkRed,
	Floating,
	Label,
	LabelOutline,
}

impl VisualVariant {
	/// All variants, used to fill the pool.
	pub const ALL: [VisualVariant; 25] = [
		VisualVariant::Background,
		VisualVariant::GlobeWire,
		VisualVariant::GlobeCore,
		VisualVariant::Arc,
		VisualVariant::ArcHighlight,
		VisualVariant::TowerRed,
		VisualVariant::TowerWhite,
		VisualVariant::TowerPlatform,
		VisualVariant::Wave,
		VisualVariant::Signal,
		VisualVariant::BrainLink,
		VisualVariant::CoreInner,
		VisualVariant::CoreGlow,
		VisualVariant::RingInner,
		VisualVariant::RingMiddle,
		VisualVariant::RingOuter,
		VisualVariant::BeamRed,
		VisualVariant::BeamWhite,
		VisualVariant::SatelliteWhite,
		VisualVariant::SatelliteLightRed,
		VisualVariant::SatelliteRed,
		VisualVariant::SatelliteDarkRed,
		VisualVariant::Floating,
		VisualVariant::Label,
		VisualVariant::LabelOutline,
	];

	/// Base colour and opacity.
	pub fn base(self) -> (Rgb, f64) {
		use VisualVariant::*;
		match self {
			Background => (BACKGROUND, 1.0),
			GlobeWire => (GLOBE_RED, 0.2),
			GlobeCore => (BLACK, 1.0),
			Arc => (WHITE, 0.3),
			ArcHighlight => (WHITE, 0.85),
			TowerRed => (TOWER_RED, 1.0),
			TowerWhite => (WHITE, 1.0),
			TowerPlatform => (PLATFORM_GREY, 1.0),
			Wave => (WHITE, 0.8),
			Signal => (WHITE, 1.0),
			BrainLink => (RED, 0.2),
			CoreInner => (WHITE, 0.9),
			CoreGlow => (RED, 0.4),
			RingInner => (WHITE, 0.5),
			RingMiddle => (RED, 0.4),
			RingOuter => (LIGHT_RED, 0.3),
			BeamRed => (RED, 0.2),
			BeamWhite => (WHITE, 0.2),
			SatelliteWhite => (WHITE, 0.8),
			SatelliteLightRed => (LIGHT_RED, 0.8),
			SatelliteRed => (RED, 0.8),
			SatelliteDarkRed => (DARK_RED, 0.8),
			Floating => (INDIGO, 0.45),
			Label => (WHITE, 1.0),
			LabelOutline => (BLACK, 1.0),
		}
	}
}

/// A pooled canvas style.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
	/// Base colour.
	pub color: Rgb,
	/// Base opacity.
	pub alpha: f64,
	/// Pre-formatted CSS colour at the base opacity.
	pub css: String,
}

/// Canvas styles formatted once and shared by all frames.
#[derive(Clone, Debug)]
pub struct StylePool {
	styles: HashMap<VisualVariant, Style>,
}

impl Default for StylePool {
	fn default() -> Self {
		Self::new()
	}
}

impl StylePool {
	/// Build a style for every [`VisualVariant`].
	pub fn new() -> Self {
		let styles = VisualVariant::ALL
			.iter()
			.map(|&variant| {
				let (color, alpha) = variant.base();
				let style = Style {
					color,
					alpha,
					css: color.rgba(alpha),
				};
				(variant, style)
			})
			.collect();
		Self { styles }
	}

	/// The pooled style for `variant`.
	pub fn get(&self, variant: VisualVariant) -> &Style {
		&self.styles[&variant]
	}

	/// CSS colour at the base opacity.
	pub fn css(&self, variant: VisualVariant) -> &str {
		&self.get(variant).css
	}

	/// CSS colour with the base opacity multiplied by `factor`.
	pub fn faded(&self, variant: VisualVariant, factor: f64) -> String {
		let style = self.get(variant);
		style.color.rgba(style.alpha * factor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_and_css() {
		assert_eq!(RED, Rgb(0xE6, 0x00, 0x12));
		assert_eq!(WHITE.rgba(0.5), "rgba(255, 255, 255, 0.500)");
		assert_eq!(RED.rgba(3.0), "rgba(230, 0, 18, 1.000)");
	}

	#[test]
	fn unit_channels_are_clamped() {
		assert_eq!(Rgb::from_unit(1.2, 0.5, -1.0), Rgb(255, 128, 0));
	}

	#[test]
	fn pool_covers_every_variant() {
		let pool = StylePool::new();
		for variant in VisualVariant::ALL {
			let (color, alpha) = variant.base();
			assert_eq!(pool.css(variant), color.rgba(alpha));
		}
		assert_eq!(pool.faded(VisualVariant::Arc, 2.0), "rgba(255, 255, 255, 0.600)");
	}
}
