use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::SceneState;
use crate::network::DVec3;
use crate::scene::VisualVariant;
use crate::scene::brain::{self, DATA_RINGS};
use crate::scene::satellites::{self, CORE_SPIN};
use crate::scene::towers::{self, MAST_SECTIONS, PLATFORM_HEIGHT, WAVE_BASE_RADIUS, WAVE_OFFSETS};

pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(state.styles.css(VisualVariant::Background));
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_particles(state, ctx);
	draw_floating(state, ctx);
	draw_globe(state, ctx);
	draw_arcs(state, ctx);
	draw_towers(state, ctx);
	draw_signals(state, ctx);
	draw_brain(state, ctx);
	draw_satellites(state, ctx);
}

/// Add a projected polyline to the current path, breaking at culled points.
fn trace(state: &SceneState, ctx: &CanvasRenderingContext2d, points: impl IntoIterator<Item = DVec3>) {
	let mut pen_down = false;
	for p in points {
		match state.project(p) {
			Some(s) if pen_down => ctx.line_to(s.x, s.y),
			Some(s) => {
				ctx.move_to(s.x, s.y);
				pen_down = true;
			}
			None => pen_down = false,
		}
	}
}

fn disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius.max(0.5), 0.0, TAU);
}

fn draw_particles(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let t = state.elapsed;
	for (i, particle) in state.particles.iter().enumerate() {
		let world = state.config.brain_to_world(particle.position(i, t));
		let Some(p) = state.project(world) else {
			continue;
		};
		let size = (0.03 * state.config.brain_scale * p.scale).max(1.0);
		ctx.set_fill_style_str(&state.particle_styles[i]);
		ctx.fill_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
	}
}

fn draw_floating(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let (sphere, t) = (&state.floating, state.elapsed);
	let center = sphere.center + DVec3::Y * sphere.bob(t);
	if let Some(c) = state.project(center) {
		ctx.set_fill_style_str(&state.styles.faded(VisualVariant::Floating, 0.3));
		disc(ctx, c.x, c.y, sphere.radius * c.scale);
		ctx.fill();
	}

	ctx.set_stroke_style_str(state.styles.css(VisualVariant::Floating));
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for line in &state.floating_wireframe {
		trace(state, ctx, line.iter().map(|&p| sphere.to_world(p, t)));
	}
	ctx.stroke();
}

fn draw_globe(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let globe = &state.globe;
	if let Some(c) = state.project(globe.center) {
		ctx.set_fill_style_str(state.styles.css(VisualVariant::GlobeCore));
		disc(ctx, c.x, c.y, globe.radius * 0.985 * c.scale);
		ctx.fill();
	}

	let t = state.elapsed;
	ctx.set_stroke_style_str(state.styles.css(VisualVariant::GlobeWire));
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for line in &state.wireframe {
		for pair in line.windows(2) {
			let (a, b) = (globe.to_world(pair[0], t), globe.to_world(pair[1], t));
			if state.globe_faces_camera(a) && state.globe_faces_camera(b) {
				trace(state, ctx, [a, b]);
			}
		}
	}
	ctx.stroke();
}

fn draw_arcs(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let connectors = &state.layout.connectors;
	let Some(per_edge) = connectors.points.len().checked_div(connectors.edges.len()) else {
		return;
	};
	if per_edge == 0 {
		return;
	}

	let (dash, gap) = (6.0, 4.0);
	let dash_offset = -(state.elapsed * 30.0) % (dash + gap);
	let t = state.highlight();
	let active = state.has_active_highlight();
	let highlight_boost = state.styles.get(VisualVariant::ArcHighlight).alpha
		/ state.styles.get(VisualVariant::Arc).alpha;

	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(dash_offset);

	for (edge, points) in connectors.edges.iter().zip(connectors.points.chunks_exact(per_edge)) {
		let (factor, width) = if active && state.is_edge_highlighted(edge) {
			(1.0 + (highlight_boost - 1.0) * t, 1.0 + 0.6 * t)
		} else if active {
			(1.0 - 0.6 * t, 1.0)
		} else {
			(1.0, 1.0)
		};
		ctx.set_stroke_style_str(&state.styles.faded(VisualVariant::Arc, factor));
		ctx.set_line_width(width);
		ctx.begin_path();
		for pair in points.chunks_exact(2) {
			let a = state.globe.to_world(pair[0], state.elapsed);
			let b = state.globe.to_world(pair[1], state.elapsed);
			if state.globe_faces_camera(a) && state.globe_faces_camera(b) {
				trace(state, ctx, [a, b]);
			}
		}
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_towers(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let t = state.highlight();
	let has_highlight = state.has_active_highlight();

	for node in &state.layout.nodes {
		let id = node.id;
		let base = state.tower_world(id, 0.0);
		if !state.globe_faces_camera(base) {
			continue;
		}
		let dimmed = has_highlight && !state.is_highlighted(id);
		ctx.set_global_alpha(if dimmed { 1.0 - 0.6 * t } else { 1.0 });

		for &(from, to, variant) in &MAST_SECTIONS {
			let (a, b) = (state.tower_world(id, from), state.tower_world(id, to));
			let Some(pa) = state.project(a) else {
				continue;
			};
			let taper = 1.0 - from * 0.8;
			ctx.set_stroke_style_str(state.styles.css(variant));
			ctx.set_line_width((0.18 * taper * pa.scale).max(1.0));
			ctx.begin_path();
			trace(state, ctx, [a, b]);
			ctx.stroke();
		}

		if let Some(p) = state.project(state.tower_world(id, PLATFORM_HEIGHT)) {
			ctx.set_fill_style_str(state.styles.css(VisualVariant::TowerPlatform));
			disc(ctx, p.x, p.y, 0.1 * p.scale);
			ctx.fill();
		}

		if let Some(head) = state.project(state.tower_head_world(id)) {
			ctx.set_line_width(1.0);
			for offset in WAVE_OFFSETS {
				let ring = towers::wave_ring(state.elapsed, offset, node.phase);
				if ring.opacity <= 0.0 {
					continue;
				}
				ctx.set_stroke_style_str(&state.styles.faded(VisualVariant::Wave, ring.opacity / 0.8));
				ctx.begin_path();
				let _ = ctx.arc(head.x, head.y, WAVE_BASE_RADIUS * ring.scale * head.scale, 0.0, TAU);
				ctx.stroke();
			}

			if has_highlight && state.is_highlighted(id) && t > 0.01 {
				draw_glow(ctx, head.x, head.y, head.scale, state.is_hovered(id), t);
			}
		}
		ctx.set_global_alpha(1.0);
	}
}

fn draw_glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, scale: f64, hovered: bool, t: f64) {
	let (inner, outer) = if hovered {
		(0.1 * scale, (0.4 + 0.3 * t) * scale)
	} else {
		(0.1 * scale, (0.25 + 0.15 * t) * scale)
	};
	let Ok(gradient) = ctx.create_radial_gradient(x, y, inner, x, y, outer) else {
		return;
	};
	let alpha = if hovered { 0.45 * t } else { 0.25 * t };
	let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {alpha})"));
	let _ = gradient.add_color_stop(0.6, &format!("rgba(255, 80, 90, {})", alpha * 0.3));
	let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
	disc(ctx, x, y, outer);
	ctx.set_fill_style_canvas_gradient(&gradient);
	ctx.fill();
}

fn draw_signals(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let from = state.config.brain_center;
	ctx.set_fill_style_str(state.styles.css(VisualVariant::Signal));
	for signal in &state.signals {
		let to = state.tower_head_world(signal.target);
		let Some(p) = state.project(signal.position(from, to)) else {
			continue;
		};
		disc(ctx, p.x, p.y, 0.1 * signal.pulse() * p.scale);
		ctx.fill();
	}
}

fn draw_brain(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let t = state.elapsed;
	let config = &state.config;
	let cloud: Vec<DVec3> = state
		.brain
		.points
		.iter()
		.map(|p| config.brain_to_world(brain::cloud_transform(p.position, t)))
		.collect();

	ctx.set_stroke_style_str(state.styles.css(VisualVariant::BrainLink));
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for &(i, j) in &state.brain.links {
		trace(state, ctx, [cloud[i], cloud[j]]);
	}
	ctx.stroke();

	for (world, style) in cloud.iter().zip(&state.brain_styles) {
		if let Some(p) = state.project(*world) {
			ctx.set_fill_style_str(style);
			disc(ctx, p.x, p.y, 0.04 * config.brain_scale * p.scale);
			ctx.fill();
		}
	}

	for (index, ring) in DATA_RINGS.iter().enumerate() {
		ctx.set_stroke_style_str(state.styles.css(ring.variant));
		ctx.set_line_width(ring.line_width);
		ctx.begin_path();
		trace(
			state,
			ctx,
			brain::ring_points(index, t, 96).into_iter().map(|p| config.brain_to_world(p)),
		);
		ctx.stroke();
	}

	for beam in &state.beams {
		let (_, opacity) = beam.pulse(t);
		let (a, b) = beam.endpoints(t);
		ctx.set_stroke_style_str(&state.styles.faded(beam.variant, opacity / 0.2));
		ctx.begin_path();
		trace(state, ctx, [config.brain_to_world(a), config.brain_to_world(b)]);
		ctx.stroke();
	}

	let Some(center) = state.project(config.brain_center) else {
		return;
	};
	let (inner, glow) = brain::core_pulse(t);
	let unit = config.brain_scale * center.scale;
	for (radius, variant, sides, spin) in [
		(brain::GLOW_RADIUS * glow, VisualVariant::CoreGlow, 10, -t * 0.4),
		(brain::CORE_RADIUS * inner, VisualVariant::CoreInner, 20, t * 0.6),
	] {
		ctx.set_stroke_style_str(state.styles.css(variant));
		ctx.set_line_width(1.0);
		polygon(ctx, center.x, center.y, radius * unit, sides, spin);
		spokes(ctx, center.x, center.y, radius * unit, sides / 2, spin);
		ctx.stroke();
	}
}

/// Closed regular polygon as a new path.
fn polygon(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, sides: usize, spin: f64) {
	ctx.begin_path();
	for k in 0..=sides {
		let a = spin + TAU * k as f64 / sides as f64;
		let (px, py) = (x + radius * a.cos(), y + radius * a.sin());
		if k == 0 {
			ctx.move_to(px, py);
		} else {
			ctx.line_to(px, py);
		}
	}
}

/// Diameters across a polygon, appended to the current path.
fn spokes(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, count: usize, spin: f64) {
	for k in 0..count {
		let a = spin + PI * k as f64 / count as f64;
		ctx.move_to(x + radius * a.cos(), y + radius * a.sin());
		ctx.line_to(x - radius * a.cos(), y - radius * a.sin());
	}
}

fn draw_satellites(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	for (idx, sat) in state.satellites.iter().enumerate() {
		let local_t = sat.clock.time(state.elapsed);
		let world = state.satellite_world(idx);
		let Some(p) = state.project(world) else {
			continue;
		};
		let hovered = state.hovered_satellite == Some(idx);
		let accent = sat.app.variant;

		ctx.set_stroke_style_str(state.styles.css(accent));
		ctx.set_line_width(1.0);
		polygon(ctx, p.x, p.y, 0.2 * p.scale, 5, local_t * CORE_SPIN);
		spokes(ctx, p.x, p.y, 0.2 * p.scale, 3, local_t * CORE_SPIN);
		ctx.stroke();

		ctx.set_fill_style_str(&state.styles.faded(accent, 0.5));
		disc(ctx, p.x, p.y, 0.1 * p.scale);
		ctx.fill();

		let ring = sat
			.ring_offsets(local_t, 32)
			.into_iter()
			.map(|offset| world + satellites::system_transform(offset, state.elapsed));
		ctx.set_stroke_style_str(&state.styles.faded(accent, 0.75));
		ctx.begin_path();
		trace(state, ctx, ring);
		ctx.stroke();

		if hovered {
			draw_glow(ctx, p.x, p.y, p.scale, true, 1.0);
		}

		let Some(label) = state.project(world + DVec3::new(0.0, 0.4, 0.0)) else {
			continue;
		};
		let size = (0.15 * label.scale).max(9.0);
		let weight = if hovered { "bold " } else { "" };
		ctx.set_font(&format!("{weight}{size:.1}px sans-serif"));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_line_width(2.0);
		ctx.set_stroke_style_str(state.styles.css(VisualVariant::LabelOutline));
		let _ = ctx.stroke_text(sat.app.name, label.x, label.y);
		ctx.set_fill_style_str(state.styles.css(VisualVariant::Label));
		let _ = ctx.fill_text(sat.app.name, label.x, label.y);
	}
}
