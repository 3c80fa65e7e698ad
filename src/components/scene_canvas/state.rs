use std::collections::HashSet;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::network::{DVec3, Edge, NetworkLayout};
use crate::scene::brain::{EnergyBeam, NeuralCloud};
use crate::scene::camera::{Camera, Projected};
use crate::scene::floating::FloatingObject;
use crate::scene::globe::Globe;
use crate::scene::highlight::HighlightFade;
use crate::scene::particles::{self, Particle};
use crate::scene::satellites::Satellite;
use crate::scene::towers::{self, Signal};
use crate::scene::{SceneConfig, StylePool};

pub const TOWER_HIT_RADIUS: f64 = 10.0;
pub const SATELLITE_HIT_RADIUS: f64 = 18.0;
const ORBIT_SENSITIVITY: f64 = 0.005;

#[derive(Clone, Debug, Default)]
pub struct OrbitDrag {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub yaw_start: f64,
	pub pitch_start: f64,
}

/// A hovered tower and the towers it links to.
#[derive(Clone, Debug, PartialEq)]
pub struct TowerFocus {
	pub id: usize,
	pub links: HashSet<usize>,
}

impl TowerFocus {
	fn covers(&self, idx: usize) -> bool {
		self.id == idx || self.links.contains(&idx)
	}
}

#[derive(Clone, Debug, Default)]
pub struct TowerHover {
	pub current: Option<TowerFocus>,
	/// Last focus, drawn while the highlight fades out.
	pub fading: Option<TowerFocus>,
	pub fade: HighlightFade,
}

impl TowerHover {
	fn foci(&self) -> impl Iterator<Item = &TowerFocus> {
		self.current.iter().chain(&self.fading)
	}
}

pub struct SceneState {
	pub config: SceneConfig,
	pub camera: Camera,
	pub layout: NetworkLayout,
	pub globe: Globe,
	pub wireframe: Vec<Vec<DVec3>>,
	pub floating: FloatingObject,
	pub floating_wireframe: Vec<Vec<DVec3>>,
	pub brain: NeuralCloud,
	pub brain_styles: Vec<String>,
	pub beams: Vec<EnergyBeam>,
	pub particles: Vec<Particle>,
	pub particle_styles: Vec<String>,
	pub satellites: Vec<Satellite>,
	pub signals: Vec<Signal>,
	pub styles: StylePool,
	pub hover: TowerHover,
	pub hovered_satellite: Option<usize>,
	pub orbit: OrbitDrag,
	pub width: f64,
	pub height: f64,
	pub elapsed: f64,
	rng: StdRng,
}

impl SceneState {
	pub fn new(layout: NetworkLayout, config: SceneConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = StdRng::seed_from_u64(seed);
		let globe = config.globe();
		let brain = NeuralCloud::generate(config.brain_nodes, config.brain_radius, &mut rng);
		let beams = EnergyBeam::ring(config.beam_count, &mut rng);
		let particles = particles::scatter(config.particle_count, config.particle_extent, &mut rng);
		let signals = towers::spawn_signals(config.signal_count, layout.nodes.len(), &mut rng);
		let floating = FloatingObject::spawn(config.floating_center, config.floating_radius, &mut rng);
		let unit_sphere = Globe {
			center: DVec3::ZERO,
			radius: 1.0,
		};

		Self {
			camera: config.camera(),
			wireframe: globe.wireframe(8, 16, 48),
			floating_wireframe: unit_sphere.wireframe(6, 12, 32),
			floating,
			brain_styles: brain.points.iter().map(|p| p.color.rgba(0.9)).collect(),
			particle_styles: particles.iter().map(|p| p.color.rgba(0.7)).collect(),
			satellites: Satellite::all(),
			styles: StylePool::new(),
			hover: TowerHover::default(),
			hovered_satellite: None,
			orbit: OrbitDrag::default(),
			elapsed: 0.0,
			config,
			layout,
			globe,
			brain,
			beams,
			particles,
			signals,
			width,
			height,
			rng,
		}
	}

	pub fn project(&self, p: DVec3) -> Option<Projected> {
		self.camera.project(p, self.width, self.height)
	}

	/// Whether a point on the globe surface is on the camera's side.
	pub fn globe_faces_camera(&self, world: DVec3) -> bool {
		self.globe.faces(world, self.camera.eye())
	}

	pub fn tower_world(&self, id: usize, height: f64) -> DVec3 {
		let node = &self.layout.nodes[id];
		self.globe.to_world(towers::mast_point(node, height), self.elapsed)
	}

	pub fn tower_head_world(&self, id: usize) -> DVec3 {
		let node = &self.layout.nodes[id];
		self.globe
			.to_world(towers::head(node, self.layout.radius), self.elapsed)
	}

	pub fn satellite_world(&self, idx: usize) -> DVec3 {
		self.satellites[idx].world_position(self.elapsed, self.config.brain_center)
	}

	pub fn tower_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let towers = (0..self.layout.nodes.len())
			.map(|id| (id, self.tower_head_world(id)))
			.filter(|&(_, head)| self.globe_faces_camera(head));
		self.nearest_hit(towers, sx, sy, TOWER_HIT_RADIUS)
	}

	pub fn satellite_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let satellites = (0..self.satellites.len()).map(|idx| (idx, self.satellite_world(idx)));
		self.nearest_hit(satellites, sx, sy, SATELLITE_HIT_RADIUS)
	}

	fn nearest_hit(
		&self,
		candidates: impl Iterator<Item = (usize, DVec3)>,
		sx: f64,
		sy: f64,
		radius: f64,
	) -> Option<usize> {
		candidates
			.filter_map(|(idx, world)| {
				let p = self.project(world)?;
				let d = (p.x - sx).hypot(p.y - sy);
				(d < radius).then_some((idx, d))
			})
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(idx, _)| idx)
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		self.orbit = OrbitDrag {
			active: true,
			start_x: sx,
			start_y: sy,
			yaw_start: self.camera.yaw,
			pitch_start: self.camera.pitch,
		};
	}

	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		if self.orbit.active {
			let yaw = self.orbit.yaw_start - (sx - self.orbit.start_x) * ORBIT_SENSITIVITY;
			let pitch = self.orbit.pitch_start + (sy - self.orbit.start_y) * ORBIT_SENSITIVITY;
			self.camera.orbit_to(yaw, pitch);
			return;
		}
		let tower = self.tower_at_position(sx, sy);
		self.set_hover(tower);
		let satellite = self.satellite_at_position(sx, sy);
		self.set_satellite_hover(satellite);
	}

	pub fn pointer_up(&mut self) {
		self.orbit.active = false;
	}

	pub fn pointer_left(&mut self) {
		self.orbit.active = false;
		self.set_hover(None);
		self.set_satellite_hover(None);
	}

	pub fn set_satellite_hover(&mut self, idx: Option<usize>) {
		if self.hovered_satellite == idx {
			return;
		}
		let now = self.elapsed;
		if let Some(prev) = self.hovered_satellite {
			self.satellites[prev].clock.hover_leave(now);
		}
		if let Some(next) = idx {
			self.satellites[next].clock.hover_enter(now);
			debug!("pausing satellite {}", self.satellites[next].app.name);
		}
		self.hovered_satellite = idx;
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.current.as_ref().map(|focus| focus.id) == node {
			return;
		}
		let now = self.elapsed;
		match node {
			Some(id) => {
				let links: HashSet<usize> = self.layout.adjacency.neighbors(id).iter().copied().collect();
				debug!("hovering tower {id} ({} links)", links.len());
				self.hover.fading = None;
				self.hover.current = Some(TowerFocus { id, links });
				self.hover.fade.enter(now);
			}
			None => {
				// Keep the old focus drawn until the fade-out settles
				self.hover.fading = self.hover.current.take();
				self.hover.fade.leave(now);
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.foci().any(|focus| focus.covers(idx))
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.foci().any(|focus| focus.id == idx)
	}

	pub fn is_edge_highlighted(&self, edge: &Edge) -> bool {
		self.hover.foci().any(|focus| edge.touches(focus.id))
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.foci().next().is_some()
	}

	/// Eased highlight strength for the current frame.
	pub fn highlight(&self) -> f64 {
		self.hover.fade.eased(self.elapsed)
	}

	pub fn tick(&mut self, dt: f64) {
		self.elapsed += dt;

		let towers = self.layout.nodes.len();
		for signal in &mut self.signals {
			signal.advance(dt, towers, &mut self.rng);
		}

		if self.hover.fade.settle(self.elapsed) {
			self.hover.fading = None;
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::NetworkParams;

	fn state() -> SceneState {
		let config = SceneConfig::default();
		let layout =
			NetworkLayout::generate(&NetworkParams::from(&config), &mut StdRng::seed_from_u64(8))
				.unwrap();
		SceneState::new(layout, config, 1280.0, 720.0, 8)
	}

	#[test]
	fn builds_every_layer() {
		let s = state();
		assert_eq!(s.brain.points.len(), 200);
		assert_eq!(s.brain_styles.len(), 200);
		assert_eq!(s.particles.len(), 100);
		assert_eq!(s.beams.len(), 12);
		assert_eq!(s.signals.len(), 5);
		assert_eq!(s.satellites.len(), 4);
		assert_eq!(s.floating.center, s.config.floating_center);
		assert_eq!(s.floating_wireframe.len(), 18);
	}

	#[test]
	fn hovering_a_tower_collects_its_neighbours() {
		let mut s = state();
		s.set_hover(Some(0));
		let expected: HashSet<usize> = s.layout.adjacency.neighbors(0).iter().copied().collect();
		assert_eq!(s.hover.current.as_ref().map(|focus| &focus.links), Some(&expected));
		assert!(s.is_hovered(0));
		for &n in &expected {
			assert!(s.is_highlighted(n));
			assert!(s.is_edge_highlighted(&Edge::new(0, n)));
		}
	}

	#[test]
	fn highlight_eases_in_after_a_delay_and_fades_out() {
		let mut s = state();
		s.set_hover(Some(3));
		s.tick(0.05);
		assert_eq!(s.highlight(), 0.0);
		for _ in 0..200 {
			s.tick(0.016);
		}
		assert!(s.highlight() > 0.9);

		s.set_hover(None);
		assert_eq!(s.hover.fading.as_ref().map(|focus| focus.id), Some(3));
		assert!(s.is_hovered(3));
		assert!(s.has_active_highlight());
		for _ in 0..400 {
			s.tick(0.016);
		}
		assert_eq!(s.highlight(), 0.0);
		assert!(s.hover.fading.is_none());
		assert!(!s.has_active_highlight());
	}

	#[test]
	fn moving_between_towers_keeps_the_highlight_lit() {
		let mut s = state();
		s.set_hover(Some(0));
		s.tick(1.0);
		let lit = s.highlight();
		s.set_hover(Some(1));
		assert!(s.hover.fading.is_none());
		assert!(s.is_hovered(1));
		assert!(!s.is_hovered(0));
		s.tick(0.016);
		assert!(s.highlight() >= lit);
	}

	#[test]
	fn visible_tower_can_be_picked() {
		let s = state();
		let head = s.tower_head_world(0);
		assert!(s.globe_faces_camera(head));
		let p = s.project(head).unwrap();
		assert_eq!(s.tower_at_position(p.x, p.y), Some(0));
		assert_eq!(s.tower_at_position(-500.0, -500.0), None);
	}

	#[test]
	fn hovering_a_satellite_pauses_only_that_orbit() {
		let mut s = state();
		s.tick(1.0);
		s.set_satellite_hover(Some(1));
		assert!(s.satellites[1].clock.is_paused());
		assert!(!s.satellites[0].clock.is_paused());

		s.tick(2.0);
		assert_eq!(s.satellites[1].clock.time(s.elapsed), 1.0);

		s.pointer_left();
		assert!(!s.satellites[1].clock.is_paused());
		assert_eq!(s.satellites[1].clock.offset(), 2.0);
	}

	#[test]
	fn dragging_orbits_the_camera() {
		let mut s = state();
		s.pointer_down(100.0, 100.0);
		s.pointer_moved(200.0, 140.0);
		assert!((s.camera.yaw + 0.5).abs() < 1e-12);
		assert!((s.camera.pitch - 0.2).abs() < 1e-12);
		s.pointer_up();
		assert!(!s.orbit.active);
	}
}
