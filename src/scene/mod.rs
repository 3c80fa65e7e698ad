//! Per-frame procedural animation for the landing scene.
//!
//! These modules only compute positions, colours and timings; drawing
//! happens in the canvas component.

pub mod brain;
pub mod camera;
pub mod clock;
pub mod config;
pub mod floating;
pub mod globe;
pub mod highlight;
pub mod palette;
pub mod particles;
pub mod satellites;
pub mod towers;

pub use camera::{Camera, Projected};
pub use clock::{ClockState, HoverClock, effective_time};
pub use config::SceneConfig;
pub use palette::{StylePool, VisualVariant};
