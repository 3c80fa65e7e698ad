//! Leptos components.

pub mod scene_canvas;
