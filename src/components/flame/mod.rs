//! Particle flame effect component.
//!
//! Renders a fire-like effect on an HTML canvas with:
//! - A fixed pool of particles respawning near a moving origin
//! - An origin that eases toward the pointer while hovering
//! - A working canvas composited onto the visible one through stacked
//!   blur and blend passes for the glow
//!
//! # Example
//!
//! ```ignore
//! use flame_canvas::{FlameCanvas, FlameConfig};
//!
//! let config = FlameConfig { theme: "wisp".into(), ..Default::default() };
//!
//! view! { <FlameCanvas config=config /> }
//! ```

mod component;
mod config;
mod error;
mod math;
mod particle;
mod render;
mod scene;
pub mod theme;

pub use component::FlameCanvas;
pub use config::FlameConfig;
pub use error::SurfaceError;
pub use theme::Theme;
