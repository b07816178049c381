//! Startup failures for the flame canvas.

use thiserror::Error;

/// Raised while acquiring the drawing surfaces. Any of these is fatal: the
/// frame loop never starts without both surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no global window")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("failed to create canvas element: {0}")]
	CreateElement(String),
	#[error("2d rendering context unavailable")]
	ContextUnavailable,
}
