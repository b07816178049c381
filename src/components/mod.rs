//! UI components.

pub mod flame;
