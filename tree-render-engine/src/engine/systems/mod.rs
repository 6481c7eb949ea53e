//! Runtime overlay systems for diagnostics and user feedback.

/// FPS tracking and the formedness readout for the native UI overlay.
pub mod hud;
