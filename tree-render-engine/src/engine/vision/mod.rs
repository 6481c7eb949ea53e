//! Camera-facing half of the morph engine.
//!
//! `frame` owns the boundary to the capture collaborator; `classifier` turns
//! one frame per sample tick into the shared gesture interpretation.

pub mod classifier;
pub mod frame;
