//! Gesture-driven morph tree render engine.
//!
//! A camera-fed hand-openness signal drives thousands of renderable elements
//! between a dispersed cloud and an assembled tree. The vision classifier,
//! transition scheduler, and per-entity morph solver live under
//! [`engine::vision`] and [`engine::morph`]; the bevy scene composer that
//! exercises them lives under [`engine::scene`].

pub mod engine;
