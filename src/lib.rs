//! Witch Shooter — a single-screen arcade shooter for a 128x64 monochrome
//! handheld.
//!
//! The library holds the whole game: entity data, the per-frame rules, the
//! drawing code and the Opening / Playing / Ending state machine. Everything
//! device-specific (frame pacing, buttons, clock, randomness, the frame
//! buffer) comes in through the traits in [`platform`].

pub mod compute;
pub mod entities;
pub mod game;
pub mod platform;
pub mod render;
pub mod screen;
pub mod sprites;
