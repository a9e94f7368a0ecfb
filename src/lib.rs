//! asciicam library crate.
//!
//! Renders still images and live webcam video as ASCII art. The binary is a
//! thin wrapper over [`cli::run`]; the pieces are exposed for integration
//! testing.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod event_loop;
pub mod input;
pub mod signal;
pub mod terminal;
