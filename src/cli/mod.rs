//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, Mode};
pub use commands::{
    camera_settings, handle_config_action, list_cameras, render_config, render_file,
    render_file_to, run_webcam,
};
pub use enums::CharacterSet;

use crate::config::Config;
use crate::error::AppError;

/// Dispatch parsed arguments to the matching handler.
pub fn run(args: &Args) -> Result<(), AppError> {
    match &args.command {
        Some(Command::ListCameras) => list_cameras(),
        Some(Command::Config { action }) => handle_config_action(action, args),
        None => {
            // usage errors win over a broken config file
            let mode = args.mode()?;
            // --config must exist when given; the default location may be absent
            let config = Config::load(args.config.as_deref())?;
            let render = render_config(args, &config)?;
            match mode {
                Mode::Image(path) => render_file(&path, args.size, &render),
                Mode::Webcam => run_webcam(camera_settings(args, &config)?, &render),
            }
        }
    }
}
