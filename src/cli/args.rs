//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::camera::Resolution;
use crate::error::AppError;

/// Render images and webcam video as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciicam")]
#[command(version, about = "Render images and webcam video as ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to render (PNG, JPEG or WebP)
    #[arg(value_name = "FILE", conflicts_with_all = ["file", "webcam"])]
    pub input: Option<PathBuf>,

    /// Image to render (alternative to FILE)
    #[arg(short, long, value_name = "PATH", conflicts_with = "webcam")]
    pub file: Option<PathBuf>,

    /// Render the webcam live; quit with Esc, q or Ctrl+C
    #[arg(short, long)]
    pub webcam: bool,

    /// Camera device index (from list-cameras)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Requested capture resolution, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_resolution)]
    pub resolution: Option<Resolution>,

    /// Mirror camera horizontally
    #[arg(long)]
    pub mirror: bool,

    /// Built-in density ramp
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom density ramp, sparsest glyph first
    #[arg(long, conflicts_with = "charset")]
    pub ramp: Option<String>,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Output size COLSxROWS instead of the terminal size
    #[arg(long, value_name = "COLSxROWS", value_parser = parse_size, conflicts_with = "webcam")]
    pub size: Option<(u16, u16)>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Create default config file
    Init,
}

/// What to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Image(PathBuf),
    Webcam,
}

impl Args {
    /// Resolve the input selection.
    ///
    /// # Errors
    /// * `AppError::Usage` - If no input, or more than one, was given
    pub fn mode(&self) -> Result<Mode, AppError> {
        match (&self.input, &self.file, self.webcam) {
            (Some(path), None, false) | (None, Some(path), false) => Ok(Mode::Image(path.clone())),
            (None, None, true) => Ok(Mode::Webcam),
            (None, None, false) => Err(AppError::Usage(
                "no input given: pass FILE, --file PATH or --webcam".to_string(),
            )),
            _ => Err(AppError::Usage(
                "choose exactly one of FILE, --file PATH or --webcam".to_string(),
            )),
        }
    }
}

/// Parse and validate resolution (WIDTHxHEIGHT format)
fn parse_resolution(s: &str) -> Result<Resolution, String> {
    s.parse()
}

/// Parse and validate an output size (COLSxROWS format)
fn parse_size(s: &str) -> Result<(u16, u16), String> {
    let (cols, rows) = s
        .split_once('x')
        .ok_or_else(|| format!("Invalid size format '{}'. Use COLSxROWS (e.g., 80x24)", s))?;
    let cols: u16 = cols
        .parse()
        .map_err(|_| format!("Invalid column count '{}' in size", cols))?;
    let rows: u16 = rows
        .parse()
        .map_err(|_| format!("Invalid row count '{}' in size", rows))?;
    if cols == 0 || rows == 0 {
        return Err(format!("Size must be non-zero, got {}", s));
    }
    Ok((cols, rows))
}
