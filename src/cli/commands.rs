//! Handlers for the render modes and the list-cameras / config subcommands.

use clap::ValueEnum;
use std::io::{self, Write};
use std::path::Path;

use super::args::{Args, ConfigAction};
use super::enums::CharacterSet;
use crate::ascii::{render_image, CharSet, DensityRamp, RenderConfig};
use crate::camera::{self, CameraSettings, Resolution};
use crate::config::{self, Config};
use crate::decode::load_image;
use crate::error::AppError;
use crate::terminal::terminal_size;

/// Build the render configuration.
///
/// Ramp precedence: `--ramp`, `--charset`, config `ramp`, config `charset`,
/// then the classic ramp. Invert is on if either the flag or the config
/// asks for it.
pub fn render_config(args: &Args, config: &Config) -> Result<RenderConfig, AppError> {
    let ramp = if let Some(ramp) = &args.ramp {
        DensityRamp::new(ramp)?
    } else if let Some(charset) = args.charset {
        CharSet::from(charset).ramp()
    } else if let Some(ramp) = &config.ascii.ramp {
        DensityRamp::new(ramp)?
    } else if let Some(name) = &config.ascii.charset {
        let charset = CharacterSet::from_str(name, true)
            .map_err(|_| AppError::Usage(format!("Unknown charset '{}' in config", name)))?;
        CharSet::from(charset).ramp()
    } else {
        CharSet::default().ramp()
    };

    Ok(RenderConfig::new(ramp, args.invert || config.ascii.invert))
}

/// Build camera settings from CLI flags over config values.
pub fn camera_settings(args: &Args, config: &Config) -> Result<CameraSettings, AppError> {
    let defaults = CameraSettings::default();

    let resolution = match (args.resolution, &config.camera.resolution) {
        (Some(resolution), _) => resolution,
        (None, Some(text)) => text.parse::<Resolution>().map_err(|e| {
            AppError::Usage(format!("Invalid camera resolution in config: {}", e))
        })?,
        (None, None) => defaults.resolution,
    };

    Ok(CameraSettings {
        device_index: args.camera.unwrap_or(config.camera.device),
        resolution,
        fps: config.camera.fps.unwrap_or(defaults.fps),
        mirror: args.mirror || config.camera.mirror,
    })
}

/// List available cameras and print them to stdout.
pub fn list_cameras() -> Result<(), AppError> {
    let devices = camera::list_devices()?;
    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
        println!("On macOS, grant access in System Settings > Privacy & Security > Camera.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Use --camera <index> to select a camera.");
    }
    Ok(())
}

/// Handle config subcommand actions.
///
/// `init` writes to `--config` if given, otherwise to the default location.
pub fn handle_config_action(action: &ConfigAction, args: &Args) -> Result<(), AppError> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(args.config.as_deref())?;
            let render = render_config(args, &config)?;
            let settings = camera_settings(args, &config)?;
            print!("{}", describe(&render, &settings));
            println!();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            config::write_default(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

fn describe(render: &RenderConfig, settings: &CameraSettings) -> String {
    format!(
        "Current configuration:\n  Ramp: \"{}\"\n  Camera: {}\n  Resolution: {}\n  FPS: {}\n  Mirror: {}\n",
        render.ramp(),
        settings.device_index,
        settings.resolution,
        settings.fps,
        if settings.mirror { "yes" } else { "no" },
    )
}

/// Render an image file once to stdout.
///
/// The grid matches `size` if given, otherwise the terminal size.
pub fn render_file(
    path: &Path,
    size: Option<(u16, u16)>,
    config: &RenderConfig,
) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_file_to(&mut out, path, size, config)
}

/// Render an image file once to `out`.
///
/// Writes the grid size line, then the grid. Nothing is written unless the
/// image decodes, so a failure leaves no partial output.
pub fn render_file_to<W: Write>(
    out: &mut W,
    path: &Path,
    size: Option<(u16, u16)>,
    config: &RenderConfig,
) -> Result<(), AppError> {
    let image = load_image(path)?;
    let (cols, rows) = match size {
        Some(size) => size,
        None => terminal_size()?,
    };

    let grid = render_image(&image, cols, rows, config);
    write!(out, "width: {} height: {}\n{}", cols, rows, grid.to_printed())
        .and_then(|_| out.flush())
        .map_err(AppError::Terminal)
}

/// Run live webcam mode until Esc, q or Ctrl+C.
#[cfg(feature = "webcam")]
pub fn run_webcam(settings: CameraSettings, config: &RenderConfig) -> Result<(), AppError> {
    use crate::camera::CameraCapture;
    use crate::signal::{setup_ctrlc_handler, CancelSignal};
    use crate::terminal::Tui;
    use crate::{event_loop, input};

    let cancel = CancelSignal::new();
    setup_ctrlc_handler(cancel.clone())?;

    let mut capture = CameraCapture::open(settings)?;
    capture.start()?;

    let (cols, rows) = terminal_size()?;
    println!("width: {} height: {}", cols, rows);

    let mut tui = Tui::new().map_err(AppError::TerminalInit)?;
    let listener = input::spawn_listener(cancel.clone()).map_err(AppError::TerminalInit)?;

    let result = event_loop::run(&mut capture, &mut tui, config, &cancel);

    cancel.trigger();
    if listener.join().is_err() {
        log::warn!("input listener thread panicked");
    }
    capture.stop();
    let restored = tui.restore().map_err(AppError::TerminalInit);

    result.and(restored)
}

#[cfg(not(feature = "webcam"))]
pub fn run_webcam(_settings: CameraSettings, _config: &RenderConfig) -> Result<(), AppError> {
    Err(AppError::Usage(
        "webcam support was not compiled in (enable the `webcam` feature)".to_string(),
    ))
}
