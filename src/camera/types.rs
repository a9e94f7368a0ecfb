//! Camera types and data structures.

use std::fmt;
use std::str::FromStr;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Preferred capture resolution (600x400). Frames are shrunk to the
    /// terminal grid anyway, so anything larger only costs decode time.
    pub const PREFERRED: Resolution = Resolution {
        width: 600,
        height: 400,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::PREFERRED
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Parse `WIDTHxHEIGHT`, e.g. `640x480`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s.split_once('x').ok_or_else(|| {
            format!(
                "Invalid resolution format '{}'. Use WIDTHxHEIGHT (e.g., 640x480)",
                s
            )
        })?;
        let width: u32 = width
            .parse()
            .map_err(|_| format!("Invalid width '{}' in resolution", width))?;
        let height: u32 = height
            .parse()
            .map_err(|_| format!("Invalid height '{}' in resolution", height))?;
        if width == 0 || height == 0 {
            return Err(format!("Resolution must be non-zero, got {}", s));
        }
        Ok(Resolution { width, height })
    }
}

/// A captured camera frame, owned by whoever read it.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Packed RGB pixel data, row-major
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Frame {
    /// Bytes per packed RGB pixel.
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Wrap packed RGB bytes.
    pub fn rgb(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Bytes in one row of pixels.
    pub fn stride(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Requested capture resolution
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
    /// Mirror horizontally (selfie mode)
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
            mirror: false,
        }
    }
}

/// A pull-based source of frames.
///
/// Each call hands out one exclusively owned frame; whatever driver buffer
/// backed it has been released by the time the call returns, so the caller
/// may request the next frame as soon as it is done with this one.
pub trait FrameSource {
    /// Block until the next frame is available.
    ///
    /// # Errors
    /// Any error is fatal to the capture loop.
    fn read_frame(&mut self) -> Result<Frame, CameraError>;
}

/// Errors that can occur during camera operations.
#[derive(Debug)]
pub enum CameraError {
    /// Failed to query camera devices
    QueryFailed(String),
    /// Failed to open camera
    OpenFailed(String),
    /// Camera permission denied (macOS/iOS)
    PermissionDenied,
    /// Camera device not found at specified index
    DeviceNotFound(u32),
    /// Failed to start video stream
    StreamFailed(String),
    /// Reading or decoding a frame failed
    ReadFailed(String),
    /// Binary built without webcam support
    Unsupported,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::QueryFailed(msg) => write!(f, "Failed to query cameras: {}", msg),
            CameraError::OpenFailed(msg) => write!(f, "Failed to open camera: {}", msg),
            CameraError::PermissionDenied => {
                write!(
                    f,
                    "Camera permission denied. On macOS, grant access in System Settings > Privacy & Security > Camera"
                )
            }
            CameraError::DeviceNotFound(index) => {
                write!(
                    f,
                    "Camera device {} not found. Run 'asciicam list-cameras' to see available devices",
                    index
                )
            }
            CameraError::StreamFailed(msg) => write!(f, "Failed to start camera stream: {}", msg),
            CameraError::ReadFailed(msg) => write!(f, "Failed to read camera frame: {}", msg),
            CameraError::Unsupported => {
                write!(f, "This build of asciicam has no webcam support")
            }
        }
    }
}

impl std::error::Error for CameraError {}
