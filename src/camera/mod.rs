//! Camera capture module for webcam access and frame capture.
//!
//! This module provides:
//! - Device enumeration via [`list_devices`]
//! - Pull-based capture via [`CameraCapture`] and the [`FrameSource`] trait
//! - Configuration via [`CameraSettings`] and [`Resolution`]
//!
//! Hardware access requires the `webcam` feature (on by default).

#[cfg(feature = "webcam")]
mod capture;
#[cfg(feature = "webcam")]
mod device;
mod frame_utils;
mod types;

#[cfg(feature = "webcam")]
pub use capture::CameraCapture;
#[cfg(feature = "webcam")]
pub use device::list_devices;
pub use frame_utils::mirror_horizontal;
pub use types::{
    CameraError, CameraInfo, CameraSettings, Frame, FrameSource, Resolution,
};

/// Without the `webcam` feature there are no devices to list.
#[cfg(not(feature = "webcam"))]
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    Err(CameraError::Unsupported)
}
