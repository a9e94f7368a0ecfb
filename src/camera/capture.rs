//! Camera capture handle: a pull-based frame source over nokhwa.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;

use super::device::list_devices;
use super::frame_utils::{convert_to_rgb, mirror_horizontal};
use super::types::{CameraError, CameraSettings, Frame, FrameSource, Resolution};

/// Camera capture handle.
///
/// Frames are read synchronously on the caller's thread, one at a time.
/// Each driver buffer is converted into an owned [`Frame`] and dropped
/// before `read_frame` returns, which hands it back to the driver's pool.
pub struct CameraCapture {
    camera: Camera,
    settings: CameraSettings,
    streaming: bool,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("streaming", &self.streaming)
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera with the specified settings.
    ///
    /// The stream is not started until `start()` is called.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - If the device index doesn't exist
    /// * `CameraError::PermissionDenied` - If camera access is denied (macOS)
    /// * `CameraError::OpenFailed` - If no requested format could be negotiated
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let devices = list_devices()?;
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(CameraError::DeviceNotFound(settings.device_index));
        }

        let index = CameraIndex::Index(settings.device_index);
        let camera = open_camera_with_fallback(&index, &settings)?;

        Ok(Self {
            camera,
            settings,
            streaming: false,
        })
    }

    /// The resolution the driver actually negotiated.
    pub fn actual_resolution(&self) -> Resolution {
        let res = self.camera.resolution();
        Resolution {
            width: res.width(),
            height: res.height(),
        }
    }

    /// The frame rate the driver actually negotiated.
    pub fn actual_fps(&self) -> u32 {
        self.camera.frame_rate()
    }

    /// Start the video stream.
    ///
    /// # Errors
    /// * `CameraError::StreamFailed` - If the camera stream fails to start
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.streaming {
            return Ok(());
        }

        self.camera
            .open_stream()
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;
        self.streaming = true;

        log::info!(
            "camera {} streaming at {} ({} fps)",
            self.settings.device_index,
            self.actual_resolution(),
            self.actual_fps()
        );
        Ok(())
    }

    /// Stop the video stream. Safe to call more than once.
    pub fn stop(&mut self) {
        if self.streaming {
            self.streaming = false;
            if let Err(e) = self.camera.stop_stream() {
                log::warn!("failed to stop camera stream: {}", e);
            }
        }
    }
}

impl FrameSource for CameraCapture {
    fn read_frame(&mut self) -> Result<Frame, CameraError> {
        if !self.streaming {
            return Err(CameraError::ReadFailed("stream not started".to_string()));
        }

        let buffer = self
            .camera
            .frame()
            .map_err(|e| CameraError::ReadFailed(e.to_string()))?;
        let mut frame = convert_to_rgb(&buffer)?;
        drop(buffer);

        if self.settings.mirror {
            mirror_horizontal(&mut frame);
        }
        Ok(frame)
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Try to open a camera with multiple format fallback strategies.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    // In order of preference:
    // 1. Closest match with MJPEG (widely supported)
    // 2. Closest match with YUYV (uncompressed, common on Linux)
    // 3. Highest resolution available (let camera decide format)
    let requested_resolution =
        nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);
    let format_attempts: Vec<RequestedFormat> = vec![
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            requested_resolution,
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            requested_resolution,
            NokhwaFrameFormat::YUYV,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = None;

    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("camera format attempt failed: {}", e);
                last_error = Some(e);
            }
        }
    }

    let message = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "no format attempts made".to_string());
    let lower = message.to_lowercase();
    if lower.contains("permission")
        || lower.contains("denied")
        || lower.contains("authorization")
    {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(message))
    }
}
