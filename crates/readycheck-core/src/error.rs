use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureDevice {
    Microphone,
    Camera,
}

impl CaptureDevice {
    pub fn label(&self) -> &'static str {
        match self {
            CaptureDevice::Microphone => "microphone",
            CaptureDevice::Camera => "camera",
        }
    }
}

#[derive(Error, Debug)]
pub enum ReadyCheckError {
    #[error("Permission denied for {}", device.label())]
    PermissionDenied { device: CaptureDevice },

    #[error("No internet connection")]
    Offline,

    #[error("Probe failed: {0}")]
    ProbeFailed(String),

    #[error("Browser API error: {0}")]
    Browser(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReadyCheckError {
    /// Text shown inline in the probe panel.
    pub fn user_message(&self) -> String {
        match self {
            ReadyCheckError::PermissionDenied { device } => format!(
                "Could not access {}. Please check permissions.",
                device.label()
            ),
            ReadyCheckError::Offline => {
                "No internet connection detected. Please check your network and try again."
                    .to_string()
            }
            ReadyCheckError::ProbeFailed(_) | ReadyCheckError::Browser(_) => {
                "Speed test failed. Please try again.".to_string()
            }
            ReadyCheckError::Config(msg) => format!("Invalid configuration: {}", msg),
            ReadyCheckError::Json(e) => format!("Invalid configuration: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadyCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_messages() {
        let mic = ReadyCheckError::PermissionDenied {
            device: CaptureDevice::Microphone,
        };
        assert_eq!(
            mic.user_message(),
            "Could not access microphone. Please check permissions."
        );

        let cam = ReadyCheckError::PermissionDenied {
            device: CaptureDevice::Camera,
        };
        assert_eq!(
            cam.user_message(),
            "Could not access camera. Please check permissions."
        );
    }

    #[test]
    fn test_offline_message_is_distinct() {
        let offline = ReadyCheckError::Offline.user_message();
        let generic = ReadyCheckError::ProbeFailed("timer".into()).user_message();
        assert!(offline.starts_with("No internet connection"));
        assert_ne!(offline, generic);
    }
}
