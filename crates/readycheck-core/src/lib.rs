// Domain modules
pub mod camera;
pub mod capture;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod microphone;
pub mod mouse;
pub mod network;
pub mod probe;
pub mod selector;
pub mod system;

pub use camera::CameraProbe;
pub use capture::{CaptureLifecycle, CapturePhase, CaptureTicket};
pub use config::{MicrophoneConfig, ReadyCheckConfig, SpeedTestConfig};
pub use error::{CaptureDevice, ReadyCheckError, Result};
pub use keyboard::{
    normalize_key, KeyCap, KeyPress, KeyWidth, KeyboardProbe, ARROW_KEYS, KEYBOARD_ROWS,
};
pub use microphone::{LevelWindow, MicrophoneProbe, LEVEL_WINDOW_LEN, SOUND_THRESHOLD};
pub use mouse::{MouseProbe, Point, Region, REQUIRED_CLICKS};
pub use network::{
    run_speed_test, Grade, NetworkHost, NetworkPhase, NetworkProbe, NetworkResult,
    SimulatedSampler, SpeedSampler,
};
pub use probe::{ProbeKind, ProbeResult, ProbeStatus};
pub use selector::TestSelector;
pub use system::{Browser, DeviceType, Environment, OperatingSystem, SystemProbe, SystemSnapshot};
