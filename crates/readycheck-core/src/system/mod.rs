mod snapshot;
mod user_agent;

pub use snapshot::{
    Environment, SystemProbe, SystemSnapshot, MIN_BROWSER_VERSION, MIN_SCREEN_HEIGHT,
    MIN_SCREEN_WIDTH,
};
pub use user_agent::{
    detect_browser, detect_device_type, detect_os, leading_version, Browser, DeviceType,
    OperatingSystem,
};
