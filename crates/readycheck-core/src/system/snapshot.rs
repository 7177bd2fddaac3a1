use serde::{Deserialize, Serialize};

use super::{detect_browser, detect_device_type, detect_os, leading_version};
use super::{Browser, DeviceType, OperatingSystem};
use crate::ProbeResult;

/// Browser version must be strictly above this.
pub const MIN_BROWSER_VERSION: f64 = 90.0;
pub const MIN_SCREEN_WIDTH: u32 = 1280;
pub const MIN_SCREEN_HEIGHT: u32 = 720;

/// Raw values read from the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub user_agent: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub cookies_enabled: bool,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub browser: Browser,
    pub browser_version: String,
    pub os: OperatingSystem,
    pub screen_width: u32,
    pub screen_height: u32,
    pub device_type: DeviceType,
    pub user_agent: String,
    pub cookies_enabled: bool,
    pub language: String,
}

impl SystemSnapshot {
    pub fn detect(env: &Environment) -> Self {
        let (browser, version) = detect_browser(&env.user_agent);
        Self {
            browser,
            browser_version: version.unwrap_or_else(|| "Unknown".to_string()),
            os: detect_os(&env.user_agent),
            screen_width: env.screen_width,
            screen_height: env.screen_height,
            device_type: detect_device_type(&env.user_agent),
            user_agent: env.user_agent.clone(),
            cookies_enabled: env.cookies_enabled,
            language: env.language.clone(),
        }
    }

    pub fn screen_resolution(&self) -> String {
        format!("{}x{}", self.screen_width, self.screen_height)
    }

    pub fn is_modern_browser(&self) -> bool {
        self.browser.is_supported()
            && leading_version(&self.browser_version).is_some_and(|v| v > MIN_BROWSER_VERSION)
    }

    pub fn has_hd_resolution(&self) -> bool {
        self.screen_width >= MIN_SCREEN_WIDTH && self.screen_height >= MIN_SCREEN_HEIGHT
    }

    /// Cookies are reported alongside but do not affect the verdict.
    pub fn meets_requirements(&self) -> bool {
        self.is_modern_browser() && self.has_hd_resolution()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemProbe {
    snapshot: Option<SystemSnapshot>,
    pub result: ProbeResult,
}

impl SystemProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&SystemSnapshot> {
        self.snapshot.as_ref()
    }

    /// Re-read everything from scratch; nothing carries over between refreshes.
    pub fn refresh(&mut self, env: &Environment) -> &SystemSnapshot {
        self.snapshot = None;
        self.result.clear();

        let snapshot = SystemSnapshot::detect(env);
        let passed = snapshot.meets_requirements();
        tracing::info!(
            browser = snapshot.browser.label(),
            version = %snapshot.browser_version,
            os = snapshot.os.label(),
            resolution = %snapshot.screen_resolution(),
            passed,
            "System snapshot taken"
        );
        self.result.set(passed);
        self.snapshot.insert(snapshot)
    }

    pub fn reset(&mut self) {
        self.snapshot = None;
        self.result.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(ua: &str, width: u32, height: u32) -> Environment {
        Environment {
            user_agent: ua.to_string(),
            screen_width: width,
            screen_height: height,
            cookies_enabled: true,
            language: "en-US".to_string(),
        }
    }

    fn chrome(version: &str) -> String {
        format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            version
        )
    }

    #[test]
    fn test_modern_chrome_on_full_hd_passes() {
        let mut probe = SystemProbe::new();
        let snapshot = probe.refresh(&env(&chrome("120.0.0.0"), 1920, 1080));
        assert_eq!(snapshot.browser, Browser::Chrome);
        assert_eq!(snapshot.screen_resolution(), "1920x1080");
        assert_eq!(snapshot.device_type, DeviceType::Desktop);
        assert_eq!(probe.result.passed, Some(true));
    }

    #[test]
    fn test_old_chrome_fails() {
        let mut probe = SystemProbe::new();
        probe.refresh(&env(&chrome("80.0.3987.149"), 1920, 1080));
        assert_eq!(probe.result.passed, Some(false));
    }

    #[test]
    fn test_version_boundary_is_strict() {
        let mut probe = SystemProbe::new();
        probe.refresh(&env(&chrome("90.0.0.0"), 1920, 1080));
        assert_eq!(probe.result.passed, Some(false));
        probe.refresh(&env(&chrome("91.0.0.0"), 1920, 1080));
        assert_eq!(probe.result.passed, Some(true));
    }

    #[test]
    fn test_unsupported_browser_fails_regardless_of_version() {
        let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/999.0 Safari/605.1.15";
        let mut probe = SystemProbe::new();
        probe.refresh(&env(safari, 2560, 1440));
        assert_eq!(probe.result.passed, Some(false));

        probe.refresh(&env("Opera/9.80 (Windows NT 6.1) Presto/2.12", 2560, 1440));
        assert_eq!(probe.snapshot().unwrap().browser_version, "Unknown");
        assert_eq!(probe.result.passed, Some(false));
    }

    #[test]
    fn test_resolution_policy() {
        let mut probe = SystemProbe::new();
        probe.refresh(&env(&chrome("120.0"), 1280, 720));
        assert_eq!(probe.result.passed, Some(true));
        probe.refresh(&env(&chrome("120.0"), 1279, 1080));
        assert_eq!(probe.result.passed, Some(false));
        probe.refresh(&env(&chrome("120.0"), 1920, 719));
        assert_eq!(probe.result.passed, Some(false));
    }

    #[test]
    fn test_cookies_do_not_affect_verdict() {
        let mut no_cookies = env(&chrome("120.0"), 1920, 1080);
        no_cookies.cookies_enabled = false;
        let mut probe = SystemProbe::new();
        probe.refresh(&no_cookies);
        assert_eq!(probe.result.passed, Some(true));
        assert!(!probe.snapshot().unwrap().cookies_enabled);
    }

    #[test]
    fn test_refresh_replaces_snapshot() {
        let mut probe = SystemProbe::new();
        probe.refresh(&env(&chrome("120.0"), 1920, 1080));
        probe.refresh(&env(&chrome("120.0"), 800, 600));
        assert_eq!(probe.snapshot().unwrap().screen_resolution(), "800x600");
        assert_eq!(probe.result.passed, Some(false));

        probe.reset();
        assert_eq!(probe, SystemProbe::new());
    }
}
