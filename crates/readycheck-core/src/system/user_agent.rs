//! Browser identification string parsing.
//!
//! Every check is an ordered list where the first match wins. The orderings
//! carry two known precedence quirks that are kept as-is: Android strings also
//! contain "Linux" and so report Linux, and the mobile pattern runs first and
//! already claims "iPad" and "Android", so real tablets report Mobile. Only a
//! bare "Tablet" token ever reaches the tablet branch.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Browser {
    Firefox,
    Chrome,
    Safari,
    Edge,
    Unknown,
}

impl Browser {
    pub fn label(&self) -> &'static str {
        match self {
            Browser::Firefox => "Firefox",
            Browser::Chrome => "Chrome",
            Browser::Safari => "Safari",
            Browser::Edge => "Edge",
            Browser::Unknown => "Unknown",
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Browser::Chrome | Browser::Firefox | Browser::Edge)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
    Unknown,
}

impl OperatingSystem {
    pub fn label(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOs => "MacOS",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::Android => "Android",
            OperatingSystem::Ios => "iOS",
            OperatingSystem::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "Desktop",
            DeviceType::Mobile => "Mobile",
            DeviceType::Tablet => "Tablet",
        }
    }
}

static FIREFOX_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Firefox/([0-9.]+)").expect("invalid Firefox regex"));
static CHROME_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Chrome/([0-9.]+)").expect("invalid Chrome regex"));
static SAFARI_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Version/([0-9.]+)").expect("invalid Safari regex"));
static EDGE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Edg/([0-9.]+)").expect("invalid Edge regex"));

static MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Mobi|Android|iPhone|iPad|iPod").expect("invalid mobile regex")
});
static TABLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Tablet|iPad").expect("invalid tablet regex"));

fn capture_version(ua: &str, re: &Regex) -> Option<String> {
    re.captures(ua)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Browser name and version string; the version is `None` when the token is missing.
pub fn detect_browser(ua: &str) -> (Browser, Option<String>) {
    if ua.contains("Firefox") {
        return (Browser::Firefox, capture_version(ua, &FIREFOX_VERSION));
    }
    if ua.contains("Chrome") && !ua.contains("Edg") {
        return (Browser::Chrome, capture_version(ua, &CHROME_VERSION));
    }
    if ua.contains("Safari") && !ua.contains("Chrome") {
        return (Browser::Safari, capture_version(ua, &SAFARI_VERSION));
    }
    if ua.contains("Edg") {
        return (Browser::Edge, capture_version(ua, &EDGE_VERSION));
    }
    (Browser::Unknown, None)
}

pub fn detect_os(ua: &str) -> OperatingSystem {
    if ua.contains("Win") {
        OperatingSystem::Windows
    } else if ua.contains("Mac") {
        OperatingSystem::MacOs
    } else if ua.contains("Linux") {
        OperatingSystem::Linux
    } else if ua.contains("Android") {
        OperatingSystem::Android
    } else if ua.contains("iOS") || ua.contains("iPhone") || ua.contains("iPad") {
        OperatingSystem::Ios
    } else {
        OperatingSystem::Unknown
    }
}

pub fn detect_device_type(ua: &str) -> DeviceType {
    if MOBILE_PATTERN.is_match(ua) {
        DeviceType::Mobile
    } else if TABLET_PATTERN.is_match(ua) {
        DeviceType::Tablet
    } else {
        DeviceType::Desktop
    }
}

/// Numeric value of the leading `major.minor` part of a version string,
/// e.g. `"120.0.6099.71"` reads as `120.0`.
pub fn leading_version(version: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in version.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    version[..end].parse().ok()
}
