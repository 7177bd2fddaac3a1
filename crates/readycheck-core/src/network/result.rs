use serde::{Deserialize, Serialize};

pub const MAX_LATENCY_MS: u32 = 100;
pub const MIN_DOWNLOAD_MBPS: u32 = 5;
pub const MIN_UPLOAD_MBPS: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResult {
    pub latency_ms: Option<u32>,
    pub download_mbps: Option<u32>,
    pub upload_mbps: Option<u32>,
}

impl NetworkResult {
    pub fn latency_ok(&self) -> Option<bool> {
        self.latency_ms.map(|v| v < MAX_LATENCY_MS)
    }

    pub fn download_ok(&self) -> Option<bool> {
        self.download_mbps.map(|v| v > MIN_DOWNLOAD_MBPS)
    }

    pub fn upload_ok(&self) -> Option<bool> {
        self.upload_mbps.map(|v| v > MIN_UPLOAD_MBPS)
    }

    /// Pass/fail once all three measurements are in.
    pub fn verdict(&self) -> Option<bool> {
        Some(self.latency_ok()? && self.download_ok()? && self.upload_ok()?)
    }

    pub fn latency_grade(&self) -> Grade {
        match self.latency_ms {
            None => Grade::Unknown,
            Some(v) if v < 50 => Grade::Good,
            Some(v) if v < MAX_LATENCY_MS => Grade::Fair,
            Some(_) => Grade::Poor,
        }
    }

    pub fn download_grade(&self) -> Grade {
        match self.download_mbps {
            None => Grade::Unknown,
            Some(v) if v > 10 => Grade::Good,
            Some(v) if v > MIN_DOWNLOAD_MBPS => Grade::Fair,
            Some(_) => Grade::Poor,
        }
    }

    pub fn upload_grade(&self) -> Grade {
        match self.upload_mbps {
            None => Grade::Unknown,
            Some(v) if v > 5 => Grade::Good,
            Some(v) if v > MIN_UPLOAD_MBPS => Grade::Fair,
            Some(_) => Grade::Poor,
        }
    }

    pub fn latency_fill(&self) -> f64 {
        gauge_fill(self.latency_ms, 200)
    }

    pub fn download_fill(&self) -> f64 {
        gauge_fill(self.download_mbps, 100)
    }

    pub fn upload_fill(&self) -> f64 {
        gauge_fill(self.upload_mbps, 50)
    }
}

fn gauge_fill(value: Option<u32>, full_scale: u32) -> f64 {
    value.map_or(0.0, |v| v.min(full_scale) as f64 / full_scale as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Unknown,
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn css_class(&self) -> &'static str {
        match self {
            Grade::Unknown => "gauge unknown",
            Grade::Good => "gauge good",
            Grade::Fair => "gauge fair",
            Grade::Poor => "gauge poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(latency: u32, download: u32, upload: u32) -> NetworkResult {
        NetworkResult {
            latency_ms: Some(latency),
            download_mbps: Some(download),
            upload_mbps: Some(upload),
        }
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(result(30, 40, 10).verdict(), Some(true));
        assert_eq!(result(150, 40, 10).verdict(), Some(false));
        assert_eq!(result(100, 40, 10).verdict(), Some(false));
        assert_eq!(result(99, 5, 10).verdict(), Some(false));
        assert_eq!(result(99, 6, 2).verdict(), Some(false));
        assert_eq!(result(99, 6, 3).verdict(), Some(true));
    }

    #[test]
    fn test_verdict_waits_for_all_phases() {
        let partial = NetworkResult {
            latency_ms: Some(30),
            download_mbps: Some(40),
            upload_mbps: None,
        };
        assert_eq!(partial.verdict(), None);
        assert_eq!(NetworkResult::default().verdict(), None);
    }

    #[test]
    fn test_grades() {
        let r = result(49, 11, 6);
        assert_eq!(r.latency_grade(), Grade::Good);
        assert_eq!(r.download_grade(), Grade::Good);
        assert_eq!(r.upload_grade(), Grade::Good);

        let r = result(99, 10, 5);
        assert_eq!(r.latency_grade(), Grade::Fair);
        assert_eq!(r.download_grade(), Grade::Fair);
        assert_eq!(r.upload_grade(), Grade::Fair);

        let r = result(100, 5, 2);
        assert_eq!(r.latency_grade(), Grade::Poor);
        assert_eq!(r.download_grade(), Grade::Poor);
        assert_eq!(r.upload_grade(), Grade::Poor);

        assert_eq!(NetworkResult::default().latency_grade(), Grade::Unknown);
    }

    #[test]
    fn test_gauge_fill_caps_at_full_scale() {
        let r = result(400, 50, 50);
        assert_eq!(r.latency_fill(), 1.0);
        assert_eq!(r.download_fill(), 0.5);
        assert_eq!(r.upload_fill(), 1.0);
        assert_eq!(NetworkResult::default().download_fill(), 0.0);
    }
}
