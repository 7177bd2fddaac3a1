use serde::{Deserialize, Serialize};

use crate::{ReadyCheckError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadyCheckConfig {
    #[serde(default)]
    pub speed: SpeedTestConfig,
    #[serde(default)]
    pub microphone: MicrophoneConfig,
}

impl ReadyCheckConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.speed.probe_url.trim().is_empty() {
            return Err(ReadyCheckError::Config("speed.probe_url is empty".to_string()));
        }
        if self.speed.probe_timeout_ms == 0 {
            return Err(ReadyCheckError::Config(
                "speed.probe_timeout_ms must be positive".to_string(),
            ));
        }
        // AnalyserNode rejects anything that is not a power of two in [32, 32768]
        let fft = self.microphone.fft_size;
        if !fft.is_power_of_two() || !(32..=32768).contains(&fft) {
            return Err(ReadyCheckError::Config(format!(
                "microphone.fft_size {} is not a power of two between 32 and 32768",
                fft
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTestConfig {
    pub probe_url: String,
    pub probe_timeout_ms: u32,
    pub latency_delay_ms: u32,
    pub download_delays_ms: Vec<u32>,
    pub upload_delay_ms: u32,
}

impl Default for SpeedTestConfig {
    fn default() -> Self {
        Self {
            probe_url: "https://www.google.com/favicon.ico".to_string(),
            probe_timeout_ms: 5000,
            latency_delay_ms: 1000,
            download_delays_ms: vec![1500, 1000],
            upload_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicrophoneConfig {
    pub fft_size: u32,
}

impl Default for MicrophoneConfig {
    fn default() -> Self {
        Self { fft_size: 256 }
    }
}
