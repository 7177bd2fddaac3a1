mod probe;
mod result;
mod runner;
mod sampler;

pub use probe::{NetworkPhase, NetworkProbe};
pub use result::{
    Grade, NetworkResult, MAX_LATENCY_MS, MIN_DOWNLOAD_MBPS, MIN_UPLOAD_MBPS,
};
pub use runner::{run_speed_test, NetworkHost};
pub use sampler::{SimulatedSampler, SpeedSampler};
