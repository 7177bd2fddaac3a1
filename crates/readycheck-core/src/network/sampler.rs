use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of speed-test measurements.
pub trait SpeedSampler {
    fn latency_ms(&mut self) -> u32;
    fn download_mbps(&mut self) -> u32;
    fn upload_mbps(&mut self) -> u32;
}

/// Draws plausible numbers instead of timing real transfers.
#[derive(Debug, Clone)]
pub struct SimulatedSampler<R: Rng = SmallRng> {
    rng: R,
}

impl SimulatedSampler<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SimulatedSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SpeedSampler for SimulatedSampler<R> {
    fn latency_ms(&mut self) -> u32 {
        self.rng.gen_range(20..70)
    }

    fn download_mbps(&mut self) -> u32 {
        self.rng.gen_range(10..60)
    }

    fn upload_mbps(&mut self) -> u32 {
        self.rng.gen_range(5..25)
    }
}
