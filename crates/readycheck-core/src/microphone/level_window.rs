pub const LEVEL_WINDOW_LEN: usize = 30;

/// Fixed-capacity ring of recent volume levels. Pushing overwrites the oldest sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelWindow {
    samples: [f32; LEVEL_WINDOW_LEN],
    /// Slot the next sample will be written to; also the oldest sample.
    head: usize,
}

impl Default for LevelWindow {
    fn default() -> Self {
        Self {
            samples: [0.0; LEVEL_WINDOW_LEN],
            head: 0,
        }
    }
}

impl LevelWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: f32) {
        self.samples[self.head] = level;
        self.head = (self.head + 1) % LEVEL_WINDOW_LEN;
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let (newer, older) = self.samples.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }

    pub fn latest(&self) -> f32 {
        self.samples[(self.head + LEVEL_WINDOW_LEN - 1) % LEVEL_WINDOW_LEN]
    }

    pub fn any_above(&self, threshold: f32) -> bool {
        self.samples.iter().any(|&level| level > threshold)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
