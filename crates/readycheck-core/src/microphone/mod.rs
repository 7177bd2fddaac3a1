mod level_window;
mod probe;

pub use level_window::{LevelWindow, LEVEL_WINDOW_LEN};
pub use probe::{frame_level, MicrophoneProbe, SOUND_THRESHOLD};
