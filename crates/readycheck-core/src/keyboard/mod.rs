mod layout;
mod probe;

pub use layout::{KeyCap, KeyWidth, ARROW_KEYS, KEYBOARD_ROWS};
pub use probe::{normalize_key, KeyPress, KeyboardProbe, REQUIRED_DISTINCT_KEYS};
