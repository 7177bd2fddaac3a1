use crate::ProbeResult;

pub const REQUIRED_DISTINCT_KEYS: usize = 5;

/// Map a raw `KeyboardEvent.key` value to the label shown on the virtual keyboard.
pub fn normalize_key(raw: &str) -> String {
    let label = match raw {
        " " => "Space",
        "Control" => "Ctrl",
        "Meta" => "Win",
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        "Escape" => "Esc",
        other => other,
    };
    label.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    New(String),
    Repeat(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardProbe {
    /// Distinct labels in first-press order.
    pressed: Vec<String>,
    pub result: ProbeResult,
}

impl KeyboardProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, raw: &str) -> KeyPress {
        let label = normalize_key(raw);

        // The verdict looks at the set as it was before this press, so the pass
        // lands on the press that follows four distinct keys.
        let prior = self.pressed.len();

        let press = if self.is_pressed(&label) {
            KeyPress::Repeat(label)
        } else {
            self.pressed.push(label.clone());
            KeyPress::New(label)
        };

        if prior >= REQUIRED_DISTINCT_KEYS - 1 && !self.result.is_passed() {
            tracing::info!(distinct = self.pressed.len(), "Keyboard probe passed");
            self.result.pass();
        }

        press
    }

    pub fn is_pressed(&self, label: &str) -> bool {
        self.pressed.iter().any(|k| k == label)
    }

    pub fn pressed(&self) -> &[String] {
        &self.pressed
    }

    pub fn distinct_count(&self) -> usize {
        self.pressed.len()
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
        self.result.clear();
    }
}
