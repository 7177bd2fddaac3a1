use crate::ProbeResult;

pub const REQUIRED_CLICKS: usize = 3;

/// A position in test-region-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The bounded test area, origin at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Region {
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0.0, self.width.max(0.0)),
            y: p.y.clamp(0.0, self.height.max(0.0)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MouseProbe {
    moved: bool,
    scrolled: bool,
    clicks: Vec<Point>,
    cursor: Option<Point>,
    pub result: ProbeResult,
}

impl MouseProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.cursor.get_or_insert_with(Point::default);
    }

    pub fn leave(&mut self) {
        self.cursor = None;
    }

    /// Pointer moved over the region. The cursor marker is clamped to the bounds.
    pub fn pointer_move(&mut self, local: Point, region: Region) {
        if !self.moved {
            tracing::debug!("Mouse movement detected");
        }
        self.moved = true;
        self.cursor = Some(region.clamp(local));
        self.evaluate();
    }

    /// Returns whether the click landed inside the region and was counted.
    pub fn click(&mut self, local: Point, region: Region) -> bool {
        if !region.contains(local) {
            return false;
        }
        self.clicks.push(local);
        tracing::debug!(count = self.clicks.len(), "Mouse click registered");
        self.evaluate();
        true
    }

    /// Scrolling is reported but plays no part in the verdict.
    pub fn scroll(&mut self) {
        self.scrolled = true;
        self.evaluate();
    }

    fn evaluate(&mut self) {
        if self.result.is_passed() {
            return;
        }
        if self.clicks.len() >= REQUIRED_CLICKS && self.moved {
            tracing::info!(clicks = self.clicks.len(), "Mouse probe passed");
            self.result.pass();
        }
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn has_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn clicks(&self) -> &[Point] {
        &self.clicks
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn click_summary(&self) -> String {
        match self.clicks.len() {
            0 => "Not detected".to_string(),
            n => format!("{}/{} detected", n, REQUIRED_CLICKS),
        }
    }

    pub fn reset(&mut self) {
        self.moved = false;
        self.scrolled = false;
        self.clicks.clear();
        self.cursor = None;
        self.result.clear();
    }
}
