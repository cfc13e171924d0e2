use crate::core::types::Threshold;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SwipeIntent {
    Previous,
    Next,
    None,
}

/// Classify a completed gesture.
///
/// Only a mostly-horizontal movement of at least `threshold` counts. A finger
/// moving right (positive dx) goes back in time, moving left goes forward.
pub fn interpret(start_x: f64, start_y: f64, end_x: f64, end_y: f64, threshold: f64) -> SwipeIntent {
    let dx = end_x - start_x;
    let dy = end_y - start_y;
    if !dx.is_finite() || !dy.is_finite() {
        return SwipeIntent::None;
    }
    if dx.abs() < threshold || dx.abs() <= dy.abs() {
        return SwipeIntent::None;
    }
    if dx > 0.0 {
        SwipeIntent::Previous
    } else {
        SwipeIntent::Next
    }
}

/// A threshold shared by every gesture of one presenter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeInterpreter {
    threshold: Threshold,
}

impl SwipeInterpreter {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn interpret(&self, start: (f64, f64), end: (f64, f64)) -> SwipeIntent {
        interpret(start.0, start.1, end.0, end.1, self.threshold.0)
    }
}

/// Collects raw touch events for one gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct SwipeGesture {
    interpreter: SwipeInterpreter,
    start: Option<(f64, f64)>,
    last: Option<(f64, f64)>,
}

impl SwipeGesture {
    pub fn new(interpreter: SwipeInterpreter) -> Self {
        Self {
            interpreter,
            start: None,
            last: None,
        }
    }

    /// Touch start; any gesture in progress is discarded.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.last = Some((x, y));
    }

    /// Touch move; ignored when no gesture is in progress.
    pub fn update(&mut self, x: f64, y: f64) {
        if self.start.is_some() {
            self.last = Some((x, y));
        }
    }

    /// Touch end. Classifies start against the last seen point and resets.
    pub fn finish(&mut self) -> SwipeIntent {
        let intent = match (self.start, self.last) {
            (Some(start), Some(end)) => self.interpreter.interpret(start, end),
            _ => SwipeIntent::None,
        };
        self.cancel();
        intent
    }

    /// Touch end at an explicit point.
    pub fn finish_at(&mut self, x: f64, y: f64) -> SwipeIntent {
        self.update(x, y);
        self.finish()
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}
