//! Pan gesture: tracks which circle a press landed on and the translation
//! reported since the last time it was consumed.
//!
//! The screen calls [`PanGesture::take_translation`] after every motion
//! sample, which hands back the pending translation and resets it to zero,
//! so whatever consumes it only ever sees incremental deltas.

use crate::geometry::Vector;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanGesture {
    target: Option<usize>,
    translation: Vector,
}

impl PanGesture {
    pub fn begin(&mut self, target: usize) {
        self.target = Some(target);
        self.translation = Vector::ZERO;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Adds a motion sample. Ignored while no pan is active.
    pub fn translate(&mut self, delta: Vector) {
        if self.target.is_some() {
            self.translation += delta;
        }
    }

    pub fn translation(&self) -> Vector {
        self.translation
    }

    pub fn take_translation(&mut self) -> Vector {
        std::mem::take(&mut self.translation)
    }

    pub fn end(&mut self) -> Option<usize> {
        self.translation = Vector::ZERO;
        self.target.take()
    }

    pub fn cancel(&mut self) {
        self.end();
    }
}
