use crate::geometry::{Point, Region, Vector};
use crate::render::Color;

/// A numbered circle on the board that follows pan deltas while moveable.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableCircle {
    region: Region,
    label: String,
    fill: Color,
    moveable: bool,
}

impl DraggableCircle {
    pub fn new(region: Region, label: impl Into<String>, fill: Color) -> Self {
        Self {
            region,
            label: label.into(),
            fill,
            moveable: true,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn center(&self) -> Point {
        self.region.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.region.center = center;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn is_moveable(&self) -> bool {
        self.moveable
    }

    pub fn set_moveable(&mut self, moveable: bool) {
        self.moveable = moveable;
    }

    /// Moves the center by `delta`. Returns false and leaves the circle
    /// untouched when it is not moveable.
    pub fn on_drag_delta(&mut self, delta: Vector) -> bool {
        if !self.moveable {
            return false;
        }
        self.region.center += delta;
        true
    }
}
