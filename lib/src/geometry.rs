use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// relative displacement reported by one pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, v: Vector) {
        self.x += v.dx;
        self.y += v.dy;
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        self.dx += other.dx;
        self.dy += other.dy;
    }
}

/// axis-aligned rectangle, origin at top-left
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegionError {
    #[error("region radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

/// Circle backing every draggable label.
///
/// The radius is always positive; use [`Region::new`] or
/// [`Region::from_bounding_box`] to build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Point,
    radius: f64,
}

impl Region {
    pub fn new(center: Point, radius: f64) -> Result<Self, RegionError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RegionError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Inscribes a circle in `frame`. The radius comes from the width; the
    /// center is the center of the box on both axes.
    pub fn from_bounding_box(frame: BoundingBox) -> Result<Self, RegionError> {
        Self::new(frame.center(), frame.width / 2.0)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}
