use crate::geometry::{BoundingBox, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub frame: BoundingBox,
}

impl Button {
    pub fn new(frame: BoundingBox) -> Self {
        Self { frame }
    }

    pub fn hit(&self, point: Point) -> bool {
        self.frame.contains(point)
    }
}

/// On/off switch; pressing anywhere inside the frame flips it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Switch {
    pub frame: BoundingBox,
    on: bool,
}

impl Switch {
    pub fn new(frame: BoundingBox, on: bool) -> Self {
        Self { frame, on }
    }

    pub fn hit(&self, point: Point) -> bool {
        self.frame.contains(point)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }
}
