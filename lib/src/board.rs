use crate::circle::DraggableCircle;
use crate::geometry::{Point, Region, Vector};
use crate::render::Color;
use tracing::debug;

/// Append-only collection of circles.
///
/// `circles` stays in creation order (which is also label order);
/// `draw_order` holds indices into it from bottom to top.
#[derive(Debug, Clone)]
pub struct Board {
    circles: Vec<DraggableCircle>,
    draw_order: Vec<usize>,
    template: Region,
    fill: Color,
}

impl Board {
    pub fn new(template: Region, fill: Color) -> Self {
        Self {
            circles: Vec::new(),
            draw_order: Vec::new(),
            template,
            fill,
        }
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn circles(&self) -> &[DraggableCircle] {
        &self.circles
    }

    pub fn get(&self, index: usize) -> Option<&DraggableCircle> {
        self.circles.get(index)
    }

    /// bottom to top
    pub fn draw_order(&self) -> &[usize] {
        &self.draw_order
    }

    pub fn add_circle(&mut self) -> usize {
        let index = self.circles.len();
        let circle = DraggableCircle::new(self.template, index.to_string(), self.fill);
        self.circles.push(circle);
        self.draw_order.push(index);
        debug!(index, "added circle");
        index
    }

    /// Applies `moveable` to the circles present now. Circles added later
    /// start moveable regardless.
    pub fn set_all_moveable(&mut self, moveable: bool) {
        for circle in &mut self.circles {
            circle.set_moveable(moveable);
        }
        debug!(moveable, count = self.circles.len(), "broadcast moveable");
    }

    /// Applies a drag delta to one circle and raises it when it moved.
    pub fn drag(&mut self, index: usize, delta: Vector) -> bool {
        let Some(circle) = self.circles.get_mut(index) else {
            return false;
        };
        if !circle.on_drag_delta(delta) {
            return false;
        }
        self.bring_to_front(index);
        true
    }

    pub fn bring_to_front(&mut self, index: usize) {
        if let Some(pos) = self.draw_order.iter().position(|&i| i == index) {
            if pos + 1 != self.draw_order.len() {
                self.draw_order.remove(pos);
                self.draw_order.push(index);
            }
        }
    }

    /// Topmost moveable circle containing `point`. Circles that are not
    /// moveable don't take input, so the search continues beneath them.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.draw_order
            .iter()
            .rev()
            .copied()
            .find(|&i| {
                let circle = &self.circles[i];
                circle.is_moveable() && circle.region().contains(point)
            })
    }
}
