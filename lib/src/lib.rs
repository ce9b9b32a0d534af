//! Draggable numbered circles on a board, with an add button and a switch
//! that turns dragging on or off for every circle present.
//!
//! The `#[no_mangle]` functions below are the entry points the host calls
//! each frame; with the host's `reload` feature they are swapped in from a
//! freshly built dylib while the [`Screen`] state lives on in the host.

pub mod board;
pub mod circle;
pub mod config;
pub mod controls;
pub mod geometry;
pub mod pan;
pub mod render;
pub mod screen;

pub use board::Board;
pub use circle::DraggableCircle;
pub use config::{Config, ConfigError, WindowConfig};
pub use geometry::{BoundingBox, Point, Region, RegionError, Vector};
pub use render::{Canvas, Color};
pub use screen::{Screen, ScreenAction};

#[no_mangle]
pub fn pointer_down(screen: &mut Screen, x: f64, y: f64) -> Option<ScreenAction> {
    screen.pointer_down(Point::new(x, y))
}

#[no_mangle]
pub fn pointer_moved(screen: &mut Screen, dx: f64, dy: f64) -> Option<usize> {
    screen.pointer_moved(Vector::new(dx, dy))
}

#[no_mangle]
pub fn pointer_up(screen: &mut Screen) {
    screen.pointer_up();
}

#[no_mangle]
pub fn add_circle(screen: &mut Screen) -> usize {
    screen.add_circle()
}

#[no_mangle]
pub fn toggle_moveable(screen: &mut Screen) -> bool {
    screen.toggle_switch()
}

#[no_mangle]
pub fn render(screen: &Screen, buffer: &mut [u8], width: usize, height: usize, pitch: usize) {
    let mut canvas = Canvas::new(buffer, width, height, pitch);
    render::render_screen(screen, &mut canvas);
}
