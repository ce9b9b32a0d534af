use crate::board::Board;
use crate::config::Config;
use crate::controls::{Button, Switch};
use crate::geometry::{Point, RegionError, Vector};
use crate::pan::PanGesture;
use crate::render::Color;
use tracing::debug;

/// What a pointer press turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Added(usize),
    MoveableChanged(bool),
    DragStarted(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background: Color,
    pub label: Color,
}

/// Owns the board and its two controls, and routes pointer input between
/// them.
#[derive(Debug, Clone)]
pub struct Screen {
    board: Board,
    add_button: Button,
    moveable_switch: Switch,
    pan: PanGesture,
    style: Style,
}

impl Screen {
    pub fn new(config: &Config) -> Result<Self, RegionError> {
        Ok(Self {
            board: Board::new(config.spawn_region()?, config.circle_fill),
            add_button: Button::new(config.add_button),
            moveable_switch: Switch::new(config.moveable_switch, true),
            pan: PanGesture::default(),
            style: Style {
                background: config.background,
                label: config.label_color,
            },
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn add_button(&self) -> &Button {
        &self.add_button
    }

    pub fn moveable_switch(&self) -> &Switch {
        &self.moveable_switch
    }

    pub fn pan(&self) -> &PanGesture {
        &self.pan
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn add_circle(&mut self) -> usize {
        self.board.add_circle()
    }

    /// Broadcasts to every current circle and moves the switch to match.
    /// Turning dragging off cancels a pan in progress.
    pub fn set_all_moveable(&mut self, moveable: bool) {
        self.moveable_switch.set_on(moveable);
        self.board.set_all_moveable(moveable);
        if !moveable && self.pan.is_active() {
            debug!(target = ?self.pan.target(), "pan cancelled");
            self.pan.cancel();
        }
    }

    pub fn toggle_switch(&mut self) -> bool {
        let on = self.moveable_switch.toggle();
        self.set_all_moveable(on);
        on
    }

    pub fn pointer_down(&mut self, point: Point) -> Option<ScreenAction> {
        if self.add_button.hit(point) {
            return Some(ScreenAction::Added(self.add_circle()));
        }
        if self.moveable_switch.hit(point) {
            return Some(ScreenAction::MoveableChanged(self.toggle_switch()));
        }
        let index = self.board.hit_test(point)?;
        self.pan.begin(index);
        debug!(index, "pan began");
        Some(ScreenAction::DragStarted(index))
    }

    /// Feeds one relative motion sample. Returns the circle that moved.
    pub fn pointer_moved(&mut self, delta: Vector) -> Option<usize> {
        let target = self.pan.target()?;
        self.pan.translate(delta);
        let translation = self.pan.take_translation();
        if translation.is_zero() {
            return None;
        }
        self.board.drag(target, translation).then_some(target)
    }

    pub fn pointer_up(&mut self) {
        if let Some(index) = self.pan.end() {
            debug!(index, "pan ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::new(&Config::default()).unwrap()
    }

    const SPAWN_CENTER: Point = Point::new(25.0, 89.0);
    const BUTTON: Point = Point::new(30.0, 30.0);
    const SWITCH: Point = Point::new(90.0, 25.0);

    #[test]
    fn test_button_press_adds_circle() {
        let mut s = screen();
        assert_eq!(s.pointer_down(BUTTON), Some(ScreenAction::Added(0)));
        assert_eq!(s.pointer_down(BUTTON), Some(ScreenAction::Added(1)));
        assert_eq!(s.board().len(), 2);
        assert_eq!(s.board().get(1).unwrap().label(), "1");
    }

    #[test]
    fn test_drag_is_incremental() {
        let mut s = screen();
        s.add_circle();
        assert_eq!(s.pointer_down(SPAWN_CENTER), Some(ScreenAction::DragStarted(0)));
        assert_eq!(s.pointer_moved(Vector::new(1.0, 1.0)), Some(0));
        assert_eq!(s.pointer_moved(Vector::new(1.0, 1.0)), Some(0));
        s.pointer_up();
        assert_eq!(s.board().get(0).unwrap().center(), Point::new(27.0, 91.0));

        // released: further motion goes nowhere
        assert_eq!(s.pointer_moved(Vector::new(10.0, 10.0)), None);
        assert_eq!(s.board().get(0).unwrap().center(), Point::new(27.0, 91.0));
    }

    #[test]
    fn test_press_on_empty_space() {
        let mut s = screen();
        s.add_circle();
        assert_eq!(s.pointer_down(Point::new(500.0, 500.0)), None);
        assert!(!s.pan().is_active());
    }

    #[test]
    fn test_switch_broadcasts() {
        let mut s = screen();
        s.add_circle();
        s.add_circle();
        assert_eq!(s.pointer_down(SWITCH), Some(ScreenAction::MoveableChanged(false)));
        assert!(s.board().circles().iter().all(|c| !c.is_moveable()));
        assert_eq!(s.pointer_down(SPAWN_CENTER), None);

        s.add_circle();
        assert!(s.board().get(2).unwrap().is_moveable());
        assert_eq!(s.pointer_down(SPAWN_CENTER), Some(ScreenAction::DragStarted(2)));
        s.pointer_up();

        assert_eq!(s.pointer_down(SWITCH), Some(ScreenAction::MoveableChanged(true)));
        assert!(s.board().circles().iter().all(|c| c.is_moveable()));
    }

    #[test]
    fn test_switch_starts_on_like_new_circles() {
        let mut s = screen();
        assert!(s.moveable_switch().is_on());
        s.add_circle();
        assert!(s.board().get(0).unwrap().is_moveable());
    }

    #[test]
    fn test_toggle_switch_flips_and_broadcasts() {
        let mut s = screen();
        s.add_circle();
        assert!(!s.toggle_switch());
        assert!(!s.moveable_switch().is_on());
        assert!(!s.board().get(0).unwrap().is_moveable());
        assert!(s.toggle_switch());
        assert!(s.moveable_switch().is_on());
        assert!(s.board().get(0).unwrap().is_moveable());
    }

    #[test]
    fn test_disabling_cancels_pan() {
        let mut s = screen();
        s.add_circle();
        s.pointer_down(SPAWN_CENTER);
        s.pointer_moved(Vector::new(5.0, 0.0));
        s.set_all_moveable(false);
        assert!(!s.pan().is_active());
        assert!(!s.moveable_switch().is_on());

        s.set_all_moveable(true);
        assert_eq!(s.pointer_moved(Vector::new(5.0, 0.0)), None);
        assert_eq!(s.board().get(0).unwrap().center(), Point::new(30.0, 89.0));
    }

    #[test]
    fn test_drag_raises_circle() {
        let mut s = screen();
        s.add_circle();
        s.add_circle();
        s.board.bring_to_front(0);
        assert_eq!(s.board().draw_order(), &[1, 0]);

        s.pointer_down(SPAWN_CENTER);
        assert_eq!(s.pan().target(), Some(0));
        s.pointer_up();

        s.board.bring_to_front(1);
        s.pointer_down(SPAWN_CENTER);
        s.pointer_moved(Vector::new(0.0, 60.0));
        assert_eq!(s.board().draw_order(), &[0, 1]);
        s.pointer_up();

        // circle 0 is now alone at the spawn point
        s.pointer_down(SPAWN_CENTER);
        s.pointer_moved(Vector::new(200.0, 0.0));
        assert_eq!(s.board().draw_order(), &[1, 0]);
    }
}
