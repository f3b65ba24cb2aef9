//! # Canvas Coordinates
//!
//! Coordinate capture for the absolute layout. A click inside the canvas
//! records a container-relative position, which new elements take as their
//! initial placement. Lock mode freezes the capture state: while locked,
//! canvas clicks are ignored entirely.

use blockpage_model::Position;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bounding rectangle of the canvas container, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Edges are inclusive
    pub fn contains(&self, click: PointerClick) -> bool {
        click.client_x >= self.left
            && click.client_x <= self.left + self.width
            && click.client_y >= self.top
            && click.client_y <= self.top + self.height
    }
}

impl Default for CanvasRect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 800.0, 600.0)
    }
}

/// A pointer click in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerClick {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerClick {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Container-relative position of `click`, or `None` when it lands outside
/// the container
pub fn capture_position(click: PointerClick, rect: CanvasRect) -> Option<Position> {
    if !rect.contains(click) {
        return None;
    }

    Some(Position {
        x: (click.client_x - rect.left) as i32,
        y: (click.client_y - rect.top) as i32,
    })
}

/// Capture state and lock mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canvas {
    /// Last captured or typed position
    pub capture: Position,

    pub locked: bool,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip lock mode, returning the new state
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        debug!(locked = self.locked, "Toggled canvas lock");
        self.locked
    }

    pub fn set_x(&mut self, x: i32) {
        self.capture.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.capture.y = y;
    }

    pub fn set_capture(&mut self, position: Position) {
        self.capture = position;
    }

    /// Record a click. Returns the captured position, or `None` when the
    /// canvas is locked or the click is outside `rect`.
    pub fn click(&mut self, click: PointerClick, rect: CanvasRect) -> Option<Position> {
        if self.locked {
            return None;
        }

        let position = capture_position(click, rect)?;
        self.capture = position;
        debug!(x = position.x, y = position.y, "Captured canvas position");
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_container_relative() {
        let rect = CanvasRect::new(100.0, 50.0, 400.0, 300.0);
        let position = capture_position(PointerClick::new(130.0, 75.0), rect);
        assert_eq!(position, Some(Position::new(30, 25)));
    }

    #[test]
    fn test_capture_truncates_fractions() {
        let rect = CanvasRect::new(10.5, 0.0, 100.0, 100.0);
        let position = capture_position(PointerClick::new(20.9, 7.99), rect);
        assert_eq!(position, Some(Position::new(10, 7)));
    }

    #[test]
    fn test_click_outside_is_noop() {
        let rect = CanvasRect::new(100.0, 100.0, 50.0, 50.0);
        assert_eq!(capture_position(PointerClick::new(99.0, 120.0), rect), None);
        assert_eq!(capture_position(PointerClick::new(120.0, 151.0), rect), None);

        let mut canvas = Canvas::new();
        canvas.set_capture(Position::new(3, 4));
        assert_eq!(canvas.click(PointerClick::new(0.0, 0.0), rect), None);
        assert_eq!(canvas.capture, Position::new(3, 4));
    }

    #[test]
    fn test_edges_are_inside() {
        let rect = CanvasRect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            capture_position(PointerClick::new(10.0, 10.0), rect),
            Some(Position::new(10, 10))
        );
    }

    #[test]
    fn test_locked_canvas_ignores_clicks() {
        let mut canvas = Canvas::new();
        canvas.set_capture(Position::new(1, 1));
        assert!(canvas.toggle_lock());

        let result = canvas.click(PointerClick::new(50.0, 50.0), CanvasRect::default());

        assert_eq!(result, None);
        assert_eq!(canvas.capture, Position::new(1, 1));
    }

    #[test]
    fn test_unlocked_click_updates_capture() {
        let mut canvas = Canvas::new();
        canvas.toggle_lock();
        assert!(!canvas.toggle_lock());

        canvas.click(PointerClick::new(12.0, 34.0), CanvasRect::default());
        assert_eq!(canvas.capture, Position::new(12, 34));
    }

    #[test]
    fn test_typed_coordinates() {
        let mut canvas = Canvas::new();
        canvas.set_x(10);
        canvas.set_y(20);
        assert_eq!(canvas.capture, Position::new(10, 20));
    }
}
