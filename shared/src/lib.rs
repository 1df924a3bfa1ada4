//! Interaction core for the Skwibbew board.
//!
//! Everything here is independent of the browser: the wasm client feeds raw
//! mouse coordinates in and provides a [`Surface`] to draw on, so the same
//! logic runs natively under `cargo test`.

use serde::{Deserialize, Serialize};

pub mod board;
pub mod eraser;
pub mod layout;
pub mod pen;
pub mod surface;
pub mod tracker;

pub use board::Board;
pub use eraser::{EraserDrag, EraserPhase};
pub use layout::{BoardLayout, LayoutError};
pub use pen::{render_stroke, StrokeStyle};
pub use surface::Surface;
pub use tracker::{Draw, PointerTracker};

/// A point in surface-local coordinates (origin at the surface's top-left).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding rectangle in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Translate a viewport point into this rectangle's local space.
    ///
    /// Returns `None` for a collapsed rectangle (element detached or hidden).
    pub fn local_point(&self, client_x: f64, client_y: f64) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Point {
            x: client_x - self.left,
            y: client_y - self.top,
        })
    }

    pub fn local_x(&self, client_x: f64) -> Option<f64> {
        self.local_point(client_x, self.top).map(|point| point.x)
    }
}
