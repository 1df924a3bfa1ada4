use crate::surface::Surface;
use crate::{Point, Rect};

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

/// One pen step handed to the draw callback.
///
/// `previous` is `None` exactly for the first sample after a press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Draw {
    pub current: Point,
    pub previous: Option<Point>,
}

/// Button and previous-sample bookkeeping for freehand drawing.
///
/// The tracker owns the interaction state so the draw callback stays
/// stateless and can be swapped between samples without breaking a stroke.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    button_held: bool,
    previous: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.button_held
    }

    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    /// Button pressed on the surface. Starts a fresh stroke and reports the
    /// press position as its first sample.
    pub fn press<S, F>(
        &mut self,
        client_x: f64,
        client_y: f64,
        bounds: Option<Rect>,
        surface: Option<&mut S>,
        on_draw: F,
    ) -> bool
    where
        S: Surface + ?Sized,
        F: FnOnce(&Draw, &mut S),
    {
        self.button_held = true;
        self.previous = None;
        self.sample(client_x, client_y, bounds, surface, on_draw)
    }

    /// Pointer moved. Dispatches a draw only while the button is held and both
    /// the surface and the local point are available.
    pub fn pointer_move<S, F>(
        &mut self,
        client_x: f64,
        client_y: f64,
        bounds: Option<Rect>,
        surface: Option<&mut S>,
        on_draw: F,
    ) -> bool
    where
        S: Surface + ?Sized,
        F: FnOnce(&Draw, &mut S),
    {
        if !self.button_held {
            return false;
        }
        self.sample(client_x, client_y, bounds, surface, on_draw)
    }

    /// Button released anywhere in the window.
    pub fn release(&mut self) {
        self.button_held = false;
        self.previous = None;
    }

    /// Erase the whole surface. Does not touch stroke state.
    pub fn clear<S: Surface + ?Sized>(&self, surface: Option<&mut S>) {
        if let Some(surface) = surface {
            surface.clear_all();
        }
    }

    fn sample<S, F>(
        &mut self,
        client_x: f64,
        client_y: f64,
        bounds: Option<Rect>,
        surface: Option<&mut S>,
        on_draw: F,
    ) -> bool
    where
        S: Surface + ?Sized,
        F: FnOnce(&Draw, &mut S),
    {
        let Some(surface) = surface else {
            return false;
        };
        let Some(current) = bounds.and_then(|rect| rect.local_point(client_x, client_y)) else {
            return false;
        };
        let draw = Draw {
            current,
            previous: self.previous,
        };
        on_draw(&draw, surface);
        self.previous = Some(current);
        true
    }
}
