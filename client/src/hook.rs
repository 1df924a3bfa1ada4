use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use skwibbew_shared::{Draw, PointerTracker};

use crate::dom::element_bounds;
use crate::listener::Listener;
use crate::render::CanvasSurface;

pub type DrawCallback = Rc<dyn Fn(&Draw, &mut CanvasSurface)>;

/// Freehand pointer tracking bound to one canvas.
///
/// Press and move are canvas-scoped; release is window-scoped so letting go
/// outside the canvas still ends the stroke. Tracker state is shared by the
/// listeners rather than captured, which keeps an in-flight stroke intact
/// when the callback is swapped.
pub struct DrawHook {
    canvas: HtmlCanvasElement,
    window: Window,
    tracker: Rc<RefCell<PointerTracker>>,
    listeners: Vec<Listener>,
}

impl DrawHook {
    pub fn new(canvas: HtmlCanvasElement, window: Window) -> Self {
        Self {
            canvas,
            window,
            tracker: Rc::new(RefCell::new(PointerTracker::new())),
            listeners: Vec::new(),
        }
    }

    /// Register listeners for `on_draw`, replacing any previous set.
    pub fn attach(&mut self, on_draw: DrawCallback) -> Result<(), JsValue> {
        self.detach();

        let down = {
            let tracker = self.tracker.clone();
            let canvas = self.canvas.clone();
            let on_draw = on_draw.clone();
            Listener::add(&self.canvas, "mousedown", move |event: MouseEvent| {
                let mut surface = CanvasSurface::from_canvas(&canvas);
                tracker.borrow_mut().press(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    Some(element_bounds(&canvas)),
                    surface.as_mut(),
                    |draw, surface| on_draw(draw, surface),
                );
            })?
        };

        let moved = {
            let tracker = self.tracker.clone();
            let canvas = self.canvas.clone();
            Listener::add(&self.canvas, "mousemove", move |event: MouseEvent| {
                if !tracker.borrow().is_held() {
                    return;
                }
                let mut surface = CanvasSurface::from_canvas(&canvas);
                tracker.borrow_mut().pointer_move(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    Some(element_bounds(&canvas)),
                    surface.as_mut(),
                    |draw, surface| on_draw(draw, surface),
                );
            })?
        };

        let up = {
            let tracker = self.tracker.clone();
            Listener::add(&self.window, "mouseup", move |_: MouseEvent| {
                tracker.borrow_mut().release();
            })?
        };

        self.listeners = vec![down, moved, up];
        Ok(())
    }

    pub fn detach(&mut self) {
        self.listeners.clear();
    }

    /// Wipe the whole canvas.
    pub fn clear(&self) {
        let mut surface = CanvasSurface::from_canvas(&self.canvas);
        self.tracker.borrow().clear(surface.as_mut());
    }
}
