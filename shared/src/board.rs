use crate::eraser::EraserDrag;
use crate::layout::BoardLayout;
use crate::pen::render_stroke;
use crate::surface::Surface;
use crate::tracker::Draw;
use crate::Rect;

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

/// Page-level controller: decides what a pen step does and owns the eraser.
#[derive(Clone, Debug)]
pub struct Board {
    layout: BoardLayout,
    eraser: EraserDrag,
}

impl Board {
    pub fn new(layout: BoardLayout) -> Self {
        let eraser = EraserDrag::from_layout(&layout);
        Self { layout, eraser }
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn eraser(&self) -> &EraserDrag {
        &self.eraser
    }

    pub fn is_erasing(&self) -> bool {
        self.eraser.is_erasing()
    }

    /// Draw callback for the pointer tracker. The eraser owns the surface
    /// while erase mode is on, so pen steps are dropped.
    pub fn on_draw<S: Surface + ?Sized>(&self, draw: &Draw, surface: &mut S) {
        if self.eraser.is_erasing() {
            return;
        }
        render_stroke(draw, surface, &self.layout.stroke);
    }

    pub fn eraser_press<S: Surface + ?Sized>(
        &mut self,
        client_x: f64,
        bounds: Option<Rect>,
        surface: Option<&mut S>,
    ) {
        let local_x = bounds.and_then(|rect| rect.local_x(client_x));
        self.eraser.press(local_x, surface);
    }

    /// Returns the widget's new CSS `left` when the drag moved it.
    pub fn eraser_move<S: Surface + ?Sized>(
        &mut self,
        client_x: f64,
        bounds: Option<Rect>,
        surface: Option<&mut S>,
    ) -> Option<f64> {
        let local_x = bounds.and_then(|rect| rect.local_x(client_x));
        let offset = self.eraser.drag_to(local_x, surface)?;
        Some(self.layout.eraser_left(offset))
    }

    pub fn pointer_release(&mut self) {
        self.eraser.release();
    }

    pub fn region_click(&mut self) -> bool {
        self.eraser.region_click()
    }

    pub fn eraser_left(&self) -> f64 {
        self.layout.eraser_left(self.eraser.offset())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardLayout::default())
    }
}
