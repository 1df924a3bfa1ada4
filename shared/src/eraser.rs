use crate::layout::BoardLayout;
use crate::surface::Surface;

#[cfg(test)]
#[path = "eraser_test.rs"]
mod eraser_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EraserPhase {
    #[default]
    Idle,
    Dragging,
}

/// Drag state for the eraser widget.
///
/// While dragging, every move clears a full-height vertical band of the
/// surface at the widget's clamped position. The offset survives between
/// drags so the widget stays where it was dropped.
#[derive(Clone, Debug)]
pub struct EraserDrag {
    phase: EraserPhase,
    erasing: bool,
    offset: f64,
    band: f64,
    min_x: f64,
}

impl EraserDrag {
    pub fn new(initial_offset: f64, band: f64, min_x: f64) -> Self {
        Self {
            phase: EraserPhase::Idle,
            erasing: false,
            offset: initial_offset,
            band,
            min_x,
        }
    }

    pub fn from_layout(layout: &BoardLayout) -> Self {
        Self::new(
            layout.eraser_initial_offset,
            layout.eraser_band,
            layout.eraser_min_x,
        )
    }

    pub fn phase(&self) -> EraserPhase {
        self.phase
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == EraserPhase::Dragging
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Press on the widget: enter erase mode and clear the band under the
    /// press. The press position is not clamped and does not move the widget.
    pub fn press<S: Surface + ?Sized>(&mut self, local_x: Option<f64>, surface: Option<&mut S>) {
        self.erasing = true;
        self.phase = EraserPhase::Dragging;
        if let (Some(x), Some(surface)) = (local_x, surface) {
            self.erase_band(x, surface);
        }
    }

    /// Window-level move during a drag. Returns the new offset when applied.
    pub fn drag_to<S: Surface + ?Sized>(
        &mut self,
        local_x: Option<f64>,
        surface: Option<&mut S>,
    ) -> Option<f64> {
        if !self.erasing || !self.is_dragging() {
            return None;
        }
        let surface = surface?;
        let x = local_x?;
        let bounded = self.clamp(x, surface.width());
        self.offset = bounded;
        self.erase_band(bounded, surface);
        Some(bounded)
    }

    /// Window-level release: leave erase mode, keep the offset.
    pub fn release(&mut self) {
        self.phase = EraserPhase::Idle;
        self.erasing = false;
    }

    /// Click on the board region. Drops a lingering erase mode without
    /// touching an active drag. Returns whether anything changed.
    pub fn region_click(&mut self) -> bool {
        if self.erasing && !self.is_dragging() {
            self.erasing = false;
            return true;
        }
        false
    }

    fn clamp(&self, x: f64, width: f64) -> f64 {
        x.min(width).max(self.min_x)
    }

    fn erase_band<S: Surface + ?Sized>(&self, x: f64, surface: &mut S) {
        let height = surface.height();
        surface.clear_rect(x - self.band / 2.0, 0.0, self.band, height);
    }
}

impl Default for EraserDrag {
    fn default() -> Self {
        Self::from_layout(&BoardLayout::default())
    }
}
