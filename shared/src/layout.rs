//! Board geometry and pen settings.
//!
//! Defaults reproduce the stock page: a 550x450 canvas framed 100px from the
//! top-left of the board region, with the eraser widget parked at x = 20.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pen::StrokeStyle;

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

pub const DEFAULT_CANVAS_WIDTH: u32 = 550;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 450;
pub const DEFAULT_FRAME_OFFSET: f64 = 100.0;
pub const DEFAULT_ERASER_WIDTH: f64 = 62.0;
pub const DEFAULT_ERASER_HEIGHT: f64 = 38.0;
pub const DEFAULT_ERASER_TOP: f64 = 550.0;
pub const DEFAULT_ERASER_BAND: f64 = 10.0;
pub const DEFAULT_ERASER_INITIAL_OFFSET: f64 = 20.0;
pub const DEFAULT_ERASER_MIN_X: f64 = 0.0;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("eraser_min_x {min_x} lies outside the canvas width {width}")]
    MinOutsideCanvas { min_x: f64, width: u32 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BoardLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Distance from the board region's top-left corner to the canvas.
    pub frame_offset: f64,
    pub eraser_width: f64,
    pub eraser_height: f64,
    pub eraser_top: f64,
    /// Width of the vertical strip the eraser clears.
    pub eraser_band: f64,
    pub eraser_initial_offset: f64,
    /// Lower clamp bound for the eraser's horizontal offset.
    pub eraser_min_x: f64,
    pub stroke: StrokeStyle,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            frame_offset: DEFAULT_FRAME_OFFSET,
            eraser_width: DEFAULT_ERASER_WIDTH,
            eraser_height: DEFAULT_ERASER_HEIGHT,
            eraser_top: DEFAULT_ERASER_TOP,
            eraser_band: DEFAULT_ERASER_BAND,
            eraser_initial_offset: DEFAULT_ERASER_INITIAL_OFFSET,
            eraser_min_x: DEFAULT_ERASER_MIN_X,
            stroke: StrokeStyle::default(),
        }
    }
}

impl BoardLayout {
    /// Parse a (possibly partial) layout; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        let layout: BoardLayout = serde_json::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        positive("canvas_width", f64::from(self.canvas_width))?;
        positive("canvas_height", f64::from(self.canvas_height))?;
        positive("eraser_width", self.eraser_width)?;
        positive("eraser_height", self.eraser_height)?;
        positive("eraser_band", self.eraser_band)?;
        positive("stroke.width", self.stroke.width)?;
        non_negative("frame_offset", self.frame_offset)?;
        non_negative("stroke.dot_radius", self.stroke.dot_radius)?;
        if !(0.0..=f64::from(self.canvas_width)).contains(&self.eraser_min_x) {
            return Err(LayoutError::MinOutsideCanvas {
                min_x: self.eraser_min_x,
                width: self.canvas_width,
            });
        }
        Ok(())
    }

    /// CSS `left` of the eraser widget, centred on `offset` within the board region.
    pub fn eraser_left(&self, offset: f64) -> f64 {
        offset + self.frame_offset - self.eraser_width / 2.0
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), LayoutError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), LayoutError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::Negative { field, value })
    }
}
