use serde::{Deserialize, Serialize};

use crate::surface::Surface;
use crate::tracker::Draw;

#[cfg(test)]
#[path = "pen_test.rs"]
mod pen_test;

pub const DEFAULT_STROKE_COLOR: &str = "#454545";
pub const DEFAULT_STROKE_WIDTH: f64 = 12.0;
pub const DEFAULT_DOT_RADIUS: f64 = 2.0;

/// Pen appearance. Fixed for the whole board.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    /// Radius of the dot stamped at each segment start.
    pub dot_radius: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_STROKE_COLOR.to_string(),
            width: DEFAULT_STROKE_WIDTH,
            dot_radius: DEFAULT_DOT_RADIUS,
        }
    }
}

/// Draw one pen step: a segment from the previous sample (or the current one
/// on the first move) to the current sample, then a dot at the segment start.
///
/// The dot makes a stationary click visible and hides seams between segments.
/// The first sample of a stroke has no extent, so it only gets the dot.
pub fn render_stroke<S: Surface + ?Sized>(draw: &Draw, surface: &mut S, style: &StrokeStyle) {
    let start = draw.previous.unwrap_or(draw.current);
    if draw.previous.is_some() {
        surface.stroke_segment(start, draw.current, style);
    }
    surface.fill_dot(start, style.dot_radius, &style.color);
}
