use crate::pen::StrokeStyle;
use crate::Point;

/// A pixel surface the board draws on.
///
/// The client implements this over a `CanvasRenderingContext2d`; tests use a
/// recorder. Dimensions are in surface pixels.
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Stroke one straight segment as its own path.
    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle);

    fn fill_dot(&mut self, center: Point, radius: f64, color: &str);

    /// Reset a rectangle to full transparency.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn clear_all(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height);
    }
}
