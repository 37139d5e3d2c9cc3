//! Mapping between musical time/value coordinates and screen pixels.

/// Bidirectional mapping between the tick/value domain and pixel
/// coordinates. Pure and cheap to construct; the editor rebuilds it on
/// every read so it always reflects the current zoom and canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordTransform {
    /// Horizontal scale. Must be positive.
    pub pixels_per_tick: f32,
    pub canvas_height: f32,
    /// Value mapped to the top edge of the canvas.
    pub max_value: f64,
}

impl CoordTransform {
    pub fn new(pixels_per_tick: f32, canvas_height: f32, max_value: f64) -> Self {
        Self { pixels_per_tick, canvas_height, max_value }
    }

    /// Returns the x coordinate of a tick.
    pub fn get_x(&self, tick: f64) -> f32 {
        (tick * self.pixels_per_tick as f64) as f32
    }

    /// Returns the tick at an x coordinate. Inverse of `get_x` up to
    /// rounding.
    pub fn get_tick(&self, x: f32) -> f64 {
        x as f64 / self.pixels_per_tick as f64
    }

    /// Returns the y coordinate of a value. Zero maps to the bottom edge
    /// of the canvas, `max_value` to the top.
    pub fn get_y(&self, value: f64) -> f32 {
        ((1.0 - value / self.max_value) * self.canvas_height as f64) as f32
    }

    /// Returns the value at a y coordinate. Inverse of `get_y` up to
    /// rounding.
    pub fn get_value(&self, y: f32) -> f64 {
        (1.0 - y as f64 / self.canvas_height as f64) * self.max_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_roundtrip() {
        for scale in [0.05_f32, 0.1, 1.0, 7.5] {
            let t = CoordTransform::new(scale, 500.0, 127.0);
            for tick in [0.0_f64, 1.0, 480.0, 960.5, 123456.0] {
                let err = (t.get_tick(t.get_x(tick)) - tick).abs();
                // within one pixel's worth of ticks
                assert!(err <= 1.0 / scale as f64, "tick {tick} scale {scale}");
            }
        }
    }

    #[test]
    fn test_x_monotonic() {
        let t = CoordTransform::new(0.1, 500.0, 127.0);
        assert!(t.get_x(0.0) < t.get_x(1.0));
        assert!(t.get_x(479.0) < t.get_x(480.0));
        assert!(t.get_tick(10.0) < t.get_tick(11.0));
    }

    #[test]
    fn test_y_roundtrip() {
        let t = CoordTransform::new(0.1, 500.0, 127.0);
        assert_eq!(t.get_y(0.0), 500.0);
        assert_eq!(t.get_y(127.0), 0.0);
        for value in [0.0_f64, 1.0, 64.0, 127.0] {
            assert!((t.get_value(t.get_y(value)) - value).abs() < 1e-3);
        }
    }
}
