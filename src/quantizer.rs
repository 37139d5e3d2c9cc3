//! Snapping of ticks to the quantize grid.

/// Ticks in a quarter note.
pub const TICKS_PER_BEAT: u32 = 480;

/// Snaps ticks to a grid of one `1/denominator` note. When disabled,
/// ticks pass through unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantizer {
    pub denominator: u16,
    pub enabled: bool,
}

impl Quantizer {
    pub fn new(denominator: u16, enabled: bool) -> Self {
        Self { denominator: denominator.max(1), enabled }
    }

    /// Grid interval in ticks.
    fn unit(&self) -> f64 {
        (TICKS_PER_BEAT * 4) as f64 / self.denominator as f64
    }

    pub fn round(&self, tick: f64) -> f64 {
        if !self.enabled {
            return tick;
        }
        let unit = self.unit();
        (tick / unit).round() * unit
    }

    pub fn floor(&self, tick: f64) -> f64 {
        if !self.enabled {
            return tick;
        }
        let unit = self.unit();
        (tick / unit).floor() * unit
    }

    pub fn ceil(&self, tick: f64) -> f64 {
        if !self.enabled {
            return tick;
        }
        let unit = self.unit();
        (tick / unit).ceil() * unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round() {
        let q = Quantizer::new(4, true);
        assert_eq!(q.round(0.0), 0.0);
        assert_eq!(q.round(500.0), 480.0);
        assert_eq!(q.round(700.0), 480.0);
        assert_eq!(q.round(721.0), 960.0);
    }

    #[test]
    fn test_floor_ceil() {
        let q = Quantizer::new(8, true);
        assert_eq!(q.floor(479.0), 240.0);
        assert_eq!(q.ceil(481.0), 720.0);
        assert_eq!(q.floor(480.0), 480.0);
        assert_eq!(q.ceil(480.0), 480.0);
    }

    #[test]
    fn test_disabled() {
        let q = Quantizer::new(4, false);
        assert_eq!(q.round(123.4), 123.4);
        assert_eq!(q.floor(123.4), 123.4);
        assert_eq!(q.ceil(123.4), 123.4);
    }
}
