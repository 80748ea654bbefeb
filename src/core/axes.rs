pub const HRA_RANGE_DEG: (f64, f64) = (-5.0, 11.0);
pub const VRA_RANGE_DEG: (f64, f64) = (-11.0, 8.25);

/// Data window of the release-angle scatter. x is HRA, y is VRA.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self::release_angles()
    }
}

impl PlotBounds {
    pub fn release_angles() -> Self {
        Self {
            x_min: HRA_RANGE_DEG.0,
            x_max: HRA_RANGE_DEG.1,
            y_min: VRA_RANGE_DEG.0,
            y_max: VRA_RANGE_DEG.1,
        }
    }

    pub fn x_span(&self) -> f64 {
        (self.x_max - self.x_min).max(f64::EPSILON)
    }

    pub fn y_span(&self) -> f64 {
        (self.y_max - self.y_min).max(f64::EPSILON)
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    /// Maps a data point into the pixel rectangle; y grows downward on screen.
    pub fn to_screen(
        &self,
        (x, y): (f64, f64),
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    ) -> (f32, f32) {
        let plot_w = (right - left).max(1.0);
        let plot_h = (bottom - top).max(1.0);
        let sx = left + (((x - self.x_min) / self.x_span()) as f32) * plot_w;
        let sy = bottom - (((y - self.y_min) / self.y_span()) as f32) * plot_h;
        (sx, sy)
    }

    pub fn x_ticks(&self, divisions: usize) -> Vec<f64> {
        ticks(self.x_min, self.x_max, divisions)
    }

    pub fn y_ticks(&self, divisions: usize) -> Vec<f64> {
        ticks(self.y_min, self.y_max, divisions)
    }
}

fn ticks(min: f64, max: f64, divisions: usize) -> Vec<f64> {
    let divisions = divisions.max(1);
    (0..=divisions)
        .map(|i| min + (max - min) * (i as f64 / divisions as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_plot_rectangle() {
        let bounds = PlotBounds::release_angles();

        assert_eq!(bounds.to_screen((-5.0, -11.0), 100.0, 500.0, 50.0, 450.0), (100.0, 450.0));
        assert_eq!(bounds.to_screen((11.0, 8.25), 100.0, 500.0, 50.0, 450.0), (500.0, 50.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = PlotBounds::default();

        assert!(bounds.contains((-5.0, 8.25)));
        assert!(bounds.contains((0.0, 0.0)));
        assert!(!bounds.contains((11.5, 0.0)));
        assert!(!bounds.contains((0.0, -12.0)));
    }

    #[test]
    fn ticks_cover_both_ends() {
        let bounds = PlotBounds::release_angles();
        let xs = bounds.x_ticks(8);

        assert_eq!(xs.len(), 9);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[8], 11.0);
        assert_eq!(xs[1], -3.0);
    }
}
