use splines::{Interpolation, Key, Spline};

/// behaviour above the highest breakpoint
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Extent {
    /// keep the value of the highest breakpoint
    Clamp,
    /// continue the topmost segment
    Extrapolate,
    /// switch to a fixed value strictly above the highest breakpoint
    Hold(f64),
}

/// piecewise linear function of height, constant below the lowest breakpoint
pub struct Ramp {
    curve: Spline<f64, f64>,
    extent: Extent,
}

impl Ramp {
    /// breakpoints are `(height, value)` pairs in ascending height
    pub fn new(breakpoints: &[(f64, f64)], extent: Extent) -> Self {
        Self {
            curve: Spline::from_vec(
                breakpoints
                    .iter()
                    .map(|&(height, value)| Key::new(height, value, Interpolation::Linear))
                    .collect(),
            ),
            extent,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(&[(0.0, value)], Extent::Clamp)
    }

    pub fn sample(&self, height: f64) -> f64 {
        let keys = self.curve.keys();
        let (first, last) = match (keys.first(), keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return f64::NAN,
        };

        if height <= first.t {
            return first.value;
        }
        if height >= last.t {
            return match self.extent {
                Extent::Hold(value) if height > last.t => value,
                Extent::Extrapolate if height > last.t && keys.len() > 1 => {
                    let prev = &keys[keys.len() - 2];
                    prev.value + (last.value - prev.value) / (last.t - prev.t) * (height - prev.t)
                }
                _ => last.value,
            };
        }
        self.curve.clamped_sample(height).unwrap_or(f64::NAN)
    }

    pub fn sample_all(&self, heights: &[f64]) -> Vec<f64> {
        heights.iter().map(|&height| self.sample(height)).collect()
    }
}
