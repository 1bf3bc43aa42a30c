use crate::{
    config::model::SliderParams,
    foundation::{
        core::Viewport,
        error::{ArcError, ArcResult},
    },
};

/// Value model of the angle slider.
///
/// Bounds derive from the arc length and the viewport height at creation time; the value is
/// always clamped into `[min, max]` and snapped to `step` measured from `min`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AngleSlider {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl AngleSlider {
    pub fn new(arc_length: f64, viewport: Viewport, params: &SliderParams) -> ArcResult<Self> {
        let h = viewport.height;
        let min = arc_length / (h * params.min_height_fraction);
        let max = arc_length / (h * params.max_height_fraction);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 {
            return Err(ArcError::validation(format!(
                "slider minimum must be finite and > 0 (got [{min}, {max}])"
            )));
        }
        if max < min {
            return Err(ArcError::validation(format!(
                "slider range is inverted: [{min}, {max}]"
            )));
        }
        if !params.step.is_finite() || params.step < 0.0 {
            return Err(ArcError::validation("slider step must be finite and >= 0"));
        }

        let mut slider = Self {
            min,
            max,
            step: params.step,
            value: min,
        };
        slider.set(params.initial);
        Ok(slider)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Move the slider and return the value it actually settled on.
    pub fn set(&mut self, value: f64) -> f64 {
        self.value = self.constrain(value);
        self.value
    }

    /// Move the slider without snapping, for animated sweeps.
    pub fn glide(&mut self, value: f64) -> f64 {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
        self.value
    }

    /// Clamp and snap without moving the slider.
    pub fn constrain(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }
        let v = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        let snapped = self.min + ((v - self.min) / self.step).round() * self.step;
        // Rounding up can overshoot the last partial step.
        if snapped > self.max {
            snapped - self.step
        } else {
            snapped
        }
    }

    /// `frames` evenly spaced raw values from `min` to `max` inclusive.
    ///
    /// Sweep values are not snapped so animations move smoothly.
    pub fn sweep(&self, frames: usize) -> Vec<f64> {
        match frames {
            0 => Vec::new(),
            1 => vec![self.min],
            n => {
                let span = self.max - self.min;
                let last = (n - 1) as f64;
                (0..n)
                    .map(|i| self.min + span * (i as f64) / last)
                    .collect()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/slider.rs"]
mod tests;
