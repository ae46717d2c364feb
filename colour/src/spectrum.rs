use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Sub, SubAssign};

use crate::{lerp, Float};

/// Number of samples across the working wavelength range
pub const SAMPLE_COUNT: usize = 60;

/// Start of the working wavelength range in nm
pub const LAMBDA_START: Float = 400.0;

/// End of the working wavelength range in nm
pub const LAMBDA_END: Float = 700.0;

/// Spacing between sample centres in nm
pub const LAMBDA_STEP: Float = (LAMBDA_END - LAMBDA_START) / SAMPLE_COUNT as Float;

/// A function of wavelength, uniformly sampled at the centre of each bin of
/// the working grid
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub(crate) samples: [Float; SAMPLE_COUNT],
    label: String,
}

impl Spectrum {
    /// Create a new spectrum with a given value at all points
    pub fn constant(value: Float) -> Self {
        assert!(!value.is_nan());
        Spectrum {
            samples: [value; SAMPLE_COUNT],
            label: String::new(),
        }
    }

    /// Create a new spectrum from values already on the working grid
    pub fn from_values(samples: [Float; SAMPLE_COUNT]) -> Self {
        Spectrum {
            samples,
            label: String::new(),
        }
    }

    /// Convert a list of (wavelength, value) samples into a uniform spectrum.
    /// The samples do not need to be sorted; equal wavelengths coalesce with
    /// the later entry winning, and wavelengths outside the sampled range
    /// take the boundary value.
    pub fn from_sampled(lambda: &[Float], value: &[Float]) -> Self {
        assert_eq!(lambda.len(), value.len());
        assert!(!lambda.is_empty());

        let mut data: Vec<_> = lambda.iter().copied().zip(value.iter().copied()).collect();
        data.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let mut sorted: Vec<(Float, Float)> = Vec::with_capacity(data.len());
        for pair in data {
            match sorted.last_mut() {
                Some(last) if last.0 == pair.0 => *last = pair,
                _ => sorted.push(pair),
            }
        }

        let mut samples = [0.0; SAMPLE_COUNT];
        for (idx, sample) in samples.iter_mut().enumerate() {
            *sample = interpolate(&sorted, Self::wavelength(idx));
        }

        Spectrum {
            samples,
            label: String::new(),
        }
    }

    /// Centre wavelength of the given sample bin
    pub fn wavelength(idx: usize) -> Float {
        LAMBDA_START + LAMBDA_STEP * (idx as Float + 0.5)
    }

    /// Centre wavelengths of all the sample bins
    pub fn wavelengths() -> [Float; SAMPLE_COUNT] {
        let mut wavelengths = [0.0; SAMPLE_COUNT];
        for (idx, wavelength) in wavelengths.iter_mut().enumerate() {
            *wavelength = Self::wavelength(idx);
        }
        wavelengths
    }

    /// All sample values in wavelength order
    pub fn values(&self) -> &[Float; SAMPLE_COUNT] {
        &self.samples
    }

    /// The sample value at the given bin
    pub fn value(&self, idx: usize) -> Float {
        self.samples[idx]
    }

    /// Is this spectrum zero everywhere?
    pub fn is_black(&self) -> bool {
        self.samples == [0.0; SAMPLE_COUNT]
    }

    /// Are any of the values stored NaN?
    pub fn has_nan(&self) -> bool {
        self.samples.iter().any(|v| v.is_nan())
    }

    /// Clamp the values in the spectrum between two values
    pub fn clamp(mut self, low: Float, high: Float) -> Self {
        for value in &mut self.samples {
            *value = value.clamp(low, high);
        }
        self
    }

    /// Elementwise division, or None when the divisor is zero everywhere
    pub fn checked_div(&self, rhs: &Spectrum) -> Option<Spectrum> {
        if rhs.is_black() {
            return None;
        }
        Some(self.clone() / rhs.clone())
    }

    /// Name used when the spectrum is displayed
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Linear interpolation against sorted (wavelength, value) samples, clamped
/// to the boundary values outside the sampled range
fn interpolate(samples: &[(Float, Float)], l: Float) -> Float {
    let n = samples.len();
    if l <= samples[0].0 {
        return samples[0].1;
    }
    if l >= samples[n - 1].0 {
        return samples[n - 1].1;
    }

    let offset = samples.partition_point(|&(wavelength, _)| wavelength <= l) - 1;
    let (wl0, v0) = samples[offset];
    let (wl1, v1) = samples[offset + 1];

    lerp((l - wl0) / (wl1 - wl0), v0, v1)
}

impl Default for Spectrum {
    fn default() -> Self {
        Spectrum::constant(0.0)
    }
}

impl Add<Spectrum> for Spectrum {
    type Output = Spectrum;

    fn add(mut self, rhs: Spectrum) -> Spectrum {
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs += rhs;
        }
        self
    }
}

impl AddAssign<Spectrum> for Spectrum {
    fn add_assign(&mut self, rhs: Spectrum) {
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs += rhs;
        }
    }
}

impl Add<Float> for Spectrum {
    type Output = Spectrum;

    fn add(mut self, rhs: Float) -> Spectrum {
        for lhs in &mut self.samples {
            *lhs += rhs;
        }
        self
    }
}

impl Sub<Spectrum> for Spectrum {
    type Output = Spectrum;

    fn sub(mut self, rhs: Spectrum) -> Spectrum {
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs -= rhs;
        }
        self
    }
}

impl SubAssign<Spectrum> for Spectrum {
    fn sub_assign(&mut self, rhs: Spectrum) {
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs -= rhs;
        }
    }
}

impl Sub<Float> for Spectrum {
    type Output = Spectrum;

    fn sub(mut self, rhs: Float) -> Spectrum {
        for lhs in &mut self.samples {
            *lhs -= rhs;
        }
        self
    }
}

impl Mul<Spectrum> for Spectrum {
    type Output = Spectrum;

    fn mul(mut self, rhs: Spectrum) -> Spectrum {
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs *= rhs;
        }
        self
    }
}

impl MulAssign<Spectrum> for Spectrum {
    fn mul_assign(&mut self, rhs: Spectrum) {
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs *= rhs;
        }
    }
}

impl Mul<Float> for Spectrum {
    type Output = Spectrum;

    fn mul(mut self, rhs: Float) -> Spectrum {
        for lhs in &mut self.samples {
            *lhs *= rhs;
        }
        self
    }
}

impl MulAssign<Float> for Spectrum {
    fn mul_assign(&mut self, rhs: Float) {
        for lhs in &mut self.samples {
            *lhs *= rhs;
        }
    }
}

impl Div<Spectrum> for Spectrum {
    type Output = Spectrum;

    fn div(mut self, rhs: Spectrum) -> Spectrum {
        assert!(!rhs.is_black());
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs /= rhs;
        }
        self
    }
}

impl DivAssign<Spectrum> for Spectrum {
    fn div_assign(&mut self, rhs: Spectrum) {
        assert!(!rhs.is_black());
        for (lhs, rhs) in self.samples.iter_mut().zip(rhs.samples) {
            *lhs /= rhs;
        }
    }
}

impl Div<Float> for Spectrum {
    type Output = Spectrum;

    fn div(mut self, rhs: Float) -> Spectrum {
        for lhs in &mut self.samples {
            *lhs /= rhs;
        }
        self
    }
}

impl DivAssign<Float> for Spectrum {
    fn div_assign(&mut self, rhs: Float) {
        for lhs in &mut self.samples {
            *lhs /= rhs;
        }
    }
}

impl Index<usize> for Spectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.samples[index]
    }
}
