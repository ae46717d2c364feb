use std::f64::consts::PI;

use colour::{CmfTables, Float, Spectrum, SAMPLE_COUNT};
use num_complex::Complex64;
use rayon::prelude::*;

use crate::fresnel;
use crate::layer::Stack;

/// Which reflected polarization component to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarization {
    S,
    P,
    Unpolarized,
}

/// An angle-varying colour ramp broadcast into a 2D texture.  Pixels are
/// row-major linear RGB clamped to [0, 1]; gamma correction is left to the
/// consumer.
#[derive(Debug, Clone)]
pub struct ReflectanceField {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[Float; 3]>,
}

/// Coherent reflectance evaluation of a three layer stack
#[derive(Debug, Clone)]
pub struct Interference {
    stack: Stack,
}

impl Interference {
    pub fn new(stack: Stack) -> Self {
        Interference { stack }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Replace the stack as a whole
    pub fn set_stack(&mut self, stack: Stack) {
        self.stack = stack;
    }

    /// Spectral reflectance of the stack for unpolarised light arriving with
    /// the given incidence angle cosine
    pub fn evaluate(&self, cos_incidence: Float) -> Spectrum {
        self.evaluate_polarized(cos_incidence, Polarization::Unpolarized)
    }

    /// Spectral reflectance of a single polarization component.  Total
    /// internal reflection at any sample of any layer yields an all-zero
    /// spectrum for the whole call.
    pub fn evaluate_polarized(&self, cos_incidence: Float, polarization: Polarization) -> Spectrum {
        let sin_incidence = (1.0 - cos_incidence * cos_incidence).max(0.0).sqrt();

        let cosines = match self.refraction_cosines(sin_incidence) {
            Some(cosines) => cosines,
            None => return Spectrum::constant(0.0),
        };

        let mut samples = [0.0; SAMPLE_COUNT];
        for (idx, value) in samples.iter_mut().enumerate() {
            *value = self.reflectance_sample(idx, &cosines[idx], polarization);
        }

        Spectrum::from_values(samples)
    }

    /// Reflectance spectra for one-degree steps of incidence angle starting
    /// at normal incidence
    pub fn sweep_angles(&self, n_angles: usize) -> Vec<Spectrum> {
        (0..n_angles)
            .into_par_iter()
            .map(|k| self.evaluate((k as Float * PI / 180.0).cos()))
            .collect()
    }

    /// Raw reflectance table over incidence angles 0-89 degrees: one row per
    /// degree, one column per wavelength sample
    pub fn export_table(&self) -> Vec<[Float; SAMPLE_COUNT]> {
        self.sweep_angles(90)
            .into_iter()
            .map(|spd| *spd.values())
            .collect()
    }

    /// Linear RGB reflectance ramp over incidence angles 0-90 degrees along
    /// the horizontal axis, repeated down every row
    pub fn reflectance_field(
        &self,
        width: usize,
        height: usize,
        cmf: &CmfTables,
    ) -> ReflectanceField {
        let ramp: Vec<[Float; 3]> = (0..width)
            .into_par_iter()
            .map(|x| {
                let angle = x as Float * 90.0 / width as Float;
                let rgb = self.evaluate((angle * PI / 180.0).cos()).to_rgb(cmf);
                rgb.map(|v| v.clamp(0.0, 1.0))
            })
            .collect();

        let mut pixels = Vec::with_capacity(width * height);
        for _ in 0..height {
            pixels.extend_from_slice(&ramp);
        }

        ReflectanceField {
            width,
            height,
            pixels,
        }
    }

    /// Complex refraction angle cosines for every sample of every layer via
    /// Snell's law, or None if any sample is totally internally reflected
    fn refraction_cosines(&self, sin_incidence: Float) -> Option<Vec<[Complex64; 3]>> {
        let incident = self.stack.incident();

        (0..SAMPLE_COUNT)
            .map(|idx| {
                let n0 = incident.index(idx);
                let mut cosines = [Complex64::new(0.0, 0.0); 3];
                for (layer, cosine) in self.stack.layers().iter().zip(&mut cosines) {
                    let sin = n0 * sin_incidence / layer.index(idx);
                    if sin.norm_sqr() > 1.0 {
                        return None;
                    }
                    *cosine = (1.0 - sin * sin).sqrt();
                }
                Some(cosines)
            })
            .collect()
    }

    fn reflectance_sample(
        &self,
        idx: usize,
        cosines: &[Complex64; 3],
        polarization: Polarization,
    ) -> Float {
        let [cos0, cos1, cos2] = *cosines;
        let n0 = self.stack.incident().index(idx);
        let n1 = self.stack.film().index(idx);
        let n2 = self.stack.substrate().index(idx);

        // round-trip phase delay through the film
        let wavelength = Spectrum::wavelength(idx);
        let phi = 4.0 * PI * self.stack.film().thickness() / wavelength * n1 * cos1;
        let rotation = (Complex64::i() * phi).exp();

        let airy = |r01: Complex64,
                    r10: Complex64,
                    r12: Complex64,
                    t01: Complex64,
                    t10: Complex64| {
            let r = r01 + (t01 * r12 * t10 * rotation) / (1.0 - r10 * r12 * rotation);
            r.norm_sqr()
        };

        let p = || {
            airy(
                fresnel::r_p(cos0, cos1, n0, n1),
                fresnel::r_p(cos1, cos0, n1, n0),
                fresnel::r_p(cos1, cos2, n1, n2),
                fresnel::t_p(cos0, cos1, n0, n1),
                fresnel::t_p(cos1, cos0, n1, n0),
            )
        };
        let s = || {
            airy(
                fresnel::r_s(cos0, cos1, n0, n1),
                fresnel::r_s(cos1, cos0, n1, n0),
                fresnel::r_s(cos1, cos2, n1, n2),
                fresnel::t_s(cos0, cos1, n0, n1),
                fresnel::t_s(cos1, cos0, n1, n0),
            )
        };

        match polarization {
            Polarization::P => p(),
            Polarization::S => s(),
            Polarization::Unpolarized => 0.5 * (p() + s()),
        }
    }
}
