use once_cell::sync::Lazy;

use crate::spectrum::{LAMBDA_END, LAMBDA_START, SAMPLE_COUNT};
use crate::{Float, Spectrum};

/// CIE 1931 standard observer matching functions resampled onto the working
/// grid, with the luminance normalisation derived from them
pub struct CmfTables {
    x: Spectrum,
    y: Spectrum,
    z: Spectrum,
    luminance_norm: Float,
}

static TABLES: Lazy<CmfTables> = Lazy::new(CmfTables::tabulated);

impl CmfTables {
    /// Tables resampled from the tabulated CIE 1931 reference data
    pub fn tabulated() -> Self {
        Self::from_parts(
            Spectrum::from_sampled(data::cie::CIE_LAMBDA, data::cie::CIE_X).with_label("X"),
            Spectrum::from_sampled(data::cie::CIE_LAMBDA, data::cie::CIE_Y).with_label("Y"),
            Spectrum::from_sampled(data::cie::CIE_LAMBDA, data::cie::CIE_Z).with_label("Z"),
        )
    }

    /// Tables built from the analytic piecewise-gaussian fit of the 1931
    /// matching functions from Wyman, Sloan and Shirley (2013)
    pub fn analytic() -> Self {
        let mut x = [0.0; SAMPLE_COUNT];
        let mut y = [0.0; SAMPLE_COUNT];
        let mut z = [0.0; SAMPLE_COUNT];
        for idx in 0..SAMPLE_COUNT {
            let wavelength = Spectrum::wavelength(idx);
            x[idx] = x_fit_1931(wavelength);
            y[idx] = y_fit_1931(wavelength);
            z[idx] = z_fit_1931(wavelength);
        }
        Self::from_parts(
            Spectrum::from_values(x).with_label("X"),
            Spectrum::from_values(y).with_label("Y"),
            Spectrum::from_values(z).with_label("Z"),
        )
    }

    /// The shared tabulated instance, built on first use
    pub fn global() -> &'static CmfTables {
        &TABLES
    }

    fn from_parts(x: Spectrum, y: Spectrum, z: Spectrum) -> Self {
        let luminance_norm =
            y.samples.iter().sum::<Float>() * (LAMBDA_END - LAMBDA_START) / SAMPLE_COUNT as Float;
        CmfTables {
            x,
            y,
            z,
            luminance_norm,
        }
    }

    pub fn x(&self) -> &Spectrum {
        &self.x
    }

    pub fn y(&self) -> &Spectrum {
        &self.y
    }

    pub fn z(&self) -> &Spectrum {
        &self.z
    }

    /// Integral of the Y matching function over the working grid
    pub fn luminance_norm(&self) -> Float {
        self.luminance_norm
    }
}

impl Spectrum {
    /// Calculate the XYZ colour coefficients [x, y, z] for this spectrum
    pub fn to_xyz(&self, cmf: &CmfTables) -> [Float; 3] {
        let mut result = [0.0; 3];
        for idx in 0..SAMPLE_COUNT {
            result[0] += cmf.x.samples[idx] * self.samples[idx];
            result[1] += cmf.y.samples[idx] * self.samples[idx];
            result[2] += cmf.z.samples[idx] * self.samples[idx];
        }

        let scale = (LAMBDA_END - LAMBDA_START) / (SAMPLE_COUNT as Float * cmf.luminance_norm);

        result.map(|v| v * scale)
    }

    /// Calculate the XYZ luminance of the spectrum
    pub fn y(&self, cmf: &CmfTables) -> Float {
        let sum: Float = cmf
            .y
            .samples
            .iter()
            .zip(&self.samples)
            .map(|(weight, value)| weight * value)
            .sum();

        sum * (LAMBDA_END - LAMBDA_START) / (SAMPLE_COUNT as Float * cmf.luminance_norm)
    }

    /// Convert this spectrum into a linear sRGB colour.  The result is not
    /// gamma corrected and may fall outside [0, 1].
    pub fn to_rgb(&self, cmf: &CmfTables) -> [Float; 3] {
        xyz_to_rgb(self.to_xyz(cmf))
    }
}

/// Convert an XYZ colour to a linear sRGB colour
pub fn xyz_to_rgb([x, y, z]: [Float; 3]) -> [Float; 3] {
    [
        3.2406 * x - 1.5372 * y - 0.4986 * z,
        -0.9689 * x + 1.8758 * y + 0.0415 * z,
        0.0557 * x - 0.2040 * y + 1.0570 * z,
    ]
}

/// Convert a linear sRGB colour to an XYZ colour
pub fn rgb_to_xyz([r, g, b]: [Float; 3]) -> [Float; 3] {
    [
        0.4124 * r + 0.3576 * g + 0.1805 * b,
        0.2126 * r + 0.7152 * g + 0.0722 * b,
        0.0193 * r + 0.1192 * g + 0.9505 * b,
    ]
}

fn x_fit_1931(wavelength: Float) -> Float {
    let t1 = (wavelength - 442.0) * if wavelength < 442.0 { 0.0624 } else { 0.0374 };
    let t2 = (wavelength - 599.8) * if wavelength < 599.8 { 0.0264 } else { 0.0323 };
    let t3 = (wavelength - 501.1) * if wavelength < 501.1 { 0.0490 } else { 0.0382 };
    0.362 * (-0.5 * t1 * t1).exp() + 1.056 * (-0.5 * t2 * t2).exp()
        - 0.065 * (-0.5 * t3 * t3).exp()
}

fn y_fit_1931(wavelength: Float) -> Float {
    let t1 = (wavelength - 568.8) * if wavelength < 568.8 { 0.0213 } else { 0.0247 };
    let t2 = (wavelength - 530.9) * if wavelength < 530.9 { 0.0613 } else { 0.0322 };
    0.821 * (-0.5 * t1 * t1).exp() + 0.286 * (-0.5 * t2 * t2).exp()
}

fn z_fit_1931(wavelength: Float) -> Float {
    let t1 = (wavelength - 437.0) * if wavelength < 437.0 { 0.0845 } else { 0.0278 };
    let t2 = (wavelength - 459.0) * if wavelength < 459.0 { 0.0385 } else { 0.0725 };
    1.217 * (-0.5 * t1 * t1).exp() + 0.681 * (-0.5 * t2 * t2).exp()
}
