mod cmf;
mod spectrum;


pub use cmf::{rgb_to_xyz, xyz_to_rgb, CmfTables};
pub use spectrum::Spectrum;
pub use spectrum::{LAMBDA_END, LAMBDA_START, LAMBDA_STEP, SAMPLE_COUNT};

/// Floating point type used for all spectral and colorimetric values
pub type Float = f64;

/// Linearly interpolate between two floats
pub fn lerp(t: Float, a: Float, b: Float) -> Float {
    (1.0 - t) * a + t * b
}
