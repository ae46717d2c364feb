use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use colour::{Float, Spectrum, SAMPLE_COUNT};
use film::ReflectanceField;
use image::RgbImage;

/// Load a two column (wavelength, value) CSV file as a spectrum
pub fn load_spd(path: &Path) -> Result<Spectrum> {
    let text = fs::read_to_string(path)?;

    let mut wavelengths = Vec::new();
    let mut values = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let mut parse = |name: &str| -> Result<Float> {
            fields
                .next()
                .with_context(|| format!("line {}: missing {name}", number + 1))?
                .trim()
                .parse()
                .with_context(|| format!("line {}: malformed {name}", number + 1))
        };
        wavelengths.push(parse("wavelength")?);
        values.push(parse("value")?);
    }
    ensure!(!wavelengths.is_empty(), "no samples in file");

    Ok(Spectrum::from_sampled(&wavelengths, &values))
}

/// Write the reflectance table: one row per degree of incidence, one column
/// per wavelength sample, no header row
pub fn write_csv(path: &Path, rows: &[[Float; SAMPLE_COUNT]]) -> Result<()> {
    let mut out = String::new();
    for row in rows {
        for (idx, value) in row.iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            write!(out, "{value:.3e}")?;
        }
        out.push('\n');
    }
    fs::write(path, out)?;

    Ok(())
}

/// Gamma encode the linear reflectance field and save it as a PNG
pub fn write_texture(path: &Path, field: &ReflectanceField) -> Result<()> {
    let pixels: Vec<u8> = field
        .pixels
        .iter()
        .flat_map(|rgb| rgb.map(|v| (gamma(v) * 255.99) as u8))
        .collect();

    let image = RgbImage::from_raw(field.width as u32, field.height as u32, pixels)
        .context("texture buffer size mismatch")?;
    image.save(path)?;

    Ok(())
}

/// Display gamma, applied only at export time.  The field itself is linear.
fn gamma(v: Float) -> Float {
    v.powf(1.0 / 2.2)
}
