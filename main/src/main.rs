use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use colour::{CmfTables, Spectrum};
use film::{Interference, Layer, Stack};

mod export;

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Film thickness in nanometres
    #[clap(short = 'd', long, value_parser, default_value_t = 500.0)]
    thickness: f64,

    /// Refractive index of the incident medium
    #[clap(long, value_parser, default_value_t = 1.0)]
    eta_incident: f64,

    /// Refractive index of the film
    #[clap(long, value_parser, default_value_t = 1.34)]
    eta_film: f64,

    /// Extinction coefficient of the film
    #[clap(long, value_parser, default_value_t = 0.0)]
    kappa_film: f64,

    /// Refractive index of the substrate
    #[clap(long, value_parser, default_value_t = 1.0)]
    eta_base: f64,

    /// Extinction coefficient of the substrate
    #[clap(long, value_parser, default_value_t = 0.0)]
    kappa_base: f64,

    /// Incidence angle in degrees
    #[clap(short, long, value_parser, default_value_t = 0.0)]
    angle: f64,

    /// CSV file of (wavelength, value) rows overriding the film index
    #[clap(long, value_parser)]
    spd: Option<PathBuf>,

    /// File name to write the reflectance-against-angle table to
    #[clap(long, value_parser)]
    csv: Option<PathBuf>,

    /// File name to write the angle ramp texture to
    #[clap(long, value_parser)]
    texture: Option<PathBuf>,

    /// Width of the texture in pixels
    #[clap(long, value_parser, default_value_t = 270)]
    width: usize,

    /// Height of the texture in pixels
    #[clap(long, value_parser, default_value_t = 90)]
    height: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !(0.0..=90.0).contains(&args.angle) {
        bail!("incidence angle must be between 0 and 90 degrees");
    }
    if args.thickness < 0.0 {
        bail!("film thickness must not be negative");
    }
    if args.eta_incident <= 0.0 || args.eta_film <= 0.0 || args.eta_base <= 0.0 {
        bail!("refractive indices must be positive");
    }
    if args.kappa_film < 0.0 || args.kappa_base < 0.0 {
        bail!("extinction coefficients must not be negative");
    }

    let film_eta = match &args.spd {
        Some(path) => export::load_spd(path)
            .with_context(|| format!("failed to read index spectrum {}", path.display()))?,
        None => Spectrum::constant(args.eta_film),
    };

    let stack = Stack::new(
        Layer::semi_infinite(Spectrum::constant(args.eta_incident), Spectrum::constant(0.0)),
        Layer::new(args.thickness, film_eta, Spectrum::constant(args.kappa_film)),
        Layer::semi_infinite(
            Spectrum::constant(args.eta_base),
            Spectrum::constant(args.kappa_base),
        ),
    );
    let engine = Interference::new(stack);
    let cmf = CmfTables::global();

    let spd = engine.evaluate(args.angle.to_radians().cos());
    for (wavelength, value) in Spectrum::wavelengths().iter().zip(spd.values()) {
        println!("{wavelength:.1} {value:.6}");
    }
    let [r, g, b] = spd.to_rgb(cmf);
    println!("rgb (linear): {r:.4} {g:.4} {b:.4}");

    if let Some(path) = &args.csv {
        export::write_csv(path, &engine.export_table())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if let Some(path) = &args.texture {
        let field = engine.reflectance_field(args.width, args.height, cmf);
        export::write_texture(path, &field)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
