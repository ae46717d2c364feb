use colour::{CmfTables, Float, Spectrum, LAMBDA_START, LAMBDA_STEP, SAMPLE_COUNT};

use crate::{Interference, Layer, Polarization, Stack};

fn dielectric_stack(thickness: Float, eta_film: Float, eta_base: Float) -> Interference {
    Interference::new(Stack::new(
        Layer::semi_infinite(Spectrum::constant(1.0), Spectrum::constant(0.0)),
        Layer::new(
            thickness,
            Spectrum::constant(eta_film),
            Spectrum::constant(0.0),
        ),
        Layer::semi_infinite(Spectrum::constant(eta_base), Spectrum::constant(0.0)),
    ))
}

fn absorbing_stack(thickness: Float, eta_film: Float, eta_base: Float, kappa_base: Float) -> Interference {
    Interference::new(Stack::new(
        Layer::semi_infinite(Spectrum::constant(1.0), Spectrum::constant(0.0)),
        Layer::new(
            thickness,
            Spectrum::constant(eta_film),
            Spectrum::constant(0.0),
        ),
        Layer::semi_infinite(Spectrum::constant(eta_base), Spectrum::constant(kappa_base)),
    ))
}

fn single_interface_reflectance(n0: Float, n1: Float) -> Float {
    let r = (n0 - n1) / (n0 + n1);
    r * r
}

fn bin_of(wavelength: Float) -> usize {
    ((wavelength - LAMBDA_START) / LAMBDA_STEP) as usize
}

fn cos_degrees(angle: Float) -> Float {
    angle.to_radians().cos()
}

#[test]
fn index_matched_film_ignores_thickness() {
    let expected = single_interface_reflectance(1.0, 1.5);
    for thickness in [0.0, 120.0, 500.0, 1234.5] {
        let spd = dielectric_stack(thickness, 1.5, 1.5).evaluate(1.0);
        for idx in 0..SAMPLE_COUNT {
            assert!((spd.value(idx) - expected).abs() < 1e-12);
        }
    }
}

#[test]
fn zero_thickness_merges_the_interfaces() {
    let engine = dielectric_stack(0.0, 1.34, 1.5);
    let expected = single_interface_reflectance(1.0, 1.5);

    let s = engine.evaluate_polarized(1.0, Polarization::S);
    for idx in 0..SAMPLE_COUNT {
        assert!((s.value(idx) - expected).abs() < 1e-12);
    }

    let unpolarized = engine.evaluate(1.0);
    for idx in 0..SAMPLE_COUNT {
        assert!((unpolarized.value(idx) - expected).abs() < 1e-3);
    }
}

#[test]
fn reflectance_stays_within_the_unit_interval() {
    let engines = [
        dielectric_stack(0.0, 1.34, 1.0),
        dielectric_stack(300.0, 1.2, 1.5),
        dielectric_stack(500.0, 1.34, 1.0),
        dielectric_stack(800.0, 2.4, 1.5),
        absorbing_stack(500.0, 1.34, 1.5, 0.5),
        absorbing_stack(200.0, 1.34, 0.2, 3.0),
    ];
    for engine in &engines {
        for angle in [0.0, 20.0, 45.0, 70.0, 89.0] {
            let spd = engine.evaluate(cos_degrees(angle));
            for idx in 0..SAMPLE_COUNT {
                let value = spd.value(idx);
                assert!(
                    (-1e-9..=1.0 + 1e-9).contains(&value),
                    "reflectance {value} out of range at {angle} degrees"
                );
            }
        }
    }
}

#[test]
fn total_internal_reflection_yields_zero() {
    // glass incident medium, air film: critical angle is about 41.8 degrees
    let engine = Interference::new(Stack::new(
        Layer::semi_infinite(Spectrum::constant(1.5), Spectrum::constant(0.0)),
        Layer::new(300.0, Spectrum::constant(1.0), Spectrum::constant(0.0)),
        Layer::semi_infinite(Spectrum::constant(1.0), Spectrum::constant(0.0)),
    ));

    assert!(engine.evaluate(cos_degrees(60.0)).is_black());
    assert!(!engine.evaluate(cos_degrees(30.0)).is_black());
}

#[test]
fn soap_film_shows_interference_fringes() {
    // 500nm film of n = 1.34 in air: minima at 2nd = k lambda, so near
    // 670nm and 447nm, with the maximum between them near 536nm
    let engine = dielectric_stack(500.0, 1.34, 1.0);
    let spd = engine.evaluate(1.0);

    assert!(spd.value(bin_of(670.0)) < 1e-3);
    assert!(spd.value(bin_of(446.7)) < 1e-3);
    assert!(spd.value(bin_of(536.0)) > 0.07);

    let max = spd.values().iter().cloned().fold(0.0, Float::max);
    assert!((0.06..=0.1).contains(&max));
}

#[test]
fn absorbing_substrate_raises_the_baseline() {
    let absorbing = absorbing_stack(0.0, 1.34, 1.5, 2.0).evaluate(1.0);
    let transparent = dielectric_stack(0.0, 1.34, 1.5).evaluate(1.0);
    for idx in 0..SAMPLE_COUNT {
        assert!(absorbing.value(idx) > transparent.value(idx));
    }

    // with a real film in front the long-wavelength average still rises
    let absorbing = absorbing_stack(500.0, 1.34, 1.5, 2.0).evaluate(1.0);
    let transparent = dielectric_stack(500.0, 1.34, 1.5).evaluate(1.0);
    let tail = SAMPLE_COUNT - 20;
    let mean = |spd: &Spectrum| -> Float {
        spd.values()[tail..].iter().sum::<Float>() / 20.0
    };
    assert!(mean(&absorbing) > mean(&transparent));
}

#[test]
fn polarizations_diverge_away_from_normal_incidence() {
    let engine = dielectric_stack(500.0, 1.34, 1.5);

    let s = engine.evaluate_polarized(cos_degrees(45.0), Polarization::S);
    let p = engine.evaluate_polarized(cos_degrees(45.0), Polarization::P);
    let difference: Float = s
        .values()
        .iter()
        .zip(p.values())
        .map(|(s, p)| (s - p).abs())
        .sum();
    assert!(difference > 0.1);

    let sweep = engine.sweep_angles(90);
    assert_eq!(sweep.len(), 90);
    assert!((sweep[89].value(30) - sweep[0].value(30)).abs() > 0.1);
}

#[test]
fn brewster_angle_suppresses_p_reflection() {
    // index matched film and substrate leave a single 1.0/1.5 interface
    let engine = dielectric_stack(500.0, 1.5, 1.5);
    let cos_brewster = 1.0 / (1.0_f64 + 1.5 * 1.5).sqrt();

    let p = engine.evaluate_polarized(cos_brewster, Polarization::P);
    let s = engine.evaluate_polarized(cos_brewster, Polarization::S);
    for idx in 0..SAMPLE_COUNT {
        assert!(p.value(idx) < 1e-12);
        assert!(s.value(idx) > 0.1);
    }
}

#[test]
fn grazing_incidence_reflects_everything() {
    for engine in [
        dielectric_stack(500.0, 1.34, 1.0),
        absorbing_stack(300.0, 1.2, 1.5, 1.0),
    ] {
        let spd = engine.evaluate(cos_degrees(90.0));
        for idx in 0..SAMPLE_COUNT {
            assert!((spd.value(idx) - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn export_table_is_one_row_per_degree() {
    let engine = dielectric_stack(500.0, 1.34, 1.0);
    let table = engine.export_table();
    assert_eq!(table.len(), 90);

    let normal = engine.evaluate(1.0);
    for (value, expected) in table[0].iter().zip(normal.values()) {
        assert_eq!(value, expected);
    }
}

#[test]
fn reflectance_field_repeats_the_ramp_down_every_row() {
    let cmf = CmfTables::global();
    let engine = dielectric_stack(500.0, 1.34, 1.0);
    let field = engine.reflectance_field(9, 4, cmf);

    assert_eq!(field.width, 9);
    assert_eq!(field.height, 4);
    assert_eq!(field.pixels.len(), 36);

    for pixel in &field.pixels {
        for channel in pixel {
            assert!((0.0..=1.0).contains(channel));
        }
    }
    for x in 0..field.width {
        assert_eq!(field.pixels[x], field.pixels[field.width + x]);
        assert_eq!(field.pixels[x], field.pixels[2 * field.width + x]);
    }
}

#[test]
fn replacing_the_stack_changes_the_result() {
    let mut engine = dielectric_stack(500.0, 1.34, 1.0);
    let before = engine.evaluate(1.0);

    engine.set_stack(Stack::new(
        Layer::semi_infinite(Spectrum::constant(1.0), Spectrum::constant(0.0)),
        Layer::new(250.0, Spectrum::constant(1.6), Spectrum::constant(0.0)),
        Layer::semi_infinite(Spectrum::constant(1.5), Spectrum::constant(0.0)),
    ));
    let after = engine.evaluate(1.0);

    assert!(before.values() != after.values());
}
