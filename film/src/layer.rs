use colour::{Float, Spectrum};
use num_complex::Complex64;

/// A slab of homogeneous material: a thickness together with the spectra of
/// its refractive index and extinction coefficient
#[derive(Debug, Clone)]
pub struct Layer {
    thickness: Float,
    eta: Spectrum,
    kappa: Spectrum,
}

impl Layer {
    /// Create a layer of the given thickness in nanometres
    pub fn new(thickness: Float, eta: Spectrum, kappa: Spectrum) -> Self {
        assert!(thickness >= 0.0);
        assert!(kappa.values().iter().all(|&k| k >= 0.0));
        Layer {
            thickness,
            eta,
            kappa,
        }
    }

    /// A boundary medium.  Thickness is irrelevant for the first and last
    /// layer of a stack and is set to zero.
    pub fn semi_infinite(eta: Spectrum, kappa: Spectrum) -> Self {
        Self::new(0.0, eta, kappa)
    }

    pub fn thickness(&self) -> Float {
        self.thickness
    }

    pub fn eta(&self) -> &Spectrum {
        &self.eta
    }

    pub fn kappa(&self) -> &Spectrum {
        &self.kappa
    }

    /// Complex refractive index at the given wavelength sample
    pub fn index(&self, idx: usize) -> Complex64 {
        Complex64::new(self.eta.value(idx), self.kappa.value(idx))
    }
}

/// The ordered media light passes through: incident medium, film, substrate.
/// Replaced as a whole when simulation parameters change.
#[derive(Debug, Clone)]
pub struct Stack {
    layers: [Layer; 3],
}

impl Stack {
    pub fn new(incident: Layer, film: Layer, substrate: Layer) -> Self {
        Stack {
            layers: [incident, film, substrate],
        }
    }

    pub fn incident(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn film(&self) -> &Layer {
        &self.layers[1]
    }

    pub fn substrate(&self) -> &Layer {
        &self.layers[2]
    }

    pub fn layers(&self) -> &[Layer; 3] {
        &self.layers
    }
}
