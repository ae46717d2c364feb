mod fresnel;
mod interference;
mod layer;

#[cfg(test)]
mod tests;

pub use fresnel::{r_p, r_s, t_p, t_s};
pub use interference::{Interference, Polarization, ReflectanceField};
pub use layer::{Layer, Stack};
