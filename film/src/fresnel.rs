use num_complex::Complex64;

/// Amplitude reflection coefficient for p-polarised light crossing a planar
/// interface from medium a into medium b
pub fn r_p(cos_a: Complex64, cos_b: Complex64, n_a: Complex64, n_b: Complex64) -> Complex64 {
    (n_b * cos_a - n_a * cos_b) / (n_b * cos_a + n_a * cos_b)
}

/// Amplitude reflection coefficient for s-polarised light
pub fn r_s(cos_a: Complex64, cos_b: Complex64, n_a: Complex64, n_b: Complex64) -> Complex64 {
    (n_a * cos_a - n_b * cos_b) / (n_a * cos_a + n_b * cos_b)
}

/// Amplitude transmission coefficient for p-polarised light
pub fn t_p(cos_a: Complex64, cos_b: Complex64, n_a: Complex64, n_b: Complex64) -> Complex64 {
    (2.0 * n_a * cos_a) / (n_b * cos_a + n_b * cos_b)
}

/// Amplitude transmission coefficient for s-polarised light
pub fn t_s(cos_a: Complex64, cos_b: Complex64, n_a: Complex64, n_b: Complex64) -> Complex64 {
    (2.0 * n_a * cos_a) / (n_a * cos_a + n_b * cos_b)
}
