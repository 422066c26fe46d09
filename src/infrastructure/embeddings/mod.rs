pub mod fastembed;
pub mod hashed;

/// Scale a vector to unit L2 norm in place. Zero vectors are left as-is.
pub(crate) fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x = (*x as f64 / norm) as f32;
        }
    }
}
