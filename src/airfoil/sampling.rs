use crate::errors::GeometryError;
use std::f64::consts::PI;

/// Generates `n` chord fractions from 0.0 to 1.0 with cosine spacing, which clusters stations
/// near both the leading and trailing edges where the surface curvature is highest.
///
/// Station `i` is `(1 - cos(θ_i)) / 2` with `θ_i` evenly spaced over `[0, π]`. The end stations are
/// set exactly to 0.0 and 1.0 so the edges do not pick up rounding noise.
pub fn cosine_stations(n: usize) -> Result<Vec<f64>, GeometryError> {
    if n < 2 {
        return Err(GeometryError::InvalidPointCount { value: n });
    }

    let last = (n - 1) as f64;
    let stations = (0..n)
        .map(|i| {
            if i == 0 {
                0.0
            } else if i == n - 1 {
                1.0
            } else {
                let theta = PI * i as f64 / last;
                (1.0 - theta.cos()) / 2.0
            }
        })
        .collect();

    Ok(stations)
}
