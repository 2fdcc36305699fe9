use crate::airfoil::designation::Naca4Designation;
use crate::airfoil::sampling::cosine_stations;
use crate::airfoil::{Airfoil, CamberStation};
use crate::errors::GeometryError;
use ncollide2d::na::Point2;
use tracing::debug;

/// Height and slope of the mean camber line at a single chord fraction, both in chord units
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CamberPoint {
    pub y: f64,
    pub slope: f64,
}

impl CamberPoint {
    pub fn new(y: f64, slope: f64) -> CamberPoint {
        CamberPoint { y, slope }
    }

    pub fn flat() -> CamberPoint {
        CamberPoint::new(0.0, 0.0)
    }
}

/// An AirfoilGenerator is an entity which can generate the height and slope of the mean camber
/// line and the airfoil half-thickness at fractions of the chord. This provides the information
/// necessary for a generator to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// The physical chord length that normalized coordinates are scaled by
    fn chord_len(&self) -> f64;

    /// Return the camber line height and slope at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> CamberPoint;

    /// Return the half-thickness of the airfoil, measured perpendicular to the camber line, at a
    /// fraction from 0.0 to 1.0
    fn half_thickness(&self, x: f64) -> f64;

    /// Computes the camber, upper, and lower points at a chord fraction. The thickness is laid off
    /// along the camber line normal, so the upper point moves aft and the lower point forward
    /// wherever the camber line rises.
    fn station_at(&self, x: f64) -> CamberStation {
        let c = self.camber_line(x);
        let yt = self.half_thickness(x);
        let (sin_t, cos_t) = c.slope.atan().sin_cos();
        let k = self.chord_len();

        CamberStation::new(
            Point2::new(x * k, c.y * k),
            Point2::new((x - yt * sin_t) * k, (c.y + yt * cos_t) * k),
            Point2::new((x + yt * sin_t) * k, (c.y - yt * cos_t) * k),
        )
    }

    /// Generates one station per chord fraction, preserving order
    fn generate(&self, fractions: &[f64]) -> Airfoil {
        let stations: Vec<CamberStation> = fractions.iter().map(|x| self.station_at(*x)).collect();
        Airfoil::from_stations(&stations)
    }
}

/// Coefficients of the standard NACA 4-digit thickness polynomial, for a 20% thick section
const THICKNESS_COEFFICIENTS: [f64; 5] = [0.2969, 0.1260, 0.3516, 0.2843, 0.1015];

/// A generator for a NACA 4-digit airfoil scaled to a physical chord length.
pub struct Naca4Digit {
    designation: Naca4Designation,
    chord_len: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `designation` - the parsed four digit code, e.g. a NACA 2412
    ///
    /// * `chord_len` - the actual length of the airfoil chord, which must be positive and finite
    pub fn new(
        designation: Naca4Designation,
        chord_len: f64,
    ) -> Result<Naca4Digit, GeometryError> {
        if !chord_len.is_finite() || chord_len <= 0.0 {
            return Err(GeometryError::InvalidChordLength { value: chord_len });
        }

        Ok(Naca4Digit {
            designation,
            chord_len,
        })
    }
}

/// Mean line forward of the max camber location
fn forward_camber(m: f64, p: f64, x: f64) -> CamberPoint {
    let k = m / p.powi(2);
    CamberPoint::new(k * (2.0 * p * x - x.powi(2)), 2.0 * k * (p - x))
}

/// Mean line aft of the max camber location
fn aft_camber(m: f64, p: f64, x: f64) -> CamberPoint {
    let k = m / (1.0 - p).powi(2);
    CamberPoint::new(
        k * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2)),
        2.0 * k * (p - x),
    )
}

impl AirfoilGenerator for Naca4Digit {
    fn chord_len(&self) -> f64 {
        self.chord_len
    }

    fn camber_line(&self, x: f64) -> CamberPoint {
        if self.designation.is_symmetric() {
            return CamberPoint::flat();
        }

        let m = self.designation.max_camber();
        let p = self.designation.camber_position();
        if x <= p {
            forward_camber(m, p, x)
        } else {
            aft_camber(m, p, x)
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        let [a0, a1, a2, a3, a4] = THICKNESS_COEFFICIENTS;
        (self.designation.thickness() / 0.2)
            * (a0 * x.sqrt() - a1 * x - a2 * x.powi(2) + a3 * x.powi(3) - a4 * x.powi(4))
    }
}

/// Generates the upper and lower surfaces of a NACA 4-digit airfoil in the units of the chord
/// length, with the leading edge at the origin and the trailing edge toward +x.
///
/// All inputs are validated before any station is sampled: the designation first, then the chord
/// length, then the point count.
pub fn generate_surface_coordinates(
    designation: &str,
    chord_length_mm: f64,
    num_points: usize,
) -> Result<Airfoil, GeometryError> {
    generate_naca4(designation.parse()?, chord_length_mm, num_points)
}

/// Same as `generate_surface_coordinates` for a designation that has already been parsed
pub fn generate_naca4(
    designation: Naca4Designation,
    chord_length_mm: f64,
    num_points: usize,
) -> Result<Airfoil, GeometryError> {
    let naca = Naca4Digit::new(designation, chord_length_mm)?;
    let fractions = cosine_stations(num_points)?;

    debug!(
        %designation,
        m = designation.max_camber(),
        p = designation.camber_position(),
        t = designation.thickness(),
        chord = chord_length_mm,
        num_points,
        "generating NACA 4-digit surfaces"
    );

    Ok(naca.generate(&fractions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distances2::dist;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    fn naca(s: &str, chord_len: f64) -> Naca4Digit {
        Naca4Digit::new(s.parse().unwrap(), chord_len).unwrap()
    }

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn test_naca_4_thickness(x: f64, e: f64) {
        let result = naca("0012", 1.0).half_thickness(x);
        assert_relative_eq!(e, result, epsilon = 1e-5);
    }

    #[test]
    fn test_thickness_zero_at_leading_edge() {
        assert_eq!(0.0, naca("4415", 1.0).half_thickness(0.0));
    }

    #[test_case(1.0000, 0.0013)]
    #[test_case(0.9000, 0.0208)]
    #[test_case(0.7000, 0.0518)]
    #[test_case(0.5000, 0.0724)]
    #[test_case(0.3000, 0.0788)]
    #[test_case(0.2000, 0.0726)]
    #[test_case(0.1000, 0.0563)]
    fn test_naca_4_camber(x: f64, e: f64) {
        let n = naca("2412", 1.0);
        let t = n.half_thickness(x);
        let c = n.camber_line(x);
        assert_relative_eq!(e, t + c.y, epsilon = 1e-3);
    }

    #[test]
    fn test_camber_branches_continuous_at_max_camber() {
        for m_digit in 1..=9 {
            for p_digit in 1..=9 {
                let m = m_digit as f64 / 100.0;
                let p = p_digit as f64 / 10.0;
                let fwd = forward_camber(m, p, p);
                let aft = aft_camber(m, p, p);
                assert_relative_eq!(fwd.y, aft.y, epsilon = 1e-9);
                assert_relative_eq!(fwd.slope, aft.slope, epsilon = 1e-9);
                assert_relative_eq!(m, fwd.y, epsilon = 1e-9);
                assert_relative_eq!(0.0, fwd.slope, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_camber_line_ends_on_chord() {
        let n = naca("6409", 1.0);
        assert_relative_eq!(0.0, n.camber_line(0.0).y, epsilon = 1e-12);
        assert_relative_eq!(0.0, n.camber_line(1.0).y, epsilon = 1e-12);
    }

    #[test_case("0012")]
    #[test_case("2012")]
    #[test_case("0412")]
    fn test_symmetric_camber_is_flat(s: &str) {
        let n = naca(s, 100.0);
        for x in cosine_stations(100).unwrap() {
            assert_eq!(CamberPoint::flat(), n.camber_line(x));
        }
    }

    #[test_case(-5.0)]
    #[test_case(0.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_invalid_chord(c: f64) {
        let result = Naca4Digit::new("2412".parse().unwrap(), c);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidChordLength { .. })
        ));
    }

    #[test]
    fn test_invalid_designation_produces_nothing() {
        let result = generate_surface_coordinates("242", 100.0, 100);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidDesignation { .. })
        ));
    }

    #[test]
    fn test_negative_chord_rejected() {
        let result = generate_surface_coordinates("2412", -5.0, 100);
        assert_eq!(
            Err(GeometryError::InvalidChordLength { value: -5.0 }),
            result.map(|a| a.len())
        );
    }

    #[test]
    fn test_chord_checked_before_point_count() {
        let result = generate_surface_coordinates("2412", -5.0, 1);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidChordLength { .. })
        ));
    }

    #[test]
    fn test_too_few_points_rejected() {
        let result = generate_surface_coordinates("2412", 100.0, 1);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidPointCount { value: 1 })
        ));
    }

    #[test_case("0012", 100.0, 100)]
    #[test_case("2412", 100.0, 100)]
    #[test_case("4412", 200.0, 37)]
    #[test_case("0012", 50.0, 150)]
    #[test_case("9999", 3.5, 2)]
    fn test_surface_shape(s: &str, c: f64, n: usize) {
        let airfoil = generate_surface_coordinates(s, c, n).unwrap();
        assert_eq!(n, airfoil.upper.len());
        assert_eq!(n, airfoil.lower.len());
        assert_eq!(n, airfoil.camber.len());

        assert_relative_eq!(0.0, airfoil.upper[0].x, epsilon = 1e-9);
        assert_relative_eq!(0.0, airfoil.lower[0].x, epsilon = 1e-9);

        // The trailing edge thickness left by the polynomial is tilted by the camber slope
        let g = naca(s, c);
        let shift = g.half_thickness(1.0) * g.camber_line(1.0).slope.atan().sin().abs() * c;
        assert_relative_eq!(c, airfoil.upper[n - 1].x, epsilon = shift + 1e-9 * c);
        assert_relative_eq!(c, airfoil.lower[n - 1].x, epsilon = shift + 1e-9 * c);
    }

    #[test]
    fn test_parsed_designation_matches_string() {
        let d: Naca4Designation = "4415".parse().unwrap();
        let a = generate_naca4(d, 120.0, 50).unwrap();
        let b = generate_surface_coordinates("4415", 120.0, 50).unwrap();
        assert_eq!(a.upper, b.upper);
        assert_eq!(a.lower, b.lower);
    }

    #[test]
    fn test_parsed_designation_still_validates_chord() {
        let d: Naca4Designation = "4415".parse().unwrap();
        assert!(matches!(
            generate_naca4(d, 0.0, 50),
            Err(GeometryError::InvalidChordLength { .. })
        ));
    }

    #[test]
    fn test_trailing_edge_offset_high_camber() {
        // 9999: slope -1.8 and half-thickness 0.010395 at the trailing edge
        let airfoil = generate_surface_coordinates("9999", 3.5, 2).unwrap();
        assert_relative_eq!(3.531804027, airfoil.upper[1].x, epsilon = 1e-6);
        assert_relative_eq!(3.468195973, airfoil.lower[1].x, epsilon = 1e-6);
    }

    #[test]
    fn test_symmetric_trailing_edge_exact() {
        let airfoil = generate_surface_coordinates("0012", 100.0, 100).unwrap();
        assert_relative_eq!(100.0, airfoil.upper[99].x, epsilon = 1e-9);
        assert_relative_eq!(100.0, airfoil.lower[99].x, epsilon = 1e-9);
        assert_relative_eq!(0.126, airfoil.upper[99].y, epsilon = 1e-6);
        assert_relative_eq!(-0.126, airfoil.lower[99].y, epsilon = 1e-6);
    }

    #[test]
    fn test_naca_0012_scenario() {
        let airfoil = generate_surface_coordinates("0012", 100.0, 100).unwrap();

        for p in [airfoil.upper[0], airfoil.lower[0]] {
            assert_relative_eq!(0.0, p.x, epsilon = 1e-12);
            assert_relative_eq!(0.0, p.y, epsilon = 1e-12);
        }

        for (u, l) in airfoil.upper.iter().zip(airfoil.lower.iter()) {
            assert_relative_eq!(u.x, l.x, epsilon = 1e-12);
            assert_relative_eq!(u.y, -l.y, epsilon = 1e-12);
        }

        let (thk, at) = airfoil.max_thickness().unwrap();
        assert_relative_eq!(12.0, thk, max_relative = 0.02);
        assert!((at.x - 30.0).abs() < 3.0);
    }

    #[test]
    fn test_thickness_is_normal_to_camber() {
        let n = naca("4412", 150.0);
        for x in cosine_stations(40).unwrap() {
            let s = n.station_at(x);
            let yt = n.half_thickness(x) * 150.0;
            assert_relative_eq!(yt, dist(&s.camber, &s.upper), epsilon = 1e-9);
            assert_relative_eq!(yt, dist(&s.camber, &s.lower), epsilon = 1e-9);

            // Upper and lower points are mirrored through the camber point along the normal
            let slope = n.camber_line(x).slope;
            let d = s.upper - s.lower;
            assert_relative_eq!(0.0, d.x + slope * d.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_upper_above_lower() {
        for s in ["0012", "2412", "4415", "6409", "9999", "1301"] {
            let airfoil = generate_surface_coordinates(s, 10.0, 60).unwrap();
            for (u, l) in airfoil.upper.iter().zip(airfoil.lower.iter()).skip(1) {
                assert!(u.y > l.y, "{}: {} <= {}", s, u.y, l.y);
            }
        }
    }

    #[test]
    fn test_chord_scaling_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let s = format!(
                "{}{}{:02}",
                rng.gen_range(0..10),
                rng.gen_range(0..10),
                rng.gen_range(1..100)
            );
            let c: f64 = rng.gen_range(0.1..500.0);
            let k: f64 = rng.gen_range(0.01..20.0);
            let n: usize = rng.gen_range(2..300);

            let a = generate_surface_coordinates(&s, c, n).unwrap();
            let b = generate_surface_coordinates(&s, k * c, n).unwrap();

            let scaled = b.upper.iter().chain(b.lower.iter());
            for (p0, p1) in a.upper.iter().chain(a.lower.iter()).zip(scaled) {
                assert_relative_eq!(k * p0.x, p1.x, epsilon = 1e-9 * k * c, max_relative = 1e-9);
                assert_relative_eq!(k * p0.y, p1.y, epsilon = 1e-9 * k * c, max_relative = 1e-9);
            }
        }
    }
}
