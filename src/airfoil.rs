use crate::geometry::distances2::{dist, polyline_length};
use crate::serialize::Point2f64;
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod designation;
pub mod generate;
pub mod sampling;

pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// The generated surfaces of an airfoil in physical units. The three sequences are index aligned:
/// `camber[i]`, `upper[i]`, and `lower[i]` all come from the same chord station, ordered from the
/// leading edge to the trailing edge.
#[derive(Debug, Clone)]
pub struct Airfoil {
    pub camber: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.camber.len()
    }

    pub fn is_empty(&self) -> bool {
        self.camber.is_empty()
    }

    /// Returns the upper surface from leading to trailing edge followed by the lower surface from
    /// trailing to leading edge, which is the order a cutter would follow around the outline.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        let mut lower = self.lower.to_vec();
        lower.reverse();
        result.append(&mut lower);
        result
    }

    /// Distance between the first upper and first lower points
    pub fn leading_edge_gap(&self) -> Option<f64> {
        Some(dist(self.upper.first()?, self.lower.first()?))
    }

    /// Distance between the last upper and last lower points. The standard thickness polynomial
    /// does not close, so this is small but not zero.
    pub fn trailing_edge_gap(&self) -> Option<f64> {
        Some(dist(self.upper.last()?, self.lower.last()?))
    }

    /// The largest vertical distance between paired upper and lower points, with the camber point
    /// of the station where it occurs
    pub fn max_thickness(&self) -> Option<(f64, Point2<f64>)> {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .zip(self.camber.iter())
            .map(|((u, l), c)| (u.y - l.y, *c))
            .max_by(|a, b| a.0.total_cmp(&b.0))
    }

    pub fn upper_length(&self) -> f64 {
        polyline_length(&self.upper)
    }

    pub fn lower_length(&self) -> f64 {
        polyline_length(&self.lower)
    }
}

/// Derived measurements of a generated airfoil, reported to the console and written alongside the
/// coordinates in profile dumps
#[derive(Debug, Clone, Serialize)]
pub struct AirfoilSummary {
    pub designation: String,
    pub chord: f64,
    pub num_points: usize,
    pub max_camber_percent: u8,
    pub camber_position_percent: u8,
    pub thickness_percent: u8,
    pub max_thickness: f64,

    #[serde(with = "Point2f64")]
    pub max_thickness_at: Point2<f64>,
    pub trailing_edge_gap: f64,
    pub upper_length: f64,
    pub lower_length: f64,
}

impl AirfoilSummary {
    pub fn new(
        airfoil: &Airfoil,
        designation: &designation::Naca4Designation,
        chord: f64,
    ) -> AirfoilSummary {
        let (max_thickness, max_thickness_at) =
            airfoil.max_thickness().unwrap_or((0.0, Point2::origin()));

        AirfoilSummary {
            designation: designation.to_string(),
            chord,
            num_points: airfoil.len(),
            max_camber_percent: designation.max_camber_percent(),
            camber_position_percent: designation.camber_position_percent(),
            thickness_percent: designation.thickness_percent(),
            max_thickness,
            max_thickness_at,
            trailing_edge_gap: airfoil.trailing_edge_gap().unwrap_or(0.0),
            upper_length: airfoil.upper_length(),
            lower_length: airfoil.lower_length(),
        }
    }
}
