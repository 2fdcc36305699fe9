use itertools::Itertools;
use ncollide2d::na::{Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// Total length of the open polygonal chain through the points, in order
pub fn polyline_length(points: &[Point2<f64>]) -> f64 {
    points.iter().tuple_windows().map(|(a, b)| dist(a, b)).sum()
}
