use ncollide2d::na::Point2;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializes a point sequence as a list of `[x, y]` pairs, the shape most plotting and CAD
/// scripts read directly
pub fn points<S: Serializer>(v: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(v.len()))?;
    for p in v.iter() {
        seq.serialize_element(&[p.x, p.y])?;
    }
    seq.end()
}
