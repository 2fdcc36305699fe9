//! Writes generated airfoils to flat 2D drawing files.
//!
//! The DXF output holds the upper surface as one open LWPOLYLINE from the leading edge to the
//! trailing edge, the lower surface as a second LWPOLYLINE running back from the trailing edge,
//! optional LINE entities closing either edge, and a TEXT annotation with the designation and
//! chord. Coordinates are written unchanged, in the units of the chord.

use crate::airfoil::designation::Naca4Designation;
use crate::airfoil::{Airfoil, AirfoilSummary};
use crate::errors::ExportError;
use crate::geometry::distances2::dist;
use crate::serialize::points;
use dxf::entities::{Entity, EntityType, Line, LwPolyline, Text};
use dxf::enums::AcadVersion;
use dxf::tables::Layer;
use dxf::{Drawing, LwPolylineVertex, Point};
use ncollide2d::na::Point2;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Annotation text height as a fraction of the chord
const TEXT_HEIGHT_RATIO: f64 = 0.05;

/// Annotation insertion point as fractions of the chord
const TEXT_INSERT_RATIO: (f64, f64) = (0.1, 0.2);

/// Controls whether the leading and trailing edges get a connecting line between the upper and
/// lower surfaces
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EdgeClosure {
    /// Close an edge only when the surface end points differ by more than the tolerance along
    /// either axis
    #[default]
    Auto,

    /// Always draw both edge lines, even when they are degenerate
    Always,

    /// Leave the outline open
    Never,
}

impl EdgeClosure {
    fn should_close(&self, u: &Point2<f64>, l: &Point2<f64>, tol: f64) -> bool {
        match self {
            EdgeClosure::Auto => (u.x - l.x).abs() > tol || (u.y - l.y).abs() > tol,
            EdgeClosure::Always => true,
            EdgeClosure::Never => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub edge_closure: EdgeClosure,

    /// Offset along x or y, in drawing units, up to which the two surfaces are considered to meet
    pub tolerance: f64,

    /// Add the designation and chord text to the drawing
    pub annotate: bool,

    /// Layer all entities are placed on
    pub layer: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions::new(EdgeClosure::Auto, 1e-3, true, "0")
    }
}

impl ExportOptions {
    pub fn new(edge_closure: EdgeClosure, tolerance: f64, annotate: bool, layer: &str) -> Self {
        ExportOptions {
            edge_closure,
            tolerance,
            annotate,
            layer: layer.to_string(),
        }
    }
}

/// The file name used when none is given, e.g. `naca_2412_100mm.dxf`
pub fn default_output_name(designation: &Naca4Designation, chord: f64) -> PathBuf {
    PathBuf::from(format!("naca_{}_{:.0}mm.dxf", designation, chord))
}

fn to_point(p: &Point2<f64>) -> Point {
    Point::new(p.x, p.y, 0.0)
}

fn polyline<'a>(vertices: impl Iterator<Item = &'a Point2<f64>>) -> LwPolyline {
    let mut line = LwPolyline::default();
    line.vertices = vertices
        .map(|p| LwPolylineVertex {
            x: p.x,
            y: p.y,
            ..Default::default()
        })
        .collect();
    line
}

fn text(value: String, x: f64, y: f64, height: f64) -> Text {
    let mut t = Text::default();
    t.value = value;
    t.location = Point::new(x, y, 0.0);
    t.text_height = height;
    t
}

/// Builds the drawing for an airfoil without touching the file system.
pub fn build_drawing(
    airfoil: &Airfoil,
    designation: &Naca4Designation,
    chord: f64,
    options: &ExportOptions,
) -> Result<Drawing, ExportError> {
    let (first_u, first_l, last_u, last_l) = match (
        airfoil.upper.first(),
        airfoil.lower.first(),
        airfoil.upper.last(),
        airfoil.lower.last(),
    ) {
        (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
        _ => return Err(ExportError::EmptyProfile),
    };

    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2010;
    if options.layer != "0" {
        drawing.add_layer(Layer {
            name: options.layer.clone(),
            ..Default::default()
        });
    }

    let mut entities: Vec<EntityType> = vec![
        EntityType::LwPolyline(polyline(airfoil.upper.iter())),
        EntityType::LwPolyline(polyline(airfoil.lower.iter().rev())),
    ];

    for (edge, u, l) in [("leading", first_u, first_l), ("trailing", last_u, last_l)] {
        let gap = dist(u, l);
        let close = options.edge_closure.should_close(u, l, options.tolerance);
        debug!(edge, gap, close, "edge closure");
        if close {
            entities.push(EntityType::Line(Line::new(to_point(u), to_point(l))));
        }
    }

    if options.annotate {
        let h = chord * TEXT_HEIGHT_RATIO;
        let x = chord * TEXT_INSERT_RATIO.0;
        let y = chord * TEXT_INSERT_RATIO.1;
        entities.push(EntityType::Text(text(
            format!("NACA {}", designation),
            x,
            y,
            h,
        )));
        entities.push(EntityType::Text(text(
            format!("Chord: {:.1}mm", chord),
            x,
            y - 1.5 * h,
            h,
        )));
    }

    for specific in entities {
        let mut entity = Entity::new(specific);
        entity.common.layer = options.layer.clone();
        drawing.add_entity(entity);
    }

    Ok(drawing)
}

/// Builds the drawing for an airfoil and saves it to `path`
pub fn write_dxf<P: AsRef<Path>>(
    path: P,
    airfoil: &Airfoil,
    designation: &Naca4Designation,
    chord: f64,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let drawing = build_drawing(airfoil, designation, chord, options)?;
    drawing
        .save_file(path)
        .map_err(|source| ExportError::ExportFailure {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), points = airfoil.len(), "airfoil saved");
    Ok(())
}

/// A complete coordinate dump of a generated airfoil
#[derive(Serialize)]
pub struct AirfoilProfile {
    pub summary: AirfoilSummary,

    #[serde(serialize_with = "points")]
    pub upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "points")]
    pub lower: Vec<Point2<f64>>,

    #[serde(serialize_with = "points")]
    pub camber: Vec<Point2<f64>>,
}

impl AirfoilProfile {
    pub fn new(airfoil: &Airfoil, designation: &Naca4Designation, chord: f64) -> AirfoilProfile {
        AirfoilProfile {
            summary: AirfoilSummary::new(airfoil, designation, chord),
            upper: airfoil.upper.clone(),
            lower: airfoil.lower.clone(),
            camber: airfoil.camber.clone(),
        }
    }
}

/// Writes the coordinates and summary of an airfoil as pretty printed JSON
pub fn write_json<P: AsRef<Path>>(
    path: P,
    airfoil: &Airfoil,
    designation: &Naca4Designation,
    chord: f64,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    if airfoil.is_empty() {
        return Err(ExportError::EmptyProfile);
    }

    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, &AirfoilProfile::new(airfoil, designation, chord))?;
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), "profile saved");
    Ok(())
}
