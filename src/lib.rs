//! Generates NACA 4-digit airfoil surfaces from a designation and a chord length, and writes
//! them to a flat 2D DXF drawing.
//!
//! ```no_run
//! use naca_dxf::airfoil::generate::generate_surface_coordinates;
//! use naca_dxf::export::{write_dxf, ExportOptions};
//!
//! let airfoil = generate_surface_coordinates("2412", 100.0, 100).unwrap();
//! let designation = "2412".parse().unwrap();
//! write_dxf("naca_2412_100mm.dxf", &airfoil, &designation, 100.0, &ExportOptions::default())
//!     .unwrap();
//! ```

pub mod airfoil;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod serialize;

pub use airfoil::designation::Naca4Designation;
pub use airfoil::generate::{
    generate_naca4, generate_surface_coordinates, AirfoilGenerator, Naca4Digit,
};
pub use airfoil::Airfoil;
pub use errors::{ExportError, GeometryError};
