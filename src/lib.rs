//! Check [ASPRS LAS](https://www.asprs.org/committee-general/laser-las-file-format-exchange-activities.html)
//! point cloud files for conformance, and resolve their GeoTIFF coordinate reference systems.
//!
//! # Validating a file
//!
//! Create a `Reader` from a `Path`, or anything that implements `Read + Seek`, and validate it:
//!
//! ```
//! use std::io::Cursor;
//! use las_validate::{Header, Reader};
//!
//! let mut cursor = Cursor::new(Vec::new());
//! Header::default().into_raw().write_to(&mut cursor).unwrap();
//! cursor.set_position(0);
//!
//! let mut reader = Reader::new(cursor).unwrap();
//! let report = reader.validate(Default::default()).unwrap();
//! for diagnostic in report.fails() {
//!     println!("{}", diagnostic);
//! }
//! ```
//!
//! Every rule runs, whatever the others find. Problems with the file are never errors: errors
//! are only returned when the bytes can't be read at all.
//!
//! # Checking without a file
//!
//! A [Checker] works on a [Header] and on points you give it. Diagnostics go to any [Sink]:
//!
//! ```
//! use las_validate::{Checker, Diagnostic, Header, Point};
//!
//! let mut header = Header::default();
//! header.header_size = 226;
//! let mut checker = Checker::new(&header, Default::default());
//! checker.add(&Point::default());
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! checker.check(&header, &mut diagnostics);
//! assert!(diagnostics.iter().any(|d| d.message == "should be at least 227 and not 226"));
//! ```
//!
//! # Coordinate reference systems
//!
//! The [crs] module decodes GeoTIFF geokeys into an ellipsoid, a projection, and units. See
//! [CrsContext].

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod check;
pub mod crs;
pub mod feature;
pub mod header;
pub mod point;
pub mod raw;
pub mod reader;
pub mod utils;
pub mod vlr;

mod bounds;
mod color;
mod error;
mod global_encoding;
mod inventory;
mod transform;
mod vector;
mod version;

pub use crate::bounds::Bounds;
pub use crate::check::{CheckOptions, Checker, Counters, Diagnostic, Report, Severity, Sink};
pub use crate::color::Color;
pub use crate::crs::CrsContext;
pub use crate::error::Error;
pub use crate::feature::Feature;
pub use crate::global_encoding::{GlobalEncoding, GpsTime};
pub use crate::header::Header;
pub use crate::inventory::Inventory;
pub use crate::point::Point;
pub use crate::reader::Reader;
pub use crate::transform::Transform;
pub use crate::vector::Vector;
pub use crate::version::Version;
pub use crate::vlr::Vlr;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
