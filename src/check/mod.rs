//! Check a header, and the points it describes, for conformance.
//!
//! Points are fed through a [Checker] first, then [Checker::check] runs every rule against the
//! header and sends what it finds to a [Sink]:
//!
//! ```
//! use las_validate::{Checker, Header, Point, Report};
//! use las_validate::crs::GeoKeys;
//!
//! let header = Header {
//!     legacy_number_of_point_records: 1,
//!     legacy_number_of_points_by_return: [1, 0, 0, 0, 0],
//!     geokeys: Some(GeoKeys::new([(1024, 1), (3072, 32615)])),
//!     ..Default::default()
//! };
//! let mut checker = Checker::new(&header, Default::default());
//! checker.add(&Point { return_number: 1, number_of_returns: 1, ..Default::default() });
//! let mut report = Report::default();
//! let description = checker.check(&header, &mut report);
//! assert_eq!(Some("UTM 15 northern hemisphere".to_string()), description);
//! ```
//!
//! Nothing is ever an error here. Everything that is wrong with a header is a
//! [Diagnostic], and every rule runs whatever the others found.

mod diagnostic;
mod rules;

pub use self::diagnostic::{Diagnostic, Report, Severity, Sink};

use crate::crs::CrsContext;
use crate::{Bounds, Header, Inventory, Point, Transform, Vector};
use chrono::{NaiveDate, Utc};
use log::{Level, log};

/// Options for a check run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// The date the file creation date is checked against.
    ///
    /// If `None`, today's date in UTC.
    pub today: Option<NaiveDate>,
}

impl CheckOptions {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Per-point tallies of suspicious points.
///
/// These are gathered alongside the inventory but never turned into diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Points with a return number of zero.
    pub return_number_zero: u64,

    /// Points with a number of returns of zero.
    pub number_of_returns_zero: u64,

    /// Points whose return number is larger than their number of returns.
    pub return_number_larger_than_number_of_returns: u64,

    /// Points outside the declared bounds, widened by one scale unit per side.
    pub outside_bounding_box: u64,
}

/// Accumulates points, then checks a header against them.
#[derive(Clone, Copy, Debug)]
pub struct Checker {
    options: CheckOptions,
    transforms: Vector<Transform>,
    bounds: Bounds,
    inventory: Inventory,
    counters: Counters,
}

impl Checker {
    /// Creates a checker for the points described by this header.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{CheckOptions, Checker, Header};
    /// let checker = Checker::new(&Header::default(), CheckOptions::default());
    /// assert!(!checker.inventory().is_active());
    /// ```
    pub fn new(header: &Header, options: CheckOptions) -> Checker {
        Checker {
            options,
            transforms: header.transforms,
            bounds: header.bounds.pad(&header.transforms),
            inventory: Inventory::default(),
            counters: Counters::default(),
        }
    }

    /// Adds a point.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Checker, Header, Point};
    /// let mut checker = Checker::new(&Header::default(), Default::default());
    /// checker.add(&Point { return_number: 2, number_of_returns: 1, ..Default::default() });
    /// assert_eq!(1, checker.counters().return_number_larger_than_number_of_returns);
    /// ```
    pub fn add(&mut self, point: &Point) {
        self.inventory.add(point);
        if point.return_number == 0 {
            self.counters.return_number_zero += 1;
        }
        if point.number_of_returns == 0 {
            self.counters.number_of_returns_zero += 1;
        }
        if point.return_number > point.number_of_returns {
            self.counters.return_number_larger_than_number_of_returns += 1;
        }
        let coordinates = self.transforms.direct(&Vector {
            x: point.x,
            y: point.y,
            z: point.z,
        });
        if !self.bounds.contains(&coordinates) {
            self.counters.outside_bounding_box += 1;
        }
    }

    /// Returns the inventory of the points added so far.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the per-point tallies.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Runs every rule against the header and returns the coordinate reference system
    /// description, if one was resolved.
    ///
    /// The coordinate reference system is only resolved if the header has geokeys or a WKT
    /// string.
    pub fn check<S: Sink>(&self, header: &Header, sink: &mut S) -> Option<String> {
        rules::check(header, &self.inventory, self.options.today(), sink);
        if header.geokeys.is_some() || header.wkt_crs().is_some() {
            self.check_crs(header, sink)
        } else {
            None
        }
    }

    /// Checks only the coordinate reference system and returns its description, if one was
    /// resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Checker, Header};
    /// use las_validate::crs::GeoKeys;
    /// let mut header = Header::default();
    /// let checker = Checker::new(&header, Default::default());
    /// let mut diagnostics = Vec::new();
    /// assert_eq!(None, checker.check_crs(&header, &mut diagnostics));
    /// assert_eq!(
    ///     "neither GEOTIFF tags nor OGC WKT specify Coordinate Reference System",
    ///     diagnostics[0].message
    /// );
    ///
    /// header.geokeys = Some(GeoKeys::new([(3072, 26915)]));
    /// let description = checker.check_crs(&header, &mut diagnostics);
    /// assert_eq!(Some("UTM 15 northern hemisphere".to_string()), description);
    /// ```
    pub fn check_crs<S: Sink>(&self, header: &Header, sink: &mut S) -> Option<String> {
        let wkt = header.wkt_crs();
        if header.geokeys.is_none() && wkt.is_none() {
            sink.fail(
                "CRS",
                "neither GEOTIFF tags nor OGC WKT specify Coordinate Reference System".to_string(),
            );
            return None;
        }
        let mut context = CrsContext::new();
        if let Some(geokeys) = &header.geokeys {
            let resolved = context.apply_geokeys(geokeys);
            for &unsupported in context.unsupported() {
                sink.unsupported(unsupported);
            }
            if !resolved {
                sink.fail(
                    "CRS",
                    format!(
                        "the {} geokeys do not properly specify a Coordinate Reference System",
                        geokeys.number_of_keys()
                    ),
                );
            }
        }
        if let Some(wkt) = wkt {
            log!(Level::Debug, "not checking {} bytes of OGC WKT", wkt.len());
            sink.warning(
                "CRS",
                "there is a OGC WKT string but its check is not yet implemented".to_string(),
            );
        }
        context.description().map(str::to_string)
    }

    /// Runs every rule and collects the results into a [Report].
    pub fn report(&self, header: &Header) -> Report {
        let mut report = Report::default();
        report.crs_description = self.check(header, &mut report);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vlr;
    use crate::crs::{GeoKeys, Unsupported};

    fn options() -> CheckOptions {
        CheckOptions {
            today: NaiveDate::from_ymd_opt(2024, 3, 1),
        }
    }

    fn point(x: i32, return_number: u8, number_of_returns: u8) -> Point {
        Point {
            x,
            return_number,
            number_of_returns,
            ..Default::default()
        }
    }

    #[test]
    fn counters() {
        let header = Header::default();
        let mut checker = Checker::new(&header, options());
        checker.add(&point(0, 0, 0));
        checker.add(&point(1, 1, 1));
        checker.add(&point(1, 3, 2));
        checker.add(&point(2, 1, 1));
        checker.add(&point(-2, 1, 1));
        assert_eq!(
            Counters {
                return_number_zero: 1,
                number_of_returns_zero: 1,
                return_number_larger_than_number_of_returns: 1,
                outside_bounding_box: 2,
            },
            *checker.counters()
        );
        assert_eq!(5, checker.inventory().number_of_points);
    }

    #[test]
    fn order_does_not_matter() {
        let header = Header::default();
        let points = [point(5, 1, 2), point(-3, 2, 2), point(7, 0, 1)];
        let mut forward = Checker::new(&header, options());
        let mut backward = Checker::new(&header, options());
        for p in &points {
            forward.add(p);
        }
        for p in points.iter().rev() {
            backward.add(p);
        }
        assert_eq!(forward.inventory(), backward.inventory());
        assert_eq!(forward.counters(), backward.counters());
        assert_eq!(forward.report(&header), backward.report(&header));
    }

    #[test]
    fn unresolved_geokeys() {
        let header = Header {
            geokeys: Some(GeoKeys::new([(3072, 1)])),
            ..Default::default()
        };
        let report = Checker::new(&header, options()).report(&header);
        assert_eq!(vec![Unsupported::ProjectedCrs(1)], report.unsupported);
        let last = report.fails().last().unwrap();
        assert_eq!("CRS", last.category);
        assert_eq!(
            "the 1 geokeys do not properly specify a Coordinate Reference System",
            last.message
        );
        assert_eq!(None, report.crs_description);
    }

    #[test]
    fn wkt_warning() {
        let header = Header {
            vlrs: vec![Vlr::projection(2112, b"GEOGCS[]\0".to_vec())],
            ..Default::default()
        };
        let report = Checker::new(&header, options()).report(&header);
        assert!(report.warnings().any(|diagnostic| diagnostic.category == "CRS"
            && diagnostic.message
                == "there is a OGC WKT string but its check is not yet implemented"));
        assert!(report.fails().any(|diagnostic| diagnostic.message
            == "file does not specify a Coordinate Reference System with GEOTIFF tags"));
    }

    #[test]
    fn no_crs() {
        let header = Header::default();
        let report = Checker::new(&header, options()).report(&header);
        assert_eq!(
            1,
            report
                .diagnostics
                .iter()
                .filter(|diagnostic| diagnostic.category == "CRS")
                .count()
        );
    }
}
