//! Reference ellipsoids.

use crate::utils::format_g;

/// Clarke 1866, the ellipsoid of NAD27.
pub const NAD27: u8 = 5;
/// GRS 1980, the ellipsoid of NAD83 and ETRS89.
pub const NAD83: u8 = 11;
/// International 1924.
pub const INTERNATIONAL: u8 = 14;
/// South American 1969.
pub const SAD69: u8 = 19;
/// WGS 72.
pub const WGS72: u8 = 22;
/// WGS 84.
pub const WGS84: u8 = 23;
/// Indonesian National 1974.
pub const ID74: u8 = 24;
/// GDA94 uses the WGS 84 entry.
pub const GDA94: u8 = WGS84;

/// One row of the ellipsoid catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceEllipsoid {
    /// The catalog id, from 1 to 24.
    pub id: u8,
    /// The name.
    pub name: &'static str,
    /// The equatorial radius in meters.
    pub equatorial_radius: f64,
    /// The square of the first eccentricity.
    pub eccentricity_squared: f64,
    /// The inverse flattening.
    pub inverse_flattening: f64,
}

const fn reference(
    id: u8,
    name: &'static str,
    equatorial_radius: f64,
    eccentricity_squared: f64,
    inverse_flattening: f64,
) -> ReferenceEllipsoid {
    ReferenceEllipsoid {
        id,
        name,
        equatorial_radius,
        eccentricity_squared,
        inverse_flattening,
    }
}

static CATALOG: [ReferenceEllipsoid; 24] = [
    reference(1, "Airy", 6377563.396, 0.00667054, 299.3249646),
    reference(2, "Australian National", 6378160.0, 0.006694542, 298.25),
    reference(3, "Bessel 1841", 6377397.155, 0.006674372, 299.1528128),
    reference(4, "Bessel 1841 (Nambia) ", 6377483.865, 0.006674372, 299.1528128),
    reference(5, "Clarke 1866 (NAD-27)", 6378206.4, 0.006768658, 294.9786982),
    reference(6, "Clarke 1880", 6378249.145, 0.006803511, 293.465),
    reference(7, "Everest 1830", 6377276.345, 0.006637847, 300.8017),
    reference(8, "Fischer 1960 (Mercury) ", 6378166.0, 0.006693422, 298.3),
    reference(9, "Fischer 1968", 6378150.0, 0.006693422, 298.3),
    reference(10, "GRS 1967", 6378160.0, 0.006694605, 298.247167427),
    reference(11, "GRS 1980 (NAD-83)", 6378137.0, 0.00669438002290, 298.257222101),
    reference(12, "Helmert 1906", 6378200.0, 0.006693422, 298.3),
    reference(13, "Hough", 6378270.0, 0.00672267, 297.0),
    reference(14, "International", 6378388.0, 0.00672267, 297.0),
    reference(15, "Krassovsky", 6378245.0, 0.006693422, 298.3),
    reference(16, "Modified Airy", 6377340.189, 0.00667054, 299.3249646),
    reference(17, "Modified Everest", 6377304.063, 0.006637847, 300.8017),
    reference(18, "Modified Fischer 1960", 6378155.0, 0.006693422, 298.3),
    reference(19, "South American 1969", 6378160.0, 0.006694542, 298.25),
    reference(20, "WGS 60", 6378165.0, 0.006693422, 298.3),
    reference(21, "WGS 66", 6378145.0, 0.006694542, 298.25),
    reference(22, "WGS-72", 6378135.0, 0.006694318, 298.26),
    reference(23, "WGS-84", 6378137.0, 0.00669437999013, 298.257223563),
    reference(
        24,
        "Indonesian National 1974",
        6378160.0,
        0.0066946091071419115,
        298.2469988070381,
    ),
];

/// Returns the catalog entry for an id, if there is one.
///
/// # Examples
///
/// ```
/// use las_validate::crs::ellipsoid;
/// assert_eq!("Airy", ellipsoid::lookup(1).unwrap().name);
/// assert!(ellipsoid::lookup(0).is_none());
/// assert!(ellipsoid::lookup(25).is_none());
/// ```
pub fn lookup(id: u8) -> Option<&'static ReferenceEllipsoid> {
    CATALOG.get(usize::from(id).checked_sub(1)?)
}

/// A selected ellipsoid, with the values derived from its catalog entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The catalog entry.
    pub reference: &'static ReferenceEllipsoid,
    /// The polar radius in meters.
    pub polar_radius: f64,
    /// The first eccentricity.
    pub eccentricity: f64,
    /// The square of the second eccentricity, `e² / (1 - e²)`.
    pub eccentricity_prime_squared: f64,
    /// The series coefficient `(1 - √(1 - e²)) / (1 + √(1 - e²))`.
    pub eccentricity_e1: f64,
}

impl Ellipsoid {
    /// Selects an ellipsoid from the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Ellipsoid;
    /// let wgs84 = Ellipsoid::new(23).unwrap();
    /// assert_eq!(6378137.0, wgs84.reference.equatorial_radius);
    /// assert!(Ellipsoid::new(0).is_none());
    /// ```
    pub fn new(id: u8) -> Option<Ellipsoid> {
        let reference = lookup(id)?;
        let e2 = reference.eccentricity_squared;
        let root = (1. - e2).sqrt();
        Some(Ellipsoid {
            reference,
            polar_radius: reference.equatorial_radius * root,
            eccentricity: e2.sqrt(),
            eccentricity_prime_squared: e2 / (1. - e2),
            eccentricity_e1: (1. - root) / (1. + root),
        })
    }

    /// Returns the catalog id.
    pub fn id(&self) -> u8 {
        self.reference.id
    }

    /// Returns a one line description of this ellipsoid.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Ellipsoid;
    /// assert_eq!("23 - WGS-84 (6.37814e+06 0.00669438)", Ellipsoid::new(23).unwrap().description());
    /// assert_eq!(" 1 - Airy (6.37756e+06 0.00667054)", Ellipsoid::new(1).unwrap().description());
    /// ```
    pub fn description(&self) -> String {
        format!(
            "{:2} - {} ({} {})",
            self.reference.id,
            self.reference.name,
            format_g(self.reference.equatorial_radius),
            format_g(self.reference.eccentricity_squared)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        for (i, reference) in CATALOG.iter().enumerate() {
            assert_eq!(i + 1, usize::from(reference.id));
        }
    }

    #[test]
    fn wgs84() {
        let ellipsoid = Ellipsoid::new(WGS84).unwrap();
        assert_eq!(6378137.0, ellipsoid.reference.equatorial_radius);
        assert_eq!(0.00669437999013, ellipsoid.reference.eccentricity_squared);
        assert_eq!(
            6378137.0 * (1f64 - 0.00669437999013).sqrt(),
            ellipsoid.polar_radius
        );
        assert!((ellipsoid.polar_radius - 6356752.314).abs() < 1e-3);
    }

    #[test]
    fn derived_values() {
        let ellipsoid = Ellipsoid::new(NAD27).unwrap();
        let e2: f64 = 0.006768658;
        assert_eq!(e2.sqrt(), ellipsoid.eccentricity);
        assert_eq!(e2 / (1. - e2), ellipsoid.eccentricity_prime_squared);
        let root = (1f64 - e2).sqrt();
        assert_eq!((1. - root) / (1. + root), ellipsoid.eccentricity_e1);
    }

    #[test]
    fn out_of_range() {
        assert!(Ellipsoid::new(0).is_none());
        assert!(Ellipsoid::new(25).is_none());
        assert!(Ellipsoid::new(u8::MAX).is_none());
    }

    #[test]
    fn gda94_is_wgs84() {
        assert_eq!(
            Ellipsoid::new(GDA94).unwrap().reference.name,
            Ellipsoid::new(WGS84).unwrap().reference.name
        );
    }
}
