//! The CRS selection built from geokeys and user overrides.

use crate::crs::ellipsoid::{self, Ellipsoid};
use crate::crs::epsg;
use crate::crs::geokey::{GeoKeyEntry, GeoKeys, USER_DEFINED, key};
use crate::crs::projection::{LambertConformalConic, Projection, TransverseMercator, Utm};
use crate::crs::units::{LinearUnit, Origin};
use log::{Level, log};
use std::fmt;

const MODEL_TYPE_GEOGRAPHIC: u16 = 2;
const CT_TRANSVERSE_MERCATOR: u16 = 1;
const CT_LAMBERT_CONF_CONIC_2SP: u16 = 8;

/// Coordinate transformation names for values of ProjCoordTransGeoKey, starting at 1.
const COORDINATE_TRANSFORMS: [&str; 27] = [
    "TransverseMercator",
    "TransvMercator_Modified_Alaska",
    "ObliqueMercator",
    "ObliqueMercator_Laborde",
    "ObliqueMercator_Rosenmund",
    "ObliqueMercator_Spherical",
    "Mercator",
    "LambertConfConic_2SP",
    "LambertConfConic_Helmert",
    "LambertAzimEqualArea",
    "AlbersEqualArea",
    "AzimuthalEquidistant",
    "EquidistantConic",
    "Stereographic",
    "PolarStereographic",
    "ObliqueStereographic",
    "Equirectangular",
    "CassiniSoldner",
    "Gnomonic",
    "MillerCylindrical",
    "Orthographic",
    "Polyconic",
    "Robinson",
    "Sinusoidal",
    "VanDerGrinten",
    "NewZealandMapGrid",
    "TransvMercator_SouthOriented",
];

/// Something in the geokeys that could not be resolved.
///
/// These are never diagnostics. They are collected on the side so callers can see why a CRS did
/// not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsupported {
    /// A geographic key has a value with no known ellipsoid or unit.
    GeoKeyValue {
        /// The key id.
        key_id: u16,
        /// The value.
        value: u16,
    },

    /// The coordinate transformation is not Transverse Mercator or Lambert Conformal Conic 2SP.
    CoordinateTransform(u16),

    /// The projected CRS code has no known definition.
    ProjectedCrs(u16),
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Unsupported::GeoKeyValue { key_id, value } => write!(
                f,
                "{}: look-up for {} not implemented",
                key_name(key_id),
                value
            ),
            Unsupported::CoordinateTransform(value) => {
                match usize::from(value)
                    .checked_sub(1)
                    .and_then(|i| COORDINATE_TRANSFORMS.get(i))
                {
                    Some(name) => write!(f, "ProjCoordTransGeoKey: CT_{} not implemented", name),
                    None => write!(
                        f,
                        "ProjCoordTransGeoKey: look-up for {} not implemented",
                        value
                    ),
                }
            }
            Unsupported::ProjectedCrs(code) => {
                write!(f, "ProjectedCSTypeGeoKey: {} not implemented", code)
            }
        }
    }
}

fn key_name(key_id: u16) -> &'static str {
    match key_id {
        key::GEOGRAPHIC_TYPE => "GeographicTypeGeoKey",
        key::GEOG_GEODETIC_DATUM => "GeogGeodeticDatumGeoKey",
        key::GEOG_LINEAR_UNITS => "GeogLinearUnitsGeoKey",
        key::GEOG_ELLIPSOID => "GeogEllipsoidGeoKey",
        key::PROJ_LINEAR_UNITS => "ProjLinearUnitsGeoKey",
        key::VERTICAL_CS_TYPE => "VerticalCSTypeGeoKey",
        key::VERTICAL_UNITS => "VerticalUnitsGeoKey",
        _ => "GeoKey",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Slot {
    ellipsoid: Option<Ellipsoid>,
    projection: Option<Projection>,
    horizontal_unit: Option<LinearUnit>,
    elevation_unit: Option<LinearUnit>,
}

/// The ellipsoid, projection and units of a point cloud.
///
/// There are two slots, one filled from the file's geokeys and one for user overrides. Each slot
/// holds at most one ellipsoid and one projection; setting a new one replaces the old.
///
/// # Examples
///
/// ```
/// use las_validate::crs::{CrsContext, GeoKeys, Origin};
/// let mut context = CrsContext::new();
/// assert!(context.apply_geokeys(&GeoKeys::new([(1024, 1), (3072, 32615)])));
/// assert_eq!(23, context.ellipsoid(Origin::GeoKeys).unwrap().id());
/// assert_eq!(Some("UTM 15 northern hemisphere"), context.description());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrsContext {
    slots: [Slot; 2],
    vertical_epsg: Option<u16>,
    description: Option<String>,
    unsupported: Vec<Unsupported>,
}

impl CrsContext {
    /// Creates an empty context.
    pub fn new() -> CrsContext {
        CrsContext::default()
    }

    /// Selects an ellipsoid by catalog id.
    ///
    /// Returns false, and changes nothing, if the id is not in the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{CrsContext, Origin};
    /// let mut context = CrsContext::new();
    /// assert!(context.set_ellipsoid(23, Origin::User));
    /// assert!(!context.set_ellipsoid(25, Origin::User));
    /// assert_eq!(23, context.ellipsoid(Origin::User).unwrap().id());
    /// assert!(context.ellipsoid(Origin::GeoKeys).is_none());
    /// ```
    pub fn set_ellipsoid(&mut self, id: u8, origin: Origin) -> bool {
        match Ellipsoid::new(id) {
            Some(ellipsoid) => {
                self.slot_mut(origin).ellipsoid = Some(ellipsoid);
                true
            }
            None => false,
        }
    }

    /// Returns the selected ellipsoid.
    pub fn ellipsoid(&self, origin: Origin) -> Option<&Ellipsoid> {
        self.slot(origin).ellipsoid.as_ref()
    }

    /// Selects a projection, replacing any previous one.
    pub fn set_projection(&mut self, projection: Projection, origin: Origin) {
        self.slot_mut(origin).projection = Some(projection);
    }

    /// Returns the selected projection.
    pub fn projection(&self, origin: Origin) -> Option<&Projection> {
        self.slot(origin).projection.as_ref()
    }

    /// Selects a UTM projection from a zone string, e.g. "15N".
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{CrsContext, Origin, Projection};
    /// let mut context = CrsContext::new();
    /// assert!(context.set_utm_zone("15N", Origin::User));
    /// assert!(!context.set_utm_zone("15", Origin::User));
    /// match context.projection(Origin::User).unwrap() {
    ///     Projection::Utm(utm) => assert_eq!(15, utm.zone_number),
    ///     _ => panic!(),
    /// }
    /// ```
    pub fn set_utm_zone(&mut self, zone: &str, origin: Origin) -> bool {
        match Utm::from_zone(zone) {
            Some(utm) => {
                self.set_projection(Projection::Utm(utm), origin);
                true
            }
            None => false,
        }
    }

    /// Sets the unit of horizontal coordinates.
    pub fn set_horizontal_unit(&mut self, unit: LinearUnit, origin: Origin) {
        self.slot_mut(origin).horizontal_unit = Some(unit);
    }

    /// Returns the unit of horizontal coordinates.
    pub fn horizontal_unit(&self, origin: Origin) -> Option<LinearUnit> {
        self.slot(origin).horizontal_unit
    }

    /// Sets the unit of elevations.
    pub fn set_elevation_unit(&mut self, unit: LinearUnit, origin: Origin) {
        self.slot_mut(origin).elevation_unit = Some(unit);
    }

    /// Returns the unit of elevations.
    pub fn elevation_unit(&self, origin: Origin) -> Option<LinearUnit> {
        self.slot(origin).elevation_unit
    }

    /// Sets the vertical datum from an EPSG vertical CS code.
    ///
    /// Only codes in 5000-5099, 5101-5199 and 5200-5999 are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::CrsContext;
    /// let mut context = CrsContext::new();
    /// assert!(!context.set_vertical_epsg(5100));
    /// assert_eq!(None, context.vertical_epsg());
    /// assert!(context.set_vertical_epsg(5703));
    /// assert_eq!(Some(5703), context.vertical_epsg());
    /// ```
    pub fn set_vertical_epsg(&mut self, code: u16) -> bool {
        match code {
            5000..=5099 | 5101..=5199 | 5200..=5999 => {
                self.vertical_epsg = Some(code);
                true
            }
            _ => false,
        }
    }

    /// Returns the vertical datum EPSG code, if one was accepted.
    pub fn vertical_epsg(&self) -> Option<u16> {
        self.vertical_epsg
    }

    /// Resolves a projected CRS code and, on success, selects its ellipsoid, projection and unit.
    ///
    /// Nothing is selected if the code does not resolve; it is recorded as unsupported instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{CrsContext, Origin};
    /// let mut context = CrsContext::new();
    /// assert!(context.set_projection_from_epsg(26915, Origin::GeoKeys));
    /// assert_eq!(11, context.ellipsoid(Origin::GeoKeys).unwrap().id());
    /// assert!(!context.set_projection_from_epsg(1, Origin::GeoKeys));
    /// assert_eq!(1, context.unsupported().len());
    /// ```
    pub fn set_projection_from_epsg(&mut self, code: u16, origin: Origin) -> bool {
        match epsg::resolve(code) {
            Some(crs) => {
                let slot = self.slot_mut(origin);
                slot.ellipsoid = Some(crs.ellipsoid);
                slot.projection = Some(crs.projection);
                if let Some(unit) = crs.horizontal_unit {
                    slot.horizontal_unit = Some(unit);
                }
                self.describe(crs.description);
                true
            }
            None => {
                self.report(Unsupported::ProjectedCrs(code));
                false
            }
        }
    }

    /// Walks the geokeys in order and fills the geokey slot.
    ///
    /// Returns true if a projection was found. Ellipsoids and units are last-write-wins; the
    /// first key that yields a projection wins and later ones are skipped. If no key yields a
    /// projection, a user-defined Transverse Mercator or Lambert Conformal Conic is built from
    /// the double parameters, provided every parameter it needs is there.
    pub fn apply_geokeys(&mut self, geokeys: &GeoKeys) -> bool {
        let mut has_projection = false;
        let mut ellipsoid = None;
        let mut coordinate_transform = None;
        let mut parameters = Parameters::default();

        for entry in &geokeys.entries {
            let value = entry.value_offset;
            match entry.key_id {
                key::GT_MODEL_TYPE => {
                    if value == MODEL_TYPE_GEOGRAPHIC {
                        if has_projection {
                            log!(Level::Debug, "skipping GTModelTypeGeoKey, projection already set");
                        } else {
                            self.set_projection(Projection::LongLat, Origin::GeoKeys);
                            self.describe(Projection::LongLat.name().to_string());
                            has_projection = true;
                        }
                    }
                }
                key::GEOGRAPHIC_TYPE | key::GEOG_GEODETIC_DATUM | key::GEOG_ELLIPSOID => {
                    if value != USER_DEFINED {
                        match ellipsoid_for(entry.key_id, value) {
                            Some(id) => ellipsoid = Some(id),
                            None => self.report(Unsupported::GeoKeyValue {
                                key_id: entry.key_id,
                                value,
                            }),
                        }
                    }
                }
                key::GEOG_LINEAR_UNITS => {
                    if LinearUnit::from_geokey(value).is_none() {
                        self.report(Unsupported::GeoKeyValue {
                            key_id: entry.key_id,
                            value,
                        });
                    }
                }
                key::PROJECTED_CS_TYPE => {
                    if value == USER_DEFINED {
                        continue;
                    }
                    if has_projection {
                        log!(
                            Level::Debug,
                            "skipping ProjectedCSTypeGeoKey {}, projection already set",
                            value
                        );
                    } else {
                        has_projection = self.set_projection_from_epsg(value, Origin::GeoKeys);
                    }
                }
                key::PROJ_COORD_TRANS => {
                    coordinate_transform = None;
                    match value {
                        CT_TRANSVERSE_MERCATOR | CT_LAMBERT_CONF_CONIC_2SP => {
                            coordinate_transform = Some(value)
                        }
                        _ => self.report(Unsupported::CoordinateTransform(value)),
                    }
                }
                key::PROJ_LINEAR_UNITS => match LinearUnit::from_geokey(value) {
                    Some(unit) => self.set_horizontal_unit(unit, Origin::GeoKeys),
                    None => log!(Level::Debug, "unknown ProjLinearUnitsGeoKey {}", value),
                },
                key::PROJ_STD_PARALLEL_1 => parameters.std_parallel_1 = Some(*entry),
                key::PROJ_STD_PARALLEL_2 => parameters.std_parallel_2 = Some(*entry),
                key::PROJ_NAT_ORIGIN_LAT => parameters.nat_origin_lat = Some(*entry),
                key::PROJ_FALSE_EASTING => parameters.false_easting = Some(*entry),
                key::PROJ_FALSE_NORTHING => parameters.false_northing = Some(*entry),
                key::PROJ_CENTER_LONG => parameters.center_long = Some(*entry),
                key::PROJ_SCALE_AT_NAT_ORIGIN => parameters.scale_at_nat_origin = Some(*entry),
                key::VERTICAL_CS_TYPE => {
                    if !self.set_vertical_epsg(value) {
                        log!(Level::Debug, "unknown VerticalCSTypeGeoKey {}", value);
                    }
                }
                key::VERTICAL_UNITS => match LinearUnit::from_geokey(value) {
                    Some(unit) => self.set_elevation_unit(unit, Origin::GeoKeys),
                    None => log!(Level::Debug, "unknown VerticalUnitsGeoKey {}", value),
                },
                _ => {}
            }
        }

        if let Some(id) = ellipsoid {
            self.set_ellipsoid(id, Origin::GeoKeys);
        }

        if !has_projection {
            let user_defined = match coordinate_transform {
                Some(CT_TRANSVERSE_MERCATOR) => parameters
                    .transverse_mercator(geokeys)
                    .map(|tm| (Projection::TransverseMercator(tm), "generic transverse mercator")),
                Some(CT_LAMBERT_CONF_CONIC_2SP) => {
                    parameters.lambert_conformal_conic(geokeys).map(|lcc| {
                        (
                            Projection::LambertConformalConic(lcc),
                            "generic lambert conformal conic",
                        )
                    })
                }
                _ => None,
            };
            if let Some((projection, description)) = user_defined {
                self.set_projection(projection, Origin::GeoKeys);
                self.describe(description.to_string());
                has_projection = true;
            }
        }
        has_projection
    }

    /// Returns the description of the first thing that resolved.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns everything that could not be resolved, in the order it was met.
    pub fn unsupported(&self) -> &[Unsupported] {
        &self.unsupported
    }

    fn slot(&self, origin: Origin) -> &Slot {
        &self.slots[origin.index()]
    }

    fn slot_mut(&mut self, origin: Origin) -> &mut Slot {
        &mut self.slots[origin.index()]
    }

    fn describe(&mut self, description: String) {
        if self.description.is_none() {
            self.description = Some(description);
        }
    }

    fn report(&mut self, unsupported: Unsupported) {
        log!(Level::Warn, "{}", unsupported);
        self.unsupported.push(unsupported);
    }
}

/// The user-defined projection keys, whose values point into the double parameters.
#[derive(Clone, Copy, Debug, Default)]
struct Parameters {
    std_parallel_1: Option<GeoKeyEntry>,
    std_parallel_2: Option<GeoKeyEntry>,
    nat_origin_lat: Option<GeoKeyEntry>,
    false_easting: Option<GeoKeyEntry>,
    false_northing: Option<GeoKeyEntry>,
    center_long: Option<GeoKeyEntry>,
    scale_at_nat_origin: Option<GeoKeyEntry>,
}

impl Parameters {
    fn transverse_mercator(&self, geokeys: &GeoKeys) -> Option<TransverseMercator> {
        let get = |entry| double(geokeys, entry);
        Some(TransverseMercator::new(
            get(self.false_easting)?,
            get(self.false_northing)?,
            get(self.nat_origin_lat)?,
            get(self.center_long)?,
            get(self.scale_at_nat_origin)?,
        ))
    }

    fn lambert_conformal_conic(&self, geokeys: &GeoKeys) -> Option<LambertConformalConic> {
        let get = |entry| double(geokeys, entry);
        Some(LambertConformalConic::new(
            get(self.false_easting)?,
            get(self.false_northing)?,
            get(self.nat_origin_lat)?,
            get(self.center_long)?,
            get(self.std_parallel_1)?,
            get(self.std_parallel_2)?,
        ))
    }
}

fn double(geokeys: &GeoKeys, entry: Option<GeoKeyEntry>) -> Option<f64> {
    match entry?.doubles(geokeys) {
        Ok(values) => values.first().copied(),
        Err(err) => {
            log!(Level::Debug, "{}", err);
            None
        }
    }
}

/// Maps GeographicTypeGeoKey, GeogGeodeticDatumGeoKey and GeogEllipsoidGeoKey values to
/// ellipsoid ids.
///
/// The three keys share a layout: the datum and ellipsoid codes are the geographic type codes
/// plus 2000 and 3000, and only the geographic type and datum keys have the named datums.
fn ellipsoid_for(key_id: u16, value: u16) -> Option<u8> {
    let named = match (key_id, value) {
        (key::GEOGRAPHIC_TYPE, 4267) | (key::GEOG_GEODETIC_DATUM, 6267) => Some(ellipsoid::NAD27),
        (key::GEOGRAPHIC_TYPE, 4269) | (key::GEOG_GEODETIC_DATUM, 6269) => Some(ellipsoid::NAD83),
        (key::GEOGRAPHIC_TYPE, 4322) | (key::GEOG_GEODETIC_DATUM, 6322) => Some(ellipsoid::WGS72),
        (key::GEOGRAPHIC_TYPE, 4326) | (key::GEOG_GEODETIC_DATUM, 6326) => Some(ellipsoid::WGS84),
        (key::GEOG_GEODETIC_DATUM, 6202) | (key::GEOG_GEODETIC_DATUM, 6203) => Some(2),
        _ => None,
    };
    if named.is_some() {
        return named;
    }
    let base = match key_id {
        key::GEOGRAPHIC_TYPE => 4000,
        key::GEOG_GEODETIC_DATUM => 6000,
        key::GEOG_ELLIPSOID => 7000,
        _ => return None,
    };
    match value.checked_sub(base)? {
        1 => Some(1),
        2 => Some(16),
        3 => Some(2),
        4 | 5 => Some(3),
        6 => Some(4),
        8 | 9 => Some(ellipsoid::NAD27),
        10..=14 | 34 => Some(6),
        15..=17 => Some(7),
        18 => Some(17),
        19 => Some(ellipsoid::NAD83),
        20 => Some(12),
        22 | 23 => Some(ellipsoid::INTERNATIONAL),
        24 => Some(15),
        30 => Some(ellipsoid::WGS84),
        _ => None,
    }
}
