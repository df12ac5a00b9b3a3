//! US state plane zones.
//!
//! Zones are found by their short mnemonic, e.g. "CA_I", in the catalog of the matching datum.
//! Each datum has one catalog of Lambert Conformal Conic zones and one of Transverse Mercator
//! zones.

use crate::crs::projection::{LambertConformalConic, Projection, TransverseMercator};
use std::fmt;

/// The datum of a state plane zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Datum {
    /// North American Datum 1927.
    Nad27,
    /// North American Datum 1983.
    Nad83,
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Datum::Nad27 => write!(f, "stateplane27"),
            Datum::Nad83 => write!(f, "stateplane83"),
        }
    }
}

/// The projection parameters of a zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoneParameters {
    /// A Lambert Conformal Conic zone.
    Lcc {
        /// False easting in meters.
        false_easting: f64,
        /// False northing in meters.
        false_northing: f64,
        /// Latitude of origin in degrees.
        lat_origin: f64,
        /// Central meridian in degrees.
        long_meridian: f64,
        /// First standard parallel in degrees.
        first_std_parallel: f64,
        /// Second standard parallel in degrees.
        second_std_parallel: f64,
    },
    /// A Transverse Mercator zone.
    Tm {
        /// False easting in meters.
        false_easting: f64,
        /// False northing in meters.
        false_northing: f64,
        /// Latitude of origin in degrees.
        lat_origin: f64,
        /// Central meridian in degrees.
        long_meridian: f64,
        /// Scale factor at the central meridian.
        scale_factor: f64,
    },
}

/// One row of a state plane catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatePlaneZone {
    /// The projected CRS code of this zone.
    pub epsg: u16,
    /// The zone mnemonic.
    pub zone: &'static str,
    /// The projection parameters.
    pub parameters: ZoneParameters,
}

impl StatePlaneZone {
    /// Builds the projection for this zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::state_plane::{self, Datum};
    /// let zone = state_plane::lookup(Datum::Nad27, "CA_I").unwrap();
    /// assert_eq!("Lambert Conformal Conic", zone.projection().name());
    /// ```
    pub fn projection(&self) -> Projection {
        match self.parameters {
            ZoneParameters::Lcc {
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                first_std_parallel,
                second_std_parallel,
            } => Projection::LambertConformalConic(LambertConformalConic::new(
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                first_std_parallel,
                second_std_parallel,
            )),
            ZoneParameters::Tm {
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                scale_factor,
            } => Projection::TransverseMercator(TransverseMercator::new(
                false_easting,
                false_northing,
                lat_origin,
                long_meridian,
                scale_factor,
            )),
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn lcc(
    epsg: u16,
    zone: &'static str,
    false_easting: f64,
    false_northing: f64,
    lat_origin: f64,
    long_meridian: f64,
    first_std_parallel: f64,
    second_std_parallel: f64,
) -> StatePlaneZone {
    StatePlaneZone {
        epsg,
        zone,
        parameters: ZoneParameters::Lcc {
            false_easting,
            false_northing,
            lat_origin,
            long_meridian,
            first_std_parallel,
            second_std_parallel,
        },
    }
}

const fn tm(
    epsg: u16,
    zone: &'static str,
    false_easting: f64,
    false_northing: f64,
    lat_origin: f64,
    long_meridian: f64,
    scale_factor: f64,
) -> StatePlaneZone {
    StatePlaneZone {
        epsg,
        zone,
        parameters: ZoneParameters::Tm {
            false_easting,
            false_northing,
            lat_origin,
            long_meridian,
            scale_factor,
        },
    }
}

/// Returns the datum and zone mnemonic of a state plane projected CRS code.
///
/// # Examples
///
/// ```
/// use las_validate::crs::state_plane::{self, Datum};
/// assert_eq!(Some((Datum::Nad83, "CA_I")), state_plane::zone_for_code(26941));
/// assert_eq!(None, state_plane::zone_for_code(32615));
/// ```
pub fn zone_for_code(code: u16) -> Option<(Datum, &'static str)> {
    ZONES
        .binary_search_by_key(&code, |&(c, _, _)| c)
        .ok()
        .map(|i| (ZONES[i].1, ZONES[i].2))
}

/// Finds a zone by mnemonic, first in the Lambert catalog of the datum, then in its Transverse
/// Mercator catalog.
///
/// # Examples
///
/// ```
/// use las_validate::crs::state_plane::{self, Datum};
/// assert!(state_plane::lookup(Datum::Nad83, "AL_E").is_some());
/// assert!(state_plane::lookup(Datum::Nad83, "XX").is_none());
/// ```
pub fn lookup(datum: Datum, zone: &str) -> Option<&'static StatePlaneZone> {
    let (lcc, tm) = match datum {
        Datum::Nad27 => (NAD27_LCC, NAD27_TM),
        Datum::Nad83 => (NAD83_LCC, NAD83_TM),
    };
    lcc.iter()
        .find(|z| z.zone == zone)
        .or_else(|| tm.iter().find(|z| z.zone == zone))
}

/// Projected CRS codes of the state plane zones, sorted by code.
static ZONES: &[(u16, Datum, &str)] = &[
    (26729, Datum::Nad27, "AL_E"),
    (26730, Datum::Nad27, "AL_W"),
    (26731, Datum::Nad27, "AK_1"),
    (26732, Datum::Nad27, "AK_2"),
    (26733, Datum::Nad27, "AK_3"),
    (26734, Datum::Nad27, "AK_4"),
    (26735, Datum::Nad27, "AK_5"),
    (26736, Datum::Nad27, "AK_6"),
    (26737, Datum::Nad27, "AK_7"),
    (26738, Datum::Nad27, "AK_8"),
    (26739, Datum::Nad27, "AK_9"),
    (26740, Datum::Nad27, "AK_10"),
    (26741, Datum::Nad27, "CA_I"),
    (26742, Datum::Nad27, "CA_II"),
    (26743, Datum::Nad27, "CA_III"),
    (26744, Datum::Nad27, "CA_IV"),
    (26745, Datum::Nad27, "CA_V"),
    (26746, Datum::Nad27, "CA_VI"),
    (26747, Datum::Nad27, "CA_VII"),
    (26748, Datum::Nad27, "AZ_E"),
    (26749, Datum::Nad27, "AZ_C"),
    (26750, Datum::Nad27, "AZ_W"),
    (26751, Datum::Nad27, "AR_N"),
    (26752, Datum::Nad27, "AR_S"),
    (26753, Datum::Nad27, "CO_N"),
    (26754, Datum::Nad27, "CO_C"),
    (26755, Datum::Nad27, "CO_S"),
    (26756, Datum::Nad27, "CT"),
    (26757, Datum::Nad27, "DE"),
    (26758, Datum::Nad27, "FL_E"),
    (26759, Datum::Nad27, "FL_W"),
    (26760, Datum::Nad27, "FL_N"),
    (26761, Datum::Nad27, "HI_1"),
    (26762, Datum::Nad27, "HI_2"),
    (26763, Datum::Nad27, "HI_3"),
    (26764, Datum::Nad27, "HI_4"),
    (26765, Datum::Nad27, "HI_5"),
    (26766, Datum::Nad27, "GA_E"),
    (26767, Datum::Nad27, "GA_W"),
    (26768, Datum::Nad27, "ID_E"),
    (26769, Datum::Nad27, "ID_C"),
    (26770, Datum::Nad27, "ID_W"),
    (26771, Datum::Nad27, "IL_E"),
    (26772, Datum::Nad27, "IL_W"),
    (26773, Datum::Nad27, "IN_E"),
    (26774, Datum::Nad27, "IN_W"),
    (26775, Datum::Nad27, "IA_N"),
    (26776, Datum::Nad27, "IA_S"),
    (26777, Datum::Nad27, "KS_N"),
    (26778, Datum::Nad27, "KS_S"),
    (26779, Datum::Nad27, "KY_N"),
    (26780, Datum::Nad27, "KY_S"),
    (26781, Datum::Nad27, "LA_N"),
    (26782, Datum::Nad27, "LA_S"),
    (26783, Datum::Nad27, "ME_E"),
    (26784, Datum::Nad27, "ME_W"),
    (26785, Datum::Nad27, "MD"),
    (26786, Datum::Nad27, "MA_M"),
    (26787, Datum::Nad27, "MA_I"),
    (26788, Datum::Nad27, "MI_N"),
    (26789, Datum::Nad27, "MI_C"),
    (26790, Datum::Nad27, "MI_S"),
    (26791, Datum::Nad27, "MN_N"),
    (26792, Datum::Nad27, "MN_C"),
    (26793, Datum::Nad27, "MN_S"),
    (26794, Datum::Nad27, "MS_E"),
    (26795, Datum::Nad27, "MS_W"),
    (26796, Datum::Nad27, "MO_E"),
    (26797, Datum::Nad27, "MO_C"),
    (26798, Datum::Nad27, "MO_W"),
    (26929, Datum::Nad83, "AL_E"),
    (26930, Datum::Nad83, "AL_W"),
    (26931, Datum::Nad83, "AK_1"),
    (26932, Datum::Nad83, "AK_2"),
    (26933, Datum::Nad83, "AK_3"),
    (26934, Datum::Nad83, "AK_4"),
    (26935, Datum::Nad83, "AK_5"),
    (26936, Datum::Nad83, "AK_6"),
    (26937, Datum::Nad83, "AK_7"),
    (26938, Datum::Nad83, "AK_8"),
    (26939, Datum::Nad83, "AK_9"),
    (26940, Datum::Nad83, "AK_10"),
    (26941, Datum::Nad83, "CA_I"),
    (26942, Datum::Nad83, "CA_II"),
    (26943, Datum::Nad83, "CA_III"),
    (26944, Datum::Nad83, "CA_IV"),
    (26945, Datum::Nad83, "CA_V"),
    (26946, Datum::Nad83, "CA_VI"),
    (26947, Datum::Nad83, "CA_VII"),
    (26948, Datum::Nad83, "AZ_E"),
    (26949, Datum::Nad83, "AZ_C"),
    (26950, Datum::Nad83, "AZ_W"),
    (26951, Datum::Nad83, "AR_N"),
    (26952, Datum::Nad83, "AR_S"),
    (26953, Datum::Nad83, "CO_N"),
    (26954, Datum::Nad83, "CO_C"),
    (26955, Datum::Nad83, "CO_S"),
    (26956, Datum::Nad83, "CT"),
    (26957, Datum::Nad83, "DE"),
    (26958, Datum::Nad83, "FL_E"),
    (26959, Datum::Nad83, "FL_W"),
    (26960, Datum::Nad83, "FL_N"),
    (26961, Datum::Nad83, "HI_1"),
    (26962, Datum::Nad83, "HI_2"),
    (26963, Datum::Nad83, "HI_3"),
    (26964, Datum::Nad83, "HI_4"),
    (26965, Datum::Nad83, "HI_5"),
    (26966, Datum::Nad83, "GA_E"),
    (26967, Datum::Nad83, "GA_W"),
    (26968, Datum::Nad83, "ID_E"),
    (26969, Datum::Nad83, "ID_C"),
    (26970, Datum::Nad83, "ID_W"),
    (26971, Datum::Nad83, "IL_E"),
    (26972, Datum::Nad83, "IL_W"),
    (26973, Datum::Nad83, "IN_E"),
    (26974, Datum::Nad83, "IN_W"),
    (26975, Datum::Nad83, "IA_N"),
    (26976, Datum::Nad83, "IA_S"),
    (26977, Datum::Nad83, "KS_N"),
    (26978, Datum::Nad83, "KS_S"),
    (26979, Datum::Nad83, "KY_N"),
    (26980, Datum::Nad83, "KY_S"),
    (26981, Datum::Nad83, "LA_N"),
    (26982, Datum::Nad83, "LA_S"),
    (26983, Datum::Nad83, "ME_E"),
    (26984, Datum::Nad83, "ME_W"),
    (26985, Datum::Nad83, "MD"),
    (26986, Datum::Nad83, "MA_M"),
    (26987, Datum::Nad83, "MA_I"),
    (26988, Datum::Nad83, "MI_N"),
    (26989, Datum::Nad83, "MI_C"),
    (26990, Datum::Nad83, "MI_S"),
    (26991, Datum::Nad83, "MN_N"),
    (26992, Datum::Nad83, "MN_C"),
    (26993, Datum::Nad83, "MN_S"),
    (26994, Datum::Nad83, "MS_E"),
    (26995, Datum::Nad83, "MS_W"),
    (26996, Datum::Nad83, "MO_E"),
    (26997, Datum::Nad83, "MO_C"),
    (26998, Datum::Nad83, "MO_W"),
    (32001, Datum::Nad27, "MT_N"),
    (32002, Datum::Nad27, "MT_C"),
    (32003, Datum::Nad27, "MT_S"),
    (32005, Datum::Nad27, "NE_N"),
    (32006, Datum::Nad27, "NE_S"),
    (32007, Datum::Nad27, "NV_E"),
    (32008, Datum::Nad27, "NV_C"),
    (32009, Datum::Nad27, "NV_W"),
    (32010, Datum::Nad27, "NH"),
    (32011, Datum::Nad27, "NJ"),
    (32012, Datum::Nad27, "NM_E"),
    (32013, Datum::Nad27, "NM_C"),
    (32014, Datum::Nad27, "NM_W"),
    (32015, Datum::Nad27, "NY_E"),
    (32016, Datum::Nad27, "NY_C"),
    (32017, Datum::Nad27, "NY_W"),
    (32018, Datum::Nad27, "NY_LI"),
    (32019, Datum::Nad27, "NC"),
    (32020, Datum::Nad27, "ND_N"),
    (32021, Datum::Nad27, "ND_S"),
    (32022, Datum::Nad27, "OH_N"),
    (32023, Datum::Nad27, "OH_S"),
    (32024, Datum::Nad27, "OK_N"),
    (32025, Datum::Nad27, "OK_S"),
    (32026, Datum::Nad27, "OR_N"),
    (32027, Datum::Nad27, "OR_S"),
    (32028, Datum::Nad27, "PA_N"),
    (32029, Datum::Nad27, "PA_S"),
    (32030, Datum::Nad27, "RI"),
    (32031, Datum::Nad27, "SC_N"),
    (32033, Datum::Nad27, "SC_S"),
    (32034, Datum::Nad27, "SD_N"),
    (32035, Datum::Nad27, "SD_S"),
    (32036, Datum::Nad27, "TN"),
    (32037, Datum::Nad27, "TX_N"),
    (32038, Datum::Nad27, "TX_NC"),
    (32039, Datum::Nad27, "TX_C"),
    (32040, Datum::Nad27, "TX_SC"),
    (32041, Datum::Nad27, "TX_S"),
    (32042, Datum::Nad27, "UT_N"),
    (32043, Datum::Nad27, "UT_C"),
    (32044, Datum::Nad27, "UT_S"),
    (32045, Datum::Nad27, "VT"),
    (32046, Datum::Nad27, "VA_N"),
    (32047, Datum::Nad27, "VA_S"),
    (32048, Datum::Nad27, "WA_N"),
    (32049, Datum::Nad27, "WA_S"),
    (32050, Datum::Nad27, "WV_N"),
    (32051, Datum::Nad27, "WV_S"),
    (32052, Datum::Nad27, "WI_N"),
    (32053, Datum::Nad27, "WI_C"),
    (32054, Datum::Nad27, "WI_S"),
    (32055, Datum::Nad27, "WY_E"),
    (32056, Datum::Nad27, "WY_EC"),
    (32057, Datum::Nad27, "WY_WC"),
    (32058, Datum::Nad27, "WY_W"),
    (32059, Datum::Nad27, "PR"),
    (32060, Datum::Nad27, "St.Croix"),
    (32100, Datum::Nad83, "MT"),
    (32104, Datum::Nad83, "NE"),
    (32107, Datum::Nad83, "NV_E"),
    (32108, Datum::Nad83, "NV_C"),
    (32109, Datum::Nad83, "NV_W"),
    (32110, Datum::Nad83, "NH"),
    (32111, Datum::Nad83, "NJ"),
    (32112, Datum::Nad83, "NM_E"),
    (32113, Datum::Nad83, "NM_C"),
    (32114, Datum::Nad83, "NM_W"),
    (32115, Datum::Nad83, "NY_E"),
    (32116, Datum::Nad83, "NY_C"),
    (32117, Datum::Nad83, "NY_W"),
    (32118, Datum::Nad83, "NY_LI"),
    (32119, Datum::Nad83, "NC"),
    (32120, Datum::Nad83, "ND_N"),
    (32121, Datum::Nad83, "ND_S"),
    (32122, Datum::Nad83, "OH_N"),
    (32123, Datum::Nad83, "OH_S"),
    (32124, Datum::Nad83, "OK_N"),
    (32125, Datum::Nad83, "OK_S"),
    (32126, Datum::Nad83, "OR_N"),
    (32127, Datum::Nad83, "OR_S"),
    (32128, Datum::Nad83, "PA_N"),
    (32129, Datum::Nad83, "PA_S"),
    (32130, Datum::Nad83, "RI"),
    (32133, Datum::Nad83, "SC"),
    (32134, Datum::Nad83, "SD_N"),
    (32135, Datum::Nad83, "SD_S"),
    (32136, Datum::Nad83, "TN"),
    (32137, Datum::Nad83, "TX_N"),
    (32138, Datum::Nad83, "TX_NC"),
    (32139, Datum::Nad83, "TX_C"),
    (32140, Datum::Nad83, "TX_SC"),
    (32141, Datum::Nad83, "TX_S"),
    (32142, Datum::Nad83, "UT_N"),
    (32143, Datum::Nad83, "UT_C"),
    (32144, Datum::Nad83, "UT_S"),
    (32145, Datum::Nad83, "VT"),
    (32146, Datum::Nad83, "VA_N"),
    (32147, Datum::Nad83, "VA_S"),
    (32148, Datum::Nad83, "WA_N"),
    (32149, Datum::Nad83, "WA_S"),
    (32150, Datum::Nad83, "WV_N"),
    (32151, Datum::Nad83, "WV_S"),
    (32152, Datum::Nad83, "WI_N"),
    (32153, Datum::Nad83, "WI_C"),
    (32154, Datum::Nad83, "WI_S"),
    (32155, Datum::Nad83, "WY_E"),
    (32156, Datum::Nad83, "WY_EC"),
    (32157, Datum::Nad83, "WY_WC"),
    (32158, Datum::Nad83, "WY_W"),
    (32161, Datum::Nad83, "PR"),
];

// Angles keep the precision of the published tables, eight decimals for NAD27 and six for NAD83.
// The two don't need to agree.
static NAD27_LCC: &[StatePlaneZone] = &[
    lcc(26740, "AK_10", 914401.8288, 0.0, 51.0, -176.0, 51.83333333, 53.83333333),
    lcc(26751, "AR_N", 609601.2192, 0.0, 34.33333333, -92.0, 34.93333333, 36.23333333),
    lcc(26752, "AR_S", 609601.2192, 0.0, 32.66666667, -92.0, 33.3, 34.76666667),
    lcc(26741, "CA_I", 609601.2192, 0.0, 39.33333333, -122.0, 40.0, 41.66666667),
    lcc(26742, "CA_II", 609601.2192, 0.0, 37.66666667, -122.0, 38.33333333, 39.83333333),
    lcc(26743, "CA_III", 609601.2192, 0.0, 36.5, -120.5, 37.06666667, 38.43333333),
    lcc(26744, "CA_IV", 609601.2192, 0.0, 35.33333333, -119.0, 36.0, 37.25),
    lcc(26745, "CA_V", 609601.2192, 0.0, 33.5, -118.0, 34.03333333, 35.46666667),
    lcc(26746, "CA_VI", 609601.2192, 0.0, 32.16666667, -116.25, 32.78333333, 33.88333333),
    lcc(26747, "CA_VII", 1276106.451, 1268253.007, 34.13333333, -118.3333333, 33.86666667, 34.41666667),
    lcc(26753, "CO_N", 609601.2192, 0.0, 39.33333333, -105.5, 39.71666667, 40.78333333),
    lcc(26754, "CO_C", 609601.2192, 0.0, 37.83333333, -105.5, 38.45, 39.75),
    lcc(26755, "CO_S", 609601.2192, 0.0, 36.66666667, -105.5, 37.23333333, 38.43333333),
    lcc(26756, "CT", 182880.3658, 0.0, 40.83333333, -72.75, 41.2, 41.86666667),
    lcc(26760, "FL_N", 609601.2192, 0.0, 29.0, -84.5, 29.58333333, 30.75),
    lcc(26775, "IA_N", 609601.2192, 0.0, 41.5, -93.5, 42.06666667, 43.26666667),
    lcc(26776, "IA_S", 609601.2192, 0.0, 40.0, -93.5, 40.61666667, 41.78333333),
    lcc(26777, "KS_N", 609601.2192, 0.0, 38.33333333, -98.0, 38.71666667, 39.78333333),
    lcc(26778, "KS_S", 609601.2192, 0.0, 36.66666667, -98.5, 37.26666667, 38.56666667),
    lcc(26779, "KY_N", 609601.2192, 0.0, 37.5, -84.25, 37.96666667, 38.96666667),
    lcc(26780, "KY_S", 609601.2192, 0.0, 36.33333333, -85.75, 36.73333333, 37.93333333),
    lcc(26781, "LA_N", 609601.2192, 0.0, 30.66666667, -92.5, 31.16666667, 32.66666667),
    lcc(26782, "LA_S", 609601.2192, 0.0, 28.66666667, -91.33333333, 29.3, 30.7),
    lcc(26785, "MD", 243840.4877, 0.0, 37.83333333, -77.0, 38.3, 39.45),
    lcc(26786, "MA_M", 182880.3658, 0.0, 41.0, -71.5, 41.71666667, 42.68333333),
    lcc(26787, "MA_I", 60960.12192, 0.0, 41.0, -70.5, 41.28333333, 41.48333333),
    lcc(26788, "MI_N", 609601.2192, 0.0, 44.78333333, -87.0, 45.48333333, 47.08333333),
    lcc(26789, "MI_C", 609601.2192, 0.0, 43.31666667, -84.33333333, 44.18333333, 45.7),
    lcc(26790, "MI_S", 609601.2192, 0.0, 41.5, -84.33333333, 42.1, 43.66666667),
    lcc(26791, "MN_N", 609601.2192, 0.0, 46.5, -93.1, 47.03333333, 48.63333333),
    lcc(26792, "MN_C", 609601.2192, 0.0, 45.0, -94.25, 45.61666667, 47.05),
    lcc(26793, "MN_S", 609601.2192, 0.0, 43.0, -94.0, 43.78333333, 45.21666667),
    lcc(32001, "MT_N", 609601.2192, 0.0, 47.0, -109.5, 47.85, 48.71666667),
    lcc(32002, "MT_C", 609601.2192, 0.0, 45.83333333, -109.5, 46.45, 47.88333333),
    lcc(32003, "MT_S", 609601.2192, 0.0, 44.0, -109.5, 44.86666667, 46.4),
    lcc(32005, "NE_N", 609601.2192, 0.0, 41.33333333, -100.0, 41.85, 42.81666667),
    lcc(32006, "NE_S", 609601.2192, 0.0, 39.66666667, -99.5, 40.28333333, 41.71666667),
    lcc(32018, "NY_LI", 609601.2192, 30480.06096, 40.5, -74.0, 40.66666667, 41.03333333),
    lcc(32019, "NC", 609601.2192, 0.0, 33.75, -79.0, 34.33333333, 36.16666667),
    lcc(32020, "ND_N", 609601.2192, 0.0, 47.0, -100.5, 47.43333333, 48.73333333),
    lcc(32021, "ND_S", 609601.2192, 0.0, 45.66666667, -100.5, 46.18333333, 47.48333333),
    lcc(32022, "OH_N", 609601.2192, 0.0, 39.66666667, -82.5, 40.43333333, 41.7),
    lcc(32023, "OH_S", 609601.2192, 0.0, 38.0, -82.5, 38.73333333, 40.03333333),
    lcc(32024, "OK_N", 609601.2192, 0.0, 35.0, -98.0, 35.56666667, 36.76666667),
    lcc(32025, "OK_S", 609601.2192, 0.0, 33.33333333, -98.0, 33.93333333, 35.23333333),
    lcc(32026, "OR_N", 609601.2192, 0.0, 43.66666667, -120.5, 44.33333333, 46.0),
    lcc(32027, "OR_S", 609601.2192, 0.0, 41.66666667, -120.5, 42.33333333, 44.0),
    lcc(32028, "PA_N", 609601.2192, 0.0, 40.16666667, -77.75, 40.88333333, 41.95),
    lcc(32029, "PA_S", 609601.2192, 0.0, 39.33333333, -77.75, 39.93333333, 40.96666667),
    lcc(32059, "PR", 152400.3048, 0.0, 17.83333333, -66.43333333, 18.03333333, 18.43333333),
    lcc(32060, "St.Croix", 152400.3048, 30480.06096, 17.83333333, -66.43333333, 18.03333333, 18.43333333),
    lcc(32031, "SC_N", 609601.2192, 0.0, 33.0, -81.0, 33.76666667, 34.96666667),
    lcc(32033, "SC_S", 609601.2192, 0.0, 31.83333333, -81.0, 32.33333333, 33.66666667),
    lcc(32034, "SD_N", 609601.2192, 0.0, 43.83333333, -100.0, 44.41666667, 45.68333333),
    lcc(32035, "SD_S", 609601.2192, 0.0, 42.33333333, -100.3333333, 42.83333333, 44.4),
    lcc(2204, "TN", 609601.2192, 30480.06096, 34.66666667, -86.0, 35.25, 36.41666667),
    lcc(32037, "TX_N", 609601.2192, 0.0, 34.0, -101.5, 34.65, 36.18333333),
    lcc(32038, "TX_NC", 609601.2192, 0.0, 31.66666667, -97.5, 32.13333333, 33.96666667),
    lcc(32039, "TX_C", 609601.2192, 0.0, 29.66666667, -100.3333333, 30.11666667, 31.88333333),
    lcc(32040, "TX_SC", 609601.2192, 0.0, 27.83333333, -99.0, 28.38333333, 30.28333333),
    lcc(32041, "TX_S", 609601.2192, 0.0, 25.66666667, -98.5, 26.16666667, 27.83333333),
    lcc(32042, "UT_N", 609601.2192, 0.0, 40.33333333, -111.5, 40.71666667, 41.78333333),
    lcc(32043, "UT_C", 609601.2192, 0.0, 38.33333333, -111.5, 39.01666667, 40.65),
    lcc(32044, "UT_S", 609601.2192, 0.0, 36.66666667, -111.5, 37.21666667, 38.35),
    lcc(32046, "VA_N", 609601.2192, 0.0, 37.66666667, -78.5, 38.03333333, 39.2),
    lcc(32047, "VA_S", 609601.2192, 0.0, 36.33333333, -78.5, 36.76666667, 37.96666667),
    lcc(32048, "WA_N", 609601.2192, 0.0, 47.0, -120.8333333, 47.5, 48.73333333),
    lcc(32049, "WA_S", 609601.2192, 0.0, 45.33333333, -120.5, 45.83333333, 47.33333333),
    lcc(32050, "WV_N", 609601.2192, 0.0, 38.5, -79.5, 39.0, 40.25),
    lcc(32051, "WV_S", 609601.2192, 0.0, 37.0, -81.0, 37.48333333, 38.88333333),
    lcc(32052, "WI_N", 609601.2192, 0.0, 45.16666667, -90.0, 45.56666667, 46.76666667),
    lcc(32053, "WI_C", 609601.2192, 0.0, 43.83333333, -90.0, 44.25, 45.5),
    lcc(32054, "WI_S", 609601.2192, 0.0, 42.0, -90.0, 42.73333333, 44.06666667),
];

static NAD83_LCC: &[StatePlaneZone] = &[
    lcc(26940, "AK_10", 1000000.0, 0.0, 51.000000, -176.000000, 51.833333, 53.833333),
    lcc(26951, "AR_N", 400000.0, 0.0, 34.333333, -92.000000, 34.933333, 36.233333),
    lcc(26952, "AR_S", 400000.0, 400000.0, 32.666667, -92.000000, 33.300000, 34.766667),
    lcc(26941, "CA_I", 2000000.0, 500000.0, 39.333333, -122.000000, 40.000000, 41.666667),
    lcc(26942, "CA_II", 2000000.0, 500000.0, 37.666667, -122.000000, 38.333333, 39.833333),
    lcc(26943, "CA_III", 2000000.0, 500000.0, 36.500000, -120.500000, 37.066667, 38.433333),
    lcc(26944, "CA_IV", 2000000.0, 500000.0, 35.333333, -119.000000, 36.000000, 37.250000),
    lcc(26945, "CA_V", 2000000.0, 500000.0, 33.500000, -118.000000, 34.033333, 35.466667),
    lcc(26946, "CA_VI", 2000000.0, 500000.0, 32.166667, -116.250000, 32.783333, 33.883333),
    lcc(26953, "CO_N", 914401.8289, 304800.6096, 39.333333, -105.500000, 39.716667, 40.783333),
    lcc(26954, "CO_C", 914401.8289, 304800.6096, 37.833333, -105.500000, 38.450000, 39.750000),
    lcc(26955, "CO_S", 914401.8289, 304800.6096, 36.666667, -105.500000, 37.233333, 38.433333),
    lcc(26956, "CT", 304800.6096, 152400.3048, 40.833333, -72.750000, 41.200000, 41.866667),
    lcc(26960, "FL_N", 600000.0, 0.0, 29.000000, -84.500000, 29.583333, 30.750000),
    lcc(26975, "IA_N", 1500000.0, 1000000.0, 41.500000, -93.500000, 42.066667, 43.266667),
    lcc(26976, "IA_S", 500000.0, 0.0, 40.000000, -93.500000, 40.616667, 41.783333),
    lcc(26977, "KS_N", 400000.0, 0.0, 38.333333, -98.000000, 38.716667, 39.783333),
    lcc(26978, "KS_S", 400000.0, 400000.0, 36.666667, -98.500000, 37.266667, 38.566667),
    lcc(2205, "KY_N", 500000.0, 0.0, 37.500000, -84.250000, 37.966667, 38.966667),
    lcc(26980, "KY_S", 500000.0, 500000.0, 36.333333, -85.750000, 36.733333, 37.933333),
    lcc(26981, "LA_N", 1000000.0, 0.0, 30.500000, -92.500000, 31.166667, 32.666667),
    lcc(26982, "LA_S", 1000000.0, 0.0, 28.500000, -91.333333, 29.300000, 30.700000),
    lcc(26985, "MD", 400000.0, 0.0, 37.666667, -77.000000, 38.300000, 39.450000),
    lcc(26986, "MA_M", 200000.0, 750000.0, 41.000000, -71.500000, 41.716667, 42.683333),
    lcc(26987, "MA_I", 500000.0, 0.0, 41.000000, -70.500000, 41.283333, 41.483333),
    lcc(26988, "MI_N", 8000000.0, 0.0, 44.783333, -87.000000, 45.483333, 47.083333),
    lcc(26989, "MI_C", 6000000.0, 0.0, 43.316667, -84.366667, 44.183333, 45.700000),
    lcc(26990, "MI_S", 4000000.0, 0.0, 41.500000, -84.366667, 42.100000, 43.666667),
    lcc(26991, "MN_N", 800000.0, 100000.0, 46.500000, -93.100000, 47.033333, 48.633333),
    lcc(26992, "MN_C", 800000.0, 100000.0, 45.000000, -94.250000, 45.616667, 47.050000),
    lcc(26993, "MN_S", 800000.0, 100000.0, 43.000000, -94.000000, 43.783333, 45.216667),
    lcc(32100, "MT", 600000.0, 0.0, 44.250000, -109.500000, 45.000000, 49.000000),
    lcc(32104, "NE", 500000.0, 0.0, 39.833333, -100.000000, 40.000000, 43.000000),
    lcc(32118, "NY_LI", 300000.0, 0.0, 40.166667, -74.000000, 40.666667, 41.033333),
    lcc(32119, "NC", 609601.22, 0.0, 33.750000, -79.000000, 34.333333, 36.166667),
    lcc(32120, "ND_N", 600000.0, 0.0, 47.000000, -100.500000, 47.433333, 48.733333),
    lcc(32121, "ND_S", 600000.0, 0.0, 45.666667, -100.500000, 46.183333, 47.483333),
    lcc(32122, "OH_N", 600000.0, 0.0, 39.666667, -82.500000, 40.433333, 41.700000),
    lcc(32123, "OH_S", 600000.0, 0.0, 38.000000, -82.500000, 38.733333, 40.033333),
    lcc(32124, "OK_N", 600000.0, 0.0, 35.000000, -98.000000, 35.566667, 36.766667),
    lcc(32125, "OK_S", 600000.0, 0.0, 33.333333, -98.000000, 33.933333, 35.233333),
    lcc(32126, "OR_N", 2500000.0, 0.0, 43.666667, -120.500000, 44.333333, 46.000000),
    lcc(32127, "OR_S", 1500000.0, 0.0, 41.666667, -120.500000, 42.333333, 44.000000),
    lcc(32128, "PA_N", 600000.0, 0.0, 40.166667, -77.750000, 40.883333, 41.950000),
    lcc(32129, "PA_S", 600000.0, 0.0, 39.333333, -77.750000, 39.933333, 40.966667),
    lcc(32161, "PR", 200000.0, 200000.0, 17.833333, -66.433333, 18.033333, 18.433333),
    lcc(32133, "SC", 609600.0, 0.0, 31.833333, -81.000000, 32.500000, 34.833333),
    lcc(32134, "SD_N", 600000.0, 0.0, 43.833333, -100.000000, 44.416667, 45.683333),
    lcc(32135, "SD_S", 600000.0, 0.0, 42.333333, -100.333333, 42.833333, 44.400000),
    lcc(32136, "TN", 600000.0, 0.0, 34.333333, -86.000000, 35.250000, 36.416667),
    lcc(32137, "TX_N", 200000.0, 1000000.0, 34.000000, -101.500000, 34.650000, 36.183333),
    lcc(32138, "TX_NC", 600000.0, 2000000.0, 31.666667, -98.500000, 32.133333, 33.966667),
    lcc(32139, "TX_C", 700000.0, 3000000.0, 29.666667, -100.333333, 30.116667, 31.883333),
    lcc(32140, "TX_SC", 600000.0, 4000000.0, 27.833333, -99.000000, 28.383333, 30.283333),
    lcc(32141, "TX_S", 300000.0, 5000000.0, 25.666667, -98.500000, 26.166667, 27.833333),
    lcc(32142, "UT_N", 500000.0, 1000000.0, 40.333333, -111.500000, 40.716667, 41.783333),
    lcc(32143, "UT_C", 500000.0, 2000000.0, 38.333333, -111.500000, 39.016667, 40.650000),
    lcc(32144, "UT_S", 500000.0, 3000000.0, 36.666667, -111.500000, 37.216667, 38.350000),
    lcc(32146, "VA_N", 3500000.0, 2000000.0, 37.666667, -78.500000, 38.033333, 39.200000),
    lcc(32147, "VA_S", 3500000.0, 1000000.0, 36.333333, -78.500000, 36.766667, 37.966667),
    lcc(32148, "WA_N", 500000.0, 0.0, 47.000000, -120.833333, 47.500000, 48.733333),
    lcc(32149, "WA_S", 500000.0, 0.0, 45.333333, -120.500000, 45.833333, 47.333333),
    lcc(32150, "WV_N", 600000.0, 0.0, 38.500000, -79.500000, 39.000000, 40.250000),
    lcc(32151, "WV_S", 600000.0, 0.0, 37.000000, -81.000000, 37.483333, 38.883333),
    lcc(32152, "WI_N", 600000.0, 0.0, 45.166667, -90.000000, 45.566667, 46.766667),
    lcc(32153, "WI_C", 600000.0, 0.0, 43.833333, -90.000000, 44.250000, 45.500000),
    lcc(32154, "WI_S", 600000.0, 0.0, 42.000000, -90.000000, 42.733333, 44.066667),
];

static NAD27_TM: &[StatePlaneZone] = &[
    tm(26729, "AL_E", 152400.3048, 0.0, 30.5, -85.83333333, 0.99996),
    tm(26730, "AL_W", 152400.3048, 0.0, 30.0, -87.5, 0.999933333),
    tm(26732, "AK_2", 152400.3048, 0.0, 54.0, -142.0, 0.9999),
    tm(26733, "AK_3", 152400.3048, 0.0, 54.0, -146.0, 0.9999),
    tm(26734, "AK_4", 152400.3048, 0.0, 54.0, -150.0, 0.9999),
    tm(26735, "AK_5", 152400.3048, 0.0, 54.0, -154.0, 0.9999),
    tm(26736, "AK_6", 152400.3048, 0.0, 54.0, -158.0, 0.9999),
    tm(26737, "AK_7", 213360.4267, 0.0, 54.0, -162.0, 0.9999),
    tm(26738, "AK_8", 152400.3048, 0.0, 54.0, -166.0, 0.9999),
    tm(26739, "AK_9", 182880.3658, 0.0, 54.0, -170.0, 0.9999),
    tm(26748, "AZ_E", 152400.3048, 0.0, 31.0, -110.1666667, 0.9999),
    tm(26749, "AZ_C", 152400.3048, 0.0, 31.0, -111.9166667, 0.9999),
    tm(26750, "AZ_W", 152400.3048, 0.0, 31.0, -113.75, 0.999933333),
    tm(26757, "DE", 152400.3048, 0.0, 38.0, -75.41666667, 0.999995),
    tm(26758, "FL_E", 152400.3048, 0.0, 24.33333333, -81.0, 0.999941177),
    tm(26759, "FL_W", 152400.3048, 0.0, 24.33333333, -82.0, 0.999941177),
    tm(26766, "GA_E", 152400.3048, 0.0, 30.0, -82.16666667, 0.9999),
    tm(26767, "GA_W", 152400.3048, 0.0, 30.0, -84.16666667, 0.9999),
    tm(26761, "HI_1", 152400.3048, 0.0, 18.83333333, -155.5, 0.999966667),
    tm(26762, "HI_2", 152400.3048, 0.0, 20.33333333, -156.6666667, 0.999966667),
    tm(26763, "HI_3", 152400.3048, 0.0, 21.16666667, -158.0, 0.99999),
    tm(26764, "HI_4", 152400.3048, 0.0, 21.83333333, -159.5, 0.99999),
    tm(26765, "HI_5", 152400.3048, 0.0, 21.66666667, -160.1666667, 1.0),
    tm(26768, "ID_E", 152400.3048, 0.0, 41.66666667, -112.1666667, 0.999947368),
    tm(26769, "ID_C", 152400.3048, 0.0, 41.66666667, -114.0, 0.999947368),
    tm(26770, "ID_W", 152400.3048, 0.0, 41.66666667, -115.75, 0.999933333),
    tm(26771, "IL_E", 152400.3048, 0.0, 36.66666667, -88.33333333, 0.999975),
    tm(26772, "IL_W", 152400.3048, 0.0, 36.66666667, -90.16666667, 0.999941177),
    tm(26773, "IN_E", 152400.3048, 0.0, 37.5, -85.66666667, 0.999966667),
    tm(26774, "IN_W", 152400.3048, 0.0, 37.5, -87.08333333, 0.999966667),
    tm(26783, "ME_E", 152400.3048, 0.0, 43.83333333, -68.5, 0.9999),
    tm(26784, "ME_W", 152400.3048, 0.0, 42.83333333, -70.16666667, 0.999966667),
    tm(26794, "MS_E", 152400.3048, 0.0, 29.66666667, -88.83333333, 0.99996),
    tm(26795, "MS_W", 152400.3048, 0.0, 30.5, -90.33333333, 0.999941177),
    tm(26796, "MO_E", 152400.3048, 0.0, 35.83333333, -90.5, 0.999933333),
    tm(26797, "MO_C", 152400.3048, 0.0, 35.83333333, -92.5, 0.999933333),
    tm(26798, "MO_W", 152400.3048, 0.0, 36.16666667, -94.5, 0.999941177),
    tm(32007, "NV_E", 152400.3048, 0.0, 34.75, -115.5833333, 0.9999),
    tm(32008, "NV_C", 152400.3048, 0.0, 34.75, -116.6666667, 0.9999),
    tm(32009, "NV_W", 152400.3048, 0.0, 34.75, -118.5833333, 0.9999),
    tm(32010, "NH", 152400.3048, 0.0, 42.5, -71.66666667, 0.999966667),
    tm(32011, "NJ", 609601.2192, 0.0, 38.83333333, -74.66666667, 0.999975),
    tm(32012, "NM_E", 152400.3048, 0.0, 31.0, -104.3333333, 0.999909091),
    tm(32013, "NM_C", 152400.3048, 0.0, 31.0, -106.25, 0.9999),
    tm(32014, "NM_W", 152400.3048, 0.0, 31.0, -107.8333333, 0.999916667),
    tm(32015, "NY_E", 152400.3048, 0.0, 40.0, -74.33333333, 0.999966667),
    tm(32016, "NY_C", 152400.3048, 0.0, 40.0, -76.58333333, 0.9999375),
    tm(32017, "NY_W", 152400.3048, 0.0, 40.0, -78.58333333, 0.9999375),
    tm(32030, "RI", 152400.3048, 0.0, 41.08333333, -71.5, 0.99999375),
    tm(32045, "VT", 152400.3048, 0.0, 42.5, -72.5, 0.999964286),
    tm(32055, "WY_E", 152400.3048, 0.0, 40.66666667, -105.1666667, 0.999941177),
    tm(32056, "WY_EC", 152400.3048, 0.0, 40.66666667, -107.3333333, 0.999941177),
    tm(32057, "WY_WC", 152400.3048, 0.0, 40.66666667, -108.75, 0.999941177),
    tm(32058, "WY_W", 152400.3048, 0.0, 40.66666667, -110.0833333, 0.999941177),
];

static NAD83_TM: &[StatePlaneZone] = &[
    tm(26929, "AL_E", 200000.0, 0.0, 30.5, -85.83333333, 0.99996),
    tm(26930, "AL_W", 600000.0, 0.0, 30.0, -87.5, 0.999933333),
    tm(26932, "AK_2", 500000.0, 0.0, 54.0, -142.0, 0.9999),
    tm(26933, "AK_3", 500000.0, 0.0, 54.0, -146.0, 0.9999),
    tm(26934, "AK_4", 500000.0, 0.0, 54.0, -150.0, 0.9999),
    tm(26935, "AK_5", 500000.0, 0.0, 54.0, -154.0, 0.9999),
    tm(26936, "AK_6", 500000.0, 0.0, 54.0, -158.0, 0.9999),
    tm(26937, "AK_7", 500000.0, 0.0, 54.0, -162.0, 0.9999),
    tm(26938, "AK_8", 500000.0, 0.0, 54.0, -166.0, 0.9999),
    tm(26939, "AK_9", 500000.0, 0.0, 54.0, -170.0, 0.9999),
    tm(26948, "AZ_E", 213360.0, 0.0, 31.0, -110.1666667, 0.9999),
    tm(26949, "AZ_C", 213360.0, 0.0, 31.0, -111.9166667, 0.9999),
    tm(26950, "AZ_W", 213360.0, 0.0, 31.0, -113.75, 0.999933333),
    tm(26957, "DE", 200000.0, 0.0, 38.0, -75.41666667, 0.999995),
    tm(26958, "FL_E", 200000.0, 0.0, 24.33333333, -81.0, 0.999941177),
    tm(26959, "FL_W", 200000.0, 0.0, 24.33333333, -82.0, 0.999941177),
    tm(26966, "GA_E", 200000.0, 0.0, 30.0, -82.16666667, 0.9999),
    tm(26967, "GA_W", 700000.0, 0.0, 30.0, -84.16666667, 0.9999),
    tm(26961, "HI_1", 500000.0, 0.0, 18.83333333, -155.5, 0.999966667),
    tm(26962, "HI_2", 500000.0, 0.0, 20.33333333, -156.6666667, 0.999966667),
    tm(26963, "HI_3", 500000.0, 0.0, 21.16666667, -158.0, 0.99999),
    tm(26964, "HI_4", 500000.0, 0.0, 21.83333333, -159.5, 0.99999),
    tm(26965, "HI_5", 500000.0, 0.0, 21.66666667, -160.1666667, 1.0),
    tm(26968, "ID_E", 200000.0, 0.0, 41.66666667, -112.1666667, 0.999947368),
    tm(26969, "ID_C", 500000.0, 0.0, 41.66666667, -114.0, 0.999947368),
    tm(26970, "ID_W", 800000.0, 0.0, 41.66666667, -115.75, 0.999933333),
    tm(26971, "IL_E", 300000.0, 0.0, 36.66666667, -88.33333333, 0.999975),
    tm(26972, "IL_W", 700000.0, 0.0, 36.66666667, -90.16666667, 0.999941177),
    tm(26973, "IN_E", 100000.0, 250000.0, 37.5, -85.66666667, 0.999966667),
    tm(26974, "IN_W", 900000.0, 250000.0, 37.5, -87.08333333, 0.999966667),
    tm(26983, "ME_E", 300000.0, 0.0, 43.66666667, -68.5, 0.9999),
    tm(26984, "ME_W", 900000.0, 0.0, 42.83333333, -70.16666667, 0.999966667),
    tm(26994, "MS_E", 300000.0, 0.0, 29.5, -88.83333333, 0.99995),
    tm(26995, "MS_W", 700000.0, 0.0, 29.5, -90.33333333, 0.99995),
    tm(26996, "MO_E", 250000.0, 0.0, 35.83333333, -90.5, 0.999933333),
    tm(26997, "MO_C", 500000.0, 0.0, 35.83333333, -92.5, 0.999933333),
    tm(26998, "MO_W", 850000.0, 0.0, 36.16666667, -94.5, 0.999941177),
    tm(32107, "NV_E", 200000.0, 8000000.0, 34.75, -115.5833333, 0.9999),
    tm(32108, "NV_C", 500000.0, 6000000.0, 34.75, -116.6666667, 0.9999),
    tm(32109, "NV_W", 800000.0, 4000000.0, 34.75, -118.5833333, 0.9999),
    tm(32110, "NH", 300000.0, 0.0, 42.5, -71.66666667, 0.999966667),
    tm(32111, "NJ", 150000.0, 0.0, 38.83333333, -74.5, 0.9999),
    tm(32112, "NM_E", 165000.0, 0.0, 31.0, -104.3333333, 0.999909091),
    tm(32113, "NM_C", 500000.0, 0.0, 31.0, -106.25, 0.9999),
    tm(32114, "NM_W", 830000.0, 0.0, 31.0, -107.8333333, 0.999916667),
    tm(32115, "NY_E", 150000.0, 0.0, 38.83333333, -74.5, 0.9999),
    tm(32116, "NY_C", 250000.0, 0.0, 40.0, -76.58333333, 0.9999375),
    tm(32117, "NY_W", 350000.0, 0.0, 40.0, -78.58333333, 0.9999375),
    tm(32130, "RI", 100000.0, 0.0, 41.08333333, -71.5, 0.99999375),
    tm(32145, "VT", 500000.0, 0.0, 42.5, -72.5, 0.999964286),
    tm(32155, "WY_E", 200000.0, 0.0, 40.5, -105.1666667, 0.9999375),
    tm(32156, "WY_EC", 400000.0, 100000.0, 40.5, -107.3333333, 0.9999375),
    tm(32157, "WY_WC", 600000.0, 0.0, 40.5, -108.75, 0.9999375),
    tm(32158, "WY_W", 800000.0, 100000.0, 40.5, -110.0833333, 0.9999375),
];


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ca_i() {
        let zone = lookup(Datum::Nad27, "CA_I").unwrap();
        assert_eq!(26741, zone.epsg);
        assert_eq!(
            ZoneParameters::Lcc {
                false_easting: 609601.2192,
                false_northing: 0.,
                lat_origin: 39.33333333,
                long_meridian: -122.,
                first_std_parallel: 40.,
                second_std_parallel: 41.66666667,
            },
            zone.parameters
        );
    }

    #[test]
    fn lcc_before_tm() {
        let zone = lookup(Datum::Nad27, "AL_E").unwrap();
        assert!(matches!(zone.parameters, ZoneParameters::Tm { .. }));
        let zone = lookup(Datum::Nad83, "AR_N").unwrap();
        assert!(matches!(zone.parameters, ZoneParameters::Lcc { .. }));
    }

    #[test]
    fn zones_are_sorted() {
        assert!(ZONES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn catalog_codes_dispatch_to_their_own_zone() {
        for (datum, catalog) in [
            (Datum::Nad27, NAD27_LCC),
            (Datum::Nad27, NAD27_TM),
            (Datum::Nad83, NAD83_LCC),
            (Datum::Nad83, NAD83_TM),
        ] {
            for zone in catalog {
                if let Some(found) = zone_for_code(zone.epsg) {
                    assert_eq!((datum, zone.zone), found, "{}", zone.epsg);
                }
            }
        }
    }

    #[test]
    fn massachusetts_and_long_island() {
        assert_eq!(Some((Datum::Nad27, "MA_M")), zone_for_code(26786));
        assert!(lookup(Datum::Nad27, "MA_M").is_some());
        assert_eq!(Some((Datum::Nad83, "NY_LI")), zone_for_code(32118));
        assert!(lookup(Datum::Nad83, "NY_LI").is_some());
    }

    #[test]
    fn display() {
        assert_eq!("stateplane27", Datum::Nad27.to_string());
        assert_eq!("stateplane83", Datum::Nad83.to_string());
    }
}
