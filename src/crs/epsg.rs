//! Resolution of projected CRS codes.
//!
//! A code is tried against the UTM ranges, then the named national and regional systems, then
//! the state plane zones. The first match wins.

use crate::crs::ellipsoid::{self, Ellipsoid};
use crate::crs::projection::{LambertConformalConic, Projection, TransverseMercator, Utm};
use crate::crs::state_plane::{self, Datum};
use crate::crs::units::{LinearUnit, SURVEY_FEET_TO_METERS};

/// The result of resolving a projected CRS code.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedCrs {
    /// The ellipsoid.
    pub ellipsoid: Ellipsoid,
    /// The projection.
    pub projection: Projection,
    /// The horizontal unit, when the code fixes one.
    pub horizontal_unit: Option<LinearUnit>,
    /// A short human-readable description.
    pub description: String,
}

/// Resolves a projected CRS code.
///
/// Returns `None` for codes that aren't supported.
///
/// # Examples
///
/// ```
/// use las_validate::crs::epsg;
/// let crs = epsg::resolve(32615).unwrap();
/// assert_eq!(23, crs.ellipsoid.id());
/// assert_eq!("UTM 15 northern hemisphere", crs.description);
/// assert!(epsg::resolve(1).is_none());
/// ```
pub fn resolve(code: u16) -> Option<ProjectedCrs> {
    resolve_utm(code)
        .or_else(|| resolve_special(code))
        .or_else(|| resolve_state_plane(code))
}

struct UtmRange {
    first: u16,
    last: u16,
    base: u16,
    northern: bool,
    ellipsoid: Option<u8>,
}

const fn utm(first: u16, last: u16, base: u16, northern: bool, ellipsoid: Option<u8>) -> UtmRange {
    UtmRange {
        first,
        last,
        base,
        northern,
        ellipsoid,
    }
}

const N: bool = true;
const S: bool = false;

/// The zone is `code - base`. Ranges without an ellipsoid default to WGS 84.
static UTM_RANGES: &[UtmRange] = &[
    utm(3154, 3157, 3147, N, Some(ellipsoid::NAD83)),
    utm(3158, 3160, 3144, N, Some(ellipsoid::NAD83)),
    utm(20137, 20138, 20100, N, None),
    utm(20437, 20439, 20400, N, None),
    utm(20538, 20539, 20500, N, None),
    utm(20822, 20824, 20800, S, None),
    utm(21148, 21150, 21100, S, None),
    utm(21817, 21818, 21800, N, None),
    utm(22032, 22033, 22000, S, None),
    utm(22332, 22332, 22300, N, None),
    utm(22523, 22524, 22500, S, None),
    utm(22832, 22832, 22800, N, None),
    utm(23028, 23038, 23000, N, Some(ellipsoid::INTERNATIONAL)),
    utm(23239, 23240, 23200, N, None),
    utm(23433, 23433, 23400, N, None),
    utm(23846, 23853, 23800, N, Some(ellipsoid::ID74)),
    utm(23886, 23894, 23840, S, Some(ellipsoid::ID74)),
    utm(23947, 23948, 23900, N, None),
    utm(24047, 24048, 24000, N, None),
    utm(24547, 24548, 24500, N, None),
    utm(24720, 24721, 24700, N, None),
    utm(24818, 24821, 24800, N, None),
    utm(24877, 24880, 24860, S, None),
    utm(25231, 25231, 25200, N, None),
    utm(25828, 25838, 25800, N, Some(ellipsoid::NAD83)),
    utm(25932, 25932, 25900, S, None),
    utm(26237, 26237, 26200, N, None),
    utm(26331, 26332, 26300, N, None),
    utm(26432, 26432, 26400, S, None),
    utm(26632, 26632, 26600, N, None),
    utm(26692, 26692, 26660, S, None),
    utm(26703, 26722, 26700, N, Some(ellipsoid::NAD27)),
    utm(26903, 26923, 26900, N, Some(ellipsoid::NAD83)),
    utm(28348, 28358, 28300, S, Some(ellipsoid::GDA94)),
    utm(29118, 29122, 29100, N, Some(ellipsoid::SAD69)),
    utm(29177, 29185, 29160, S, Some(ellipsoid::SAD69)),
    utm(29220, 29221, 29200, S, None),
    utm(29333, 29333, 29300, S, None),
    utm(29635, 29636, 29600, N, None),
    utm(29738, 29739, 29700, S, None),
    utm(29849, 29850, 29800, N, None),
    utm(30339, 30340, 30300, N, None),
    utm(30729, 30732, 30700, N, None),
    utm(31028, 31028, 31000, N, None),
    utm(31121, 31121, 31100, N, None),
    utm(32201, 32260, 32200, N, Some(ellipsoid::WGS72)),
    utm(32301, 32360, 32300, S, Some(ellipsoid::WGS72)),
    utm(32401, 32460, 32400, N, Some(ellipsoid::WGS72)),
    utm(32501, 32560, 32500, S, Some(ellipsoid::WGS72)),
    utm(32601, 32660, 32600, N, Some(ellipsoid::WGS84)),
    utm(32701, 32760, 32700, S, Some(ellipsoid::WGS84)),
];

fn resolve_utm(code: u16) -> Option<ProjectedCrs> {
    let range = UTM_RANGES
        .iter()
        .find(|range| range.first <= code && code <= range.last)?;
    let zone = u8::try_from(code - range.base).ok()?;
    let utm = Utm::new(zone, range.northern)?;
    let projection = Projection::Utm(utm);
    Some(ProjectedCrs {
        ellipsoid: Ellipsoid::new(range.ellipsoid.unwrap_or(ellipsoid::WGS84))?,
        description: projection.description(),
        projection,
        horizontal_unit: None,
    })
}

#[derive(Clone, Copy)]
enum Parameters {
    Tm(f64, f64, f64, f64, f64),
    Lcc(f64, f64, f64, f64, f64, f64),
    Utm(u8, bool),
}

impl Parameters {
    fn projection(self) -> Option<Projection> {
        Some(match self {
            Parameters::Tm(fe, fnorth, lat, long, scale) => {
                Projection::TransverseMercator(TransverseMercator::new(fe, fnorth, lat, long, scale))
            }
            Parameters::Lcc(fe, fnorth, lat, long, first, second) => {
                Projection::LambertConformalConic(LambertConformalConic::new(
                    fe, fnorth, lat, long, first, second,
                ))
            }
            Parameters::Utm(zone, northern) => Projection::Utm(Utm::new(zone, northern)?),
        })
    }
}

struct SpecialCase {
    code: u16,
    ellipsoid: u8,
    parameters: Parameters,
    unit: LinearUnit,
    description: &'static str,
}

const fn special(
    code: u16,
    ellipsoid: u8,
    parameters: Parameters,
    unit: LinearUnit,
    description: &'static str,
) -> SpecialCase {
    SpecialCase {
        code,
        ellipsoid,
        parameters,
        unit,
        description,
    }
}

const AIRY: u8 = 1;
const BESSEL_1841: u8 = 3;
const M: LinearUnit = LinearUnit::Meter;
const FT_US: LinearUnit = LinearUnit::SurveyFoot;

/// Sorted by code, one entry per code.
const SPECIAL_CASES: &[SpecialCase] = &[
    special(2180, ellipsoid::NAD83, Parameters::Tm(500000.0, -5300000.0, 0.0, 19.0, 0.9993), M, "ETRS89 / Poland CS92"),
    special(2193, ellipsoid::NAD83, Parameters::Tm(1600000.0, 10000000.0, 0.0, 173.0, 0.9996), M, "NZGD2000"),
    special(2195, ellipsoid::NAD83, Parameters::Tm(500000.0, 10000000.0, 0.0, -171.0, 0.9996), M, "UTM zone 2S (American Samoa)"),
    special(2924, ellipsoid::NAD83, Parameters::Lcc(11482916.667, 6561666.667, 37.66666666666666, -78.5, 39.2, 38.03333333333333), FT_US, "NAD83(HARN) / Virginia North (ftUS)"),
    special(2925, ellipsoid::NAD83, Parameters::Lcc(11482916.667, 3280833.333, 36.33333333333334, -78.5, 37.96666666666667, 36.76666666666667), FT_US, "NAD83(HARN) / Virginia South (ftUS)"),
    special(3034, ellipsoid::NAD83, Parameters::Lcc(4000000.0, 2800000.0, 52.0, 10.0, 35.0, 65.0), M, "ETRS89 / ETRS-LCC"),
    special(3046, ellipsoid::NAD83, Parameters::Tm(500000.0, 0.0, 0.0, 21.0, 0.9996), M, "ETRS89 / ETRS-TM34"),
    special(3047, ellipsoid::NAD83, Parameters::Tm(500000.0, 0.0, 0.0, 27.0, 0.9996), M, "ETRS89 / ETRS-TM35"),
    special(3048, ellipsoid::NAD83, Parameters::Tm(500000.0, 0.0, 0.0, 33.0, 0.9996), M, "ETRS89 / ETRS-TM36"),
    special(3067, ellipsoid::NAD83, Parameters::Tm(500000.0, 0.0, 0.0, 27.0, 0.9996), M, "ETRS89 / ETRS-TM35FIN"),
    special(3141, ellipsoid::INTERNATIONAL, Parameters::Utm(60, false), M, "Fiji 1956 / UTM zone 60S"),
    special(3142, ellipsoid::INTERNATIONAL, Parameters::Utm(1, false), M, "Fiji 1956 / UTM zone 1S"),
    special(3460, ellipsoid::WGS72, Parameters::Tm(2000000.0, 4000000.0, -17.0, 178.75, 0.99985), M, "Fiji 1986 / Fiji Map Grid"),
    special(3582, ellipsoid::NAD83, Parameters::Lcc(1312333.333 * SURVEY_FEET_TO_METERS, 0.0, 37.66666666666666, -77.0, 39.45, 38.3), FT_US, "NAD83(NSRS2007) / Maryland (ftUS)"),
    special(3794, ellipsoid::NAD83, Parameters::Tm(500000.0, -5000000.0, 0.0, 15.0, 0.9999), M, "Slovenia 1996 / Slovene National Grid"),
    special(3912, BESSEL_1841, Parameters::Tm(500000.0, -5000000.0, 0.0, 15.0, 0.9999), M, "MGI 1901 / Slovene National Grid"),
    special(4647, ellipsoid::NAD83, Parameters::Tm(32500000.0, 0.0, 0.0, 9.0, 0.9996), M, "ETRS89 / UTM zone 32N (zE-N)"),
    special(5650, ellipsoid::NAD83, Parameters::Tm(33500000.0, 0.0, 0.0, 15.0, 0.9996), M, "ETRS89 / UTM zone 33N (zE-N)"),
    special(27700, AIRY, Parameters::Tm(400000.0, -100000.0, 49.0, -2.0, 0.9996012717), M, "OSGB 1936 / British National Grid"),
    special(31370, ellipsoid::INTERNATIONAL, Parameters::Lcc(150000.013, 5400088.438, 90.0, 4.367486666666666, 51.16666723333333, 49.8333339), M, "Belge 1972 / Belgian Lambert 72"),
];

const RGF93_CC42: u16 = 3942;
const RGF93_CC50: u16 = 3950;
const DKTM1: u16 = 4093;
const DKTM4: u16 = 4096;
const NTM_ZONE_5: u16 = 5105;
const NTM_ZONE_30: u16 = 5130;

const fn special_cases_are_well_formed(cases: &[SpecialCase]) -> bool {
    let mut i = 0;
    while i < cases.len() {
        let code = cases[i].code;
        if i > 0 && cases[i - 1].code >= code {
            return false;
        }
        if (RGF93_CC42 <= code && code <= RGF93_CC50)
            || (DKTM1 <= code && code <= DKTM4)
            || (NTM_ZONE_5 <= code && code <= NTM_ZONE_30)
        {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(special_cases_are_well_formed(SPECIAL_CASES));

fn resolve_special(code: u16) -> Option<ProjectedCrs> {
    if let Ok(i) = SPECIAL_CASES.binary_search_by_key(&code, |case| case.code) {
        let case = &SPECIAL_CASES[i];
        return Some(ProjectedCrs {
            ellipsoid: Ellipsoid::new(case.ellipsoid)?,
            projection: case.parameters.projection()?,
            horizontal_unit: Some(case.unit),
            description: case.description.to_string(),
        });
    }
    let (parameters, description) = if (RGF93_CC42..=RGF93_CC50).contains(&code) {
        let v = f64::from(code - RGF93_CC42);
        (
            Parameters::Lcc(
                1700000.0,
                1200000.0 + v * 1000000.0,
                42.0 + v,
                3.0,
                41.25 + v,
                42.75 + v,
            ),
            format!("RGF93 / CC{} Reseau_Geodesique_Francais_1993", code - 3900),
        )
    } else if (DKTM1..=DKTM4).contains(&code) {
        let v = (code - DKTM1) % 4 + 1;
        let long_meridian = 9.0
            + match v {
                1 => 0.0,
                2 => 1.0,
                3 => 2.75,
                _ => 6.0,
            };
        (
            Parameters::Tm(200000.0 * f64::from(v), -5000000.0, 0.0, long_meridian, 0.99998),
            format!("ETRS89 / DKTM{}", v),
        )
    } else if (NTM_ZONE_5..=NTM_ZONE_30).contains(&code) {
        let v = code - 5100;
        (
            Parameters::Tm(100000.0, 1000000.0, 58.0, 0.3 + f64::from(v), 1.0),
            format!("ETRS89 / NTM zone {}", v),
        )
    } else {
        return None;
    };
    Some(ProjectedCrs {
        ellipsoid: Ellipsoid::new(ellipsoid::NAD83)?,
        projection: parameters.projection()?,
        horizontal_unit: Some(LinearUnit::Meter),
        description,
    })
}

fn resolve_state_plane(code: u16) -> Option<ProjectedCrs> {
    let (datum, zone) = state_plane::zone_for_code(code)?;
    let entry = state_plane::lookup(datum, zone)?;
    let ellipsoid = match datum {
        Datum::Nad27 => ellipsoid::NAD27,
        Datum::Nad83 => ellipsoid::NAD83,
    };
    Some(ProjectedCrs {
        ellipsoid: Ellipsoid::new(ellipsoid)?,
        projection: entry.projection(),
        horizontal_unit: None,
        description: format!("{} {}", datum, entry.zone),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utm(crs: &ProjectedCrs) -> &Utm {
        match &crs.projection {
            Projection::Utm(utm) => utm,
            other => panic!("not utm: {:?}", other),
        }
    }

    #[test]
    fn wgs84_utm() {
        let crs = resolve(32615).unwrap();
        assert_eq!(ellipsoid::WGS84, crs.ellipsoid.id());
        let utm = utm(&crs);
        assert_eq!(15, utm.zone_number);
        assert!(utm.northern);
        assert_eq!(-93., utm.long_origin);
        assert_eq!(None, crs.horizontal_unit);
    }

    #[test]
    fn nad83_utm() {
        let crs = resolve(26915).unwrap();
        assert_eq!(ellipsoid::NAD83, crs.ellipsoid.id());
        assert_eq!(15, utm(&crs).zone_number);
        assert!(utm(&crs).northern);
    }

    #[test]
    fn southern_offset_bases() {
        let crs = resolve(23886).unwrap();
        assert_eq!(46, utm(&crs).zone_number);
        assert!(!utm(&crs).northern);
        assert_eq!(ellipsoid::ID74, crs.ellipsoid.id());
        assert_eq!(17, utm(&resolve(29177).unwrap()).zone_number);
        assert_eq!(7, utm(&resolve(3154).unwrap()).zone_number);
        assert_eq!(14, utm(&resolve(3158).unwrap()).zone_number);
    }

    #[test]
    fn utm_without_datum_defaults_to_wgs84() {
        let crs = resolve(20137).unwrap();
        assert_eq!(ellipsoid::WGS84, crs.ellipsoid.id());
        assert_eq!(37, utm(&crs).zone_number);
    }

    #[test]
    fn state_plane() {
        let crs = resolve(26741).unwrap();
        assert_eq!(ellipsoid::NAD27, crs.ellipsoid.id());
        assert_eq!("stateplane27 CA_I", crs.description);
        match crs.projection {
            Projection::LambertConformalConic(lcc) => {
                assert_eq!(609601.2192, lcc.false_easting);
                assert_eq!(41.66666667, lcc.second_std_parallel);
            }
            other => panic!("not lcc: {:?}", other),
        }
        let crs = resolve(26929).unwrap();
        assert_eq!(ellipsoid::NAD83, crs.ellipsoid.id());
        assert_eq!("stateplane83 AL_E", crs.description);
    }

    #[test]
    fn state_plane_without_catalog_entry() {
        // Alaska zone 1 is an oblique mercator zone.
        assert!(state_plane::zone_for_code(26731).is_some());
        assert!(resolve(26731).is_none());
    }

    #[test]
    fn named_systems() {
        let crs = resolve(27700).unwrap();
        assert_eq!("OSGB 1936 / British National Grid", crs.description);
        assert_eq!(1, crs.ellipsoid.id());
        assert_eq!(Some(LinearUnit::Meter), crs.horizontal_unit);
        let crs = resolve(2924).unwrap();
        assert_eq!(Some(LinearUnit::SurveyFoot), crs.horizontal_unit);
    }

    #[test]
    fn maryland_and_slovenia_are_distinct() {
        let maryland = resolve(3582).unwrap();
        assert_eq!("NAD83(NSRS2007) / Maryland (ftUS)", maryland.description);
        assert_eq!(Some(LinearUnit::SurveyFoot), maryland.horizontal_unit);
        let slovenia = resolve(3794).unwrap();
        assert_eq!("Slovenia 1996 / Slovene National Grid", slovenia.description);
        assert!(matches!(
            slovenia.projection,
            Projection::TransverseMercator(_)
        ));
    }

    #[test]
    fn fiji_1956() {
        let crs = resolve(3141).unwrap();
        assert_eq!(ellipsoid::INTERNATIONAL, crs.ellipsoid.id());
        assert_eq!(60, utm(&crs).zone_number);
        assert!(!utm(&crs).northern);
        assert_eq!("Fiji 1956 / UTM zone 60S", crs.description);
    }

    #[test]
    fn rgf93() {
        let crs = resolve(3944).unwrap();
        assert_eq!("RGF93 / CC44 Reseau_Geodesique_Francais_1993", crs.description);
        match crs.projection {
            Projection::LambertConformalConic(lcc) => {
                assert_eq!(3200000.0, lcc.false_northing);
                assert_eq!(44.0, lcc.lat_origin);
                assert_eq!(43.25, lcc.first_std_parallel);
                assert_eq!(44.75, lcc.second_std_parallel);
            }
            other => panic!("not lcc: {:?}", other),
        }
    }

    #[test]
    fn dktm() {
        let crs = resolve(4095).unwrap();
        assert_eq!("ETRS89 / DKTM3", crs.description);
        match crs.projection {
            Projection::TransverseMercator(tm) => {
                assert_eq!(600000.0, tm.false_easting);
                assert_eq!(11.75, tm.long_meridian);
            }
            other => panic!("not tm: {:?}", other),
        }
    }

    #[test]
    fn ntm() {
        let crs = resolve(5110).unwrap();
        assert_eq!("ETRS89 / NTM zone 10", crs.description);
        assert!(resolve(5131).is_none());
    }

    #[test]
    fn ranges_are_disjoint() {
        for range in UTM_RANGES {
            assert!(range.first <= range.last);
            for code in range.first..=range.last {
                assert!(state_plane::zone_for_code(code).is_none(), "{}", code);
                assert!(
                    SPECIAL_CASES.iter().all(|case| case.code != code),
                    "{}",
                    code
                );
                let zone = code - range.base;
                assert!((1..=60).contains(&zone), "{}", code);
            }
        }
        for case in SPECIAL_CASES {
            assert!(state_plane::zone_for_code(case.code).is_none());
        }
    }

    #[test]
    fn unsupported() {
        assert!(resolve(0).is_none());
        assert!(resolve(4326).is_none());
        assert!(resolve(32767).is_none());
    }
}
