//! Map projection definitions.
//!
//! Only the parameters are kept. Nothing here projects coordinates.

use crate::utils::format_g;
use std::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;
const MAX_UTM_ZONE: u8 = 60;

/// A map projection, with the name it was given when built.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// Geographic coordinates, longitude first.
    LongLat,
    /// Geographic coordinates, latitude first.
    LatLong,
    /// Universal Transverse Mercator.
    Utm(Utm),
    /// Transverse Mercator with explicit parameters.
    TransverseMercator(TransverseMercator),
    /// Lambert Conformal Conic with two standard parallels.
    LambertConformalConic(LambertConformalConic),
}

impl Projection {
    /// Returns the name of this projection.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{Projection, Utm};
    /// assert_eq!("longitude/latitude", Projection::LongLat.name());
    /// let utm = Projection::Utm(Utm::new(15, true).unwrap());
    /// assert_eq!("UTM zone 15 (northern hemisphere)", utm.name());
    /// ```
    pub fn name(&self) -> &str {
        match self {
            Projection::LongLat => "longitude/latitude",
            Projection::LatLong => "latitude/longitude",
            Projection::Utm(utm) => &utm.name,
            Projection::TransverseMercator(_) => "Transverse Mercator",
            Projection::LambertConformalConic(_) => "Lambert Conformal Conic",
        }
    }

    /// Returns a description of this projection and its parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::{Projection, TransverseMercator};
    /// let tm = TransverseMercator::new(500000., 0., 0., 21., 0.9996);
    /// assert_eq!(
    ///     "false east/north: 500000/0 [m], origin lat/meridian long: 0/21, scale: 0.9996",
    ///     Projection::TransverseMercator(tm).description()
    /// );
    /// ```
    pub fn description(&self) -> String {
        match self {
            Projection::LongLat | Projection::LatLong => self.name().to_string(),
            Projection::Utm(utm) => utm.description(),
            Projection::TransverseMercator(tm) => tm.description(),
            Projection::LambertConformalConic(lcc) => lcc.description(),
        }
    }
}

/// A UTM zone.
#[derive(Clone, Debug, PartialEq)]
pub struct Utm {
    /// The zone number, 1 to 60.
    pub zone_number: u8,
    /// The latitude band letter, or a space when the zone was given by number.
    pub zone_letter: char,
    /// Is this zone north of the equator?
    pub northern: bool,
    /// The central meridian of the zone in degrees.
    pub long_origin: f64,
    name: String,
}

impl Utm {
    /// Creates a zone from its number and hemisphere.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Utm;
    /// let utm = Utm::new(15, true).unwrap();
    /// assert_eq!(-93., utm.long_origin);
    /// assert!(Utm::new(0, true).is_none());
    /// assert!(Utm::new(61, true).is_none());
    /// ```
    pub fn new(zone_number: u8, northern: bool) -> Option<Utm> {
        if !(1..=MAX_UTM_ZONE).contains(&zone_number) {
            return None;
        }
        Some(Utm {
            zone_number,
            zone_letter: ' ',
            northern,
            long_origin: long_origin(zone_number),
            name: format!("UTM zone {} ({})", zone_number, hemisphere(northern)),
        })
    }

    /// Creates a zone from a number followed by a latitude band letter, e.g. "15N".
    ///
    /// Bands `C` through `M` are south of the equator, `N` through `X` north of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::Utm;
    /// let utm = Utm::from_zone("15N").unwrap();
    /// assert!(utm.northern);
    /// assert_eq!('N', utm.zone_letter);
    /// assert!(!Utm::from_zone("33M").unwrap().northern);
    /// assert!(Utm::from_zone("15").is_none());
    /// assert!(Utm::from_zone("15Y").is_none());
    /// ```
    pub fn from_zone(zone: &str) -> Option<Utm> {
        let digits = zone.find(|c: char| !c.is_ascii_digit())?;
        let (number, letter) = zone.split_at(digits);
        let zone_number = number.parse::<u8>().ok()?;
        let mut letters = letter.chars();
        let zone_letter = letters.next()?;
        if letters.next().is_some() || !('C'..='X').contains(&zone_letter) {
            return None;
        }
        let northern = zone_letter >= 'N';
        let mut utm = Utm::new(zone_number, northern)?;
        utm.zone_letter = zone_letter;
        utm.name = format!("UTM zone {} ({})", zone, hemisphere(northern));
        Some(utm)
    }

    fn description(&self) -> String {
        format!("UTM {} {}", self.zone_number, hemisphere(self.northern))
    }
}

fn long_origin(zone_number: u8) -> f64 {
    (f64::from(zone_number) - 1.) * 6. - 180. + 3.
}

fn hemisphere(northern: bool) -> &'static str {
    if northern {
        "northern hemisphere"
    } else {
        "southern hemisphere"
    }
}

/// Transverse Mercator parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransverseMercator {
    /// False easting in meters.
    pub false_easting: f64,
    /// False northing in meters.
    pub false_northing: f64,
    /// Latitude of origin in degrees.
    pub lat_origin: f64,
    /// Central meridian in degrees.
    pub long_meridian: f64,
    /// Scale factor at the central meridian.
    pub scale_factor: f64,
    /// Latitude of origin in radians.
    pub lat_origin_radians: f64,
    /// Central meridian in radians.
    pub long_meridian_radians: f64,
}

impl TransverseMercator {
    /// Creates a new Transverse Mercator projection. Angles are in degrees.
    pub fn new(
        false_easting: f64,
        false_northing: f64,
        lat_origin: f64,
        long_meridian: f64,
        scale_factor: f64,
    ) -> TransverseMercator {
        TransverseMercator {
            false_easting,
            false_northing,
            lat_origin,
            long_meridian,
            scale_factor,
            lat_origin_radians: DEG_TO_RAD * lat_origin,
            long_meridian_radians: DEG_TO_RAD * long_meridian,
        }
    }

    fn description(&self) -> String {
        format!(
            "false east/north: {}/{} [m], origin lat/meridian long: {}/{}, scale: {}",
            format_g(self.false_easting),
            format_g(self.false_northing),
            format_g(self.lat_origin),
            format_g(self.long_meridian),
            format_g(self.scale_factor)
        )
    }
}

/// Lambert Conformal Conic parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertConformalConic {
    /// False easting in meters.
    pub false_easting: f64,
    /// False northing in meters.
    pub false_northing: f64,
    /// Latitude of origin in degrees.
    pub lat_origin: f64,
    /// Central meridian in degrees.
    pub long_meridian: f64,
    /// First standard parallel in degrees.
    pub first_std_parallel: f64,
    /// Second standard parallel in degrees.
    pub second_std_parallel: f64,
    /// Latitude of origin in radians.
    pub lat_origin_radians: f64,
    /// Central meridian in radians.
    pub long_meridian_radians: f64,
    /// First standard parallel in radians.
    pub first_std_parallel_radians: f64,
    /// Second standard parallel in radians.
    pub second_std_parallel_radians: f64,
}

impl LambertConformalConic {
    /// Creates a new Lambert Conformal Conic projection. Angles are in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::crs::LambertConformalConic;
    /// let lcc = LambertConformalConic::new(0., 0., 90., 0., 45., 30.);
    /// assert_eq!(std::f64::consts::FRAC_PI_2, lcc.lat_origin_radians);
    /// ```
    pub fn new(
        false_easting: f64,
        false_northing: f64,
        lat_origin: f64,
        long_meridian: f64,
        first_std_parallel: f64,
        second_std_parallel: f64,
    ) -> LambertConformalConic {
        LambertConformalConic {
            false_easting,
            false_northing,
            lat_origin,
            long_meridian,
            first_std_parallel,
            second_std_parallel,
            lat_origin_radians: DEG_TO_RAD * lat_origin,
            long_meridian_radians: DEG_TO_RAD * long_meridian,
            first_std_parallel_radians: DEG_TO_RAD * first_std_parallel,
            second_std_parallel_radians: DEG_TO_RAD * second_std_parallel,
        }
    }

    fn description(&self) -> String {
        format!(
            "false east/north: {}/{} [m], origin lat/ meridian long: {}/{}, parallel 1st/2nd: {}/{}",
            format_g(self.false_easting),
            format_g(self.false_northing),
            format_g(self.lat_origin),
            format_g(self.long_meridian),
            format_g(self.first_std_parallel),
            format_g(self.second_std_parallel)
        )
    }
}
